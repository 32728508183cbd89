use std::cell::RefCell;
use std::rc::Rc;

use desktop_types::{ClockConfig, DesktopAction, PopoverKind};
use dioxus::prelude::*;

use crate::desktop::effects::{read_clock, start_clock};

#[component]
pub fn TopBar(
    clock: ClockConfig,
    height: i32,
    notifications_open: bool,
    power_open: bool,
    on_action: Callback<DesktopAction>,
) -> Element {
    let reading = use_signal(|| read_clock(&clock));

    // Cancelled when the bar unmounts.
    let timer = use_hook(|| Rc::new(RefCell::new(start_clock(reading, clock.clone()))));
    use_drop(move || {
        timer.borrow_mut().dispose();
    });

    let now = reading.read().clone();

    rsx! {
        div {
            class: "top-bar",
            style: "position: fixed; top: 0; left: 0; width: 100%; height: {height}px; z-index: 2000; display: flex; align-items: center; justify-content: flex-end; padding: 0 1rem; background: var(--bar-bg); backdrop-filter: blur(12px);",

            div {
                class: "top-bar-clock",
                style: "position: absolute; left: 50%; transform: translateX(-50%); font-weight: 600; color: var(--text-primary); user-select: none;",
                "{now.date} {now.time}"
            }

            div {
                style: "display: flex; align-items: center; gap: 1rem;",
                BarButton {
                    glyph: "🔔",
                    label: "Notifications",
                    active: notifications_open,
                    kind: PopoverKind::Notifications,
                    on_action,
                }
                BarButton {
                    glyph: "⏻",
                    label: "Power",
                    active: power_open,
                    kind: PopoverKind::Power,
                    on_action,
                }
            }
        }
    }
}

#[component]
fn BarButton(
    glyph: &'static str,
    label: &'static str,
    active: bool,
    kind: PopoverKind,
    on_action: Callback<DesktopAction>,
) -> Element {
    let color = if active {
        "var(--text-secondary)"
    } else {
        "var(--text-primary)"
    };

    rsx! {
        button {
            class: "bar-button",
            style: "width: 32px; height: 32px; display: flex; align-items: center; justify-content: center; background: transparent; color: {color}; border: none; border-radius: var(--radius-md); cursor: pointer; font-size: 1.1rem;",
            "aria-label": label,
            "aria-pressed": if active { "true" } else { "false" },
            onclick: move |_| on_action.call(DesktopAction::TogglePopover(kind)),
            "{glyph}"
        }
    }
}
