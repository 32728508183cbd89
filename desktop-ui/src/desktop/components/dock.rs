use desktop_types::{AppWindow, DesktopAction, PopoverKind};
use dioxus::prelude::*;

#[component]
pub fn Dock(
    windows: Vec<AppWindow>,
    launcher_open: bool,
    music_open: bool,
    calendar_open: bool,
    voice_open: bool,
    on_action: Callback<DesktopAction>,
) -> Element {
    rsx! {
        div {
            class: "dock",
            style: "position: fixed; bottom: 1rem; left: 50%; transform: translateX(-50%); z-index: 1500; display: flex; align-items: center; gap: 0.5rem; padding: 0.5rem 0.75rem; background: var(--dock-bg); border: 1px solid var(--border-color); border-radius: var(--radius-lg); backdrop-filter: blur(16px); box-shadow: var(--shadow-lg);",

            DockButton {
                glyph: "▦",
                label: "Launcher",
                active: launcher_open,
                action: DesktopAction::ToggleLauncher,
                on_action,
            }

            if !windows.is_empty() {
                div { style: "width: 1px; height: 28px; background: var(--border-color);" }
            }

            for window in windows {
                RunningAppIndicator {
                    key: "{window.id}",
                    window,
                    on_action,
                }
            }

            div { style: "width: 1px; height: 28px; background: var(--border-color);" }

            DockButton {
                glyph: "🎵",
                label: "Music",
                active: music_open,
                action: DesktopAction::TogglePopover(PopoverKind::Music),
                on_action,
            }
            DockButton {
                glyph: "📅",
                label: "Calendar",
                active: calendar_open,
                action: DesktopAction::TogglePopover(PopoverKind::Calendar),
                on_action,
            }
            DockButton {
                glyph: "🎙",
                label: "Voice assistant",
                active: voice_open,
                action: DesktopAction::TogglePopover(PopoverKind::VoiceAssistant),
                on_action,
            }
        }
    }
}

#[component]
fn DockButton(
    glyph: &'static str,
    label: &'static str,
    active: bool,
    action: DesktopAction,
    on_action: Callback<DesktopAction>,
) -> Element {
    rsx! {
        button {
            class: if active { "dock-button active" } else { "dock-button" },
            style: if active {
                "width: 40px; height: 40px; display: flex; align-items: center; justify-content: center; background: var(--accent-bg); color: var(--text-primary); border: none; border-radius: var(--radius-md); cursor: pointer; font-size: 1.25rem; transition: transform 0.15s;"
            } else {
                "width: 40px; height: 40px; display: flex; align-items: center; justify-content: center; background: transparent; color: var(--text-primary); border: none; border-radius: var(--radius-md); cursor: pointer; font-size: 1.25rem; transition: transform 0.15s;"
            },
            title: label,
            "aria-label": label,
            onclick: move |_| on_action.call(action.clone()),
            "{glyph}"
        }
    }
}

/// One dock icon per open window. Minimized windows stay listed, dimmed.
#[component]
fn RunningAppIndicator(window: AppWindow, on_action: Callback<DesktopAction>) -> Element {
    let window_id = window.id;
    let title = window.title();
    let opacity = if window.minimized { "0.45" } else { "1" };

    rsx! {
        button {
            class: if window.minimized { "dock-button running-app minimized" } else { "dock-button running-app" },
            style: "width: 40px; height: 40px; display: flex; align-items: center; justify-content: center; background: var(--tile-bg); color: var(--text-primary); border: none; border-radius: var(--radius-md); cursor: pointer; font-size: 0.85rem; font-weight: 600; opacity: {opacity}; transition: transform 0.15s;",
            title: "{title}",
            "aria-label": "{title}",
            onclick: move |_| on_action.call(DesktopAction::ActivateDockIcon(window_id)),
            "{window_id}"
        }
    }
}
