use desktop_types::{AppWindow, DesktopAction, PointerTarget, ResizeCorner, WindowId};
use dioxus::prelude::*;

use crate::interop::{
    capture_window_pointer, desktop_point, release_window_pointer, target_is_window_control,
};

const RESIZE_HANDLE_PX: i32 = 16;

fn window_style(window: &AppWindow, z_index: usize, elevated: bool) -> String {
    let shadow = if elevated {
        "var(--shadow-elevated, 0 24px 60px rgba(0,0,0,0.6))"
    } else {
        "var(--shadow-lg, 0 10px 40px rgba(0,0,0,0.5))"
    };
    // Minimized windows collapse to their title bar.
    let height = if window.minimized {
        "auto".to_string()
    } else {
        format!("{}px", window.size.height)
    };
    format!(
        "position: absolute; left: {}px; top: {}px; width: {}px; height: {height}; z-index: \
         {z_index}; display: flex; flex-direction: column; background: var(--window-bg); \
         border: 1px solid var(--border-color); border-radius: var(--radius-lg, 12px); \
         overflow: hidden; backdrop-filter: blur(16px); box-shadow: {shadow};",
        window.position.x, window.position.y, window.size.width
    )
}

#[component]
pub fn FloatingWindow(
    window: AppWindow,
    z_index: usize,
    elevated: bool,
    top_bar_height: i32,
    on_action: Callback<DesktopAction>,
) -> Element {
    let window_id = window.id;
    let minimized = window.minimized;
    let title = window.title();
    let style = window_style(&window, z_index, elevated);

    rsx! {
        div {
            class: if elevated { "floating-window elevated" } else { "floating-window" },
            role: "dialog",
            "aria-label": title.clone(),
            style: "{style}",
            onpointermove: move |e| {
                on_action.call(DesktopAction::PointerMove(desktop_point(&e, top_bar_height)));
            },
            onpointerup: move |e| {
                release_window_pointer(&e, e.data().pointer_id());
                on_action.call(DesktopAction::PointerUp(desktop_point(&e, top_bar_height)));
            },
            // A cancelled pointer still commits where it was last seen.
            onpointercancel: move |e| {
                release_window_pointer(&e, e.data().pointer_id());
                on_action.call(DesktopAction::PointerUp(desktop_point(&e, top_bar_height)));
            },

            div {
                class: "window-titlebar",
                style: "display: flex; align-items: center; justify-content: space-between; padding: 0.5rem 0.75rem; background: var(--titlebar-bg); border-bottom: 1px solid var(--border-color); cursor: grab; user-select: none; touch-action: none;",
                onpointerdown: move |e| {
                    if target_is_window_control(&e) {
                        return;
                    }
                    e.prevent_default();
                    capture_window_pointer(&e, e.data().pointer_id());
                    on_action.call(DesktopAction::PointerDown {
                        target: PointerTarget::Header(window_id),
                        point: desktop_point(&e, top_bar_height),
                    });
                },

                span { style: "font-weight: 500; color: var(--text-primary);", "{title}" }

                WindowControls { window_id, on_action }
            }

            if !minimized {
                div {
                    class: "window-content",
                    style: "flex: 1; display: flex; align-items: center; justify-content: center; color: var(--text-muted); padding: 1rem; overflow: hidden;",
                    "Content for {title}"
                }

                div {
                    class: "resize-handle",
                    style: "position: absolute; right: 0; bottom: 0; width: {RESIZE_HANDLE_PX}px; height: {RESIZE_HANDLE_PX}px; cursor: se-resize; touch-action: none;",
                    onpointerdown: move |e| {
                        e.prevent_default();
                        e.stop_propagation();
                        capture_window_pointer(&e, e.data().pointer_id());
                        on_action.call(DesktopAction::PointerDown {
                            target: PointerTarget::ResizeHandle(window_id, ResizeCorner::BottomRight),
                            point: desktop_point(&e, top_bar_height),
                        });
                    },
                }
            }
        }
    }
}

#[component]
fn WindowControls(window_id: WindowId, on_action: Callback<DesktopAction>) -> Element {
    rsx! {
        div {
            class: "window-controls",
            style: "display: flex; align-items: center; gap: 0.25rem;",

            WindowControlButton {
                glyph: "−",
                label: "Minimize",
                color: "#facc15",
                action: DesktopAction::ToggleMinimized(window_id),
                on_action,
            }
            WindowControlButton {
                glyph: "□",
                label: "Maximize",
                color: "#22c55e",
                action: DesktopAction::MaximizeWindow(window_id),
                on_action,
            }
            WindowControlButton {
                glyph: "×",
                label: "Close",
                color: "#ef4444",
                action: DesktopAction::CloseWindow(window_id),
                on_action,
            }
        }
    }
}

#[component]
fn WindowControlButton(
    glyph: &'static str,
    label: &'static str,
    color: &'static str,
    action: DesktopAction,
    on_action: Callback<DesktopAction>,
) -> Element {
    rsx! {
        button {
            style: "width: 24px; height: 24px; display: flex; align-items: center; justify-content: center; background: transparent; color: {color}; border: none; border-radius: var(--radius-sm, 4px); cursor: pointer; font-size: 1.1rem; line-height: 1;",
            "aria-label": label,
            onpointerdown: move |e| e.stop_propagation(),
            onclick: move |e| {
                e.stop_propagation();
                on_action.call(action.clone());
            },
            "{glyph}"
        }
    }
}
