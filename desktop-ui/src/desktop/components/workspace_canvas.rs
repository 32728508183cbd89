use desktop_types::{AppWindow, DesktopAction, WindowId};
use dioxus::prelude::*;

use crate::desktop_window::FloatingWindow;

const BASE_Z_INDEX: usize = 10;
const ELEVATED_Z_INDEX: usize = 1000;

/// Stacking order follows collection order; a window under the pointer sits on top.
pub fn stacking_z_index(index: usize, elevated: bool) -> usize {
    if elevated {
        ELEVATED_Z_INDEX
    } else {
        BASE_Z_INDEX + index
    }
}

#[component]
pub fn WorkspaceCanvas(
    windows: Vec<AppWindow>,
    elevated: Option<WindowId>,
    top_bar_height: i32,
    on_action: Callback<DesktopAction>,
) -> Element {
    let stacked: Vec<(usize, AppWindow, bool)> = windows
        .into_iter()
        .enumerate()
        .map(|(index, window)| {
            let lifted = elevated == Some(window.id);
            (index, window, lifted)
        })
        .collect();

    rsx! {
        div {
            class: "window-canvas",
            style: "position: absolute; top: {top_bar_height}px; left: 0; right: 0; bottom: 0; overflow: hidden;",

            for (index, window, lifted) in stacked {
                FloatingWindow {
                    key: "{window.id}",
                    z_index: stacking_z_index(index, lifted),
                    elevated: lifted,
                    window,
                    top_bar_height,
                    on_action,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn later_windows_stack_higher() {
        assert!(stacking_z_index(3, false) > stacking_z_index(1, false));
    }

    #[test]
    fn elevated_window_beats_any_index() {
        assert!(stacking_z_index(0, true) > stacking_z_index(500, false));
    }
}
