use desktop_types::{DesktopAction, DesktopState};
use dioxus::prelude::{ReadableExt, Signal, WritableExt};
use dioxus_logger::tracing::info;

/// Apply `action` to the desktop signal.
///
/// Pointer motion with no active session is dropped before taking a write
/// borrow so idle hovering does not re-render the shell.
pub fn dispatch(desktop_state: &mut Signal<DesktopState>, action: DesktopAction) {
    if is_idle_motion(&desktop_state.read(), &action) {
        return;
    }

    match &action {
        DesktopAction::LaunchApp => {
            let open = desktop_state.read().windows().len();
            info!(open_windows = open + 1, "Launching app window");
        }
        DesktopAction::CloseWindow(id) => {
            info!(window_id = %id, "Closing app window");
        }
        _ => {}
    }

    desktop_state.write().apply(action);
}

fn is_idle_motion(state: &DesktopState, action: &DesktopAction) -> bool {
    matches!(action, DesktopAction::PointerMove(_)) && state.interaction().is_idle()
}
