use desktop_types::Point;
use dioxus::prelude::*;
use dioxus_web::WebEventExt;
use wasm_bindgen::JsCast;

/// Viewport coordinates of a pointer event.
pub fn client_point(e: &PointerEvent) -> (i32, i32) {
    if let Some((x, y)) = e.data().try_as_web_event().and_then(|event| {
        event
            .dyn_ref::<web_sys::PointerEvent>()
            .map(|pointer| (pointer.client_x(), pointer.client_y()))
    }) {
        return (x, y);
    }

    let point = e.data().client_coordinates();
    (point.x as i32, point.y as i32)
}

/// Convert viewport coordinates into the desktop area below the top bar.
pub fn to_desktop_point((x, y): (i32, i32), top_bar_height: i32) -> Point {
    Point::new(x, y - top_bar_height)
}

pub fn desktop_point(e: &PointerEvent, top_bar_height: i32) -> Point {
    to_desktop_point(client_point(e), top_bar_height)
}

/// True when the pointer went down on a window control button.
pub fn target_is_window_control(e: &PointerEvent) -> bool {
    e.data()
        .try_as_web_event()
        .and_then(|event| event.target())
        .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
        .map(|element| {
            element.closest("button").ok().flatten().is_some()
                || element.closest(".window-controls").ok().flatten().is_some()
        })
        .unwrap_or(false)
}

fn enclosing_window(e: &PointerEvent) -> Option<web_sys::Element> {
    e.data()
        .try_as_web_event()
        .and_then(|event| event.current_target())
        .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
        .and_then(|element| element.closest(".floating-window").ok().flatten())
}

/// Route the rest of this pointer's events to the window under it.
pub fn capture_window_pointer(e: &PointerEvent, pointer_id: i32) {
    if let Some(window) = enclosing_window(e) {
        let _ = window.set_pointer_capture(pointer_id);
    }
}

pub fn release_window_pointer(e: &PointerEvent, pointer_id: i32) {
    if let Some(window) = enclosing_window(e) {
        let _ = window.release_pointer_capture(pointer_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn desktop_point_is_offset_by_top_bar() {
        assert_eq!(to_desktop_point((120, 200), 48), Point::new(120, 152));
    }

    #[test]
    fn points_over_the_top_bar_go_negative() {
        assert_eq!(to_desktop_point((5, 10), 48), Point::new(5, -38));
    }
}
