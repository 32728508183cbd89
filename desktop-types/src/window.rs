use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::WindowConfig;
use crate::geometry::{Point, Size};

/// Identifier handed out by [`WindowCollection::open`]. Never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WindowId(pub u64);

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One opened mock application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppWindow {
    pub id: WindowId,
    pub position: Point,
    pub size: Size,
    pub minimized: bool,
}

impl AppWindow {
    pub fn title(&self) -> String {
        format!("Application {}", self.id)
    }
}

/// Insertion-ordered set of open windows, unique by id.
///
/// Both the dock and the canvas read from this one list. Operations that name
/// an id not in the collection are ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowCollection {
    windows: Vec<AppWindow>,
    next_id: u64,
    config: WindowConfig,
}

impl Default for WindowCollection {
    fn default() -> Self {
        Self::new(WindowConfig::default())
    }
}

impl WindowCollection {
    pub fn new(config: WindowConfig) -> Self {
        Self {
            windows: Vec::new(),
            next_id: 1,
            config,
        }
    }

    pub fn config(&self) -> &WindowConfig {
        &self.config
    }

    /// Append a window at the cascade slot for its index with the default size.
    ///
    /// There is no upper bound on the number of windows.
    pub fn open(&mut self) -> WindowId {
        let id = WindowId(self.next_id);
        self.next_id += 1;

        let index = self.windows.len();
        let window = AppWindow {
            id,
            position: self.config.cascade_position(index),
            size: self.config.default_size(),
            minimized: false,
        };
        tracing::debug!(
            window_id = %id,
            x = window.position.x,
            y = window.position.y,
            open_windows = index + 1,
            "Opened window"
        );
        self.windows.push(window);
        id
    }

    /// Remove the window, returning it if it was present.
    pub fn close(&mut self, id: WindowId) -> Option<AppWindow> {
        let Some(index) = self.windows.iter().position(|w| w.id == id) else {
            ignore_unknown(id, "close");
            return None;
        };
        tracing::debug!(window_id = %id, "Closed window");
        Some(self.windows.remove(index))
    }

    pub fn update_position(&mut self, id: WindowId, x: i32, y: i32) {
        self.with_window(id, "update_position", |window| {
            window.position = Point::new(x, y);
        });
    }

    /// Replace the size. Values below the configured minimum are raised to it.
    pub fn update_size(&mut self, id: WindowId, width: i32, height: i32) {
        let min = self.config.min_size();
        self.with_window(id, "update_size", |window| {
            window.size = Size::new(width, height).at_least(min);
        });
    }

    pub fn toggle_minimized(&mut self, id: WindowId) {
        self.with_window(id, "toggle_minimized", |window| {
            window.minimized = !window.minimized;
        });
    }

    /// Set the fixed maximized size. Position is left untouched.
    pub fn maximize(&mut self, id: WindowId) {
        let size = self.config.maximized_size();
        self.with_window(id, "maximize", |window| {
            window.size = size;
        });
    }

    pub fn get(&self, id: WindowId) -> Option<&AppWindow> {
        self.windows.iter().find(|w| w.id == id)
    }

    pub fn contains(&self, id: WindowId) -> bool {
        self.get(id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &AppWindow> {
        self.windows.iter()
    }

    pub fn ids(&self) -> Vec<WindowId> {
        self.windows.iter().map(|w| w.id).collect()
    }

    pub fn as_slice(&self) -> &[AppWindow] {
        &self.windows
    }

    pub fn len(&self) -> usize {
        self.windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    fn with_window(&mut self, id: WindowId, op: &'static str, f: impl FnOnce(&mut AppWindow)) {
        match self.windows.iter_mut().find(|w| w.id == id) {
            Some(window) => f(window),
            None => ignore_unknown(id, op),
        }
    }
}

fn ignore_unknown(id: WindowId, op: &'static str) {
    tracing::debug!(window_id = %id, op, "Ignoring operation on unknown window");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_assigns_cascade_defaults() {
        let mut windows = WindowCollection::default();
        let first = windows.open();
        let second = windows.open();

        assert_eq!(first, WindowId(1));
        assert_eq!(second, WindowId(2));

        let first = windows.get(first).unwrap();
        assert_eq!(first.position, Point::new(0, 100));
        assert_eq!(first.size, Size::new(400, 300));
        assert!(!first.minimized);

        assert_eq!(windows.get(second).unwrap().position, Point::new(100, 100));
    }

    #[test]
    fn ids_are_not_reused_after_close() {
        let mut windows = WindowCollection::default();
        let a = windows.open();
        windows.open();
        windows.close(a);

        let c = windows.open();
        assert_eq!(c, WindowId(3));
        assert_eq!(windows.ids(), vec![WindowId(2), WindowId(3)]);
        // Cascade follows the index at open time, not the id.
        assert_eq!(windows.get(c).unwrap().position, Point::new(100, 100));
    }

    #[test]
    fn close_unknown_is_noop() {
        let mut windows = WindowCollection::default();
        windows.open();
        let before = windows.clone();

        assert!(windows.close(WindowId(42)).is_none());
        assert_eq!(windows, before);
    }

    #[test]
    fn mutations_on_unknown_id_are_ignored() {
        let mut windows = WindowCollection::default();
        windows.open();
        let before = windows.clone();

        windows.update_position(WindowId(9), 1, 1);
        windows.update_size(WindowId(9), 500, 500);
        windows.toggle_minimized(WindowId(9));
        windows.maximize(WindowId(9));

        assert_eq!(windows, before);
    }

    #[test]
    fn update_size_respects_minimum() {
        let mut windows = WindowCollection::default();
        let id = windows.open();
        windows.update_size(id, 10, -40);
        assert_eq!(windows.get(id).unwrap().size, Size::new(200, 150));
    }

    #[test]
    fn maximize_is_idempotent() {
        let mut windows = WindowCollection::default();
        let id = windows.open();
        windows.maximize(id);
        let once = windows.clone();
        windows.maximize(id);

        assert_eq!(windows, once);
        assert_eq!(windows.get(id).unwrap().size, Size::new(800, 600));
    }

    #[test]
    fn minimized_window_keeps_its_slot() {
        let mut windows = WindowCollection::default();
        let a = windows.open();
        let b = windows.open();
        windows.toggle_minimized(a);

        assert_eq!(windows.ids(), vec![a, b]);
        assert!(windows.get(a).unwrap().minimized);
        assert!(!windows.get(b).unwrap().minimized);
    }
}
