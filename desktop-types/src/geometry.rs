use std::ops::Sub;

use serde::{Deserialize, Serialize};

/// Point in desktop-area coordinates (origin below the top bar).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x.saturating_sub(rhs.x), self.y.saturating_sub(rhs.y))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Grow each axis independently up to `min`.
    pub fn at_least(self, min: Size) -> Size {
        Size::new(self.width.max(min.width), self.height.max(min.height))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_subtraction_saturates() {
        let delta = Point::new(i32::MIN, 5) - Point::new(1, 2);
        assert_eq!(delta, Point::new(i32::MIN, 3));
    }

    #[test]
    fn at_least_clamps_each_axis() {
        let size = Size::new(120, 400).at_least(Size::new(200, 150));
        assert_eq!(size, Size::new(200, 400));
    }
}
