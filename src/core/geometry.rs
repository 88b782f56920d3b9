//! Viewport-space geometry shared by the drag controller and the slot resolver.

use serde::{Deserialize, Serialize};

/// A point in viewport pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Width and height in viewport pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Axis-aligned rectangle, as reported by `getBoundingClientRect()`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// True once the whole rectangle sits above `y = 0`, the top edge of the
    /// visible page area.
    pub fn is_above_viewport(&self) -> bool {
        self.bottom() < 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_edges() {
        let rect = Rect::new(10.0, 20.0, 300.0, 150.0);
        assert_eq!(rect.bottom(), 170.0);
    }

    #[test]
    fn test_above_viewport_requires_bottom_edge_past_top() {
        assert!(!Rect::new(0.0, -100.0, 100.0, 100.0).is_above_viewport());
        assert!(Rect::new(0.0, -100.5, 100.0, 100.0).is_above_viewport());
        assert!(!Rect::new(0.0, -50.0, 100.0, 100.0).is_above_viewport());
    }
}
