//! Fits the fixed logical screen into the window.
//!
//! The game is laid out on a small logical canvas (320x240 by default) that
//! is scaled uniformly to the window and centered, with letterbox bars on
//! the spare axis.

use macroquad::math::{vec2, Vec2};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub logical: Vec2,
    pub scale: f32,
    pub offset: Vec2,
}

impl Viewport {
    pub fn fit(logical: Vec2, window: Vec2) -> Self {
        let scale = (window.x / logical.x).min(window.y / logical.y).max(f32::EPSILON);
        let offset = (window - logical * scale) * 0.5;
        Self {
            logical,
            scale,
            offset,
        }
    }

    pub fn to_screen(&self, p: Vec2) -> Vec2 {
        self.offset + p * self.scale
    }

    pub fn to_logical(&self, p: Vec2) -> Vec2 {
        (p - self.offset) / self.scale
    }

    /// Window-space size of a logical length pair
    pub fn scaled(&self, size: Vec2) -> Vec2 {
        size * self.scale
    }

    pub fn contains_logical(&self, p: Vec2) -> bool {
        p.x >= 0.0 && p.y >= 0.0 && p.x < self.logical.x && p.y < self.logical.y
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::fit(vec2(320.0, 240.0), vec2(640.0, 480.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_double() {
        let vp = Viewport::default();
        assert_eq!(vp.scale, 2.0);
        assert_eq!(vp.offset, Vec2::ZERO);
        assert_eq!(vp.to_screen(vec2(50.0, 50.0)), vec2(100.0, 100.0));
    }

    #[test]
    fn test_letterbox_wide_window() {
        let vp = Viewport::fit(vec2(320.0, 240.0), vec2(1000.0, 480.0));
        assert_eq!(vp.scale, 2.0);
        assert_eq!(vp.offset, vec2(180.0, 0.0));
        assert_eq!(vp.to_logical(vec2(180.0, 0.0)), Vec2::ZERO);
        assert!(!vp.contains_logical(vp.to_logical(vec2(10.0, 10.0))));
    }

    #[test]
    fn test_round_trip_click() {
        let vp = Viewport::fit(vec2(320.0, 240.0), vec2(800.0, 900.0));
        let p = vec2(123.0, 45.0);
        let back = vp.to_logical(vp.to_screen(p));
        assert!((back - p).length() < 1e-3);
    }
}
