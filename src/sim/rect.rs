//! Axis-aligned boxes in screen space
//!
//! Screen coordinates: the origin is the top-left corner and y grows
//! downward, so `bottom` is the largest y edge. Every entity owns exactly
//! one box and mutates it each frame; boxes are never shared.

use glam::Vec2;

/// An axis-aligned rectangle (top-left position plus size)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    /// Build a rect from its center point
    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        Self {
            pos: center - size / 2.0,
            size,
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    #[inline]
    pub fn center_x(&self) -> f32 {
        self.pos.x + self.size.x / 2.0
    }

    #[inline]
    pub fn center_y(&self) -> f32 {
        self.pos.y + self.size.y / 2.0
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.size.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.size.y
    }

    /// Move the box so its bottom edge sits at `y`
    pub fn set_bottom(&mut self, y: f32) {
        self.pos.y = y - self.size.y;
    }

    /// Move the box so its horizontal center sits at `x`
    pub fn set_center_x(&mut self, x: f32) {
        self.pos.x = x - self.size.x / 2.0;
    }

    /// Strict overlap test; touching edges do not count
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_accessors() {
        let r = Rect::new(10.0, 20.0, 50.0, 80.0);
        assert_eq!(r.left(), 10.0);
        assert_eq!(r.right(), 60.0);
        assert_eq!(r.top(), 20.0);
        assert_eq!(r.bottom(), 100.0);
        assert_eq!(r.center_x(), 35.0);
        assert_eq!(r.center_y(), 60.0);
    }

    #[test]
    fn test_from_center_round_trips() {
        let r = Rect::from_center(Vec2::new(400.0, 460.0), Vec2::new(50.0, 80.0));
        assert_eq!(r.center_x(), 400.0);
        assert_eq!(r.center_y(), 460.0);
        assert_eq!(r.bottom(), 500.0);
    }

    #[test]
    fn test_set_bottom_and_center_x() {
        let mut r = Rect::new(0.0, 0.0, 100.0, 60.0);
        r.set_bottom(-60.0);
        assert_eq!(r.top(), -120.0);
        r.set_center_x(400.0);
        assert_eq!(r.left(), 350.0);
    }

    #[test]
    fn test_intersects() {
        let a = Rect::new(0.0, 0.0, 50.0, 50.0);
        let b = Rect::new(40.0, 40.0, 50.0, 50.0);
        let c = Rect::new(50.0, 0.0, 50.0, 50.0);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
        // Shared edge is not an overlap
        assert!(!a.intersects(&c));
        assert!(!c.intersects(&a));
    }
}
