//! Plane geometry shared by shapes, paths and surfaces.
//!
//! Coordinates are screen-style: the origin is the top-left corner of the
//! drawable area and `y` grows downward.

use serde::{Deserialize, Serialize};
use std::ops::Add;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Add<Vector> for Point {
    type Output = Point;

    fn add(self, v: Vector) -> Point {
        Point::new(self.x + v.dx, self.y + v.dy)
    }
}

/// A displacement per tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector {
    pub dx: f64,
    pub dy: f64,
}

impl Vector {
    pub fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }

    /// Build a vector from a polar angle (radians) and a length.
    pub fn from_angle(angle: f64, length: f64) -> Self {
        Self::new(angle.cos() * length, angle.sin() * length)
    }

    pub fn magnitude(&self) -> f64 {
        self.dx.hypot(self.dy)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// The area left after removing `insets`, never negative.
    pub fn inset_by(&self, insets: &Insets) -> Size {
        Size::new(
            (self.width - insets.left - insets.right).max(0.0),
            (self.height - insets.top - insets.bottom).max(0.0),
        )
    }

    /// Whether an extent of `inner` fits inside this size on both axes.
    pub fn contains_size(&self, inner: &Size) -> bool {
        inner.width <= self.width && inner.height <= self.height
    }
}

/// Chrome borders around a drawable area.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Insets {
    pub top: f64,
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
}

impl Insets {
    pub fn new(top: f64, left: f64, bottom: f64, right: f64) -> Self {
        Self {
            top,
            left,
            bottom,
            right,
        }
    }

    pub fn uniform(value: f64) -> Self {
        Self::new(value, value, value, value)
    }
}

/// Axis-aligned rectangle anchored at its top-left corner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    pub fn new(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    pub fn from_xywh(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::new(Point::new(x, y), Size::new(width, height))
    }

    pub fn left(&self) -> f64 {
        self.origin.x
    }

    pub fn top(&self) -> f64 {
        self.origin.y
    }

    pub fn right(&self) -> f64 {
        self.origin.x + self.size.width
    }

    pub fn bottom(&self) -> f64 {
        self.origin.y + self.size.height
    }

    /// Half-open containment: the left/top edges are inside, the right/bottom
    /// edges are not.
    pub fn contains(&self, p: &Point) -> bool {
        p.x >= self.left() && p.x < self.right() && p.y >= self.top() && p.y < self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_plus_vector() {
        let p = Point::new(1.0, 2.0) + Vector::new(3.0, -4.0);
        assert_eq!(p, Point::new(4.0, -2.0));
    }

    #[test]
    fn test_vector_from_angle_keeps_length() {
        let v = Vector::from_angle(0.7, 5.0);
        assert!((v.magnitude() - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_rect_contains_is_half_open() {
        let rect = Rect::from_xywh(10.0, 10.0, 50.0, 20.0);
        assert!(rect.contains(&Point::new(10.0, 10.0)));
        assert!(rect.contains(&Point::new(59.9, 29.9)));
        assert!(!rect.contains(&Point::new(60.0, 15.0)));
        assert!(!rect.contains(&Point::new(15.0, 30.0)));
        assert!(!rect.contains(&Point::new(9.9, 15.0)));
    }

    #[test]
    fn test_inset_by_floors_at_zero() {
        let size = Size::new(100.0, 8.0);
        let inner = size.inset_by(&Insets::new(5.0, 2.0, 5.0, 3.0));
        assert_eq!(inner, Size::new(95.0, 0.0));
    }
}
