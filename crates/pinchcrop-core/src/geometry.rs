//! Screen-space geometry primitives.
//!
//! All values are in host points (logical screen units), `f64` throughout.
//! The origin is the top-left corner and y grows downward.

use serde::{Deserialize, Serialize};

/// A point or displacement in screen space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// True when both components are exactly zero.
    pub fn is_zero(self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }
}

impl std::ops::Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl std::ops::Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl std::ops::Neg for Point {
    type Output = Point;

    fn neg(self) -> Point {
        Point::new(-self.x, -self.y)
    }
}

/// Width and height in screen space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Uniformly scale both dimensions.
    pub fn scaled(self, factor: f64) -> Size {
        Size::new(self.width * factor, self.height * factor)
    }

    pub fn is_empty(self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }
}

/// Axis-aligned rectangle described by its top-left origin and size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            origin: Point::new(x, y),
            size: Size::new(width, height),
        }
    }

    /// Build a rectangle of `size` centered on `center`.
    pub fn from_center(center: Point, size: Size) -> Self {
        Self::new(
            center.x - size.width / 2.0,
            center.y - size.height / 2.0,
            size.width,
            size.height,
        )
    }

    pub fn min_x(&self) -> f64 {
        self.origin.x
    }

    pub fn min_y(&self) -> f64 {
        self.origin.y
    }

    pub fn max_x(&self) -> f64 {
        self.origin.x + self.size.width
    }

    pub fn max_y(&self) -> f64 {
        self.origin.y + self.size.height
    }

    pub fn width(&self) -> f64 {
        self.size.width
    }

    pub fn height(&self) -> f64 {
        self.size.height
    }

    pub fn center(&self) -> Point {
        Point::new(
            self.origin.x + self.size.width / 2.0,
            self.origin.y + self.size.height / 2.0,
        )
    }

    /// Check whether `other` lies entirely inside this rectangle (edges may touch).
    pub fn contains_rect(&self, other: &Rect) -> bool {
        self.min_x() <= other.min_x()
            && self.min_y() <= other.min_y()
            && self.max_x() >= other.max_x()
            && self.max_y() >= other.max_y()
    }

    /// Return a copy moved by `delta`.
    pub fn offset(&self, delta: Point) -> Rect {
        Rect {
            origin: self.origin + delta,
            size: self.size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_edges() {
        let r = Rect::new(10.0, 20.0, 100.0, 50.0);
        assert_eq!(r.min_x(), 10.0);
        assert_eq!(r.max_x(), 110.0);
        assert_eq!(r.min_y(), 20.0);
        assert_eq!(r.max_y(), 70.0);
        assert_eq!(r.center(), Point::new(60.0, 45.0));
    }

    #[test]
    fn test_from_center_round_trips_center() {
        let r = Rect::from_center(Point::new(50.0, 50.0), Size::new(20.0, 10.0));
        assert_eq!(r, Rect::new(40.0, 45.0, 20.0, 10.0));
        assert_eq!(r.center(), Point::new(50.0, 50.0));
    }

    #[test]
    fn test_contains_rect() {
        let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
        assert!(outer.contains_rect(&Rect::new(10.0, 10.0, 50.0, 50.0)));
        assert!(outer.contains_rect(&outer));
        assert!(!outer.contains_rect(&Rect::new(-1.0, 10.0, 50.0, 50.0)));
        assert!(!outer.contains_rect(&Rect::new(60.0, 60.0, 50.0, 50.0)));
    }

    #[test]
    fn test_point_ops() {
        let a = Point::new(1.0, 2.0);
        let b = Point::new(3.0, -4.0);
        assert_eq!(a + b, Point::new(4.0, -2.0));
        assert_eq!(a - b, Point::new(-2.0, 6.0));
        assert_eq!(-a, Point::new(-1.0, -2.0));
        assert!(Point::ZERO.is_zero());
        assert!(!a.is_zero());
    }

    #[test]
    fn test_size_empty() {
        assert!(Size::new(0.0, 10.0).is_empty());
        assert!(Size::new(f64::NAN, 10.0).is_empty());
        assert!(!Size::new(1.0, 1.0).is_empty());
    }
}
