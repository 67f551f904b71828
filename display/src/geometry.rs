//! Integer geometry shared by displays, capture regions and the mouse.

use serde::{Deserialize, Serialize};

/// A point in pixels or points, depending on the coordinate space it belongs to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: i32,
    /// Vertical coordinate.
    pub y: i32,
}

impl Point {
    /// Create a point.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Component-wise offset, saturating at the `i32` range.
    #[must_use]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x.saturating_add(dx), self.y.saturating_add(dy))
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// A width and height.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Size {
    /// Horizontal extent.
    pub width: i32,
    /// Vertical extent.
    pub height: i32,
}

impl Size {
    /// Create a size.
    #[must_use]
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Whether both dimensions are strictly positive.
    #[must_use]
    pub const fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// An axis-aligned rectangle: origin plus size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner.
    pub origin: Point,
    /// Extent from the origin.
    pub size: Size,
}

impl Rect {
    /// Create a rectangle from its components.
    #[must_use]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            origin: Point::new(x, y),
            size: Size::new(width, height),
        }
    }

    /// Create a rectangle from an origin and a size.
    #[must_use]
    pub const fn from_parts(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    /// Exclusive right edge.
    #[must_use]
    pub const fn right(&self) -> i32 {
        self.origin.x.saturating_add(self.size.width)
    }

    /// Exclusive bottom edge.
    #[must_use]
    pub const fn bottom(&self) -> i32 {
        self.origin.y.saturating_add(self.size.height)
    }

    /// Half-open containment: `[origin, origin + size)` on both axes.
    ///
    /// Empty and negative-size rectangles contain nothing.
    #[must_use]
    pub const fn contains(&self, point: Point) -> bool {
        point.x >= self.origin.x
            && point.x < self.right()
            && point.y >= self.origin.y
            && point.y < self.bottom()
    }

    /// Whether the rectangle describes a non-empty region.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.size.is_valid()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_is_half_open() {
        let rect = Rect::new(10, 20, 100, 50);
        assert!(rect.contains(Point::new(10, 20)), "top-left corner");
        assert!(rect.contains(Point::new(109, 69)), "last pixel");
        assert!(!rect.contains(Point::new(110, 20)), "right edge is exclusive");
        assert!(!rect.contains(Point::new(10, 70)), "bottom edge is exclusive");
        assert!(!rect.contains(Point::new(9, 20)));
        assert!(!rect.contains(Point::new(10, 19)));
    }

    #[test]
    fn negative_origin() {
        let rect = Rect::new(-1920, -200, 1920, 1080);
        assert!(rect.contains(Point::new(-1920, -200)));
        assert!(rect.contains(Point::new(-1, 879)));
        assert!(!rect.contains(Point::new(0, 0)));
    }

    #[test]
    fn empty_rect_contains_nothing() {
        let rect = Rect::new(5, 5, 0, 10);
        assert!(!rect.contains(Point::new(5, 5)));
        assert!(!rect.is_valid());
        assert!(!Rect::new(0, 0, 10, -1).is_valid());
        assert!(Rect::new(0, 0, 1, 1).is_valid());
    }

    #[test]
    fn edges_saturate() {
        let rect = Rect::new(i32::MAX - 10, i32::MIN, 100, -100);
        assert_eq!(rect.right(), i32::MAX);
        assert_eq!(rect.bottom(), i32::MIN);
        assert_eq!(Point::new(i32::MAX, i32::MIN).offset(1, -1), Point::new(i32::MAX, i32::MIN));
        assert!(Rect::new(i32::MAX - 10, 0, 100, 10).contains(Point::new(i32::MAX - 1, 5)));
    }

    #[test]
    fn point_helpers() {
        assert_eq!(Point::from((3, -4)), Point::new(3, -4));
        assert_eq!(Point::new(1, 2).offset(10, -20), Point::new(11, -18));
    }
}
