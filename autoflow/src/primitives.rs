//! Core geometry types for autoflow.
//!
//! Everything is in integer pixels, in the coordinate space of the container
//! that owns the children (the container's own top-left is `(0, 0)`).

/// A 2D size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub const ZERO: Self = Self { width: 0, height: 0 };

    #[inline]
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// A size counts as unmeasured when either side is zero.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// A rectangle in container coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    #[inline]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    /// Build a rectangle from its four edges.
    #[inline]
    pub const fn from_ltrb(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            x: left,
            y: top,
            width: right.saturating_sub(left),
            height: bottom.saturating_sub(top),
        }
    }

    /// Get the right edge X coordinate.
    #[inline]
    pub fn right(&self) -> i32 {
        self.x.saturating_add(self.width)
    }

    /// Get the bottom edge Y coordinate.
    #[inline]
    pub fn bottom(&self) -> i32 {
        self.y.saturating_add(self.height)
    }

    /// Edges as `(left, top, right, bottom)`.
    #[inline]
    pub fn ltrb(&self) -> (i32, i32, i32, i32) {
        (self.x, self.y, self.right(), self.bottom())
    }

    /// Check if `other` lies entirely inside this rectangle.
    #[inline]
    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }

    /// Check if this rectangle intersects with another.
    #[inline]
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_is_empty_when_either_side_is_zero() {
        assert!(Size::ZERO.is_empty());
        assert!(Size::new(10, 0).is_empty());
        assert!(Size::new(0, 10).is_empty());
        assert!(!Size::new(1, 1).is_empty());
    }

    #[test]
    fn rect_from_ltrb() {
        let r = Rect::from_ltrb(20, 10, 40, 30);
        assert_eq!(r, Rect::new(20, 10, 20, 20));
        assert_eq!(r.ltrb(), (20, 10, 40, 30));
    }

    #[test]
    fn rect_contains_rect() {
        let outer = Rect::new(0, 0, 100, 100);
        assert!(outer.contains_rect(&Rect::new(0, 0, 100, 100)));
        assert!(outer.contains_rect(&Rect::new(10, 10, 20, 20)));
        assert!(!outer.contains_rect(&Rect::new(90, 0, 20, 20)));
    }

    #[test]
    fn rect_edges_saturate() {
        let r = Rect::from_ltrb(-10, 0, i32::MAX, 10);
        assert_eq!(r.width, i32::MAX);
        assert_eq!(Rect::new(10, 0, i32::MAX, 10).right(), i32::MAX);
    }

    #[test]
    fn rect_intersects() {
        let a = Rect::new(0, 0, 20, 20);
        assert!(a.intersects(&Rect::new(10, 10, 20, 20)));
        // Touching edges do not overlap.
        assert!(!a.intersects(&Rect::new(20, 0, 20, 20)));
    }
}
