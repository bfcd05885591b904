//! Core primitive types for widget chrome geometry.
//!
//! Everything here is integer pixel geometry. Rectangles use exclusive
//! right/bottom edges: `right() == x + width`.

/// A point in 2D space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// A 2D size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub const ZERO: Self = Self {
        width: 0,
        height: 0,
    };

    #[inline]
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// True if either dimension is zero or negative.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Component-wise maximum of two sizes.
    #[inline]
    pub fn expanded_to(&self, other: Size) -> Size {
        Size {
            width: self.width.max(other.width),
            height: self.height.max(other.height),
        }
    }

    /// Swap width and height (used for vertical tab shapes).
    #[inline]
    pub fn transposed(&self) -> Size {
        Size {
            width: self.height,
            height: self.width,
        }
    }
}

/// An axis-aligned rectangle in widget coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const ZERO: Self = Self {
        x: 0,
        y: 0,
        width: 0,
        height: 0,
    };

    #[inline]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    #[inline]
    pub fn from_origin_size(origin: Point, size: Size) -> Self {
        Self {
            x: origin.x,
            y: origin.y,
            width: size.width,
            height: size.height,
        }
    }

    /// Rect of the given size whose center is `center`.
    #[inline]
    pub fn with_center(center: Point, size: Size) -> Self {
        Self {
            x: center.x - size.width / 2,
            y: center.y - size.height / 2,
            width: size.width,
            height: size.height,
        }
    }

    /// Check if a point is inside this rectangle.
    #[inline]
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.x < self.right()
            && point.y >= self.y
            && point.y < self.bottom()
    }

    /// True if the rect covers no pixels.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    #[inline]
    pub fn origin(&self) -> Point {
        Point { x: self.x, y: self.y }
    }

    #[inline]
    pub fn size(&self) -> Size {
        Size {
            width: self.width,
            height: self.height,
        }
    }

    /// Exclusive right edge.
    #[inline]
    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    /// Exclusive bottom edge.
    #[inline]
    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    /// Center point, truncated toward the top-left.
    #[inline]
    pub fn center(&self) -> Point {
        Point {
            x: self.x + self.width / 2,
            y: self.y + self.height / 2,
        }
    }

    /// Move each edge independently: left/top by `dx1`/`dy1`, right/bottom
    /// by `dx2`/`dy2`. Width and height never go below zero.
    #[inline]
    pub fn adjusted(&self, dx1: i32, dy1: i32, dx2: i32, dy2: i32) -> Rect {
        Rect {
            x: self.x + dx1,
            y: self.y + dy1,
            width: (self.width + dx2 - dx1).max(0),
            height: (self.height + dy2 - dy1).max(0),
        }
    }

    #[inline]
    pub fn translate(&self, offset: Point) -> Self {
        Self {
            x: self.x + offset.x,
            y: self.y + offset.y,
            ..*self
        }
    }

    /// Shrink by the same margin on all four sides.
    #[inline]
    pub fn inside_margin(&self, margin: i32) -> Rect {
        inside_margin(*self, margin, margin)
    }
}

/// Reading direction of the widget the geometry belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    #[default]
    LeftToRight,
    RightToLeft,
}

impl Direction {
    #[inline]
    pub fn is_rtl(self) -> bool {
        matches!(self, Direction::RightToLeft)
    }
}

/// Which axis is the major (track) axis of a linear control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

impl Orientation {
    #[inline]
    pub fn is_horizontal(self) -> bool {
        matches!(self, Orientation::Horizontal)
    }
}

// =========================================================================
// Free helpers
// =========================================================================

/// Shrink `rect` by `dx` on the left and right and `dy` on the top and
/// bottom. A margin larger than half a dimension collapses that dimension to
/// zero at the rect's midpoint.
pub fn inside_margin(rect: Rect, dx: i32, dy: i32) -> Rect {
    let dx = dx.min(rect.width / 2);
    let dy = dy.min(rect.height / 2);
    Rect {
        x: rect.x + dx,
        y: rect.y + dy,
        width: (rect.width - 2 * dx).max(0),
        height: (rect.height - 2 * dy).max(0),
    }
}

/// Rect of `width` x `height` centered inside `rect`.
///
/// Odd leftover space is truncated toward the top-left.
pub fn center_rect(rect: Rect, width: i32, height: i32) -> Rect {
    Rect {
        x: rect.x + (rect.width - width) / 2,
        y: rect.y + (rect.height - height) / 2,
        width,
        height,
    }
}

/// Grow `size` by `dx` on each horizontal side and `dy` on each vertical side.
#[inline]
pub fn expand_size(size: Size, dx: i32, dy: i32) -> Size {
    Size {
        width: size.width + 2 * dx,
        height: size.height + 2 * dy,
    }
}

/// Reflect `rect` horizontally inside `parent` for right-to-left layouts.
///
/// Identity for left-to-right. Public layout functions call this exactly
/// once on their final output.
#[inline]
pub fn mirror(rect: Rect, parent: Rect, direction: Direction) -> Rect {
    if !direction.is_rtl() {
        return rect;
    }
    Rect {
        x: parent.right() - (rect.right() - parent.x),
        ..rect
    }
}

/// Reflect a point horizontally inside `parent`.
///
/// Pixel-exact inverse of [`mirror`]: a point inside `rect` maps into
/// `mirror(rect, parent, direction)`.
#[inline]
pub fn mirror_point(point: Point, parent: Rect, direction: Direction) -> Point {
    if !direction.is_rtl() {
        return point;
    }
    Point {
        x: parent.x + parent.right() - 1 - point.x,
        y: point.y,
    }
}
