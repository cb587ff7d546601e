//! Lattice geometry types.
//!
//! Provides the emitted [`Point`] record, the shape parameters accepted by the
//! rasterizers, and the inclusive [`Bounds`] used to size a display grid.

use std::fmt;

/// A lattice point emitted by a rasterizer.
///
/// `pk` is the decision variable at the moment the point was emitted, before
/// that step's update. It is diagnostic output and plays no part in where the
/// point lies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    /// X coordinate.
    pub x: i32,
    /// Y coordinate.
    pub y: i32,
    /// Decision variable value for this step.
    pub pk: i64,
}

impl Point {
    /// Create a new point.
    #[must_use]
    pub const fn new(x: i32, y: i32, pk: i64) -> Self {
        Self { x, y, pk }
    }

    /// Coordinates without the decision variable.
    #[must_use]
    pub const fn coords(self) -> (i32, i32) {
        (self.x, self.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}) pk={}", self.x, self.y, self.pk)
    }
}

/// A line segment between two integer endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LineSegment {
    /// Start point `(x0, y0)`.
    pub start: (i32, i32),
    /// End point `(x1, y1)`.
    pub end: (i32, i32),
}

impl LineSegment {
    /// Create a new line segment.
    #[must_use]
    pub const fn new(start: (i32, i32), end: (i32, i32)) -> Self {
        Self { start, end }
    }

    /// Create a segment from coordinates.
    #[must_use]
    pub const fn from_coords(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self::new((x0, y0), (x1, y1))
    }

    /// Bounding box of the two endpoints.
    #[must_use]
    pub fn bounds(&self) -> Bounds {
        Bounds::new(
            self.start.0.min(self.end.0),
            self.start.0.max(self.end.0),
            self.start.1.min(self.end.1),
            self.start.1.max(self.end.1),
        )
    }
}

/// A circle centered at the origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Circle {
    /// Radius. Must be positive to rasterize.
    pub radius: i32,
}

impl Circle {
    /// Create a new circle.
    #[must_use]
    pub const fn new(radius: i32) -> Self {
        Self { radius }
    }

    /// Square bounding box `[-r, r]` on both axes.
    #[must_use]
    pub fn bounds(&self) -> Bounds {
        let r = self.radius.saturating_abs();
        Bounds::new(-r, r, -r, r)
    }
}

/// An inclusive rectangle of lattice cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bounds {
    /// Smallest x.
    pub min_x: i32,
    /// Largest x.
    pub max_x: i32,
    /// Smallest y.
    pub min_y: i32,
    /// Largest y.
    pub max_y: i32,
}

impl Bounds {
    /// Create bounds from inclusive extents.
    #[must_use]
    pub const fn new(min_x: i32, max_x: i32, min_y: i32, max_y: i32) -> Self {
        Self { min_x, max_x, min_y, max_y }
    }

    /// Square bounds `[-extent, extent]` on both axes.
    #[must_use]
    pub const fn symmetric(extent: i32) -> Self {
        Self::new(-extent, extent, -extent, extent)
    }

    /// Smallest bounds containing every point, or `None` if there are none.
    pub fn around_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = (i32, i32)>,
    {
        let mut iter = points.into_iter();
        let (x, y) = iter.next()?;
        let init = Self::new(x, x, y, y);
        Some(iter.fold(init, |b, (x, y)| b.union(Self::new(x, x, y, y))))
    }

    /// Check if a cell lies inside the bounds.
    #[must_use]
    pub const fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y
    }

    /// Number of columns.
    #[must_use]
    pub fn width(&self) -> u64 {
        (i64::from(self.max_x) - i64::from(self.min_x) + 1) as u64
    }

    /// Number of rows.
    #[must_use]
    pub fn height(&self) -> u64 {
        (i64::from(self.max_y) - i64::from(self.min_y) + 1) as u64
    }

    /// Grow the bounds by `margin` cells on every side.
    #[must_use]
    pub fn expand(self, margin: i32) -> Self {
        Self::new(
            self.min_x.saturating_sub(margin),
            self.max_x.saturating_add(margin),
            self.min_y.saturating_sub(margin),
            self.max_y.saturating_add(margin),
        )
    }

    /// Smallest bounds containing both.
    #[must_use]
    pub fn union(self, other: Self) -> Self {
        Self::new(
            self.min_x.min(other.min_x),
            self.max_x.max(other.max_x),
            self.min_y.min(other.min_y),
            self.max_y.max(other.max_y),
        )
    }
}
