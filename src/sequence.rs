//! Ordered point sequences produced by the rasterizers.

use std::collections::BTreeSet;
use std::ops::Index;
use std::slice;

use crate::geometry::{Bounds, Point};

/// An ordered, finite sequence of [`Point`]s in generation order.
///
/// Order is significant: it is the order in which the algorithm produced the
/// points and is what step-through display consumes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PointSequence {
    points: Vec<Point>,
}

impl PointSequence {
    /// Create an empty sequence.
    #[must_use]
    pub const fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Number of points, duplicates included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the sequence has no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// First emitted point.
    #[must_use]
    pub fn first(&self) -> Option<&Point> {
        self.points.first()
    }

    /// Last emitted point.
    #[must_use]
    pub fn last(&self) -> Option<&Point> {
        self.points.last()
    }

    /// Iterate in generation order.
    pub fn iter(&self) -> slice::Iter<'_, Point> {
        self.points.iter()
    }

    /// Borrow the points as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Point] {
        &self.points
    }

    /// Take ownership of the underlying points.
    #[must_use]
    pub fn into_vec(self) -> Vec<Point> {
        self.points
    }

    /// Coordinates in generation order.
    #[must_use]
    pub fn coordinates(&self) -> Vec<(i32, i32)> {
        self.points.iter().map(|p| p.coords()).collect()
    }

    /// The set of distinct coordinates, ignoring order and `pk`.
    #[must_use]
    pub fn distinct_coordinates(&self) -> BTreeSet<(i32, i32)> {
        self.points.iter().map(|p| p.coords()).collect()
    }

    /// Bounding box of all emitted coordinates.
    #[must_use]
    pub fn bounds(&self) -> Option<Bounds> {
        Bounds::around_points(self.points.iter().map(|p| p.coords()))
    }

    /// Growing prefixes of the sequence, one more point per frame.
    ///
    /// Yields `len()` frames; the last one is the whole sequence. Pacing is
    /// left to the caller.
    pub fn frames(&self) -> Frames<'_> {
        Frames { points: &self.points, next: 1 }
    }
}

impl From<Vec<Point>> for PointSequence {
    fn from(points: Vec<Point>) -> Self {
        Self { points }
    }
}

impl FromIterator<Point> for PointSequence {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self { points: iter.into_iter().collect() }
    }
}

impl IntoIterator for PointSequence {
    type Item = Point;
    type IntoIter = std::vec::IntoIter<Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.into_iter()
    }
}

impl<'a> IntoIterator for &'a PointSequence {
    type Item = &'a Point;
    type IntoIter = slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

impl Index<usize> for PointSequence {
    type Output = Point;

    fn index(&self, index: usize) -> &Point {
        &self.points[index]
    }
}

/// Iterator over growing prefixes of a [`PointSequence`].
#[derive(Debug, Clone)]
pub struct Frames<'a> {
    points: &'a [Point],
    next: usize,
}

impl<'a> Iterator for Frames<'a> {
    type Item = &'a [Point];

    fn next(&mut self) -> Option<Self::Item> {
        if self.next > self.points.len() {
            return None;
        }
        let frame = &self.points[..self.next];
        self.next += 1;
        Some(frame)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.points.len() + 1).saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Frames<'_> {}
