//! Bresenham line rasterization.

use std::iter::FusedIterator;

use crate::geometry::Point;
use crate::sequence::PointSequence;

/// The axis along which a line advances exactly one unit per step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DominantAxis {
    /// Shallow slope: `|dx| > |dy|`.
    X,
    /// Steep slope, including the diagonal `|dx| == |dy|`.
    Y,
}

impl DominantAxis {
    /// Pick the dominant axis for absolute deltas.
    #[must_use]
    pub const fn for_deltas(dx: i64, dy: i64) -> Self {
        if dx > dy {
            Self::X
        } else {
            Self::Y
        }
    }
}

/// Lazy iterator over the points of a Bresenham line.
///
/// Yields exactly `max(|dx|, |dy|) + 1` points, starting at `(x0, y0)` and
/// ending at `(x1, y1)`. Arithmetic is widened to `i64` so any `i32`
/// endpoints are accepted. `ExactSizeIterator` is only implemented on 64-bit
/// targets, where every point count fits in `usize`.
#[derive(Debug, Clone)]
pub struct LinePoints {
    x: i32,
    y: i32,
    pk: i64,
    sx: i32,
    sy: i32,
    dx: i64,
    dy: i64,
    axis: DominantAxis,
    remaining: u64,
}

impl LinePoints {
    /// Start rasterizing the segment from `(x0, y0)` to `(x1, y1)`.
    #[must_use]
    pub fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        let dx = (i64::from(x1) - i64::from(x0)).abs();
        let dy = (i64::from(y1) - i64::from(y0)).abs();
        let sx = if x1 >= x0 { 1 } else { -1 };
        let sy = if y1 >= y0 { 1 } else { -1 };

        let axis = DominantAxis::for_deltas(dx, dy);
        let (pk, major) = match axis {
            DominantAxis::X => (2 * dy - dx, dx),
            DominantAxis::Y => (2 * dx - dy, dy),
        };

        Self { x: x0, y: y0, pk, sx, sy, dx, dy, axis, remaining: major as u64 + 1 }
    }

    /// The axis this line steps along.
    #[must_use]
    pub const fn axis(&self) -> DominantAxis {
        self.axis
    }

    fn advance(&mut self) {
        match self.axis {
            DominantAxis::X => {
                self.x += self.sx;
                if self.pk < 0 {
                    self.pk += 2 * self.dy;
                } else {
                    self.y += self.sy;
                    self.pk += 2 * (self.dy - self.dx);
                }
            }
            DominantAxis::Y => {
                self.y += self.sy;
                if self.pk < 0 {
                    self.pk += 2 * self.dx;
                } else {
                    self.x += self.sx;
                    self.pk += 2 * (self.dx - self.dy);
                }
            }
        }
    }
}

impl Iterator for LinePoints {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.remaining == 0 {
            return None;
        }

        let point = Point::new(self.x, self.y, self.pk);
        self.remaining -= 1;

        // Stepping past the final point could overflow at the i32 edges.
        if self.remaining > 0 {
            self.advance();
        }

        Some(point)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}

// Up to 2^32 points; only exact where that count fits in `usize`.
#[cfg(target_pointer_width = "64")]
impl ExactSizeIterator for LinePoints {}

impl FusedIterator for LinePoints {}

/// Rasterize the segment from `(x0, y0)` to `(x1, y1)`.
///
/// Never fails: equal endpoints produce a single point. Each point carries
/// the decision variable as it stood before that step's update.
///
/// # Example
///
/// ```
/// use lattice_raster::render::rasterize_line;
///
/// let seq = rasterize_line(0, 0, 5, 2);
/// assert_eq!(seq.len(), 6);
/// assert_eq!(seq.first().map(|p| p.coords()), Some((0, 0)));
/// assert_eq!(seq.last().map(|p| p.coords()), Some((5, 2)));
/// ```
#[must_use]
pub fn rasterize_line(x0: i32, y0: i32, x1: i32, y1: i32) -> PointSequence {
    log::trace!("rasterize_line ({x0}, {y0}) -> ({x1}, {y1})");
    let seq: PointSequence = LinePoints::new(x0, y0, x1, y1).collect();
    log::debug!("line ({x0}, {y0}) -> ({x1}, {y1}): {} points", seq.len());
    seq
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn coord() -> impl Strategy<Value = i32> {
        -500i32..500
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        /// Endpoints are emitted exactly.
        #[test]
        fn prop_starts_and_ends_at_endpoints(
            x0 in coord(), y0 in coord(), x1 in coord(), y1 in coord()
        ) {
            let seq = rasterize_line(x0, y0, x1, y1);
            prop_assert_eq!(seq.first().map(|p| p.coords()), Some((x0, y0)));
            prop_assert_eq!(seq.last().map(|p| p.coords()), Some((x1, y1)));
        }

        /// One point per unit of the dominant axis.
        #[test]
        fn prop_length_is_major_delta_plus_one(
            x0 in coord(), y0 in coord(), x1 in coord(), y1 in coord()
        ) {
            let seq = rasterize_line(x0, y0, x1, y1);
            let major = (x1 - x0).abs().max((y1 - y0).abs()) as usize;
            prop_assert_eq!(seq.len(), major + 1);
        }

        /// Dominant coordinate moves by exactly one each step, the other by at most one.
        #[test]
        fn prop_unit_steps_along_dominant_axis(
            x0 in coord(), y0 in coord(), x1 in coord(), y1 in coord()
        ) {
            let seq = rasterize_line(x0, y0, x1, y1);
            let axis = LinePoints::new(x0, y0, x1, y1).axis();
            for w in seq.as_slice().windows(2) {
                let (ddx, ddy) = ((w[1].x - w[0].x).abs(), (w[1].y - w[0].y).abs());
                match axis {
                    DominantAxis::X => prop_assert!(ddx == 1 && ddy <= 1),
                    DominantAxis::Y => prop_assert!(ddy == 1 && ddx <= 1),
                }
            }
        }

        /// Without midpoint ties (odd dominant delta) both directions cover the same cells.
        #[test]
        fn prop_reverse_traversal_same_cells(
            x0 in coord(), y0 in coord(), x1 in coord(), y1 in coord()
        ) {
            let major = (x1 - x0).abs().max((y1 - y0).abs());
            prop_assume!(major % 2 == 1);

            let forward = rasterize_line(x0, y0, x1, y1).coordinates();
            let mut backward = rasterize_line(x1, y1, x0, y0).coordinates();
            backward.reverse();
            prop_assert_eq!(forward, backward);
        }

        /// Same inputs, same sequence.
        #[test]
        fn prop_deterministic(x0 in coord(), y0 in coord(), x1 in coord(), y1 in coord()) {
            prop_assert_eq!(rasterize_line(x0, y0, x1, y1), rasterize_line(x0, y0, x1, y1));
        }
    }
}
