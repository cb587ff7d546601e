//! Midpoint circle rasterization.

use std::iter::FusedIterator;

use crate::error::{Error, Result};
use crate::geometry::Point;
use crate::sequence::PointSequence;

/// Lazy iterator over the points of a midpoint circle centered at the origin.
///
/// Each step of the generating octant `(x, y)` with `0 <= x <= y` yields a
/// cluster of eight reflections in the order `(x,y) (-x,y) (x,-y) (-x,-y)
/// (y,x) (-y,x) (y,-x) (-y,-x)`, all tagged with the same `pk`. Reflections of
/// points on an axis or on the diagonal coincide and are still emitted.
#[derive(Debug, Clone)]
pub struct CirclePoints {
    x: i32,
    y: i32,
    pk: i64,
    slot: u8,
}

impl CirclePoints {
    /// Start rasterizing a circle of the given radius.
    ///
    /// Returns [`Error::InvalidRadius`] unless `radius` is positive.
    pub fn new(radius: i32) -> Result<Self> {
        if radius <= 0 {
            return Err(Error::InvalidRadius { radius: i64::from(radius) });
        }
        Ok(Self { x: 0, y: radius, pk: 3 - 2 * i64::from(radius), slot: 0 })
    }

    fn reflection(&self) -> (i32, i32) {
        let (x, y) = (self.x, self.y);
        match self.slot {
            0 => (x, y),
            1 => (-x, y),
            2 => (x, -y),
            3 => (-x, -y),
            4 => (y, x),
            5 => (-y, x),
            6 => (y, -x),
            _ => (-y, -x),
        }
    }

    fn advance(&mut self) {
        let (x, y) = (i64::from(self.x), i64::from(self.y));
        if self.pk <= 0 {
            self.pk += 4 * x + 6;
        } else {
            self.pk += 4 * (x - y) + 10;
            self.y -= 1;
        }
        self.x += 1;
    }
}

impl Iterator for CirclePoints {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.y < self.x {
            return None;
        }

        let (x, y) = self.reflection();
        let point = Point::new(x, y, self.pk);

        self.slot += 1;
        if self.slot == 8 {
            self.slot = 0;
            self.advance();
        }

        Some(point)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.y < self.x {
            (0, Some(0))
        } else {
            (usize::from(8 - self.slot), None)
        }
    }
}

impl FusedIterator for CirclePoints {}

/// Rasterize a circle of radius `r` centered at the origin.
///
/// The result holds 8 points per step of the generating octant, emitted
/// cluster by cluster. Non-positive radii are rejected.
///
/// # Example
///
/// ```
/// use lattice_raster::render::rasterize_circle;
///
/// let seq = rasterize_circle(5)?;
/// assert_eq!(seq.first().map(|p| (p.x, p.y, p.pk)), Some((0, 5, -7)));
/// assert!(rasterize_circle(0).is_err());
/// # Ok::<(), lattice_raster::Error>(())
/// ```
pub fn rasterize_circle(r: i32) -> Result<PointSequence> {
    log::trace!("rasterize_circle r={r}");
    let seq: PointSequence = CirclePoints::new(r)?.collect();
    log::debug!("circle r={r}: {} points", seq.len());
    Ok(seq)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(300))]

        /// Every cell lies within one unit of the true radius.
        #[test]
        fn prop_points_near_radius(r in 1i32..2000) {
            let seq = rasterize_circle(r).unwrap();
            for p in &seq {
                let dist = f64::from(p.x).hypot(f64::from(p.y)).round() as i64;
                prop_assert!((dist - i64::from(r)).abs() <= 1, "{} is off radius {}", p, r);
            }
        }

        /// The cell set is closed under negation of either axis and under swapping axes.
        #[test]
        fn prop_eightfold_symmetry(r in 1i32..500) {
            let cells = rasterize_circle(r).unwrap().distinct_coordinates();
            for &(x, y) in &cells {
                prop_assert!(cells.contains(&(-x, y)));
                prop_assert!(cells.contains(&(x, -y)));
                prop_assert!(cells.contains(&(y, x)));
            }
        }

        /// Eight points per cluster, clusters in increasing x.
        #[test]
        fn prop_cluster_structure(r in 1i32..500) {
            let seq = rasterize_circle(r).unwrap();
            prop_assert_eq!(seq.len() % 8, 0);
            let xs: Vec<i32> = seq.as_slice().chunks(8).map(|c| c[0].x).collect();
            let expected: Vec<i32> = (0..xs.len() as i32).collect();
            prop_assert_eq!(xs, expected);
        }

        /// Same radius, same sequence.
        #[test]
        fn prop_deterministic(r in 1i32..500) {
            prop_assert_eq!(rasterize_circle(r).unwrap(), rasterize_circle(r).unwrap());
        }
    }
}
