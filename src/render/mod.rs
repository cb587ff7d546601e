//! Rasterization of lines and circles into lattice point sequences.
//!
//! Both rasterizers are pure: identical inputs always yield the identical,
//! fully ordered sequence, and nothing is shared between calls.
//!
//! # Algorithms
//!
//! - **Bresenham's Line**: integer decision variable, all octants
//! - **Midpoint Circle**: one octant generated, reflected eight ways
//!
//! # References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."
//! - Bresenham, J. E. (1977). "A linear algorithm for incremental digital display of
//!   circular arcs."

mod circle;
mod line;

pub use circle::{rasterize_circle, CirclePoints};
pub use line::{rasterize_line, DominantAxis, LinePoints};

use crate::error::Result;
use crate::geometry::{Circle, LineSegment};
use crate::sequence::PointSequence;

/// Trait for shapes that can be rasterized into a point sequence.
pub trait Rasterize {
    /// Produce the ordered lattice points approximating this shape.
    fn rasterize(&self) -> Result<PointSequence>;
}

impl Rasterize for LineSegment {
    fn rasterize(&self) -> Result<PointSequence> {
        Ok(rasterize_line(self.start.0, self.start.1, self.end.0, self.end.1))
    }
}

impl Rasterize for Circle {
    fn rasterize(&self) -> Result<PointSequence> {
        rasterize_circle(self.radius)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_rasterize_trait_line() {
        let seq = LineSegment::from_coords(0, 0, 5, 5).rasterize().unwrap();
        assert_eq!(seq, rasterize_line(0, 0, 5, 5));
    }

    #[test]
    fn test_rasterize_trait_circle() {
        let seq = Circle::new(5).rasterize().unwrap();
        assert_eq!(seq.len(), 32);
    }

    #[test]
    fn test_rasterize_trait_uniform_use() {
        let shapes: Vec<Box<dyn Rasterize>> =
            vec![Box::new(LineSegment::from_coords(-2, 1, 3, 1)), Box::new(Circle::new(0))];

        assert_eq!(shapes[0].rasterize().unwrap().len(), 6);
        assert!(matches!(shapes[1].rasterize(), Err(Error::InvalidRadius { radius: 0 })));
    }
}
