//! # Lattice-Raster
//!
//! Incremental-error rasterization of straight line segments and circles into
//! ordered sequences of integer lattice points.
//!
//! Every emitted [`Point`](geometry::Point) carries the decision variable
//! `pk` as it stood when that point was produced, so results can be shown
//! step by step next to the arithmetic that chose them.
//!
//! ## Quick Start
//!
//! ```rust
//! use lattice_raster::prelude::*;
//!
//! let line = rasterize_line(0, 0, 5, 5);
//! assert_eq!(line.len(), 6);
//! assert!(line.iter().all(|p| p.pk == 5));
//!
//! let circle = rasterize_circle(5)?;
//! assert_eq!(circle.first().map(|p| p.pk), Some(-7));
//!
//! let grid = GridRenderer::new().circle(5).render(circle.as_slice());
//! assert_eq!(grid.lines().count(), 21);
//! # Ok::<(), lattice_raster::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `config`: YAML configuration for grid rendering and playback
//! - `cli`: the `lattice-raster` command line binary (implies `config`)
//!
//! ## References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."
//!   IBM Systems Journal 4(1).
//! - Bresenham, J. E. (1977). "A linear algorithm for incremental digital display of
//!   circular arcs." Communications of the ACM 20(2).

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
// Allow unwrap() in tests only
#![cfg_attr(test, allow(clippy::unwrap_used))]

// ============================================================================
// Core Modules
// ============================================================================

/// Lattice points, shape parameters and bounds.
pub mod geometry;

/// Ordered point sequences.
pub mod sequence;

/// Line and circle rasterizers.
pub mod render;

// ============================================================================
// Caller-Side Modules
// ============================================================================

/// Parsing and validation of textual numeric input.
pub mod validate;

/// Text grid and table output.
pub mod output;

/// YAML configuration.
#[cfg(feature = "config")]
#[cfg_attr(docsrs, doc(cfg(feature = "config")))]
pub mod config;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for lattice-raster operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and functions for convenient imports.
///
/// ```rust
/// use lattice_raster::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::geometry::{Bounds, Circle, LineSegment, Point};
    pub use crate::output::{render_table, GridRenderer};
    pub use crate::render::{rasterize_circle, rasterize_line, Rasterize};
    pub use crate::sequence::PointSequence;
}
