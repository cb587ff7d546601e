//! Text output for point sequences (grid and table).

mod grid;

pub use grid::{render_table, Glyphs, GridRenderer};
