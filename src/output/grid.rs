//! Text grid renderer for lattice point sequences.
//!
//! Draws one character per lattice cell, top row first (largest y), with
//! optional markers for line endpoints and the origin.

use std::collections::HashSet;
use std::fmt::Write as FmtWrite;
use std::io;

use crate::error::Result;
use crate::geometry::{Bounds, LineSegment, Point};

/// Characters used for each kind of cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "config", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "config", serde(default))]
pub struct Glyphs {
    /// Cell not touched by the shape.
    pub empty: char,
    /// Cell emitted by the rasterizer.
    pub active: char,
    /// Line start point.
    pub start: char,
    /// Line end point.
    pub end: char,
    /// Origin marker for circles.
    pub center: char,
}

impl Default for Glyphs {
    fn default() -> Self {
        Self { empty: '.', active: '#', start: 'S', end: 'E', center: 'O' }
    }
}

/// What the grid is framing; decides the default viewport and markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Subject {
    None,
    Line(LineSegment),
    Circle(i32),
}

/// Grid renderer configuration.
#[derive(Debug, Clone)]
pub struct GridRenderer {
    subject: Subject,
    viewport: Option<Bounds>,
    glyphs: Glyphs,
    margin: i32,
    default_extent: i32,
}

impl Default for GridRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl GridRenderer {
    /// Default number of empty cells framing a shape.
    pub const DEFAULT_MARGIN: i32 = 5;

    /// Default half-width of the viewport when nothing is framed.
    pub const DEFAULT_EXTENT: i32 = 10;

    /// Create a renderer with the default `[-10, 10]` viewport.
    #[must_use]
    pub fn new() -> Self {
        Self {
            subject: Subject::None,
            viewport: None,
            glyphs: Glyphs::default(),
            margin: Self::DEFAULT_MARGIN,
            default_extent: Self::DEFAULT_EXTENT,
        }
    }

    /// Frame a line: viewport around its endpoints, start and end marked.
    #[must_use]
    pub fn line(mut self, segment: LineSegment) -> Self {
        self.subject = Subject::Line(segment);
        self
    }

    /// Frame a circle: viewport `[-(r + margin), r + margin]`, origin marked.
    #[must_use]
    pub fn circle(mut self, radius: i32) -> Self {
        self.subject = Subject::Circle(radius);
        self
    }

    /// Use a fixed viewport instead of the framed one.
    #[must_use]
    pub fn viewport(mut self, bounds: Bounds) -> Self {
        self.viewport = Some(bounds);
        self
    }

    /// Set the cell characters.
    #[must_use]
    pub fn glyphs(mut self, glyphs: Glyphs) -> Self {
        self.glyphs = glyphs;
        self
    }

    /// Set the margin around a framed shape.
    #[must_use]
    pub fn margin(mut self, margin: i32) -> Self {
        self.margin = margin.max(0);
        self
    }

    /// Set the half-width of the viewport used when nothing is framed.
    #[must_use]
    pub fn default_extent(mut self, extent: i32) -> Self {
        self.default_extent = extent.max(0);
        self
    }

    /// The cells that will be drawn.
    #[must_use]
    pub fn bounds(&self) -> Bounds {
        if let Some(bounds) = self.viewport {
            return bounds;
        }
        match self.subject {
            Subject::None => Bounds::symmetric(self.default_extent),
            Subject::Line(segment) => segment.bounds().expand(self.margin),
            Subject::Circle(radius) => {
                Bounds::symmetric(radius.saturating_abs().saturating_add(self.margin))
            }
        }
    }

    /// Render points to a string, one line per row.
    ///
    /// Points outside the viewport are ignored. Markers win over active
    /// cells, in the order start, end, center.
    #[must_use]
    pub fn render(&self, points: &[Point]) -> String {
        let bounds = self.bounds();
        let active: HashSet<(i32, i32)> = points.iter().map(|p| p.coords()).collect();

        let cells = bounds.width().saturating_mul(2).saturating_mul(bounds.height());
        let mut output = String::with_capacity(cells.min(1 << 20) as usize);

        for y in (bounds.min_y..=bounds.max_y).rev() {
            for x in bounds.min_x..=bounds.max_x {
                if x != bounds.min_x {
                    output.push(' ');
                }
                output.push(self.glyph_at(x, y, &active));
            }
            output.push('\n');
        }

        output
    }

    fn glyph_at(&self, x: i32, y: i32, active: &HashSet<(i32, i32)>) -> char {
        let mut glyph =
            if active.contains(&(x, y)) { self.glyphs.active } else { self.glyphs.empty };

        match self.subject {
            Subject::Line(segment) => {
                if segment.start == (x, y) {
                    glyph = self.glyphs.start;
                }
                if segment.end == (x, y) {
                    glyph = self.glyphs.end;
                }
            }
            Subject::Circle(_) if (x, y) == (0, 0) => glyph = self.glyphs.center,
            _ => {}
        }

        glyph
    }

    /// Write the rendered grid to `out`.
    pub fn write_to<W: io::Write>(&self, out: &mut W, points: &[Point]) -> Result<()> {
        out.write_all(self.render(points).as_bytes())?;
        Ok(())
    }
}

/// Render points as a `X | Y | p_k` table in generation order.
#[must_use]
pub fn render_table(points: &[Point]) -> String {
    let wx = column_width("X", points.iter().map(|p| p.x.to_string().len()));
    let wy = column_width("Y", points.iter().map(|p| p.y.to_string().len()));
    let wk = column_width("p_k", points.iter().map(|p| p.pk.to_string().len()));

    let mut output = String::new();
    let _ = writeln!(output, "{:>wx$} | {:>wy$} | {:>wk$}", "X", "Y", "p_k");
    let _ = writeln!(output, "{}-+-{}-+-{}", "-".repeat(wx), "-".repeat(wy), "-".repeat(wk));
    for p in points {
        let _ = writeln!(output, "{:>wx$} | {:>wy$} | {:>wk$}", p.x, p.y, p.pk);
    }
    output
}

fn column_width(header: &str, cells: impl Iterator<Item = usize>) -> usize {
    cells.fold(header.len(), usize::max)
}
