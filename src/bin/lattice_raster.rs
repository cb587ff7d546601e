//! lattice-raster - Bresenham line and midpoint circle on a text grid.
//!
//! Prints the rasterized cells as a grid, the per-step decision variable as a
//! table, or both. `--animate` reveals the points one at a time.

use std::io::{self, Write};
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use lattice_raster::config::Config;
use lattice_raster::geometry::LineSegment;
use lattice_raster::output::{render_table, GridRenderer};
use lattice_raster::render::{rasterize_circle, rasterize_line};
use lattice_raster::sequence::PointSequence;
use lattice_raster::validate::{parse_coordinate, parse_radius};

/// Rasterize lines and circles into lattice points.
#[derive(Parser, Debug)]
#[command(name = "lattice-raster")]
#[command(version)]
#[command(about = "Bresenham line and midpoint circle rasterization", long_about = None)]
struct Cli {
    #[command(subcommand)]
    shape: Shape,

    /// What to print
    #[arg(short, long, value_enum, default_value_t = Format::Both, global = true)]
    format: Format,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Reveal points one at a time
    #[arg(long, global = true)]
    animate: bool,
}

#[derive(Subcommand, Debug)]
enum Shape {
    /// Line segment from (X0, Y0) to (X1, Y1)
    Line {
        #[arg(allow_negative_numbers = true, value_parser = parse_coordinate)]
        x0: i32,
        #[arg(allow_negative_numbers = true, value_parser = parse_coordinate)]
        y0: i32,
        #[arg(allow_negative_numbers = true, value_parser = parse_coordinate)]
        x1: i32,
        #[arg(allow_negative_numbers = true, value_parser = parse_coordinate)]
        y1: i32,
    },
    /// Circle of radius R centered at the origin
    Circle {
        #[arg(allow_negative_numbers = true, value_parser = parse_radius)]
        r: i32,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Grid,
    Table,
    Both,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_ref())?;

    let (points, grid, step) = match cli.shape {
        Shape::Line { x0, y0, x1, y1 } => {
            let grid = config.grid_renderer().line(LineSegment::from_coords(x0, y0, x1, y1));
            (rasterize_line(x0, y0, x1, y1), grid, config.line_step())
        }
        Shape::Circle { r } => {
            let grid = config.grid_renderer().circle(r);
            (rasterize_circle(r)?, grid, config.circle_step())
        }
    };
    log::info!("{} points", points.len());

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if cli.format != Format::Table {
        if cli.animate {
            animate(&mut out, &grid, &points, step)?;
        } else {
            grid.write_to(&mut out, points.as_slice())?;
        }
    }
    if cli.format == Format::Both {
        writeln!(out)?;
    }
    if cli.format != Format::Grid {
        out.write_all(render_table(points.as_slice()).as_bytes())?;
    }
    out.flush()?;

    Ok(())
}

fn load_config(path: Option<&PathBuf>) -> Result<Config> {
    match path {
        Some(path) => {
            Config::load(path).with_context(|| format!("loading {}", path.display()))
        }
        None => match Config::default_path() {
            Some(path) => Config::load_or_default(&path)
                .with_context(|| format!("loading {}", path.display())),
            None => Ok(Config::default()),
        },
    }
}

fn animate<W: Write>(
    out: &mut W,
    grid: &GridRenderer,
    points: &PointSequence,
    step: Duration,
) -> Result<()> {
    for frame in points.frames() {
        // Clear screen, cursor home.
        write!(out, "\x1b[2J\x1b[H")?;
        grid.write_to(out, frame)?;
        out.flush()?;
        thread::sleep(step);
    }
    Ok(())
}
