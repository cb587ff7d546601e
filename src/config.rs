//! Configuration for grid rendering and step-through playback.
//!
//! YAML file, every field optional. Precedence: CLI > file > defaults.

use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::output::{Glyphs, GridRenderer};

/// Grid rendering settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridConfig {
    /// Empty cells framing a line or circle.
    #[serde(default = "default_margin")]
    pub margin: i32,

    /// Half-width of the viewport when no shape is framed.
    #[serde(default = "default_extent")]
    pub default_extent: i32,

    /// Cell characters.
    #[serde(default)]
    pub glyphs: Glyphs,
}

fn default_margin() -> i32 {
    GridRenderer::DEFAULT_MARGIN
}
fn default_extent() -> i32 {
    GridRenderer::DEFAULT_EXTENT
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            margin: default_margin(),
            default_extent: default_extent(),
            glyphs: Glyphs::default(),
        }
    }
}

/// Step-through reveal timing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaybackConfig {
    /// Delay between revealed line points, in milliseconds.
    #[serde(default = "default_line_step_ms")]
    pub line_step_ms: u64,

    /// Delay between revealed circle points, in milliseconds.
    #[serde(default = "default_circle_step_ms")]
    pub circle_step_ms: u64,
}

fn default_line_step_ms() -> u64 {
    50
}
fn default_circle_step_ms() -> u64 {
    30
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self { line_step_ms: default_line_step_ms(), circle_step_ms: default_circle_step_ms() }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Grid settings.
    #[serde(default)]
    pub grid: GridConfig,

    /// Playback settings.
    #[serde(default)]
    pub playback: PlaybackConfig,
}

impl Config {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Default config file location: `<config dir>/lattice-raster/config.yaml`.
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("lattice-raster").join("config.yaml"))
    }

    /// Loads configuration from a YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => Error::ConfigNotFound(path.display().to_string()),
            _ => Error::Io(e),
        })?;

        Self::parse(&content)
    }

    /// Parses configuration from a YAML string.
    ///
    /// Errors carry the line number of the offending value.
    pub fn parse(yaml: &str) -> Result<Self> {
        serde_yaml_ng::from_str(yaml).map_err(|e| {
            let line = e.location().map_or(0, |l| l.line());
            Error::ConfigParse { line, message: e.to_string() }
        })
    }

    /// Loads configuration, falling back to defaults only when the file is absent.
    ///
    /// A file that exists but cannot be read or parsed is an error.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        match Self::load(path) {
            Ok(config) => Ok(config),
            Err(Error::ConfigNotFound(path)) => {
                log::debug!("no configuration at {path}, using defaults");
                Ok(Self::default())
            }
            Err(e) => Err(e),
        }
    }

    /// Playback delay for line reveals.
    #[must_use]
    pub fn line_step(&self) -> Duration {
        Duration::from_millis(self.playback.line_step_ms)
    }

    /// Playback delay for circle reveals.
    #[must_use]
    pub fn circle_step(&self) -> Duration {
        Duration::from_millis(self.playback.circle_step_ms)
    }

    /// A grid renderer carrying these settings.
    #[must_use]
    pub fn grid_renderer(&self) -> GridRenderer {
        GridRenderer::new()
            .margin(self.grid.margin)
            .default_extent(self.grid.default_extent)
            .glyphs(self.grid.glyphs)
    }
}
