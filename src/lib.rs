//! Trifill
//!
//! A small 2D graphics support library for constrained raster displays. Its
//! centre piece is a fixed-point scanline triangle rasterizer: an edge-walking
//! DDA that fills solid triangles into one-byte-per-pixel buffers using only
//! integer arithmetic.
//!
//! # Features
//!
//! - **Reference fill rule** (default): reproduces the classic fill pattern
//!   bit for bit, including its rounding and inclusive right edge
//! - **Top-left fill rule**: pixel-centre exact coverage, shared edges are
//!   painted exactly once
//! - **Surfaces**: chunky pixel buffers, planar bitmaps and palettes
//!
//! # Example
//!
//! ```
//! use trifill::{PixBuf, Vertex};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut buf = PixBuf::new(10, 10)?;
//! buf.set_fg_color(1);
//! trifill::draw_triangle(&mut buf, Vertex::new(1.0, 1.0), Vertex::new(8.0, 1.0), Vertex::new(1.0, 8.0));
//! assert_eq!(buf.count(1), 28);
//! # Ok(())
//! # }
//! ```

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub mod error;
pub use error::{Error, Result};

pub mod fixed;

// Edge walker, classifier, span filler and the public fill entry points
pub mod raster;

// Pixel buffers, planar bitmaps and palettes
pub mod surface;

// JSON draw command lists used by the CLI and golden tests
pub mod scene;

pub use fixed::Fixed;
pub use raster::{draw_triangle, Rasterizer};
pub use scene::{DrawCommand, Scene};
pub use surface::{Bitmap, BitmapFlags, Canvas, Color, Palette, PixBuf, PixBufMut};

/// A 2D point in pixel coordinates. `(0, 0)` is the top-left corner of the
/// top-left pixel; pixel `(x, y)` has its centre at `(x + 0.5, y + 0.5)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vertex {
    pub x: f32,
    pub y: f32,
}

impl Vertex {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Parses `"x,y"`.
impl FromStr for Vertex {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let bad = || Error::VertexOutOfRange(format!("expected \"x,y\", got {:?}", s));
        let (x, y) = s.split_once(',').ok_or_else(bad)?;
        let x = x.trim().parse::<f32>().map_err(|_| bad())?;
        let y = y.trim().parse::<f32>().map_err(|_| bad())?;
        Ok(Vertex { x, y })
    }
}

/// Which pixels count as covered by a triangle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FillRule {
    /// Classic fill pattern: rows and start columns rounded half up, spans
    /// inclusive of the right edge column. Adjacent triangles overlap on
    /// their shared edge.
    #[default]
    Reference,
    /// Pixel-centre sampling with the top-left tie rule: a centre on a left
    /// or top edge is inside, on a right or bottom edge outside.
    TopLeft,
}

impl FillRule {
    /// First scanline sampled for an edge starting at `y`.
    pub fn first_row(self, y: Fixed) -> i32 {
        match self {
            FillRule::Reference => y.round(),
            FillRule::TopLeft => y.ceil_center(),
        }
    }
}

impl fmt::Display for FillRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FillRule::Reference => "reference",
            FillRule::TopLeft => "top-left",
        })
    }
}

impl FromStr for FillRule {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "reference" => Ok(FillRule::Reference),
            "top-left" => Ok(FillRule::TopLeft),
            other => Err(Error::ConfigError(format!("unknown fill rule {:?}", other))),
        }
    }
}

/// Configuration for a [`Rasterizer`]
///
/// # Examples
///
/// ```
/// let cfg = trifill::RasterConfig::default();
/// assert_eq!(cfg.fill_rule, trifill::FillRule::Reference);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RasterConfig {
    /// Coverage rule used by every fill
    pub fill_rule: FillRule,
    /// Largest accepted coordinate magnitude for `try_draw_triangle`
    pub max_coord: f32,
}

impl Default for RasterConfig {
    fn default() -> Self {
        Self {
            fill_rule: FillRule::Reference,
            max_coord: fixed::MAX_COORD,
        }
    }
}

impl RasterConfig {
    /// Parse and validate a JSON configuration. Missing fields keep their
    /// defaults.
    pub fn from_json(s: &str) -> Result<Self> {
        let config: RasterConfig = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let data = std::fs::read_to_string(path)?;
        Self::from_json(&data)
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.max_coord > 0.0 && self.max_coord <= fixed::MAX_COORD) {
            return Err(Error::ConfigError(format!(
                "max_coord {} outside (0, {}]",
                self.max_coord,
                fixed::MAX_COORD
            )));
        }
        Ok(())
    }
}
