//! Fixed-point scanline triangle rasterizer
//!
//! A triangle is split at its middle vertex into two segments. Each segment is
//! walked one scanline at a time between a left and a right [`EdgeScan`], and
//! every row becomes a single clamped span in the canvas foreground colour.
//! All per-row work is integer additions; the only divisions happen once per
//! edge during setup.

pub mod classify;
pub mod edge;
pub mod span;
pub mod triangle;

pub use classify::{sort_by_y, FxPoint, TriangleEdges};
pub use edge::EdgeScan;
pub use span::fill_segment;
pub use triangle::{draw_triangle, Rasterizer};
