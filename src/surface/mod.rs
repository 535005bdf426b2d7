//! Pixel storage: chunky pixel buffers, planar bitmaps and palettes
//!
//! The rasterizer only talks to the [`Canvas`] trait. Everything else in this
//! module is the allocation side: creating, sizing and releasing (via `Drop`)
//! the surfaces a display pipeline hands to the fill routines.

pub mod bitmap;
pub mod palette;
pub mod pixbuf;

pub use bitmap::{Bitmap, BitmapFlags};
pub use palette::{Color, Palette};
pub use pixbuf::{PixBuf, PixBufMut};

/// Destination of the fill routines.
///
/// Storage is row-major with one byte per pixel and a stride equal to
/// `width()`. Fill routines read the dimensions and the foreground colour and
/// write bytes into `pixels_mut()`; they never resize the storage.
pub trait Canvas {
    fn width(&self) -> usize;
    fn height(&self) -> usize;
    /// Colour written by solid fills
    fn fg_color(&self) -> u8;
    /// Exactly `width() * height()` bytes
    fn pixels_mut(&mut self) -> &mut [u8];
}
