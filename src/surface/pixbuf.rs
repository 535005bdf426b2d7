//! Chunky 8-bit pixel buffers

use sha2::{Digest, Sha256};

use super::Canvas;
use crate::{Error, Result};

/// Largest width or height accepted for a pixel buffer. Keeps every pixel
/// coordinate inside the fixed-point range of the rasterizer.
pub const MAX_DIMENSION: usize = 1024;

fn check_dimensions(width: usize, height: usize) -> Result<()> {
    if width == 0 || height == 0 || width > MAX_DIMENSION || height > MAX_DIMENSION {
        return Err(Error::InvalidDimensions(format!(
            "{}x{} (expected 1..={} per side)",
            width, height, MAX_DIMENSION
        )));
    }
    Ok(())
}

/// Owned one-byte-per-pixel buffer with a current foreground colour.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixBuf {
    width: usize,
    height: usize,
    fg_color: u8,
    data: Vec<u8>,
}

impl PixBuf {
    /// Zero-filled buffer with foreground colour 1.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        check_dimensions(width, height)?;
        Ok(Self {
            width,
            height,
            fg_color: 1,
            data: vec![0; width * height],
        })
    }

    /// Wrap existing row-major pixel data.
    pub fn from_data(width: usize, height: usize, data: Vec<u8>) -> Result<Self> {
        check_dimensions(width, height)?;
        if data.len() != width * height {
            return Err(Error::BufferSize {
                expected: width * height,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            fg_color: 1,
            data,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn fg_color(&self) -> u8 {
        self.fg_color
    }

    pub fn set_fg_color(&mut self, color: u8) {
        self.fg_color = color;
    }

    pub fn clear(&mut self, color: u8) {
        self.data.fill(color);
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    /// Pixel at `(x, y)`, `None` outside the buffer.
    pub fn get(&self, x: usize, y: usize) -> Option<u8> {
        if x < self.width && y < self.height {
            Some(self.data[y * self.width + x])
        } else {
            None
        }
    }

    /// Panics if `y` is out of range.
    pub fn row(&self, y: usize) -> &[u8] {
        &self.data[y * self.width..(y + 1) * self.width]
    }

    /// Number of pixels equal to `color`.
    pub fn count(&self, color: u8) -> usize {
        self.data.iter().filter(|&&p| p == color).count()
    }

    /// One text line per row: `.` for colour 0, a hex digit for 1..=15 and
    /// `#` for anything above.
    pub fn to_ascii(&self) -> String {
        const DIGITS: &[u8; 16] = b".123456789abcdef";

        let mut out = String::with_capacity((self.width + 1) * self.height);
        for row in self.data.chunks(self.width) {
            for &p in row {
                out.push(match DIGITS.get(p as usize) {
                    Some(&c) => c as char,
                    None => '#',
                });
            }
            out.push('\n');
        }
        out
    }

    /// SHA-256 of the pixel data as lowercase hex.
    pub fn digest(&self) -> String {
        hex::encode(Sha256::digest(&self.data))
    }
}

impl Canvas for PixBuf {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn fg_color(&self) -> u8 {
        self.fg_color
    }

    fn pixels_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }
}

/// Canvas over caller-owned storage, e.g. a display buffer the rasterizer
/// must draw into in place.
#[derive(Debug)]
pub struct PixBufMut<'a> {
    width: usize,
    height: usize,
    fg_color: u8,
    data: &'a mut [u8],
}

impl<'a> PixBufMut<'a> {
    /// `data` must hold exactly `width * height` bytes.
    pub fn new(width: usize, height: usize, data: &'a mut [u8]) -> Result<Self> {
        check_dimensions(width, height)?;
        if data.len() != width * height {
            return Err(Error::BufferSize {
                expected: width * height,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            fg_color: 1,
            data,
        })
    }

    pub fn set_fg_color(&mut self, color: u8) {
        self.fg_color = color;
    }
}

impl Canvas for PixBufMut<'_> {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn fg_color(&self) -> u8 {
        self.fg_color
    }

    fn pixels_mut(&mut self) -> &mut [u8] {
        &mut *self.data
    }
}
