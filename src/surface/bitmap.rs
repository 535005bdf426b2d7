//! Planar bitmaps
//!
//! A bitmap stores `depth` bitplanes of `bytes_per_row * height` bytes each.
//! Plane size is rounded up to an even number of bytes and two scratch bytes
//! follow the last plane (line drawing hardware writes a dummy word there).

use std::ops::BitOr;

use super::palette::Palette;
use crate::{Error, Result};

/// Maximum number of bitplanes.
pub const MAX_DEPTH: u16 = 8;

const SCRATCH_BYTES: usize = 2;

/// Allocation flags for [`Bitmap::new`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct BitmapFlags(u8);

impl BitmapFlags {
    pub const NONE: BitmapFlags = BitmapFlags(0);
    /// Planes are meant to be fetched by the display
    pub const DISPLAYABLE: BitmapFlags = BitmapFlags(1 << 0);
    /// Rows of all planes alternate in memory instead of plane after plane
    pub const INTERLEAVED: BitmapFlags = BitmapFlags(1 << 1);
    /// Header only, no plane storage is allocated
    pub const MINIMAL: BitmapFlags = BitmapFlags(1 << 2);

    pub const fn contains(self, other: BitmapFlags) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn bits(self) -> u8 {
        self.0
    }
}

impl BitOr for BitmapFlags {
    type Output = BitmapFlags;

    fn bitor(self, rhs: BitmapFlags) -> BitmapFlags {
        BitmapFlags(self.0 | rhs.0)
    }
}

#[derive(Debug, Clone)]
pub struct Bitmap {
    width: u16,
    height: u16,
    depth: u16,
    bytes_per_row: usize,
    bpl_size: usize,
    flags: BitmapFlags,
    storage: Vec<u8>,
    palette: Option<Palette>,
}

impl Bitmap {
    /// Allocate a zeroed bitmap. Dropping it releases the planes.
    pub fn new(width: u16, height: u16, depth: u16, flags: BitmapFlags) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions(format!("bitmap {}x{}", width, height)));
        }
        if depth == 0 || depth > MAX_DEPTH {
            return Err(Error::InvalidDimensions(format!(
                "bitmap depth {} (expected 1..={})",
                depth, MAX_DEPTH
            )));
        }

        let bytes_per_row = (usize::from(width) + 7) / 8;
        let mut bpl_size = bytes_per_row * usize::from(height);
        bpl_size += bpl_size & 1;

        let storage = if flags.contains(BitmapFlags::MINIMAL) {
            Vec::new()
        } else {
            vec![0; bpl_size * usize::from(depth) + SCRATCH_BYTES]
        };

        Ok(Self {
            width,
            height,
            depth,
            bytes_per_row,
            bpl_size,
            flags,
            storage,
            palette: None,
        })
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn depth(&self) -> u16 {
        self.depth
    }

    pub fn bytes_per_row(&self) -> usize {
        self.bytes_per_row
    }

    /// Bytes per plane, rounded up to an even count.
    pub fn bpl_size(&self) -> usize {
        self.bpl_size
    }

    pub fn flags(&self) -> BitmapFlags {
        self.flags
    }

    pub fn has_storage(&self) -> bool {
        !self.storage.is_empty()
    }

    /// Total allocation, scratch bytes included; zero for minimal bitmaps.
    pub fn storage_len(&self) -> usize {
        self.storage.len()
    }

    /// Distance in bytes between the starts of two consecutive rows of one
    /// plane.
    pub fn row_stride(&self) -> usize {
        if self.flags.contains(BitmapFlags::INTERLEAVED) {
            self.bytes_per_row * usize::from(self.depth)
        } else {
            self.bytes_per_row
        }
    }

    /// Offset of the first byte of `plane`.
    pub fn plane_offset(&self, plane: u16) -> usize {
        let stride = if self.flags.contains(BitmapFlags::INTERLEAVED) {
            self.bytes_per_row
        } else {
            self.bpl_size
        };
        usize::from(plane) * stride
    }

    fn row_range(&self, plane: u16, y: u16) -> Option<std::ops::Range<usize>> {
        if !self.has_storage() || plane >= self.depth || y >= self.height {
            return None;
        }
        let start = self.plane_offset(plane) + usize::from(y) * self.row_stride();
        Some(start..start + self.bytes_per_row)
    }

    /// Row `y` of `plane`; `None` when out of range or without storage.
    pub fn plane_row(&self, plane: u16, y: u16) -> Option<&[u8]> {
        let range = self.row_range(plane, y)?;
        Some(&self.storage[range])
    }

    pub fn plane_row_mut(&mut self, plane: u16, y: u16) -> Option<&mut [u8]> {
        let range = self.row_range(plane, y)?;
        Some(&mut self.storage[range])
    }

    pub fn palette(&self) -> Option<&Palette> {
        self.palette.as_ref()
    }

    pub fn set_palette(&mut self, palette: Palette) {
        self.palette = Some(palette);
    }

    pub fn take_palette(&mut self) -> Option<Palette> {
        self.palette.take()
    }
}
