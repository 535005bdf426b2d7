//! Colour tables for indexed surfaces

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Maximum number of entries an 8-bit index can address.
pub const MAX_COLORS: usize = 256;

/// 24-bit RGB colour
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color { r: 0, g: 0, b: 0 };
    pub const WHITE: Color = Color { r: 255, g: 255, b: 255 };

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Colour table. `start` is the first hardware colour register the table is
/// loaded into; `colors[i]` ends up in register `start + i`.
///
/// Copying a palette is `Clone`; releasing it is `Drop`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    #[serde(default)]
    start: usize,
    colors: Vec<Color>,
}

impl Palette {
    /// Table of `count` black entries.
    pub fn new(count: usize) -> Result<Self> {
        check_count(count)?;
        Ok(Self {
            start: 0,
            colors: vec![Color::BLACK; count],
        })
    }

    pub fn from_colors(colors: Vec<Color>) -> Result<Self> {
        check_count(colors.len())?;
        Ok(Self { start: 0, colors })
    }

    /// Parse `{"start": 0, "colors": [{"r":0,"g":0,"b":0}, ...]}`.
    pub fn from_json(s: &str) -> Result<Self> {
        let palette: Palette = serde_json::from_str(s)?;
        check_count(palette.colors.len())?;
        if palette.start + palette.colors.len() > MAX_COLORS {
            return Err(Error::PaletteError(format!(
                "start {} + {} colors exceeds {} registers",
                palette.start,
                palette.colors.len(),
                MAX_COLORS
            )));
        }
        Ok(palette)
    }

    pub fn count(&self) -> usize {
        self.colors.len()
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn set_start(&mut self, start: usize) -> Result<()> {
        if start + self.colors.len() > MAX_COLORS {
            return Err(Error::PaletteError(format!(
                "start {} leaves no room for {} colors",
                start,
                self.colors.len()
            )));
        }
        self.start = start;
        Ok(())
    }

    pub fn get(&self, index: usize) -> Option<Color> {
        self.colors.get(index).copied()
    }

    pub fn set(&mut self, index: usize, color: Color) -> Result<()> {
        let count = self.colors.len();
        let slot = self.colors.get_mut(index).ok_or_else(|| {
            Error::PaletteError(format!("index {} out of range (count {})", index, count))
        })?;
        *slot = color;
        Ok(())
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }
}

fn check_count(count: usize) -> Result<()> {
    if count == 0 || count > MAX_COLORS {
        return Err(Error::PaletteError(format!(
            "{} colors requested (expected 1..={})",
            count, MAX_COLORS
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_palette_is_black_and_sized() {
        let p = Palette::new(16).unwrap();
        assert_eq!(p.count(), 16);
        assert_eq!(p.start(), 0);
        assert!(p.colors().iter().all(|&c| c == Color::BLACK));
        assert!(Palette::new(0).is_err());
        assert!(Palette::new(MAX_COLORS + 1).is_err());
    }

    #[test]
    fn copy_is_independent() {
        let mut p = Palette::new(4).unwrap();
        p.set(1, Color::WHITE).unwrap();
        let mut copy = p.clone();
        copy.set(1, Color::new(1, 2, 3)).unwrap();
        assert_eq!(p.get(1), Some(Color::WHITE));
        assert_eq!(copy.get(1), Some(Color::new(1, 2, 3)));
    }

    #[test]
    fn set_rejects_out_of_range_index() {
        let mut p = Palette::new(2).unwrap();
        assert!(matches!(p.set(2, Color::WHITE), Err(Error::PaletteError(_))));
        assert_eq!(p.get(2), None);
    }

    #[test]
    fn json_palette_respects_register_space() {
        let p = Palette::from_json(
            r#"{"start": 2, "colors": [{"r": 255, "g": 0, "b": 0}, {"r": 0, "g": 0, "b": 255}]}"#,
        )
        .unwrap();
        assert_eq!(p.start(), 2);
        assert_eq!(p.get(1), Some(Color::new(0, 0, 255)));

        let err = Palette::from_json(r#"{"start": 255, "colors": [{"r":0,"g":0,"b":0},{"r":0,"g":0,"b":0}]}"#);
        assert!(matches!(err, Err(Error::PaletteError(_))));
        assert!(matches!(Palette::from_json("{"), Err(Error::Json(_))));
    }
}
