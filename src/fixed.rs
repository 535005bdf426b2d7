//! 28.4 fixed-point scalar used by the edge walker.
//!
//! All edge math runs on [`Fixed`] values: a signed 32-bit integer with an
//! implicit scale of 16. Arithmetic uses the plain integer operators, so an
//! overflow panics in debug builds and wraps in release builds.

use std::ops::{Add, Neg, Sub};

/// Number of fractional bits.
pub const FRAC_BITS: u32 = 4;
/// Raw value of 1.0.
pub const ONE: i32 = 1 << FRAC_BITS;
/// Raw value of 0.5, the offset from a pixel corner to its centre.
pub const HALF: i32 = ONE / 2;

const FRAC_MASK: i32 = ONE - 1;

/// Largest coordinate magnitude, in pixels, for which every edge extent
/// still fits the 16-bit divide used by the reference edge setup.
pub const MAX_COORD: f32 = 1023.0;

/// Fixed-point number with 4 fractional bits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Fixed(i32);

impl Fixed {
    pub const ZERO: Fixed = Fixed(0);
    pub const HALF: Fixed = Fixed(HALF);
    pub const ONE: Fixed = Fixed(ONE);

    pub const fn from_raw(raw: i32) -> Self {
        Fixed(raw)
    }

    pub const fn raw(self) -> i32 {
        self.0
    }

    pub const fn from_int(v: i32) -> Self {
        Fixed(v << FRAC_BITS)
    }

    /// Scale by 16 and truncate toward zero.
    ///
    /// `v` must be finite and well inside the `i32` range once scaled;
    /// anything else is a caller bug (the cast saturates).
    pub fn from_f32(v: f32) -> Self {
        Fixed((v * ONE as f32) as i32)
    }

    pub fn to_f32(self) -> f32 {
        self.0 as f32 / ONE as f32
    }

    /// Nearest whole-pixel value, ties rounding up.
    pub const fn round_to_grid(self) -> Self {
        Fixed((self.0 + HALF) & !FRAC_MASK)
    }

    /// Smallest whole-pixel value not below `self`.
    pub const fn ceil_to_grid(self) -> Self {
        Fixed((self.0 + FRAC_MASK) & !FRAC_MASK)
    }

    /// Nearest integer pixel, round half up: `(v + 8) >> 4`.
    pub const fn round(self) -> i32 {
        (self.0 + HALF) >> FRAC_BITS
    }

    /// Integer pixel by arithmetic shift (rounds toward negative infinity).
    pub const fn floor(self) -> i32 {
        self.0 >> FRAC_BITS
    }

    /// First scanline whose pixel centre lies at or below `self`.
    pub const fn ceil_center(self) -> i32 {
        (self.0 + HALF - 1) >> FRAC_BITS
    }

    /// Product rescaled by a plain right shift. Low bits are truncated, not
    /// rounded; the reference fill pattern depends on it.
    pub const fn mul(self, rhs: Fixed) -> Fixed {
        Fixed((self.0 * rhs.0) >> FRAC_BITS)
    }
}

impl Add for Fixed {
    type Output = Fixed;

    fn add(self, rhs: Fixed) -> Fixed {
        Fixed(self.0 + rhs.0)
    }
}

impl Sub for Fixed {
    type Output = Fixed;

    fn sub(self, rhs: Fixed) -> Fixed {
        Fixed(self.0 - rhs.0)
    }
}

impl Neg for Fixed {
    type Output = Fixed;

    fn neg(self) -> Fixed {
        Fixed(-self.0)
    }
}

/// Truncating division followed by the remainder fixup used by the edge
/// walker: a negative remainder gets the divisor added to it and the quotient
/// decremented. For a positive divisor the result satisfies
/// `0 <= rem < divisor` and `quo * divisor + rem == dividend`.
///
/// Panics if `divisor` is zero.
pub fn div_rem(dividend: i64, divisor: i64) -> (i64, i64) {
    let mut quo = dividend / divisor;
    let mut rem = dividend % divisor;

    if rem < 0 {
        rem += divisor;
        quo -= 1;
    }

    (quo, rem)
}

/// 32 by 16 bit variant of [`div_rem`] with 16-bit results, matching the
/// divide the reference edge setup was written against.
///
/// The quotient must fit 16 bits; this is checked in debug builds and
/// truncated in release builds.
pub fn div_rem16(dividend: i32, divisor: i16) -> (i16, i16) {
    let (quo, rem) = div_rem(i64::from(dividend), i64::from(divisor));
    debug_assert!(
        i16::try_from(quo).is_ok(),
        "quotient {} of {} / {} does not fit 16 bits",
        quo,
        dividend,
        divisor
    );
    (quo as i16, rem as i16)
}
