//! Edge walking with a rational error term
//!
//! An edge from `(xs, ys)` to `(xe, ye)` is the line
//!
//! ```text
//!        xe - xs
//!   x = --------- * (y - ys) + xs
//!        ye - ys
//! ```
//!
//! Its slope is kept as an integer part `dx` plus a fraction `dxerr / nxerr`,
//! so stepping to the next scanline is two additions and one compare.

use crate::fixed::{self, Fixed, HALF, ONE};

/// DDA state of one triangle edge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EdgeScan {
    /// Number of scanlines the edge drives
    pub height: i32,
    /// Horizontal extent between the pixel-rounded endpoints
    pub width: i32,
    /// Pixel column on the current scanline
    pub x: i32,
    pub dx: i32,
    pub xerr: i32,
    pub dxerr: i32,
    pub nxerr: i32,
}

impl EdgeScan {
    /// Edge setup of the reference fill rule.
    ///
    /// Rows are `round(ys)..round(ye)` and the walk starts at `round(xs)`,
    /// advanced by the sub-pixel prestep from `ys` to the next pixel centre.
    /// The slope and the error denominator use the unrounded fixed-point
    /// extents.
    pub fn new(ys: Fixed, ye: Fixed, xs: Fixed, xe: Fixed) -> Self {
        let mut edge = EdgeScan {
            height: ye.round() - ys.round(),
            width: xe.round() - xs.round(),
            x: xs.round(),
            ..Default::default()
        };

        if edge.height == 0 {
            return edge;
        }

        let height = (ye - ys).raw() as i16;
        let width = xe - xs;

        let (dx, dxerr) = fixed::div_rem16(width.raw(), height);

        let centered = ys + Fixed::HALF;
        let prestep = centered.ceil_to_grid() - centered;
        let (skip, xerr) = fixed::div_rem16(width.mul(prestep).raw(), height);

        edge.x += i32::from(skip);
        edge.dx = i32::from(dx);
        edge.dxerr = i32::from(dxerr);
        edge.xerr = i32::from(xerr);
        edge.nxerr = i32::from(height);
        edge
    }

    /// Edge setup of the top-left fill rule.
    ///
    /// Rows are the scanlines whose centre `yc` satisfies `ys <= yc < ye`.
    /// `x` is the first column whose centre is not left of the edge, i.e.
    /// `ceil(X(yc) - 0.5)`, tracked exactly with a denominator of `16 * H`.
    pub fn new_top_left(ys: Fixed, ye: Fixed, xs: Fixed, xe: Fixed) -> Self {
        let mut edge = EdgeScan {
            height: ye.ceil_center() - ys.ceil_center(),
            width: xe.round() - xs.round(),
            x: xs.ceil_center(),
            ..Default::default()
        };

        let h = i64::from((ye - ys).raw());
        if h <= 0 {
            return edge;
        }

        let w = i64::from((xe - xs).raw());
        let one = i64::from(ONE);
        let half = i64::from(HALF);
        let denom = h * one;

        // Everything below is scaled by 16 * h; adding denom - 1 turns the
        // floor division into a ceiling.
        let yc = i64::from(ys.ceil_center()) * one + half;
        let start = i64::from(xs.raw()) * h + (yc - i64::from(ys.raw())) * w - half * h + denom - 1;

        let (x, xerr) = fixed::div_rem(start, denom);
        let (dx, dxerr) = fixed::div_rem(w * one, denom);

        edge.x = x as i32;
        edge.xerr = xerr as i32;
        edge.dx = dx as i32;
        edge.dxerr = dxerr as i32;
        edge.nxerr = denom as i32;
        edge
    }

    /// Advance to the next scanline.
    #[inline]
    pub fn step(&mut self) {
        self.x += self.dx;
        self.xerr += self.dxerr;

        if self.xerr >= self.nxerr {
            self.xerr -= self.nxerr;
            self.x += 1;
        }
    }

    /// Slope order of two edges: integer step first, then raw error step.
    pub fn slope_less_than(&self, other: &EdgeScan) -> bool {
        (self.dx, self.dxerr) < (other.dx, other.dxerr)
    }
}
