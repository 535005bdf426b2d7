//! Scanline span output

use log::trace;

use super::edge::EdgeScan;
use crate::surface::Canvas;
use crate::FillRule;

/// Fill the scanlines `y_start..y_end` between two edges.
///
/// Each visible row gets one run clamped to the canvas. Both edges step on
/// every row, visible or not, so vertical clipping never desynchronizes them.
pub fn fill_segment<C: Canvas + ?Sized>(
    canvas: &mut C,
    left: &mut EdgeScan,
    right: &mut EdgeScan,
    y_start: i32,
    y_end: i32,
    rule: FillRule,
) {
    let width = canvas.width() as i32;
    let height = canvas.height() as i32;
    let color = canvas.fg_color();
    let pixels = canvas.pixels_mut();

    for y in y_start..y_end {
        if y >= 0 && y < height && left.x < width && right.x >= 0 {
            let xs = left.x.max(0);
            let xe = match rule {
                // inclusive end; an inverted run still paints its first pixel
                FillRule::Reference => right.x.min(width - 1).max(xs) + 1,
                FillRule::TopLeft => right.x.min(width),
            };

            if xs < xe {
                trace!("span y={} x={}..{}", y, xs, xe);
                let row = y as usize * width as usize;
                pixels[row + xs as usize..row + xe as usize].fill(color);
            }
        }

        left.step();
        right.step();
    }
}
