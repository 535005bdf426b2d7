//! Solid triangle fill

use log::debug;

use super::classify::{sort_by_y, FxPoint, TriangleEdges};
use super::span::fill_segment;
use crate::surface::Canvas;
use crate::{Error, FillRule, RasterConfig, Result, Vertex};

/// Triangle filler configured with a fill rule.
///
/// Edge state lives on the stack of each call, so one rasterizer can be
/// shared freely between threads drawing into different canvases.
#[derive(Debug, Clone, Default)]
pub struct Rasterizer {
    config: RasterConfig,
}

impl Rasterizer {
    pub fn new(config: RasterConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RasterConfig {
        &self.config
    }

    pub fn fill_rule(&self) -> FillRule {
        self.config.fill_rule
    }

    /// Fill the triangle `v1 v2 v3` (any winding, any order) with the
    /// canvas foreground colour.
    ///
    /// Never fails. Zero-area input produces an empty fill or a thin line.
    /// Coordinates must be finite and within `fixed::MAX_COORD`; anything
    /// else trips debug assertions and wraps in release builds. Use
    /// [`Rasterizer::try_draw_triangle`] to have them checked.
    pub fn draw_triangle<C: Canvas + ?Sized>(&self, canvas: &mut C, v1: Vertex, v2: Vertex, v3: Vertex) {
        let rule = self.config.fill_rule;
        let [p1, p2, p3] = sort_by_y([FxPoint::from(v1), FxPoint::from(v2), FxPoint::from(v3)]);

        let TriangleEdges {
            mut top,
            mut long,
            mut bottom,
            long_on_right,
        } = TriangleEdges::new([p1, p2, p3], rule);

        debug!(
            "triangle {:?}: ({}, {}) ({}, {}) ({}, {}) long edge on the {}",
            rule,
            p1.x.raw(),
            p1.y.raw(),
            p2.x.raw(),
            p2.y.raw(),
            p3.x.raw(),
            p3.y.raw(),
            if long_on_right { "right" } else { "left" }
        );

        let first_row = rule.first_row(p1.y);
        let middle_row = rule.first_row(p2.y);
        let (top_rows, bottom_rows) = (top.height, bottom.height);

        if long_on_right {
            fill_segment(canvas, &mut top, &mut long, first_row, first_row + top_rows, rule);
            fill_segment(canvas, &mut bottom, &mut long, middle_row, middle_row + bottom_rows, rule);
        } else {
            fill_segment(canvas, &mut long, &mut top, first_row, first_row + top_rows, rule);
            fill_segment(canvas, &mut long, &mut bottom, middle_row, middle_row + bottom_rows, rule);
        }
    }

    /// [`Rasterizer::draw_triangle`] after checking every vertex is finite
    /// and within `max_coord` of the origin.
    pub fn try_draw_triangle<C: Canvas + ?Sized>(
        &self,
        canvas: &mut C,
        v1: Vertex,
        v2: Vertex,
        v3: Vertex,
    ) -> Result<()> {
        for v in [v1, v2, v3] {
            self.check_vertex(v)?;
        }
        self.draw_triangle(canvas, v1, v2, v3);
        Ok(())
    }

    fn check_vertex(&self, v: Vertex) -> Result<()> {
        let limit = self.config.max_coord;
        if !v.x.is_finite() || !v.y.is_finite() {
            return Err(Error::VertexOutOfRange(format!("({}, {}) is not finite", v.x, v.y)));
        }
        if v.x.abs() > limit || v.y.abs() > limit {
            return Err(Error::VertexOutOfRange(format!(
                "({}, {}) exceeds +/-{}",
                v.x, v.y, limit
            )));
        }
        Ok(())
    }
}

/// Fill a triangle with the reference rule.
pub fn draw_triangle<C: Canvas + ?Sized>(canvas: &mut C, v1: Vertex, v2: Vertex, v3: Vertex) {
    Rasterizer::default().draw_triangle(canvas, v1, v2, v3);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::PixBuf;

    fn v(x: f32, y: f32) -> Vertex {
        Vertex::new(x, y)
    }

    #[test]
    fn right_triangle_reference_fill() {
        let mut buf = PixBuf::new(10, 10).unwrap();
        draw_triangle(&mut buf, v(1.0, 1.0), v(8.0, 1.0), v(1.0, 8.0));

        let expected = "\
..........
.1111111..
.111111...
.11111....
.1111.....
.111......
.11.......
.1........
..........
..........
";
        assert_eq!(buf.to_ascii(), expected);
        assert_eq!(buf.count(1), 28);
    }

    #[test]
    fn right_triangle_top_left_fill() {
        let mut buf = PixBuf::new(10, 10).unwrap();
        let r = Rasterizer::new(RasterConfig {
            fill_rule: FillRule::TopLeft,
            ..Default::default()
        });
        r.draw_triangle(&mut buf, v(1.0, 1.0), v(8.0, 1.0), v(1.0, 8.0));

        // centres on the hypotenuse belong to the right edge and stay empty
        assert_eq!(buf.row(1), &[0, 1, 1, 1, 1, 1, 1, 0, 0, 0]);
        assert_eq!(buf.row(6), &[0, 1, 0, 0, 0, 0, 0, 0, 0, 0]);
        assert_eq!(buf.count(1), 21);
    }

    #[test]
    fn general_triangle_fills_both_segments() {
        // middle vertex on the left: the long edge bounds the right side of
        // both the upper and the lower segment
        let mut buf = PixBuf::new(10, 10).unwrap();
        draw_triangle(&mut buf, v(5.0, 0.5), v(0.5, 4.5), v(8.5, 9.5));

        let expected = "\
..........
.....1....
...111....
..1111....
.111111...
.111111...
..11111...
....1111..
.....111..
.......11.
";
        assert_eq!(buf.to_ascii(), expected);

        let mut permuted = PixBuf::new(10, 10).unwrap();
        draw_triangle(&mut permuted, v(8.5, 9.5), v(5.0, 0.5), v(0.5, 4.5));
        assert_eq!(permuted, buf);
    }

    #[test]
    fn uses_canvas_foreground_colour() {
        let mut buf = PixBuf::new(8, 8).unwrap();
        buf.set_fg_color(5);
        draw_triangle(&mut buf, v(0.0, 0.0), v(7.0, 0.0), v(0.0, 7.0));
        assert!(buf.count(5) > 0);
        assert_eq!(buf.count(5) + buf.count(0), 64);
    }

    #[test]
    fn try_draw_rejects_bad_vertices() {
        let r = Rasterizer::default();
        let mut buf = PixBuf::new(4, 4).unwrap();

        let err = r.try_draw_triangle(&mut buf, v(f32::NAN, 0.0), v(1.0, 1.0), v(2.0, 0.0));
        assert!(matches!(err, Err(Error::VertexOutOfRange(_))));

        let err = r.try_draw_triangle(&mut buf, v(0.0, 0.0), v(5000.0, 1.0), v(2.0, 0.0));
        assert!(matches!(err, Err(Error::VertexOutOfRange(_))));
        assert_eq!(buf.count(0), 16);

        r.try_draw_triangle(&mut buf, v(0.0, 0.0), v(4.0, 0.0), v(0.0, 4.0)).unwrap();
        assert!(buf.count(1) > 0);
    }

    #[test]
    fn rasterizer_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Rasterizer>();
    }
}
