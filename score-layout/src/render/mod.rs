//! Capabilities, which layout consumes from the drawing host.
//!
//! Nothing here rasterizes: glyph outlines, font metrics and staff
//! geometry are provided by the host through these traits.

pub mod glyph;

pub use glyph::{digit_glyphs, CompositeGlyph, Glyph, GlyphRow};

/// Drawing surface. Mirrors the subset of canvas API, used by layout.
pub trait RenderContext {
    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64);
    fn begin_path(&mut self);
    fn close_path(&mut self);
    fn arc(
        &mut self,
        x: f64,
        y: f64,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        counterclockwise: bool,
    );
    fn fill(&mut self);
    /// Render outline of the glyph, found by its code.
    fn draw_glyph(&mut self, code: &str, point: f64, x: f64, y: f64);
}

pub trait Stave {
    /// Vertical pixel position of the staff line (0 is the top one).
    fn y_for_line(&self, line: f64) -> f64;
}

pub trait FontMetrics {
    fn glyph_width(&self, code: &str, point: f64) -> f64;
}
