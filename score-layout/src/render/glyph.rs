//! Pre-measured glyphs.
//!
//! Glyph is either a single outline from the font, or a composite of
//! rows of other glyphs with fixed metrics. Both are rendered by the
//! same [Glyph::render].
use super::{FontMetrics, RenderContext};

#[derive(Debug, PartialEq, Clone)]
pub enum Glyph {
    Single {
        code: String,
        point: f64,
        width: f64,
    },
    Composite(CompositeGlyph),
}
impl Glyph {
    pub fn new(code: impl Into<String>, point: f64, font: &dyn FontMetrics) -> Self {
        let code = code.into();
        let width = font.glyph_width(&code, point);
        Self::Single { code, point, width }
    }

    /// Glyph of a single decimal digit.
    pub fn digit(digit: u8, point: f64, font: &dyn FontMetrics) -> Self {
        Self::new(digit_code(digit), point, font)
    }

    pub fn width(&self) -> f64 {
        match self {
            Self::Single { width, .. } => *width,
            Self::Composite(composite) => composite.width,
        }
    }

    pub fn code(&self) -> Option<&str> {
        match self {
            Self::Single { code, .. } => Some(code),
            Self::Composite(_) => None,
        }
    }

    pub fn render(&self, context: &mut dyn RenderContext, x: f64, y: f64) {
        match self {
            Self::Single { code, point, .. } => {
                context.draw_glyph(code, *point, x, y)
            }
            Self::Composite(composite) => {
                for row in composite.rows.iter() {
                    let mut start_x = x + row.start_x;
                    for glyph in row.glyphs.iter() {
                        glyph.render(context, start_x, y + row.y_shift);
                        start_x += glyph.width();
                    }
                }
            }
        }
    }
}

#[derive(Debug, PartialEq, Clone)]
pub struct CompositeGlyph {
    pub rows: Vec<GlyphRow>,
    pub width: f64,
}
impl CompositeGlyph {
    /// Stack rows, each one centered on the widest.
    ///
    /// `rows` are pairs of glyphs and vertical shift of the row.
    pub fn centered(rows: Vec<(Vec<Glyph>, f64)>) -> Self {
        let widths: Vec<f64> = rows
            .iter()
            .map(|(glyphs, _)| glyphs.iter().map(Glyph::width).sum())
            .collect();
        let width = widths.iter().cloned().fold(0.0, f64::max);
        let rows = rows
            .into_iter()
            .zip(widths)
            .map(|((glyphs, y_shift), row_width)| GlyphRow {
                glyphs,
                start_x: (width - row_width) / 2.0,
                y_shift,
            })
            .collect();
        Self { rows, width }
    }
}

#[derive(Debug, PartialEq, Clone)]
pub struct GlyphRow {
    pub glyphs: Vec<Glyph>,
    pub start_x: f64,
    pub y_shift: f64,
}

pub fn digit_code(digit: u8) -> String {
    format!("timeSig{}", digit % 10)
}

/// Decompose number into digit glyphs, the least significant first.
pub fn digit_glyphs(mut number: u32, point: f64, font: &dyn FontMetrics) -> Vec<Glyph> {
    let mut glyphs = Vec::new();
    while number >= 1 {
        glyphs.push(Glyph::digit((number % 10) as u8, point, font));
        number /= 10;
    }
    glyphs
}
