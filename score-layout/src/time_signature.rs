//! Time signature glyphs for staffs.
//!
//! Time signature has no layout of its own: it is assembled from
//! pre-measured digit glyphs (or a single common-time symbol) and is
//! drawn at x, given by the stave.
use std::str::FromStr;

use crate::{
    error::{LayoutError, LayoutResult},
    render::{glyph::digit_code, CompositeGlyph, FontMetrics, Glyph, RenderContext, Stave},
    settings::{LayoutSettings, TimeSignatureSettings},
};

const COMMON_CODE: &str = "timeSigCommon";
const CUT_COMMON_CODE: &str = "timeSigCutCommon";
const SYMBOL_LINE: f64 = 2.0;

#[derive(Debug, PartialEq, Eq, Clone)]
pub enum TimeSpec {
    /// "C"
    Common,
    /// "C|"
    CutCommon,
    /// digits of numerator and denominator, e.g. "7/8"
    Numeric { top: String, bottom: String },
}
/// # Example
/// ```
/// # use score_layout::time_signature::TimeSpec;
/// assert_eq!("C|".parse::<TimeSpec>().unwrap(), TimeSpec::CutCommon);
/// assert_eq!(
///     "12/8".parse::<TimeSpec>().unwrap(),
///     TimeSpec::Numeric { top: "12".to_string(), bottom: "8".to_string() }
/// );
/// assert!("3/".parse::<TimeSpec>().is_err());
/// ```
impl FromStr for TimeSpec {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "C" => return Ok(Self::Common),
            "C|" => return Ok(Self::CutCommon),
            _ => (),
        }
        let invalid = || LayoutError::UnsupportedFormat(format!("Invalid time spec: {}", s));
        let (top, bottom) = s.split_once('/').ok_or_else(invalid)?;
        let is_number =
            |part: &str| !part.is_empty() && part.chars().all(|c| c.is_ascii_digit());
        if !is_number(top) || !is_number(bottom) {
            return Err(invalid());
        }
        Ok(Self::Numeric {
            top: top.to_string(),
            bottom: bottom.to_string(),
        })
    }
}

#[derive(Debug, PartialEq, Clone)]
enum Glyphs {
    Symbol(Glyph),
    Numeric { top: Vec<Glyph>, bottom: Vec<Glyph> },
}

#[derive(Debug, PartialEq, Clone)]
pub struct TimeSignature {
    spec: TimeSpec,
    glyphs: Glyphs,
    width: f64,
    settings: TimeSignatureSettings,
}
impl TimeSignature {
    pub fn new(spec: &str, font: &dyn FontMetrics) -> LayoutResult<Self> {
        Self::with_settings(spec, font, &LayoutSettings::default())
    }
    pub fn with_settings(
        spec: &str,
        font: &dyn FontMetrics,
        settings: &LayoutSettings,
    ) -> LayoutResult<Self> {
        let settings = settings.time_signature;
        let spec: TimeSpec = spec.parse()?;
        let point = settings.point;
        let glyphs = match &spec {
            TimeSpec::Common => Glyphs::Symbol(Glyph::new(COMMON_CODE, point, font)),
            TimeSpec::CutCommon => Glyphs::Symbol(Glyph::new(CUT_COMMON_CODE, point, font)),
            TimeSpec::Numeric { top, bottom } => {
                let digits = |number: &str| -> Vec<Glyph> {
                    number
                        .bytes()
                        .map(|digit| Glyph::new(digit_code(digit - b'0'), point, font))
                        .collect()
                };
                Glyphs::Numeric {
                    top: digits(top),
                    bottom: digits(bottom),
                }
            }
        };
        let width = match &glyphs {
            Glyphs::Symbol(glyph) => glyph.width(),
            Glyphs::Numeric { top, bottom } => {
                CompositeGlyph::centered(vec![(top.clone(), 0.0), (bottom.clone(), 0.0)]).width
            }
        };
        Ok(Self {
            spec,
            glyphs,
            width,
            settings,
        })
    }

    pub fn spec(&self) -> &TimeSpec {
        &self.spec
    }
    pub fn width(&self) -> f64 {
        self.width
    }
    /// Space after the time signature on the stave.
    pub fn padding(&self) -> f64 {
        self.settings.padding
    }

    pub fn draw(&self, context: &mut dyn RenderContext, stave: &dyn Stave, x: f64) {
        match &self.glyphs {
            Glyphs::Symbol(glyph) => glyph.render(context, x, stave.y_for_line(SYMBOL_LINE)),
            Glyphs::Numeric { top, bottom } => {
                let top_y = stave.y_for_line(self.settings.top_line) + 1.0;
                let bottom_y = stave.y_for_line(self.settings.bottom_line) + 1.0;
                let glyph = Glyph::Composite(CompositeGlyph::centered(vec![
                    (top.clone(), 0.0),
                    (bottom.clone(), bottom_y - top_y),
                ]));
                glyph.render(context, x, top_y);
            }
        }
    }
}
