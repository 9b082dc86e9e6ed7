//! Tuplets: groups of notes of one voice, rhythmically reinterpreted as
//! `num_notes` notes in the space of `notes_occupied`.
//!
//! ```text
//! ┌─── 3 ───┐    ┌─── 7:8 ───┐    └─── 3 ───┘
//! ```
//!
//! Tuplets live in [TupletArena], notes keep only [TupletId] of every
//! tuplet they are part of. So nested tuplets never alias notes, and
//! notes never own tuplets.

pub mod arena;
pub mod note;

use std::str::FromStr;

use crate::{
    error::{LayoutError, LayoutResult},
    render::Glyph,
};

pub use arena::{TupletArena, TupletGeometry};
pub use note::{NoteId, StemDirection, StemExtents, StemmableNote};

/// Space of colon between numerator and denominator, in points.
pub(crate) const COLON_WIDTH: f64 = 0.32;

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
pub struct TupletId(pub(crate) usize);

/// Side of the notes, where tuplet is drawn.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum Location {
    #[default]
    Above,
    Below,
}
impl Location {
    /// 1 above, -1 below.
    pub fn sign(&self) -> f64 {
        match self {
            Self::Above => 1.0,
            Self::Below => -1.0,
        }
    }
}
impl TryFrom<i32> for Location {
    type Error = LayoutError;

    /// 1 is above, -1 is below, 0 falls back to above.
    fn try_from(value: i32) -> LayoutResult<Self> {
        match value {
            0 | 1 => Ok(Self::Above),
            -1 => Ok(Self::Below),
            x => Err(LayoutError::InvalidArgument(format!(
                "Invalid tuplet location: {}",
                x
            ))),
        }
    }
}
impl FromStr for Location {
    type Err = LayoutError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "above" | "top" => Ok(Self::Above),
            "below" | "bottom" => Ok(Self::Below),
            x => Err(LayoutError::InvalidArgument(format!(
                "Invalid tuplet location: {}",
                x
            ))),
        }
    }
}

/// Everything is optional: defaults are resolved from the notes.
#[derive(Debug, PartialEq, Clone, Copy, Default)]
pub struct TupletOptions {
    /// fit this many notes into...
    /// defaults to the amount of notes, so they should have equal
    /// durations if omitted.
    pub num_notes: Option<u32>,
    /// ...the space of this many notes. Defaults to 2.
    pub notes_occupied: Option<u32>,
    /// defaults to true, if any note is not beamed.
    pub bracketed: Option<bool>,
    /// show `num_notes:notes_occupied` instead of `num_notes`.
    /// defaults to true, if they differ more than by 1.
    pub ratioed: Option<bool>,
    pub location: Location,
    /// manual vertical offset, e.g. to avoid articulations.
    pub y_offset: f64,
}

#[derive(Debug, PartialEq, Clone)]
pub struct Tuplet {
    notes: Vec<NoteId>,
    num_notes: u32,
    notes_occupied: u32,
    bracketed: bool,
    ratioed: bool,
    location: Location,
    y_offset: f64,
    point: f64,
    num_glyphs: Vec<Glyph>,
    denom_glyphs: Vec<Glyph>,
}
impl Tuplet {
    pub fn notes(&self) -> &[NoteId] {
        &self.notes
    }
    pub fn note_count(&self) -> u32 {
        self.num_notes
    }
    pub fn notes_occupied(&self) -> u32 {
        self.notes_occupied
    }
    pub fn is_bracketed(&self) -> bool {
        self.bracketed
    }
    pub fn set_bracketed(&mut self, bracketed: bool) -> &mut Self {
        self.bracketed = bracketed;
        self
    }
    pub fn is_ratioed(&self) -> bool {
        self.ratioed
    }
    pub fn set_ratioed(&mut self, ratioed: bool) -> &mut Self {
        self.ratioed = ratioed;
        self
    }
    pub fn location(&self) -> Location {
        self.location
    }
    pub fn set_location(&mut self, location: Location) -> &mut Self {
        self.location = location;
        self
    }
    pub fn y_offset(&self) -> f64 {
        self.y_offset
    }
    pub fn set_y_offset(&mut self, y_offset: f64) -> &mut Self {
        self.y_offset = y_offset;
        self
    }
    pub fn point(&self) -> f64 {
        self.point
    }
    /// Digits of numerator, the least significant first.
    pub fn numerator_glyphs(&self) -> &[Glyph] {
        &self.num_glyphs
    }
    /// Digits of denominator, the least significant first.
    pub fn denominator_glyphs(&self) -> &[Glyph] {
        &self.denom_glyphs
    }

    /// Width of the number (or ratio) text.
    pub fn text_width(&self) -> f64 {
        let numerator: f64 = self.num_glyphs.iter().map(Glyph::width).sum();
        if !self.ratioed {
            return numerator;
        }
        let denominator: f64 = self.denom_glyphs.iter().map(Glyph::width).sum();
        numerator + denominator + self.point * COLON_WIDTH
    }
}

#[cfg(test)]
mod tests {
    use crate::error::LayoutError;

    use super::Location;

    #[test]
    fn location() {
        assert_eq!(Location::try_from(1), Ok(Location::Above));
        assert_eq!(Location::try_from(0), Ok(Location::Above));
        assert_eq!(Location::try_from(-1), Ok(Location::Below));
        assert!(matches!(
            Location::try_from(2),
            Err(LayoutError::InvalidArgument(_))
        ));
        assert_eq!("bottom".parse::<Location>(), Ok(Location::Below));
        assert!("left".parse::<Location>().is_err());
        assert_eq!(Location::Below.sign(), -1.0);
    }
}
