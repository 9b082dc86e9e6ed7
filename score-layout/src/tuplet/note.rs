use crate::{formatting::Tickable, render::Stave};

use super::TupletId;

/// Index of the note in the voice, which tuplets are laid out for.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
pub struct NoteId(pub usize);

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum StemDirection {
    Up,
    Down,
}

/// Vertical bounds of the stem.
#[derive(Debug, Default, PartialEq, Clone, Copy)]
pub struct StemExtents {
    /// y of the stem tip side
    pub top_y: f64,
    /// y of the notehead side
    pub base_y: f64,
}

/// Note with stem and noteheads, already laid out by the host.
pub trait StemmableNote: Tickable {
    fn stem_x(&self) -> f64;
    fn tie_left_x(&self) -> f64;
    fn tie_right_x(&self) -> f64;
    fn stem_direction(&self) -> StemDirection;
    fn stem_extents(&self) -> StemExtents;
    fn stave(&self) -> Option<&dyn Stave>;
    fn is_beamed(&self) -> bool {
        false
    }
    /// Tuplets, enclosing the note, the outermost first.
    fn tuplet_stack(&self) -> &[TupletId];
    fn tuplet_stack_mut(&mut self) -> &mut Vec<TupletId>;
}
