//! Capability of musical events, which take time and space on the staff.
use crate::primitives::Duration;

/// Identity of [TickContext](super::TickContext), which tickable belongs to.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
pub struct TickContextId(pub usize);

/// Widths of the tickable, known after its measurement.
#[derive(Debug, Default, PartialEq, Clone, Copy)]
pub struct TickableMetrics {
    pub note_width: f64,
    pub extra_left_width: f64,
    pub extra_right_width: f64,
    /// space of left modifiers (accidentals, etc.)
    pub modifier_left_width: f64,
    pub modifier_right_width: f64,
}

/// State of modifier context, that coordinates modifiers of the tickable.
#[derive(Debug, Default, PartialEq, Clone, Copy)]
pub struct ModifierShift {
    pub left: f64,
    pub right: f64,
}

/// Note, chord, rest, lyric or anything else, that can be put at
/// tick position.
pub trait Tickable {
    fn duration(&self) -> Duration;
    /// Event does not take part in time-based justification.
    fn should_ignore_ticks(&self) -> bool {
        false
    }
    fn is_center_aligned(&self) -> bool {
        false
    }
    /// Compute own metrics before they are read.
    fn measure(&mut self) {}
    fn metrics(&self) -> TickableMetrics;
    fn modifier_shift(&self) -> Option<ModifierShift> {
        None
    }
    fn assign_tick_context(&mut self, id: TickContextId);
}

impl<T: Tickable + ?Sized> Tickable for Box<T> {
    fn duration(&self) -> Duration {
        (**self).duration()
    }
    fn should_ignore_ticks(&self) -> bool {
        (**self).should_ignore_ticks()
    }
    fn is_center_aligned(&self) -> bool {
        (**self).is_center_aligned()
    }
    fn measure(&mut self) {
        (**self).measure()
    }
    fn metrics(&self) -> TickableMetrics {
        (**self).metrics()
    }
    fn modifier_shift(&self) -> Option<ModifierShift> {
        (**self).modifier_shift()
    }
    fn assign_tick_context(&mut self, id: TickContextId) {
        (**self).assign_tick_context(id)
    }
}

impl<T: Tickable + ?Sized> Tickable for &mut T {
    fn duration(&self) -> Duration {
        (**self).duration()
    }
    fn should_ignore_ticks(&self) -> bool {
        (**self).should_ignore_ticks()
    }
    fn is_center_aligned(&self) -> bool {
        (**self).is_center_aligned()
    }
    fn measure(&mut self) {
        (**self).measure()
    }
    fn metrics(&self) -> TickableMetrics {
        (**self).metrics()
    }
    fn modifier_shift(&self) -> Option<ModifierShift> {
        (**self).modifier_shift()
    }
    fn assign_tick_context(&mut self, id: TickContextId) {
        (**self).assign_tick_context(id)
    }
}
