//! Horizontal layout of simultaneous events.
//!
//! Formatter builds one [TickContext] per distinct tick position,
//! fills it with tickables of every voice, measures the slots and
//! only then reads their reported widths for justification.

pub mod tick_context;
pub mod tick_contexts;
pub mod tickable;

pub use tick_context::{ExtraPixels, TickContext, TickContextMetrics};
pub use tick_contexts::{TickContextMut, TickContexts};
pub use tickable::{ModifierShift, TickContextId, Tickable, TickableMetrics};
