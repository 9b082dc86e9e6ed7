//! Horizontal layout of music notation.
//!
//! Decides how much space every moment of the score takes on the staff
//! ([formatting]) and where tuplet brackets and numbers go ([tuplet]).
//! Glyph outlines, font metrics and staff lines come from the host
//! through [render] capabilities.

pub mod error;
pub mod formatting;
pub mod primitives;
pub mod render;
pub mod settings;
pub mod time_signature;
pub mod tuplet;

pub use error::{LayoutError, LayoutResult};
