//! Values, from which layout is computed.
//!
//! Everything musical-time related is expressed as exact fractions,
//! pixel measures are plain `f64`.

pub mod duration;

pub use duration::{Duration, TickPosition};
