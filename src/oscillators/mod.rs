//! Oscillator implementations.
//!
//! This module contains the core `Oscillator` trait and the waveform shapers
//! built on it.

mod sine;
mod traits;
mod trapezoid;
mod waveform;

pub use sine::Sine;
pub use traits::Oscillator;
pub use trapezoid::{PHASE_EPSILON, Sector, Trapezoid};
pub use waveform::Waveform;
