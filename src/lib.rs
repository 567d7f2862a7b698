//! Phaseshape - phase-accumulating oscillators in decimal arithmetic
//!
//! This library turns a running phase into one sample per call. Two shapers
//! are provided, a sine and a trapezoid with configurable edge widths, plus a
//! driver that threads the phase state from sample to sample.

pub mod core;
pub mod error;
pub mod oscillators;
#[cfg(feature = "wav")]
pub mod wav;

// Re-export commonly used types at the crate root
pub use crate::core::{Real, StreamConfig, TWO_PI, Tone, ToneStream, angular_velocity, wrap_phase};
pub use error::{Error, Result};
pub use oscillators::{Oscillator, PHASE_EPSILON, Sector, Sine, Trapezoid, Waveform};
#[cfg(feature = "wav")]
pub use wav::{WavSettings, write_wav, write_wav_to};
