//! Core phase types and the generation driver.
//!
//! This module provides the fundamental abstractions used throughout the
//! library, including:
//! - `Real`, the decimal number type every phase and sample is computed in
//! - `Tone`, the per-sample state threaded through oscillator calls
//! - `ToneStream`, which owns a tone and advances it one sample at a time
//! - `StreamConfig` for sample rate and frequency

mod stream;
mod tone;

pub use stream::{StreamConfig, ToneStream, angular_velocity};
pub use tone::Tone;

/// Real number type for phases, steps and sample values.
///
/// A 96-bit decimal keeps long phase accumulations free of the binary
/// floating point drift that would otherwise show up against a from-scratch
/// reference after a few thousand samples.
pub type Real = rust_decimal::Decimal;

/// One full cycle in radians.
pub const TWO_PI: Real = Real::TWO_PI;

/// Wraps a phase into `[0, 2π)`.
///
/// Uses true modulo, so negative phases wrap from the top of the cycle rather
/// than keeping their sign.
///
/// # Examples
///
/// ```
/// use phaseshape::{Real, TWO_PI, wrap_phase};
///
/// assert_eq!(wrap_phase(TWO_PI), Real::ZERO);
/// assert_eq!(wrap_phase(-Real::ONE), TWO_PI - Real::ONE);
/// ```
pub fn wrap_phase(theta: Real) -> Real {
    let rem = theta % TWO_PI;
    let wrapped = if rem < Real::ZERO { rem + TWO_PI } else { rem };
    // A tiny negative remainder can round up to exactly 2π
    if wrapped >= TWO_PI {
        Real::ZERO
    } else {
        wrapped
    }
}
