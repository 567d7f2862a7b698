//! Sine wave oscillator implementation.

use super::Oscillator;
use crate::core::{Real, Tone, wrap_phase};
use crate::error::Result;
use rust_decimal::MathematicalOps;

/// A sine wave shaper.
///
/// Emits `sin(theta)` for whatever phase it is handed. It never advances
/// the phase itself, so several shapers can share one accumulator.
///
/// # Examples
///
/// ```
/// use phaseshape::{Oscillator, Real, Sine, Tone};
///
/// let tone = Tone::new(Real::HALF_PI, Real::ZERO, Real::ZERO, Real::ZERO);
/// let (tone, sample) = Sine.next(tone).unwrap();
/// assert!((sample - Real::ONE).abs() < Real::new(1, 20));
/// assert_eq!(tone.val, sample);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sine;

impl Sine {
    /// `sin(phase)` in decimal arithmetic.
    pub fn sample(phase: Real) -> Real {
        // Reducing first keeps the series short however long the run gets
        wrap_phase(phase).sin()
    }
}

impl Oscillator for Sine {
    fn value(&self, tone: &Tone) -> Result<Real> {
        Ok(Self::sample(tone.theta))
    }

    fn shape_at(&self, phase: Real) -> Result<Real> {
        Ok(Self::sample(phase))
    }
}
