//! Core trait definitions for oscillators.

use crate::core::{Real, Tone};
use crate::error::Result;

/// Common interface for all waveform shapers.
///
/// An oscillator holds only immutable configuration. Everything that changes
/// from sample to sample lives in the [`Tone`] passed in, so one oscillator
/// can drive any number of independent tones.
pub trait Oscillator {
    /// Computes the sample for `tone.theta`.
    ///
    /// `tone.val` is the previous sample; shapes that ramp incrementally
    /// build on it.
    fn value(&self, tone: &Tone) -> Result<Real>;

    /// Ideal waveform value at a phase, computed from the phase alone.
    fn shape_at(&self, phase: Real) -> Result<Real>;

    /// Evaluates one sample and returns the tone carrying it.
    ///
    /// The phase is not advanced; that is the caller's job.
    fn next(&self, tone: Tone) -> Result<(Tone, Real)> {
        let sample = self.value(&tone)?;
        Ok((tone.with_val(sample), sample))
    }

    /// Seeds `tone.val` with the value one step before `tone.theta`.
    ///
    /// Without this an incremental ramp would start from whatever value the
    /// caller left in the tone and run out of phase with the cycle.
    fn prime(&self, tone: Tone) -> Result<Tone> {
        Ok(tone.with_val(self.shape_at(tone.previous_phase())?))
    }
}
