//! Per-sample phase state.

use super::{Real, wrap_phase};

/// The state threaded from one oscillator call to the next.
///
/// `Tone` is a plain `Copy` value: every oscillator step returns a successor
/// instead of mutating the caller's copy.
///
/// # Examples
///
/// ```
/// use phaseshape::{Real, Tone};
///
/// let tone = Tone::new(Real::ZERO, Real::new(5, 1), Real::TWO, Real::ZERO);
/// let next = tone.advanced();
/// assert_eq!(next.theta, Real::ONE);
/// assert_eq!(tone.theta, Real::ZERO);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tone {
    /// Accumulated phase in radians (never wrapped in place)
    pub theta: Real,
    /// Time between samples in seconds
    pub delta: Real,
    /// Angular velocity in radians per second
    pub omega: Real,
    /// Last computed sample value
    pub val: Real,
}

impl Tone {
    /// Creates a tone from its four fields.
    pub fn new(theta: Real, delta: Real, omega: Real, val: Real) -> Self {
        Self {
            theta,
            delta,
            omega,
            val,
        }
    }

    /// Returns a copy with `theta` replaced.
    pub fn with_theta(self, theta: Real) -> Self {
        Self { theta, ..self }
    }

    /// Returns a copy with `delta` replaced.
    pub fn with_delta(self, delta: Real) -> Self {
        Self { delta, ..self }
    }

    /// Returns a copy with `omega` replaced.
    pub fn with_omega(self, omega: Real) -> Self {
        Self { omega, ..self }
    }

    /// Returns a copy with `val` replaced.
    pub fn with_val(self, val: Real) -> Self {
        Self { val, ..self }
    }

    /// Phase advance per sample, `delta * omega`.
    pub fn step(&self) -> Real {
        self.delta * self.omega
    }

    /// Returns a copy with the phase advanced by one step.
    pub fn advanced(self) -> Self {
        self.with_theta(self.theta + self.step())
    }

    /// Phase one step before this one.
    pub fn previous_phase(&self) -> Real {
        self.theta - self.step()
    }

    /// Phase wrapped into `[0, 2π)`.
    pub fn wrapped_phase(&self) -> Real {
        wrap_phase(self.theta)
    }
}
