//! Runtime selection between the built-in shapes.

use super::{Oscillator, Sine, Trapezoid};
use crate::core::{Real, Tone};
use crate::error::Result;

/// Either built-in oscillator, chosen at runtime.
///
/// # Examples
///
/// ```
/// use phaseshape::{Oscillator, Real, Tone, Trapezoid, Waveform};
///
/// let shapes = [Waveform::Sine, Waveform::from(Trapezoid::new(2, 2, 2, 2).unwrap())];
/// let tone = Tone::new(Real::ZERO, Real::ZERO, Real::ZERO, Real::ZERO);
/// for shape in &shapes {
///     let (_, sample) = shape.next(tone).unwrap();
///     assert!(sample.abs() <= Real::ONE);
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Waveform {
    /// Pure sine
    Sine,
    /// Trapezoid with the given breakpoints
    Trapezoid(Trapezoid),
}

impl From<Sine> for Waveform {
    fn from(_: Sine) -> Self {
        Waveform::Sine
    }
}

impl From<Trapezoid> for Waveform {
    fn from(trap: Trapezoid) -> Self {
        Waveform::Trapezoid(trap)
    }
}

impl Oscillator for Waveform {
    fn value(&self, tone: &Tone) -> Result<Real> {
        match self {
            Waveform::Sine => Sine.value(tone),
            Waveform::Trapezoid(trap) => trap.value(tone),
        }
    }

    fn shape_at(&self, phase: Real) -> Result<Real> {
        match self {
            Waveform::Sine => Sine.shape_at(phase),
            Waveform::Trapezoid(trap) => trap.shape_at(phase),
        }
    }
}

impl<O: Oscillator + ?Sized> Oscillator for &O {
    fn value(&self, tone: &Tone) -> Result<Real> {
        (**self).value(tone)
    }

    fn shape_at(&self, phase: Real) -> Result<Real> {
        (**self).shape_at(phase)
    }
}

impl<O: Oscillator + ?Sized> Oscillator for Box<O> {
    fn value(&self, tone: &Tone) -> Result<Real> {
        (**self).value(tone)
    }

    fn shape_at(&self, phase: Real) -> Result<Real> {
        (**self).shape_at(phase)
    }
}
