//! Sample-by-sample generation driver.

use super::{Real, TWO_PI, Tone};
use crate::error::{Error, Result};
use crate::oscillators::Oscillator;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};

/// Converts a frequency in Hz into angular velocity in radians per second.
///
/// # Examples
///
/// ```
/// use phaseshape::{Real, TWO_PI, angular_velocity};
///
/// assert_eq!(angular_velocity(1.0).unwrap(), TWO_PI);
/// assert!(angular_velocity(f64::NAN).is_err());
/// ```
pub fn angular_velocity(frequency: f64) -> Result<Real> {
    let out_of_range = || Error::InvalidConfig(format!("frequency {} is out of range", frequency));
    let hz = Real::from_f64(frequency).ok_or_else(out_of_range)?;
    TWO_PI.checked_mul(hz).ok_or_else(out_of_range)
}

/// Sample rate and frequency for one generation run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StreamConfig {
    /// Samples per second
    pub sample_rate: u32,
    /// Tone frequency in Hz
    pub frequency: f64,
}

impl StreamConfig {
    /// Creates a new configuration.
    ///
    /// # Arguments
    ///
    /// * `sample_rate` - Sample rate in Hz (e.g., 44100 for CD quality)
    /// * `frequency` - Frequency of the generated tone in Hz
    pub fn new(sample_rate: u32, frequency: f64) -> Self {
        Self {
            sample_rate,
            frequency,
        }
    }

    /// Time between samples, `1 / sample_rate`.
    pub fn delta(&self) -> Result<Real> {
        if self.sample_rate == 0 {
            return Err(Error::InvalidConfig("sample rate is zero".into()));
        }
        Ok(Real::ONE / Real::from(self.sample_rate))
    }

    /// Angular velocity of the configured frequency.
    pub fn omega(&self) -> Result<Real> {
        angular_velocity(self.frequency)
    }

    /// A tone at phase zero with this configuration's step.
    ///
    /// The value is left at zero; oscillators prime it before the first sample.
    pub fn tone(&self) -> Result<Tone> {
        Ok(Tone::new(Real::ZERO, self.delta()?, self.omega()?, Real::ZERO))
    }
}

/// Drives an oscillator one sample at a time.
///
/// The stream owns the current [`Tone`]. Each [`step`](ToneStream::step)
/// evaluates the oscillator at the current phase, keeps the result as the
/// tone's value, then advances the phase by `delta * omega`.
///
/// # Examples
///
/// ```
/// use phaseshape::{Sine, StreamConfig, ToneStream};
///
/// let config = StreamConfig::new(44100, 440.0);
/// let mut stream = ToneStream::from_config(Sine, config).unwrap();
/// let first = stream.step().unwrap();
/// assert!(first.is_zero());
/// ```
#[derive(Debug, Clone)]
pub struct ToneStream<O> {
    oscillator: O,
    tone: Tone,
    initial: Tone,
}

impl<O: Oscillator> ToneStream<O> {
    /// Creates a stream starting from an explicit initial state.
    ///
    /// The tone is used exactly as given, including its `val`.
    pub fn new(oscillator: O, initial: Tone) -> Self {
        Self {
            oscillator,
            tone: initial,
            initial,
        }
    }

    /// Creates a stream at phase zero, primed by the oscillator.
    pub fn from_config(oscillator: O, config: StreamConfig) -> Result<Self> {
        let initial = oscillator.prime(config.tone()?)?;
        Ok(Self::new(oscillator, initial))
    }

    /// Produces the sample at the current phase and advances by one step.
    pub fn step(&mut self) -> Result<Real> {
        let (tone, sample) = self.oscillator.next(self.tone)?;
        self.tone = tone.advanced();
        Ok(sample)
    }

    /// Collects the next `count` samples.
    pub fn take_samples(&mut self, count: usize) -> Result<Vec<Real>> {
        (0..count).map(|_| self.step()).collect()
    }

    /// Fills a buffer with samples converted to `f64`.
    pub fn process(&mut self, buffer: &mut [f64]) -> Result<()> {
        for sample in buffer.iter_mut() {
            *sample = self.step()?.to_f64().unwrap_or_default();
        }
        Ok(())
    }

    /// Changes the frequency for the following samples, keeping phase.
    pub fn set_frequency(&mut self, frequency: f64) -> Result<()> {
        self.tone = self.tone.with_omega(angular_velocity(frequency)?);
        Ok(())
    }

    /// Current frequency in Hz.
    pub fn frequency(&self) -> f64 {
        (self.tone.omega / TWO_PI).to_f64().unwrap_or_default()
    }

    /// Sample rate implied by the tone's step, if it is a positive whole rate.
    pub fn sample_rate(&self) -> Option<u32> {
        if self.tone.delta <= Real::ZERO {
            return None;
        }
        (Real::ONE / self.tone.delta).round().to_u32()
    }

    /// State that the next call to `step` will evaluate.
    pub fn tone(&self) -> Tone {
        self.tone
    }

    /// The oscillator being driven.
    pub fn oscillator(&self) -> &O {
        &self.oscillator
    }

    /// Returns to the initial state.
    pub fn reset(&mut self) {
        self.tone = self.initial;
    }
}

impl<O: Oscillator> Iterator for ToneStream<O> {
    type Item = Result<Real>;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.step())
    }
}
