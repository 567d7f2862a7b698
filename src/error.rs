//! Error type shared by every oscillator and the generation driver.

use crate::Real;
use std::fmt;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while configuring or running an oscillator.
#[derive(Debug)]
pub enum Error {
    /// A trapezoid was built with all four bin counts set to zero
    EmptyCycle,
    /// A trapezoid has a falling edge but no rising edge to derive its slope from
    FlatRamp {
        /// Bin count of the falling edge
        fall: u32,
    },
    /// A stream or writer setting is out of range
    InvalidConfig(String),
    /// A phase landed outside every known trapezoid sector
    SectorOutOfRange {
        /// Index produced by the breakpoint search
        index: usize,
        /// Wrapped phase that was classified
        phase: Real,
    },
    /// The WAV container could not be written
    #[cfg(feature = "wav")]
    Wav(hound::Error),
}

impl Error {
    /// Returns `true` for broken internal invariants, as opposed to bad input.
    ///
    /// # Examples
    ///
    /// ```
    /// use phaseshape::Error;
    ///
    /// assert!(!Error::EmptyCycle.is_invariant_violation());
    /// ```
    pub fn is_invariant_violation(&self) -> bool {
        matches!(self, Error::SectorOutOfRange { .. })
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::EmptyCycle => write!(f, "trapezoid cycle has zero bins"),
            Error::FlatRamp { fall } => write!(
                f,
                "trapezoid has a {} bin falling edge but no rising edge",
                fall
            ),
            Error::InvalidConfig(s) => write!(f, "invalid configuration: {}", s),
            Error::SectorOutOfRange { index, phase } => write!(
                f,
                "phase {} resolved to sector {} which has no waveform policy",
                phase, index
            ),
            #[cfg(feature = "wav")]
            Error::Wav(e) => write!(f, "wav output failed: {}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            #[cfg(feature = "wav")]
            Error::Wav(e) => Some(e),
            _ => None,
        }
    }
}

#[cfg(feature = "wav")]
impl From<hound::Error> for Error {
    fn from(e: hound::Error) -> Self {
        Error::Wav(e)
    }
}
