//! Trapezoid wave oscillator implementation.
//!
//! ```text
//!  1      ______
//!        /      \
//!  0 ___/        \        ___
//!                 \______/
//! -1
//!    |RH|  High  |F|  Low |RT|
//! ```
//!
//! One cycle is split into bins: a rising edge, a flat high, a falling edge
//! and a flat low. The rising edge straddles phase zero, so its first half
//! opens the cycle and its second half closes it.

use super::Oscillator;
use crate::core::{Real, TWO_PI, Tone, wrap_phase};
use crate::error::{Error, Result};

/// Tolerance used when comparing a phase against a breakpoint.
///
/// Accumulated decimal phases can sit a few units in the last place below a
/// breakpoint they are meant to hit exactly.
pub const PHASE_EPSILON: Real = Real::from_parts(1, 0, 0, false, 20);

/// The angular regions of one trapezoid cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sector {
    /// Second half of the rising edge, from phase zero
    RiseHead,
    /// Flat top at `1`
    High,
    /// Falling edge
    Fall,
    /// Flat bottom at `-1`
    Low,
    /// First half of the rising edge, ending at `2π`
    RiseTail,
}

impl Sector {
    /// Maps a breakpoint search index to its sector.
    fn from_index(index: usize) -> Option<Self> {
        match index {
            1 => Some(Sector::RiseHead),
            2 => Some(Sector::High),
            3 => Some(Sector::Fall),
            4 => Some(Sector::Low),
            5 => Some(Sector::RiseTail),
            _ => None,
        }
    }
}

/// A trapezoid wave shaper with linear edges and flat plateaus at ±1.
///
/// Edges are computed incrementally from the previous sample, one slope step
/// per sample, which keeps them continuous even when the phase step varies.
/// Plateaus are set outright.
///
/// A sample whose own phase lies in a plateau is exactly `1` or `-1`.
/// Otherwise the slope applied to reach `theta` is the slope of the sector
/// the previous sample sat in, one step behind. A phase exactly on a
/// breakpoint belongs to the sector that starts there.
///
/// # Examples
///
/// ```
/// use phaseshape::{StreamConfig, ToneStream, Trapezoid};
///
/// // 8 bins per cycle, 16 samples per cycle
/// let trap = Trapezoid::new(2, 2, 2, 2).unwrap();
/// let mut stream = ToneStream::from_config(trap, StreamConfig::new(12800, 800.0)).unwrap();
/// let samples = stream.take_samples(4).unwrap();
/// assert_eq!(samples[2].round_dp(2).normalize().to_string(), "1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trapezoid {
    rise: u32,
    high: u32,
    fall: u32,
    low: u32,
    breakpoints: [Real; 6],
    grad: Option<Real>,
}

impl Trapezoid {
    /// Creates a trapezoid from bin counts for each edge.
    ///
    /// # Arguments
    ///
    /// * `rise` - Bins spent on the rising edge (split around phase zero)
    /// * `high` - Bins spent at `1`
    /// * `fall` - Bins spent on the falling edge
    /// * `low` - Bins spent at `-1`
    ///
    /// # Errors
    ///
    /// [`Error::EmptyCycle`] when all counts are zero, and
    /// [`Error::FlatRamp`] when there is a falling edge but no rising edge.
    /// An odd `rise` is accepted; its halves meet in the middle of a bin.
    pub fn new(rise: u32, high: u32, fall: u32, low: u32) -> Result<Self> {
        let bins = [rise, high, fall, low]
            .iter()
            .try_fold(0u32, |acc, n| acc.checked_add(*n))
            .ok_or_else(|| Error::InvalidConfig("trapezoid bin count overflows".into()))?;
        if bins == 0 {
            return Err(Error::EmptyCycle);
        }
        if rise == 0 && fall > 0 {
            return Err(Error::FlatRamp { fall });
        }

        let total = Real::from(bins);
        let half_rise = Real::from(rise) / Real::TWO;
        let marks = [
            Real::ZERO,
            half_rise,
            half_rise + Real::from(high),
            total - half_rise - Real::from(low),
            total - half_rise,
            total,
        ];
        // Scaling the fraction keeps the last breakpoint at exactly 2π
        let breakpoints = marks.map(|mark| TWO_PI * (mark / total));
        let grad = if rise == 0 {
            None
        } else {
            Some(Real::ONE / breakpoints[1])
        };

        Ok(Self {
            rise,
            high,
            fall,
            low,
            breakpoints,
            grad,
        })
    }

    /// Total bins in one cycle.
    pub fn bins(&self) -> u32 {
        self.rise + self.high + self.fall + self.low
    }

    /// Bin counts as `(rise, high, fall, low)`.
    pub fn counts(&self) -> (u32, u32, u32, u32) {
        (self.rise, self.high, self.fall, self.low)
    }

    /// Sector boundaries in radians, from `0` to `2π`.
    pub fn breakpoints(&self) -> &[Real; 6] {
        &self.breakpoints
    }

    /// Edge slope in value per radian, or `None` without a rising edge.
    pub fn gradient(&self) -> Option<Real> {
        self.grad
    }

    /// Classifies a phase.
    ///
    /// # Errors
    ///
    /// [`Error::SectorOutOfRange`] if the breakpoint table fails to place the
    /// phase, which means the table itself is broken.
    pub fn sector(&self, phase: Real) -> Result<Sector> {
        let position = self.position(phase);
        let index = self
            .breakpoints
            .partition_point(|bp| *bp <= position + PHASE_EPSILON);
        Sector::from_index(index).ok_or(Error::SectorOutOfRange {
            index,
            phase: position,
        })
    }

    /// Wrapped phase, with values a hair under 2π folded onto zero.
    fn position(&self, phase: Real) -> Real {
        let wrapped = wrap_phase(phase);
        if wrapped + PHASE_EPSILON >= TWO_PI {
            Real::ZERO
        } else {
            wrapped
        }
    }

    fn slope(&self, sector: Sector, phase: Real) -> Result<Real> {
        self.grad.ok_or(Error::SectorOutOfRange {
            index: sector as usize + 1,
            phase: self.position(phase),
        })
    }
}

impl Oscillator for Trapezoid {
    fn value(&self, tone: &Tone) -> Result<Real> {
        // A sample inside a plateau is flat whatever the ramp was doing
        match self.sector(tone.theta)? {
            Sector::High => return Ok(Real::ONE),
            Sector::Low => return Ok(Real::NEGATIVE_ONE),
            _ => {}
        }
        let prev = tone.previous_phase();
        let sector = self.sector(prev)?;
        let val = match sector {
            Sector::RiseHead | Sector::RiseTail => {
                tone.val + tone.step() * self.slope(sector, prev)?
            }
            Sector::High => Real::ONE,
            Sector::Fall => tone.val - tone.step() * self.slope(sector, prev)?,
            Sector::Low => Real::NEGATIVE_ONE,
        };
        Ok(val.clamp(Real::NEGATIVE_ONE, Real::ONE))
    }

    fn shape_at(&self, phase: Real) -> Result<Real> {
        let sector = self.sector(phase)?;
        let position = self.position(phase);
        let bp = &self.breakpoints;
        let val = match sector {
            Sector::RiseHead => position * self.slope(sector, phase)?,
            Sector::High => Real::ONE,
            Sector::Fall => Real::ONE - (position - bp[2]) * self.slope(sector, phase)?,
            Sector::Low => Real::NEGATIVE_ONE,
            Sector::RiseTail => (position - bp[4]) * self.slope(sector, phase)? - Real::ONE,
        };
        Ok(val.clamp(Real::NEGATIVE_ONE, Real::ONE))
    }
}
