//! PCM WAV rendering for tone streams.
//!
//! Only available with the `wav` feature.

use crate::core::{Real, ToneStream};
use crate::error::{Error, Result};
use crate::oscillators::Oscillator;
use rust_decimal::prelude::ToPrimitive;
use std::io::{Seek, Write};
use std::path::Path;

/// Output settings for [`write_wav`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WavSettings {
    /// Interleaved channels per frame; every channel carries the same sample
    pub channels: u16,
    /// Scale applied to samples in `[-1, 1]` before 16-bit quantization
    pub amplitude: f64,
}

impl Default for WavSettings {
    fn default() -> Self {
        Self {
            channels: 1,
            amplitude: i16::MAX as f64,
        }
    }
}

impl WavSettings {
    fn validate(&self) -> Result<()> {
        if self.channels == 0 {
            return Err(Error::InvalidConfig("wav output needs at least one channel".into()));
        }
        if !self.amplitude.is_finite() || self.amplitude < 0.0 {
            return Err(Error::InvalidConfig(format!(
                "amplitude {} is not a finite non-negative number",
                self.amplitude
            )));
        }
        Ok(())
    }
}

/// Renders `frames` samples from a stream into a 16-bit PCM WAV file.
///
/// The file's sample rate is taken from the stream's step size.
///
/// # Examples
///
/// ```no_run
/// use phaseshape::{Sine, StreamConfig, ToneStream, WavSettings, write_wav};
///
/// let mut stream = ToneStream::from_config(Sine, StreamConfig::new(44100, 440.0))?;
/// write_wav("a440.wav", &mut stream, 44100, &WavSettings::default())?;
/// # Ok::<(), phaseshape::Error>(())
/// ```
pub fn write_wav<P, O>(
    path: P,
    stream: &mut ToneStream<O>,
    frames: usize,
    settings: &WavSettings,
) -> Result<()>
where
    P: AsRef<Path>,
    O: Oscillator,
{
    settings.validate()?;
    let spec = wav_spec(stream, settings)?;
    let writer = hound::WavWriter::create(path, spec)?;
    write_frames(writer, stream, frames, settings)
}

/// Same as [`write_wav`], targeting any seekable writer.
pub fn write_wav_to<W, O>(
    out: W,
    stream: &mut ToneStream<O>,
    frames: usize,
    settings: &WavSettings,
) -> Result<()>
where
    W: Write + Seek,
    O: Oscillator,
{
    settings.validate()?;
    let spec = wav_spec(stream, settings)?;
    let writer = hound::WavWriter::new(out, spec)?;
    write_frames(writer, stream, frames, settings)
}

fn wav_spec<O: Oscillator>(
    stream: &ToneStream<O>,
    settings: &WavSettings,
) -> Result<hound::WavSpec> {
    let sample_rate = stream.sample_rate().ok_or_else(|| {
        Error::InvalidConfig("stream step does not correspond to a sample rate".into())
    })?;
    Ok(hound::WavSpec {
        channels: settings.channels,
        sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    })
}

fn write_frames<W, O>(
    mut writer: hound::WavWriter<W>,
    stream: &mut ToneStream<O>,
    frames: usize,
    settings: &WavSettings,
) -> Result<()>
where
    W: Write + Seek,
    O: Oscillator,
{
    for _ in 0..frames {
        let value = quantize(stream.step()?, settings.amplitude);
        for _ in 0..settings.channels {
            writer.write_sample(value)?;
        }
    }
    writer.finalize()?;
    Ok(())
}

/// Scales a sample and rounds it to the nearest 16-bit value.
fn quantize(sample: Real, amplitude: f64) -> i16 {
    let scaled = sample.to_f64().unwrap_or_default() * amplitude;
    scaled.round().clamp(i16::MIN as f64, i16::MAX as f64) as i16
}
