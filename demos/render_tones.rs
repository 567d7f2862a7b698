//! Renders one second of each waveform to WAV files in the current directory.
//!
//! Usage: cargo run --example render_tones --features wav [frequency]

use anyhow::{Context, Result};
use phaseshape::{Sine, StreamConfig, ToneStream, Trapezoid, WavSettings, Waveform, write_wav};

const SAMPLE_RATE: u32 = 44100;

fn main() -> Result<()> {
    let frequency: f64 = match std::env::args().nth(1) {
        Some(arg) => arg
            .parse()
            .with_context(|| format!("invalid frequency: '{}'", arg))?,
        None => 440.0,
    };
    let config = StreamConfig::new(SAMPLE_RATE, frequency);
    let settings = WavSettings {
        channels: 2,
        amplitude: 0.5 * i16::MAX as f64,
    };

    let shapes = [
        ("sine.wav", Waveform::from(Sine)),
        ("trapezoid.wav", Waveform::from(Trapezoid::new(2, 2, 2, 2)?)),
        ("trapezoid_narrow.wav", Waveform::from(Trapezoid::new(2, 1, 2, 5)?)),
    ];

    for (path, shape) in shapes {
        let mut stream = ToneStream::from_config(shape, config)?;
        write_wav(path, &mut stream, SAMPLE_RATE as usize, &settings)
            .with_context(|| format!("failed to render {}", path))?;
        println!("Wrote {} ({} Hz, {} samples)", path, frequency, SAMPLE_RATE);
    }

    Ok(())
}
