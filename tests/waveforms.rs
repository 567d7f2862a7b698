use phaseshape::{
    Error, Oscillator, Real, Sector, Sine, StreamConfig, TWO_PI, Tone, ToneStream, Trapezoid,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rust_decimal::prelude::ToPrimitive;

const REGULAR_CYCLE: [f64; 16] = [
    0.0, 0.5, 1.0, 1.0, 1.0, 1.0, 1.0, 0.5, 0.0, -0.5, -1.0, -1.0, -1.0, -1.0, -1.0, -0.5,
];

fn as_f64(sample: Real) -> f64 {
    sample.to_f64().unwrap()
}

#[test]
fn test_trapezoid_regular_cycle() {
    // 800 Hz at 16 samples per cycle
    let trap = Trapezoid::new(2, 2, 2, 2).unwrap();
    let mut stream = ToneStream::from_config(trap, StreamConfig::new(16 * 800, 800.0)).unwrap();
    let samples = stream.take_samples(64).unwrap();

    for (n, sample) in samples.iter().enumerate() {
        let want = REGULAR_CYCLE[n % 16];
        let got = as_f64(*sample);
        assert!((got - want).abs() < 0.005, "sample {}: {} vs {}", n, got, want);
    }
}

#[test]
fn test_trapezoid_from_explicit_tone() {
    // Same run, built by hand: dt = 2π / (16ω)
    let omega = TWO_PI * Real::from(800);
    let delta = TWO_PI / (Real::from(16) * omega);
    let trap = Trapezoid::new(2, 2, 2, 2).unwrap();
    let seed = trap
        .prime(Tone::new(Real::ZERO, delta, omega, Real::ZERO))
        .unwrap();

    let mut tone = seed;
    for n in 0..64 {
        let (evaluated, sample) = trap.next(tone).unwrap();
        let want = REGULAR_CYCLE[n % 16];
        assert!((as_f64(sample) - want).abs() < 0.005, "sample {}", n);
        tone = evaluated.advanced();
    }
}

#[test]
fn test_sine_reference() {
    let mut stream = ToneStream::from_config(Sine, StreamConfig::new(16, 1.0)).unwrap();
    let samples = stream.take_samples(64).unwrap();
    for (n, sample) in samples.iter().enumerate() {
        let want = (std::f64::consts::TAU * n as f64 / 16.0).sin();
        let got = as_f64(*sample);
        assert!((got - want).abs() < 0.005, "sample {}: {} vs {}", n, got, want);
    }
}

#[test]
fn test_sine_long_run_has_no_drift() {
    let sample_rate = 44100u32;
    let frequency = 440.0;
    let mut stream =
        ToneStream::from_config(Sine, StreamConfig::new(sample_rate, frequency)).unwrap();

    for n in 0..20_000u64 {
        let got = as_f64(stream.step().unwrap());
        // Reduce the reference phase exactly in integer arithmetic
        let cycles = (n * 440) % sample_rate as u64;
        let want = (std::f64::consts::TAU * cycles as f64 / sample_rate as f64).sin();
        assert!((got - want).abs() < 1e-6, "sample {}: {} vs {}", n, got, want);
    }
}

#[test]
fn test_trapezoid_long_run_keeps_pattern() {
    let trap = Trapezoid::new(2, 2, 2, 2).unwrap();
    let mut stream = ToneStream::from_config(trap, StreamConfig::new(16 * 800, 800.0)).unwrap();
    for n in 0..16 * 1000 {
        let got = as_f64(stream.step().unwrap());
        let want = REGULAR_CYCLE[n % 16];
        assert!((got - want).abs() < 0.005, "sample {}: {} vs {}", n, got, want);
    }
}

#[test]
fn test_trapezoid_bounded_and_flat_plateaus() {
    let mut rng = StdRng::seed_from_u64(0x7ea9);
    let mut checked = 0;

    while checked < 40 {
        let rise = rng.gen_range(0..6);
        let high = rng.gen_range(0..6);
        let fall = rng.gen_range(0..6);
        let low = rng.gen_range(0..6);
        let trap = match Trapezoid::new(rise, high, fall, low) {
            Ok(trap) => trap,
            Err(Error::EmptyCycle) | Err(Error::FlatRamp { .. }) => continue,
            Err(e) => panic!("unexpected error: {}", e),
        };
        let sample_rate = rng.gen_range(2_000..48_000);
        let frequency = rng.gen_range(20.0..2_000.0);
        let mut stream =
            ToneStream::from_config(trap.clone(), StreamConfig::new(sample_rate, frequency))
                .unwrap();

        for _ in 0..400 {
            let sector = trap.sector(stream.tone().theta).unwrap();
            let sample = stream.step().unwrap();
            assert!(
                sample >= Real::NEGATIVE_ONE && sample <= Real::ONE,
                "{:?}: {} out of range",
                trap.counts(),
                sample
            );
            match sector {
                Sector::High => assert_eq!(sample, Real::ONE),
                Sector::Low => assert_eq!(sample, Real::NEGATIVE_ONE),
                _ => {}
            }
        }
        checked += 1;
    }
}

#[test]
fn test_shape_at_bounded_for_any_phase() {
    let mut rng = StdRng::seed_from_u64(42);
    let trap = Trapezoid::new(3, 4, 5, 6).unwrap();
    for _ in 0..2_000 {
        let phase = Real::new(rng.gen_range(-1_000_000i64..1_000_000), 4);
        let val = trap.shape_at(phase).unwrap();
        assert!(val >= Real::NEGATIVE_ONE && val <= Real::ONE);
    }
}

#[test]
fn test_sine_periodicity_random_phases() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..200 {
        let theta = Real::new(rng.gen_range(-10_000_000i64..10_000_000), 5);
        let a = Sine.shape_at(theta).unwrap();
        let b = Sine.shape_at(theta + TWO_PI).unwrap();
        assert!((a - b).abs() < Real::new(1, 9), "theta {}", theta);
    }
}

#[test]
fn test_zero_duration_steps() {
    let trap = Trapezoid::new(2, 2, 2, 2).unwrap();
    let mut stream =
        ToneStream::from_config(trap.clone(), StreamConfig::new(12800, 800.0)).unwrap();
    // Walk into the falling edge, then freeze time
    let walked = stream.take_samples(8).unwrap();
    let frozen = stream.tone().with_delta(Real::ZERO);
    let sector = trap.sector(frozen.previous_phase()).unwrap();

    let mut frozen_stream = ToneStream::new(&trap, frozen);
    for _ in 0..10 {
        assert_eq!(frozen_stream.step().unwrap(), walked[7]);
        assert_eq!(trap.sector(frozen_stream.tone().previous_phase()).unwrap(), sector);
    }

    let sine = Tone::new(Real::ONE, Real::ZERO, TWO_PI, Real::ZERO);
    let mut sine_stream = ToneStream::new(Sine, sine);
    let first = sine_stream.step().unwrap();
    for _ in 0..10 {
        assert_eq!(sine_stream.step().unwrap(), first);
    }
}

#[test]
fn test_frequency_modulation_is_phase_continuous() {
    let mut stream = ToneStream::from_config(Sine, StreamConfig::new(8000, 200.0)).unwrap();
    stream.take_samples(10).unwrap();
    let before = stream.tone().theta;
    stream.set_frequency(400.0).unwrap();
    assert_eq!(stream.tone().theta, before);
    stream.step().unwrap();
    let step = stream.tone().theta - before;
    let want = TWO_PI * Real::from(400) / Real::from(8000);
    assert!((step - want).abs() < Real::new(1, 20));
}

#[test]
fn test_identical_construction() {
    let a = Trapezoid::new(6, 1, 6, 3).unwrap();
    let b = Trapezoid::new(6, 1, 6, 3).unwrap();
    assert_eq!(a.breakpoints(), b.breakpoints());
}
