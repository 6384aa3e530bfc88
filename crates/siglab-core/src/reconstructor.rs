//! # Reconstructor
//!
//! Rebuilds a dense signal from sparse samples with the Whittaker–Shannon
//! interpolation formula:
//!
//! ```text
//! x̂(t) = Σₖ  x[k] · sinc((t − tₖ) / T)        T = 1 / fs
//! ```
//!
//! Exact band-limited reconstruction only holds when `fs` is at least
//! twice the signal bandwidth. The engine does not enforce that: sampling
//! below the Nyquist rate produces an aliased, wrong-looking, but fully
//! deterministic result. Watching aliasing happen is the point of the
//! demo.
//!
//! Cost is O(|samples| × |targets|) with no FFT shortcut; both series are
//! bounded to a few thousand points.
//!
//! ## Example
//!
//! ```rust
//! use siglab_core::reconstructor::{reconstruct, sinc};
//! use siglab_core::types::SignalPoint;
//!
//! assert_eq!(sinc(0.0), 1.0);
//!
//! // Samples of a 10 Hz sine taken at fs = 40 Hz.
//! let samples: Vec<SignalPoint> = (0..4)
//!     .map(|k| {
//!         let t = k as f64 * 0.025;
//!         SignalPoint::new(t, (2.0 * std::f64::consts::PI * 10.0 * t).sin())
//!     })
//!     .collect();
//! let rebuilt = reconstruct(&samples, &[0.025], 40.0).unwrap();
//! assert!((rebuilt[0].value - samples[1].value).abs() < 1e-9);
//! ```

use std::f64::consts::PI;

use crate::types::{Series, SiglabError, SiglabResult, SignalPoint};

/// Arguments closer to zero than this evaluate to `sinc = 1` instead of
/// the 0/0 form.
pub const SINC_EPSILON: f64 = 1e-10;

/// Normalized sinc: `sin(πx) / (πx)`, with the removable singularity at
/// zero patched to 1.
pub fn sinc(x: f64) -> f64 {
    if x.abs() < SINC_EPSILON {
        1.0
    } else {
        (PI * x).sin() / (PI * x)
    }
}

/// Reconstruct a series at `target_times` from `samples` taken at
/// `sampling_frequency` Hz.
///
/// Fails with [`SiglabError::NotSampled`] when `samples` is empty; the
/// caller must run a sampling pass first. Neither input is mutated.
pub fn reconstruct(
    samples: &[SignalPoint],
    target_times: &[f64],
    sampling_frequency: f64,
) -> SiglabResult<Series> {
    if samples.is_empty() {
        return Err(SiglabError::NotSampled);
    }

    let period = 1.0 / sampling_frequency;
    let series = target_times
        .iter()
        .map(|&t| {
            let value = samples
                .iter()
                .map(|s| s.value * sinc((t - s.time) / period))
                .sum();
            SignalPoint::new(t, value)
        })
        .collect();

    Ok(series)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Samples of `A·sin(2πft)` exactly on the sampling grid.
    fn sine_samples(amplitude: f64, frequency: f64, fs: f64, n: usize) -> Series {
        (0..n)
            .map(|k| {
                let t = k as f64 / fs;
                SignalPoint::new(t, amplitude * (2.0 * PI * frequency * t).sin())
            })
            .collect()
    }

    #[test]
    fn test_sinc_zero_is_one() {
        assert_eq!(sinc(0.0), 1.0);
        assert_eq!(sinc(1e-12), 1.0);
    }

    #[test]
    fn test_sinc_at_integers_vanishes() {
        for n in 1..10 {
            assert!(sinc(n as f64).abs() < 1e-12);
        }
    }

    #[test]
    fn test_exact_at_sample_instants() {
        // Grid-aligned samples: every cross term hits sinc(integer) = 0.
        let samples = sine_samples(2.0, 10.0, 40.0, 8);
        let times: Vec<f64> = samples.iter().map(|s| s.time).collect();
        let rebuilt = reconstruct(&samples, &times, 40.0).unwrap();
        for (r, s) in rebuilt.iter().zip(samples.iter()) {
            assert!((r.value - s.value).abs() < 1e-9, "at t={}", s.time);
        }
    }

    #[test]
    fn test_empty_samples_is_a_precondition_error() {
        let err = reconstruct(&[], &[0.0, 0.01], 10.0).unwrap_err();
        assert_eq!(err, SiglabError::NotSampled);
    }

    #[test]
    fn test_deterministic() {
        let samples = sine_samples(1.0, 5.0, 20.0, 4);
        let times = [0.0, 0.013, 0.031, 0.087];
        let a = reconstruct(&samples, &times, 20.0).unwrap();
        let b = reconstruct(&samples, &times, 20.0).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_inputs_not_mutated() {
        let samples = sine_samples(1.0, 5.0, 20.0, 4);
        let before = samples.clone();
        let _ = reconstruct(&samples, &[0.0, 0.01], 20.0).unwrap();
        assert_eq!(samples, before);
    }

    #[test]
    fn test_oversampled_sine_rebuilds_between_samples() {
        // fs = 200 Hz on a 10 Hz tone: far above Nyquist, mid-sample
        // values should land near the true sine.
        let samples = sine_samples(1.0, 10.0, 200.0, 40);
        let t = 0.0125; // between samples 2 and 3
        let rebuilt = reconstruct(&samples, &[t], 200.0).unwrap();
        let truth = (2.0 * PI * 10.0 * t).sin();
        assert!((rebuilt[0].value - truth).abs() < 0.1);
    }
}
