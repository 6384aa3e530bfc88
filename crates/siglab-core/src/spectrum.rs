//! # Spectrum Helpers
//!
//! Small frequency-content probes used by the demos' advisory readouts and
//! by the aliasing tests: a zero-crossing counter (cheap, rendering-free
//! way to see that an under-sampled reconstruction no longer oscillates
//! like its source) and an FFT magnitude spectrum with a peak-bin
//! dominant-frequency estimate.
//!
//! ## Example
//!
//! ```rust
//! use siglab_core::signal_generator::{generate, AnalysisWindow};
//! use siglab_core::spectrum::{dominant_frequency, zero_crossings};
//!
//! let window = AnalysisWindow::new(0.1, 10_000.0);
//! let tone = generate(2.0, 10.0, window);
//! assert_eq!(zero_crossings(&tone), 1); // one sign change in 100 ms of 10 Hz
//! let f = dominant_frequency(&tone, 10_000.0);
//! assert!((f - 10.0).abs() < 10.0); // within one FFT bin
//! ```

use num_complex::Complex64;
use rustfft::FftPlanner;

use crate::types::SignalPoint;

/// Count sign changes in a series. Exact zeros are skipped so a point
/// sitting on the axis is not counted twice.
pub fn zero_crossings(series: &[SignalPoint]) -> usize {
    let mut crossings = 0;
    let mut last_sign = 0.0;
    for point in series {
        if point.value == 0.0 {
            continue;
        }
        let sign = point.value.signum();
        if last_sign != 0.0 && sign != last_sign {
            crossings += 1;
        }
        last_sign = sign;
    }
    crossings
}

/// Magnitude spectrum of the series values: the first `N/2` bins of an
/// N-point FFT. Bin `k` corresponds to `k * analysis_rate / N` Hz.
pub fn magnitude_spectrum(series: &[SignalPoint]) -> Vec<f64> {
    if series.is_empty() {
        return Vec::new();
    }

    let mut buffer: Vec<Complex64> = series
        .iter()
        .map(|p| Complex64::new(p.value, 0.0))
        .collect();

    let mut planner = FftPlanner::new();
    let fft = planner.plan_fft_forward(buffer.len());
    fft.process(&mut buffer);

    buffer
        .iter()
        .take(buffer.len() / 2)
        .map(|c| c.norm())
        .collect()
}

/// Frequency of the strongest non-DC bin, in Hz.
///
/// Resolution is `analysis_rate / N`; good enough to tell a 10 Hz tone
/// from its aliased ghost, which is all the demos ask of it.
pub fn dominant_frequency(series: &[SignalPoint], analysis_rate: f64) -> f64 {
    let spectrum = magnitude_spectrum(series);
    if spectrum.len() < 2 {
        return 0.0;
    }

    let bin_width = analysis_rate / series.len() as f64;
    let peak_bin = spectrum
        .iter()
        .enumerate()
        .skip(1) // ignore DC
        .max_by(|a, b| a.1.partial_cmp(b.1).unwrap())
        .map(|(i, _)| i)
        .unwrap_or(0);

    peak_bin as f64 * bin_width
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signal_generator::{generate, AnalysisWindow};

    #[test]
    fn test_zero_crossings_of_tone() {
        // A full period of 10 Hz (0.1 s) crosses zero once mid-window;
        // the endpoints sit on the axis and are skipped.
        let tone = generate(2.0, 10.0, AnalysisWindow::new(0.1, 10_000.0));
        assert_eq!(zero_crossings(&tone), 1);

        // Five periods cross nine more times.
        let tone = generate(2.0, 50.0, AnalysisWindow::new(0.1, 10_000.0));
        assert_eq!(zero_crossings(&tone), 9);
    }

    #[test]
    fn test_zero_crossings_of_flat_series() {
        let flat = generate(2.0, 0.0, AnalysisWindow::default());
        assert_eq!(zero_crossings(&flat), 0);
        assert_eq!(zero_crossings(&[]), 0);
    }

    #[test]
    fn test_dominant_frequency_of_tone() {
        let window = AnalysisWindow::new(0.1, 10_000.0);
        let tone = generate(2.0, 50.0, window);
        // 1000 points at 10 kHz: bin width 10 Hz, peak at bin 5.
        assert!((dominant_frequency(&tone, 10_000.0) - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_magnitude_spectrum_length() {
        let tone = generate(1.0, 10.0, AnalysisWindow::new(0.1, 10_000.0));
        assert_eq!(magnitude_spectrum(&tone).len(), 500);
        assert!(magnitude_spectrum(&[]).is_empty());
    }

    #[test]
    fn test_dominant_frequency_degenerate() {
        assert_eq!(dominant_frequency(&[], 10_000.0), 0.0);
        let one = vec![SignalPoint::new(0.0, 1.0)];
        assert_eq!(dominant_frequency(&one, 10_000.0), 0.0);
    }
}
