//! # Quantization
//!
//! Uniform mid-tread quantizer for the quantization animation:
//! `q(v) = round(v / Δ) · Δ` snaps every sample to the nearest level of a
//! step-size-Δ grid, and the level grid itself is exposed so the plot can
//! draw the horizontal level lines.
//!
//! The demo has two modes, and each gets its own reconstruction smoother:
//!
//! - **Step mode**: the quantized staircase is softened by averaging each
//!   point's two quantized neighbors.
//! - **Noise mode**: uniform noise (level set in dB) is added to the
//!   signal instead, and a short moving average stands in for a
//!   denoising filter.
//!
//! ## Example
//!
//! ```rust
//! use siglab_core::quantization::UniformQuantizer;
//!
//! let q = UniformQuantizer::new(0.5);
//! assert_eq!(q.quantize(0.6), 0.5);
//! assert_eq!(q.quantize(-1.3), -1.5);
//! assert_eq!(q.level_count(2.0), 8); // ceil(2·2.0 / 0.5)
//! ```

use crate::types::{Series, SignalPoint};

/// Uniform mid-tread quantizer with a fixed step size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UniformQuantizer {
    step: f64,
}

impl UniformQuantizer {
    /// Quantizer with step size `step` (volts per level).
    pub fn new(step: f64) -> Self {
        Self { step }
    }

    /// The step size Δ.
    pub fn step_size(&self) -> f64 {
        self.step
    }

    /// Snap one value to the nearest level.
    pub fn quantize(&self, value: f64) -> f64 {
        (value / self.step).round() * self.step
    }

    /// Quantize a whole series, keeping the time coordinates.
    pub fn quantize_series(&self, series: &[SignalPoint]) -> Series {
        series
            .iter()
            .map(|p| SignalPoint::new(p.time, self.quantize(p.value)))
            .collect()
    }

    /// The level values falling inside `[min, max]`, for the level-line
    /// overlay.
    pub fn levels(&self, min: f64, max: f64) -> Vec<f64> {
        let mut levels = Vec::new();
        let mut level = (min / self.step).ceil() * self.step;
        while level <= max {
            levels.push(level);
            level += self.step;
        }
        levels
    }

    /// Number of levels spanning a `±amplitude` signal: `ceil(2A / Δ)`.
    pub fn level_count(&self, amplitude: f64) -> usize {
        (2.0 * amplitude / self.step).ceil() as usize
    }
}

/// Deterministic uniform noise source (xorshift64), so the noise-mode
/// plot is reproducible frame to frame.
#[derive(Debug, Clone)]
pub struct NoiseSource {
    state: u64,
}

impl NoiseSource {
    /// Seeded noise source.
    pub fn new(seed: u64) -> Self {
        Self {
            state: if seed == 0 { 0x1234_5678_9ABC_DEF0 } else { seed },
        }
    }

    /// Next value uniform in `[0, 1)`.
    pub fn next_uniform(&mut self) -> f64 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 7;
        self.state ^= self.state << 17;
        (self.state >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Next value uniform in `[-1, 1)`.
    pub fn next_centered(&mut self) -> f64 {
        2.0 * self.next_uniform() - 1.0
    }
}

impl Default for NoiseSource {
    fn default() -> Self {
        Self::new(0)
    }
}

/// Convert a noise setting in dB to a linear amplitude: `10^(dB/20)`.
pub fn noise_level_from_db(db: f64) -> f64 {
    10f64.powf(db / 20.0)
}

/// Add uniform noise of the given linear level to a series.
pub fn add_noise(series: &[SignalPoint], level: f64, noise: &mut NoiseSource) -> Series {
    series
        .iter()
        .map(|p| SignalPoint::new(p.time, p.value + noise.next_centered() * level))
        .collect()
}

/// Step-mode reconstruction: each interior point becomes the mean of its
/// two neighbors' quantized values; the end points keep their own.
pub fn neighbor_average(quantized: &[SignalPoint]) -> Series {
    let n = quantized.len();
    quantized
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let value = if i == 0 || i + 1 == n {
                p.value
            } else {
                (quantized[i - 1].value + quantized[i + 1].value) / 2.0
            };
            SignalPoint::new(p.time, value)
        })
        .collect()
}

/// Noise-mode reconstruction: centered moving average over `window`
/// points, clamped at the series edges.
pub fn moving_average(series: &[SignalPoint], window: usize) -> Series {
    if window == 0 {
        return series.to_vec();
    }
    let half = window / 2;
    series
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let start = i.saturating_sub(half);
            let end = (i + half + 1).min(series.len());
            let sum: f64 = series[start..end].iter().map(|q| q.value).sum();
            SignalPoint::new(p.time, sum / (end - start) as f64)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signal_generator::{generate, AnalysisWindow};

    #[test]
    fn test_quantize_snaps_to_grid() {
        let q = UniformQuantizer::new(0.5);
        assert_eq!(q.quantize(0.0), 0.0);
        assert_eq!(q.quantize(0.6), 0.5);
        assert_eq!(q.quantize(0.76), 1.0);
        assert_eq!(q.quantize(-1.3), -1.5);
    }

    #[test]
    fn test_quantize_error_bounded_by_half_step() {
        let q = UniformQuantizer::new(0.25);
        let tone = generate(2.0, 10.0, AnalysisWindow::default());
        for p in &tone {
            assert!((q.quantize(p.value) - p.value).abs() <= 0.125 + 1e-12);
        }
    }

    #[test]
    fn test_levels_cover_range() {
        let q = UniformQuantizer::new(1.0);
        assert_eq!(q.levels(-2.0, 2.0), vec![-2.0, -1.0, 0.0, 1.0, 2.0]);
    }

    #[test]
    fn test_level_count() {
        let q = UniformQuantizer::new(0.5);
        assert_eq!(q.level_count(2.0), 8);
        let q = UniformQuantizer::new(0.3);
        assert_eq!(q.level_count(2.0), 14); // ceil(4 / 0.3)
    }

    #[test]
    fn test_noise_is_deterministic_per_seed() {
        let tone = generate(2.0, 10.0, AnalysisWindow::default());
        let level = noise_level_from_db(-6.0);
        let a = add_noise(&tone, level, &mut NoiseSource::new(7));
        let b = add_noise(&tone, level, &mut NoiseSource::new(7));
        assert_eq!(a, b);
    }

    #[test]
    fn test_noise_level_from_db() {
        assert!((noise_level_from_db(0.0) - 1.0).abs() < 1e-12);
        assert!((noise_level_from_db(-20.0) - 0.1).abs() < 1e-12);
    }

    #[test]
    fn test_noise_stays_within_level() {
        let tone = generate(0.0, 0.0, AnalysisWindow::default());
        let noisy = add_noise(&tone, 0.5, &mut NoiseSource::default());
        assert!(noisy.iter().all(|p| p.value.abs() <= 0.5));
        assert!(noisy.iter().any(|p| p.value.abs() > 0.05));
    }

    #[test]
    fn test_neighbor_average_keeps_ends() {
        let quantized = vec![
            SignalPoint::new(0.0, 1.0),
            SignalPoint::new(0.1, 3.0),
            SignalPoint::new(0.2, 5.0),
        ];
        let smoothed = neighbor_average(&quantized);
        assert_eq!(smoothed[0].value, 1.0);
        assert_eq!(smoothed[1].value, 3.0); // (1 + 5) / 2
        assert_eq!(smoothed[2].value, 5.0);
    }

    #[test]
    fn test_moving_average_flattens_noise() {
        let tone = generate(2.0, 10.0, AnalysisWindow::default());
        let noisy = add_noise(&tone, 0.5, &mut NoiseSource::default());
        let smoothed = moving_average(&noisy, 5);
        assert_eq!(smoothed.len(), noisy.len());
        let err =
            |s: &[SignalPoint]| -> f64 {
                s.iter()
                    .zip(tone.iter())
                    .map(|(a, b)| (a.value - b.value).powi(2))
                    .sum()
            };
        assert!(err(&smoothed) < err(&noisy));
    }
}
