//! # Signal Generator
//!
//! Produces the dense "analog" time series the sampling demos start from:
//! a sine tone evaluated on a fine uniform grid (the analysis grid) over a
//! fixed time window. The grid is deliberately much finer than any
//! sampling frequency a user can select, so the dense series stands in for
//! the continuous signal.
//!
//! ## Example
//!
//! ```rust
//! use siglab_core::signal_generator::{generate, AnalysisWindow};
//!
//! let window = AnalysisWindow::new(0.1, 10_000.0);
//! let dense = generate(2.0, 10.0, window);
//! assert_eq!(dense.len(), 1000);
//! assert_eq!(dense[0].value, 0.0); // sin(0)
//! ```

use std::f64::consts::PI;

use crate::types::{Series, SignalPoint};

/// The fixed time window and analysis rate a demo instance runs at.
///
/// All numeric inputs are accepted; a window or rate that yields zero
/// points simply produces an empty series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnalysisWindow {
    /// Length of the observed window in seconds.
    pub time_window: f64,
    /// Grid rate in Hz for the dense series.
    pub analysis_rate: f64,
}

impl AnalysisWindow {
    /// Create a window covering `time_window` seconds at `analysis_rate` Hz.
    pub fn new(time_window: f64, analysis_rate: f64) -> Self {
        Self {
            time_window,
            analysis_rate,
        }
    }

    /// Number of grid points in the window.
    pub fn num_points(&self) -> usize {
        let n = self.analysis_rate * self.time_window;
        if n.is_finite() && n > 0.0 {
            n.floor() as usize
        } else {
            0
        }
    }

    /// Spacing between grid points in seconds.
    pub fn time_step(&self) -> f64 {
        1.0 / self.analysis_rate
    }

    /// The grid itself, as times in seconds.
    pub fn time_grid(&self) -> Vec<f64> {
        let step = self.time_step();
        (0..self.num_points()).map(|i| i as f64 * step).collect()
    }
}

impl Default for AnalysisWindow {
    /// 100 ms window on a 10 kHz grid, the values every sampling demo uses.
    fn default() -> Self {
        Self::new(0.1, 10_000.0)
    }
}

/// Generate the dense sine series `value = amplitude * sin(2π f t)`.
///
/// Pure function of its inputs. Zero frequency yields a constant-zero
/// series and negative frequency a mirrored one; both are accepted
/// unvalidated so learners can push the sliders anywhere.
pub fn generate(amplitude: f64, frequency: f64, window: AnalysisWindow) -> Series {
    let step = window.time_step();
    (0..window.num_points())
        .map(|i| {
            let t = i as f64 * step;
            SignalPoint::new(t, amplitude * (2.0 * PI * frequency * t).sin())
        })
        .collect()
}
