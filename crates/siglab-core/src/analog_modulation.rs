//! # Analog Modulation
//!
//! Waveform families for the AM/FM teaching animation: the baseband
//! message tone, the bare carrier, and the AM / FM modulated carriers.
//!
//! ```text
//! baseband   m(t) = Am · cos(2π fm t)
//! carrier    c(t) = Ac · cos(2π fc t)
//! AM         s(t) = Ac · cos(2π fc t) · (1 + m·cos(2π fm t))    m = Am/Ac
//! FM         s(t) = Ac · cos(2π fc t + β·sin(2π fm t))          β = kf·Am/fm
//! ```
//!
//! The animation scrolls: each frame evaluates the waveform one step
//! further in time and drops the oldest point. [`ScrollingTrace`] models
//! that fixed-width window so the renderer just replots its snapshot.
//!
//! ## Example
//!
//! ```rust
//! use siglab_core::analog_modulation::{ModulationKind, ModulationParams};
//!
//! let params = ModulationParams::default();
//! let s = params.waveform_value(ModulationKind::Carrier, 0.0);
//! assert_eq!(s, params.carrier_amplitude); // cos(0)
//! assert!((params.am_index() - 2.0 / 3.0).abs() < 1e-12);
//! ```

use std::collections::VecDeque;
use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::signal_generator::AnalysisWindow;
use crate::types::{Series, SignalPoint};

/// Which waveform of the modulation demo to evaluate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModulationKind {
    /// The message tone itself.
    Baseband,
    /// The unmodulated carrier.
    Carrier,
    /// Amplitude modulation.
    Am,
    /// Frequency modulation.
    Fm,
}

/// Message, carrier, and FM-sensitivity settings of the demo.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModulationParams {
    /// Message amplitude Am.
    pub message_amplitude: f64,
    /// Message frequency fm in Hz.
    pub message_frequency: f64,
    /// Carrier amplitude Ac.
    pub carrier_amplitude: f64,
    /// Carrier frequency fc in Hz.
    pub carrier_frequency: f64,
    /// FM sensitivity kf in Hz per volt.
    pub fm_sensitivity: f64,
}

impl Default for ModulationParams {
    fn default() -> Self {
        Self {
            message_amplitude: 2.0,
            message_frequency: 10.0,
            carrier_amplitude: 3.0,
            carrier_frequency: 100.0,
            fm_sensitivity: 50.0,
        }
    }
}

impl ModulationParams {
    /// AM modulation index `m = Am / Ac`. Above 1.0 the envelope
    /// over-modulates; the index is reported, not clamped.
    pub fn am_index(&self) -> f64 {
        self.message_amplitude / self.carrier_amplitude
    }

    /// FM modulation index `β = kf · Am / fm`.
    pub fn fm_index(&self) -> f64 {
        self.fm_sensitivity * self.message_amplitude / self.message_frequency
    }

    /// Evaluate the selected waveform at time `t` (seconds).
    pub fn waveform_value(&self, kind: ModulationKind, t: f64) -> f64 {
        let message_phase = 2.0 * PI * self.message_frequency * t;
        let carrier_phase = 2.0 * PI * self.carrier_frequency * t;
        match kind {
            ModulationKind::Baseband => self.message_amplitude * message_phase.cos(),
            ModulationKind::Carrier => self.carrier_amplitude * carrier_phase.cos(),
            ModulationKind::Am => {
                self.carrier_amplitude
                    * carrier_phase.cos()
                    * (1.0 + self.am_index() * message_phase.cos())
            }
            ModulationKind::Fm => {
                self.carrier_amplitude
                    * (carrier_phase + self.fm_index() * message_phase.sin()).cos()
            }
        }
    }

    /// Evaluate the waveform across a whole analysis window.
    pub fn generate(&self, kind: ModulationKind, window: AnalysisWindow) -> Series {
        let step = window.time_step();
        (0..window.num_points())
            .map(|i| {
                let t = i as f64 * step;
                SignalPoint::new(t, self.waveform_value(kind, t))
            })
            .collect()
    }
}

/// Fixed-width live window for the scrolling animation: push one point per
/// frame, the oldest falls off once the window is full.
#[derive(Debug, Clone)]
pub struct ScrollingTrace {
    capacity: usize,
    points: VecDeque<SignalPoint>,
}

impl ScrollingTrace {
    /// Trace holding at most `capacity` points.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            points: VecDeque::with_capacity(capacity),
        }
    }

    /// Append the next frame's point, dropping the oldest when full.
    pub fn push(&mut self, point: SignalPoint) {
        if self.points.len() == self.capacity {
            self.points.pop_front();
        }
        self.points.push_back(point);
    }

    /// Number of points currently held.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True when nothing has been pushed yet.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The window contents, oldest first, ready for plotting.
    pub fn snapshot(&self) -> Series {
        self.points.iter().copied().collect()
    }

    /// Drop all points (e.g. when the waveform kind changes).
    pub fn clear(&mut self) {
        self.points.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_baseband_is_message_cosine() {
        let params = ModulationParams::default();
        let v = params.waveform_value(ModulationKind::Baseband, 0.0);
        assert_eq!(v, params.message_amplitude);
    }

    #[test]
    fn test_am_envelope_peaks_at_message_maximum() {
        let params = ModulationParams::default();
        // At t = 0 both cosines are 1: s = Ac(1 + m) = Ac + Am.
        let v = params.waveform_value(ModulationKind::Am, 0.0);
        let expected = params.carrier_amplitude + params.message_amplitude;
        assert!((v - expected).abs() < 1e-12);
    }

    #[test]
    fn test_fm_amplitude_is_constant_envelope() {
        let params = ModulationParams::default();
        let series = params.generate(ModulationKind::Fm, AnalysisWindow::new(0.1, 10_000.0));
        let max = series
            .iter()
            .map(|p| p.value.abs())
            .fold(0.0_f64, f64::max);
        assert!(max <= params.carrier_amplitude + 1e-9);
        assert!(max > params.carrier_amplitude * 0.99);
    }

    #[test]
    fn test_modulation_indices() {
        let params = ModulationParams {
            message_amplitude: 2.0,
            message_frequency: 10.0,
            carrier_amplitude: 4.0,
            carrier_frequency: 100.0,
            fm_sensitivity: 25.0,
        };
        assert!((params.am_index() - 0.5).abs() < 1e-12);
        assert!((params.fm_index() - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_generate_window_length() {
        let params = ModulationParams::default();
        let series = params.generate(ModulationKind::Am, AnalysisWindow::new(0.1, 10_000.0));
        assert_eq!(series.len(), 1000);
    }

    #[test]
    fn test_scrolling_trace_drops_oldest() {
        let mut trace = ScrollingTrace::new(3);
        for i in 0..5 {
            trace.push(SignalPoint::new(i as f64, i as f64));
        }
        let snapshot = trace.snapshot();
        assert_eq!(snapshot.len(), 3);
        assert_eq!(snapshot[0].time, 2.0);
        assert_eq!(snapshot[2].time, 4.0);
    }

    #[test]
    fn test_scrolling_trace_clear() {
        let mut trace = ScrollingTrace::new(3);
        trace.push(SignalPoint::new(0.0, 1.0));
        trace.clear();
        assert!(trace.is_empty());
    }
}
