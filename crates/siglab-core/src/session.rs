//! # Sampling Session
//!
//! Owns the live state of one sampling/reconstruction demo: the current
//! slider values, the dense series, an optional drawn signal, the latest
//! sampling pass, and the latest reconstruction. The UI layer holds
//! exactly one session per animation instance and threads every input
//! event through it; the engine functions themselves stay pure.
//!
//! Everything runs synchronously inside the calling event handler. A
//! parameter change simply discards and recomputes the affected series,
//! so there is never an in-flight computation to cancel.
//!
//! ## Example
//!
//! ```rust
//! use siglab_core::session::{ParamKind, SamplingSession};
//!
//! let mut session = SamplingSession::new();
//! session.set_param(ParamKind::SamplingFrequency, 40.0);
//! session.sample().unwrap();
//! let rebuilt = session.reconstruct().unwrap();
//! assert_eq!(rebuilt.len(), session.dense_series().len());
//! ```

use serde::{Deserialize, Serialize};

use crate::drawn_signal::DrawnSignal;
use crate::reconstructor;
use crate::sampler::{self, SampleOutcome};
use crate::signal_generator::{self, AnalysisWindow};
use crate::types::{Series, SiglabError, SiglabResult, SignalPoint};

/// Default slider values shared by the sampling demos.
pub const DEFAULT_AMPLITUDE: f64 = 2.0;
/// Default message frequency in Hz.
pub const DEFAULT_FREQUENCY: f64 = 10.0;
/// Default sampling frequency in Hz.
pub const DEFAULT_SAMPLING_FREQUENCY: f64 = 15.0;

/// The adjustable parameters of the sampling demo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParamKind {
    /// Signal amplitude (volts).
    Amplitude,
    /// Signal frequency (Hz).
    Frequency,
    /// Sampling frequency (Hz).
    SamplingFrequency,
}

/// Advisory Nyquist readout. Never gates a computation: sub-Nyquist
/// sampling stays allowed so the aliased result can be shown.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NyquistReport {
    /// Minimum alias-free sampling rate, `2 · f`.
    pub nyquist_rate: f64,
    /// `fs / f`, how many times per signal period we sample.
    pub sampling_ratio: f64,
    /// Whether `fs ≥ 2 · f` holds.
    pub satisfied: bool,
}

/// Live state of one sampling/reconstruction animation.
#[derive(Debug, Clone)]
pub struct SamplingSession {
    amplitude: f64,
    frequency: f64,
    sampling_frequency: f64,
    window: AnalysisWindow,
    defaults: (f64, f64, f64),

    drawing: bool,
    drawn: DrawnSignal,
    dense: Series,
    sampled: Series,
    /// Strict reconstruction guard: set only by a successful sampling
    /// pass, cleared by any edit that could make the samples stale.
    sampled_flag: bool,
    reconstructed: Option<Series>,
}

impl SamplingSession {
    /// Session with the shared demo defaults on the default analysis grid.
    pub fn new() -> Self {
        Self::with_params(
            DEFAULT_AMPLITUDE,
            DEFAULT_FREQUENCY,
            DEFAULT_SAMPLING_FREQUENCY,
            AnalysisWindow::default(),
        )
    }

    /// Session seeded from a loaded configuration.
    pub fn from_config(config: &crate::config::SiglabConfig) -> Self {
        Self::with_params(
            config.signal.amplitude,
            config.signal.frequency_hz,
            config.signal.sampling_frequency_hz,
            config.analysis.window(),
        )
    }

    /// Session with explicit starting parameters.
    pub fn with_params(
        amplitude: f64,
        frequency: f64,
        sampling_frequency: f64,
        window: AnalysisWindow,
    ) -> Self {
        let mut session = Self {
            amplitude,
            frequency,
            sampling_frequency,
            window,
            defaults: (amplitude, frequency, sampling_frequency),
            drawing: false,
            drawn: DrawnSignal::new(),
            dense: Series::new(),
            sampled: Series::new(),
            sampled_flag: false,
            reconstructed: None,
        };
        session.regenerate();
        session
    }

    // ------------------------------------------------------------- inputs

    /// Apply a slider change. Regenerates the dense series (unless a
    /// drawn signal is active) and invalidates the sampling pass.
    pub fn set_param(&mut self, kind: ParamKind, value: f64) {
        match kind {
            ParamKind::Amplitude => self.amplitude = value,
            ParamKind::Frequency => self.frequency = value,
            ParamKind::SamplingFrequency => self.sampling_frequency = value,
        }
        tracing::debug!(?kind, value, "parameter changed");

        self.invalidate_samples();
        if !self.drawing && self.drawn.is_empty() {
            self.regenerate();
        }
    }

    /// Switch to drawn-signal input: clears the generated series and any
    /// previous drawing.
    pub fn enter_drawing(&mut self) {
        self.drawing = true;
        self.dense.clear();
        self.drawn.clear();
        self.invalidate_samples();
    }

    /// Leave drawn-signal input and restore the generated signal.
    pub fn leave_drawing(&mut self) {
        self.drawing = false;
        self.drawn.clear();
        self.invalidate_samples();
        self.regenerate();
    }

    /// Place (or move) a drawn point. Only meaningful while drawing.
    pub fn add_drawn_point(&mut self, time: f64, value: f64) {
        self.drawn.add_point(time, value);
        self.sampled_flag = false;
    }

    /// Smooth the drawn points into a dense curve and finish drawing.
    pub fn smooth_drawn(&mut self) -> SiglabResult<()> {
        self.drawn.smooth()?;
        self.drawing = false;
        self.sampled_flag = false;
        Ok(())
    }

    /// Restore the construction-time defaults and discard everything.
    pub fn reset(&mut self) {
        let (amplitude, frequency, sampling_frequency) = self.defaults;
        self.amplitude = amplitude;
        self.frequency = frequency;
        self.sampling_frequency = sampling_frequency;
        self.drawing = false;
        self.drawn.clear();
        self.invalidate_samples();
        self.regenerate();
    }

    // ------------------------------------------------------- computations

    /// Run a sampling pass over the active source series.
    ///
    /// A non-positive sampling frequency clears the sample markers and
    /// returns an empty slice ("sampling disabled"); it is not an error.
    /// Sampling while a drawing is unfinished is refused, mirroring the
    /// demo's "generate the signal first" notice.
    pub fn sample(&mut self) -> SiglabResult<&[SignalPoint]> {
        if self.drawing {
            return Err(SiglabError::DrawingInProgress);
        }

        match sampler::sample(
            &self.source_series(),
            self.sampling_frequency,
            self.window.time_window,
        ) {
            SampleOutcome::Disabled => {
                tracing::debug!(fs = self.sampling_frequency, "sampling disabled");
                self.invalidate_samples();
            }
            SampleOutcome::Sampled(points) => {
                tracing::debug!(count = points.len(), "sampled");
                self.sampled = points;
                self.sampled_flag = true;
                self.reconstructed = None;
            }
        }
        Ok(&self.sampled)
    }

    /// Sinc-reconstruct the signal on the active source's time grid.
    ///
    /// Requires a completed sampling pass (non-empty samples AND the
    /// sampled flag); otherwise fails with [`SiglabError::NotSampled`].
    pub fn reconstruct(&mut self) -> SiglabResult<&[SignalPoint]> {
        if self.sampled.is_empty() || !self.sampled_flag {
            return Err(SiglabError::NotSampled);
        }

        let target_times: Vec<f64> = self.source_series().iter().map(|p| p.time).collect();
        let series =
            reconstructor::reconstruct(&self.sampled, &target_times, self.sampling_frequency)?;
        tracing::debug!(count = series.len(), "reconstructed");
        self.reconstructed = Some(series);
        Ok(self.reconstructed.as_deref().unwrap_or(&[]))
    }

    /// Nyquist advisory for the current parameters.
    pub fn nyquist_report(&self) -> NyquistReport {
        let nyquist_rate = 2.0 * self.frequency;
        NyquistReport {
            nyquist_rate,
            sampling_ratio: self.sampling_frequency / self.frequency,
            satisfied: self.sampling_frequency >= nyquist_rate,
        }
    }

    // ---------------------------------------------------------- accessors

    /// Current amplitude.
    pub fn amplitude(&self) -> f64 {
        self.amplitude
    }

    /// Current signal frequency in Hz.
    pub fn frequency(&self) -> f64 {
        self.frequency
    }

    /// Current sampling frequency in Hz.
    pub fn sampling_frequency(&self) -> f64 {
        self.sampling_frequency
    }

    /// The analysis window this session runs on.
    pub fn window(&self) -> AnalysisWindow {
        self.window
    }

    /// The generated dense series (empty while drawing).
    pub fn dense_series(&self) -> &[SignalPoint] {
        &self.dense
    }

    /// The drawn signal, if the user has placed points.
    pub fn drawn_signal(&self) -> &DrawnSignal {
        &self.drawn
    }

    /// The latest sampling pass (empty until [`SamplingSession::sample`] runs).
    pub fn sampled_series(&self) -> &[SignalPoint] {
        &self.sampled
    }

    /// The latest reconstruction, if one has been computed.
    pub fn reconstructed_series(&self) -> Option<&[SignalPoint]> {
        self.reconstructed.as_deref()
    }

    /// True when a sampling pass has run and is still current.
    pub fn is_sampled(&self) -> bool {
        self.sampled_flag && !self.sampled.is_empty()
    }

    /// True while the user is placing drawn points.
    pub fn is_drawing(&self) -> bool {
        self.drawing
    }

    // ----------------------------------------------------------- internal

    /// The series the sampler and reconstructor operate on: the drawn
    /// signal when present, the generated series otherwise.
    fn source_series(&self) -> Series {
        if !self.drawn.is_empty() {
            self.drawn.normalized(self.window.time_window)
        } else {
            self.dense.clone()
        }
    }

    fn regenerate(&mut self) {
        self.dense = signal_generator::generate(self.amplitude, self.frequency, self.window);
    }

    fn invalidate_samples(&mut self) {
        self.sampled.clear();
        self.sampled_flag = false;
        self.reconstructed = None;
    }
}

impl Default for SamplingSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spectrum::zero_crossings;

    #[test]
    fn test_new_session_has_dense_series() {
        let session = SamplingSession::new();
        assert_eq!(session.dense_series().len(), 1000);
        assert!(!session.is_sampled());
    }

    #[test]
    fn test_sample_then_reconstruct_pipeline() {
        let mut session = SamplingSession::new();
        session.set_param(ParamKind::SamplingFrequency, 100.0);
        let sampled = session.sample().unwrap().len();
        assert!(sampled >= 10);
        let rebuilt = session.reconstruct().unwrap();
        assert_eq!(rebuilt.len(), 1000);
    }

    #[test]
    fn test_reconstruct_before_sample_fails() {
        let mut session = SamplingSession::new();
        assert_eq!(session.reconstruct().unwrap_err(), SiglabError::NotSampled);
    }

    #[test]
    fn test_param_change_invalidates_sampling() {
        let mut session = SamplingSession::new();
        session.sample().unwrap();
        assert!(session.is_sampled());
        session.set_param(ParamKind::Frequency, 20.0);
        assert!(!session.is_sampled());
        assert_eq!(session.reconstruct().unwrap_err(), SiglabError::NotSampled);
    }

    #[test]
    fn test_zero_sampling_frequency_disables() {
        let mut session = SamplingSession::new();
        session.sample().unwrap();
        session.set_param(ParamKind::SamplingFrequency, 0.0);
        let points = session.sample().unwrap();
        assert!(points.is_empty());
        assert!(!session.is_sampled());
    }

    #[test]
    fn test_aliasing_is_reproduced_not_suppressed() {
        // 10 Hz tone sampled at 5 Hz, far below the 20 Hz Nyquist rate:
        // reconstruction is well-defined but oscillates differently.
        let mut session = SamplingSession::new();
        session.set_param(ParamKind::SamplingFrequency, 5.0);
        session.sample().unwrap();
        let original_crossings = zero_crossings(session.dense_series());
        let rebuilt = session.reconstruct().unwrap().to_vec();
        assert_ne!(zero_crossings(&rebuilt), original_crossings);
    }

    #[test]
    fn test_nyquist_report() {
        let session = SamplingSession::new();
        let report = session.nyquist_report();
        assert_eq!(report.nyquist_rate, 20.0);
        assert!((report.sampling_ratio - 1.5).abs() < 1e-12);
        assert!(!report.satisfied);

        let mut session = session;
        session.set_param(ParamKind::SamplingFrequency, 40.0);
        assert!(session.nyquist_report().satisfied);
    }

    #[test]
    fn test_drawn_signal_pipeline() {
        let mut session = SamplingSession::new();
        session.enter_drawing();
        assert!(session.dense_series().is_empty());
        session.add_drawn_point(0.02, 1.0);
        session.add_drawn_point(0.05, -1.0);
        session.add_drawn_point(0.08, 0.5);

        // Sampling mid-drawing is refused.
        assert_eq!(session.sample().unwrap_err(), SiglabError::DrawingInProgress);

        session.smooth_drawn().unwrap();
        session.sample().unwrap();
        assert!(session.is_sampled());
        let rebuilt = session.reconstruct().unwrap();
        assert!(!rebuilt.is_empty());
    }

    #[test]
    fn test_drawn_edit_clears_sampled_flag() {
        let mut session = SamplingSession::new();
        session.enter_drawing();
        session.add_drawn_point(0.0, 1.0);
        session.add_drawn_point(0.1, -1.0);
        session.smooth_drawn().unwrap();
        session.sample().unwrap();
        assert!(session.is_sampled());

        session.add_drawn_point(0.05, 2.0);
        assert!(!session.is_sampled());
        assert_eq!(session.reconstruct().unwrap_err(), SiglabError::NotSampled);
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut session = SamplingSession::new();
        session.set_param(ParamKind::Amplitude, 4.0);
        session.enter_drawing();
        session.add_drawn_point(0.01, 1.0);
        session.reset();
        assert_eq!(session.amplitude(), DEFAULT_AMPLITUDE);
        assert!(!session.is_drawing());
        assert!(session.drawn_signal().is_empty());
        assert_eq!(session.dense_series().len(), 1000);
    }

    #[test]
    fn test_deterministic_pipeline() {
        let run = || {
            let mut s = SamplingSession::new();
            s.sample().unwrap();
            s.reconstruct().unwrap().to_vec()
        };
        assert_eq!(run(), run());
    }
}
