//! # Siglab Core
//!
//! This crate provides the signal-processing engine behind a set of
//! browser-based teaching animations for introductory signals and
//! communications: sampling and reconstruction, analog and digital
//! modulation, quantization, frequency-division multiplexing, and
//! frequency hopping.
//!
//! ## Overview
//!
//! Each animation binds sliders and buttons to one of these modules and
//! redraws a plot from the series the module returns. The engine is
//! rendering-agnostic: every result is an ordered list of
//! `{time, value}` records. The drawing layer (SVG in the browser via
//! the `siglab-web` bindings, or anything else) is an external
//! collaborator.
//!
//! The centerpiece is the sampling demo:
//!
//! ```text
//! sliders ──► generate ──► dense series ──► sample ──► sparse samples
//!                              ▲                            │
//!            drawn points ─────┘        sinc interpolation  ▼
//!                              reconstructed series ◄── reconstruct
//! ```
//!
//! Sampling below the Nyquist rate is allowed on purpose: the
//! reconstruction faithfully shows the resulting alias instead of
//! refusing to compute it.
//!
//! ## Example
//!
//! ```rust
//! use siglab_core::{ParamKind, SamplingSession};
//!
//! let mut session = SamplingSession::new();
//! session.set_param(ParamKind::SamplingFrequency, 50.0);
//!
//! session.sample().unwrap();
//! let reconstructed = session.reconstruct().unwrap();
//! assert_eq!(reconstructed.len(), session.dense_series().len());
//!
//! let nyquist = session.nyquist_report();
//! assert!(nyquist.satisfied); // 50 Hz ≥ 2 × 10 Hz
//! ```

pub mod analog_modulation;
pub mod config;
pub mod digital_modulation;
pub mod drawn_signal;
pub mod fdm;
pub mod hopping;
pub mod logging;
pub mod quantization;
pub mod reconstructor;
pub mod sampler;
pub mod session;
pub mod signal_generator;
pub mod spectrum;
pub mod types;

pub use config::SiglabConfig;
pub use drawn_signal::DrawnSignal;
pub use sampler::SampleOutcome;
pub use session::{NyquistReport, ParamKind, SamplingSession};
pub use signal_generator::AnalysisWindow;
pub use types::{Series, SiglabError, SiglabResult, SignalPoint};
