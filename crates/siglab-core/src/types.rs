//! Core types for the siglab teaching engine
//!
//! Every demo in this crate speaks the same currency: an ordered list of
//! `{time, value}` records. The rendering layer (SVG, canvas, egui, a
//! terminal table) receives these records and draws a path; the engine
//! itself never emits drawing primitives.
//!
//! ```text
//!  parameters ──► generate ──► DenseSeries ──┐
//!                                            ├──► sample ──► SampledSeries
//!  drawn points ─► normalize ─► DenseSeries ─┘                    │
//!                                                                 ▼
//!                                   ReconstructedSeries ◄── reconstruct
//! ```

use serde::{Deserialize, Serialize};

/// A floating point sample value (volts in the teaching demos).
pub type Sample = f64;

/// One point of a time series: a time coordinate in seconds and the
/// signal value at that instant. Immutable once produced.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SignalPoint {
    /// Time in seconds, non-negative for all series this crate produces.
    pub time: f64,
    /// Signal value at `time`.
    pub value: f64,
}

impl SignalPoint {
    /// Create a point from a time/value pair.
    pub fn new(time: f64, value: f64) -> Self {
        Self { time, value }
    }
}

/// An ordered sequence of [`SignalPoint`] records.
///
/// Dense, sampled, and reconstructed series all use this representation;
/// only their spacing and provenance differ.
pub type Series = Vec<SignalPoint>;

/// Result type for engine operations.
pub type SiglabResult<T> = Result<T, SiglabError>;

/// Errors that can occur in the engine.
///
/// Degenerate-but-accepted inputs (zero sampling frequency, sub-Nyquist
/// sampling) are deliberately NOT here: the sampler reports "disabled" as
/// an outcome and aliasing is a faithful result, not a fault.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SiglabError {
    #[error("signal has not been sampled; sample before reconstructing")]
    NotSampled,

    #[error("finish the drawn signal (smooth it or leave drawing) before sampling")]
    DrawingInProgress,

    #[error("not enough points: need at least {needed}, got {got}")]
    TooFewPoints { needed: usize, got: usize },

    #[error("channel {channel} out of range: schedule has {num_channels} channels")]
    InvalidChannel { channel: usize, num_channels: usize },

    #[error("slot {slot} out of range: schedule has {num_slots} slots")]
    InvalidSlot { slot: usize, num_slots: usize },

    #[error("invalid bit character {character:?} at position {position}; expected '0' or '1'")]
    InvalidBit { position: usize, character: char },
}
