//! # Digital Modulation
//!
//! Binary keying schemes for the digital-modulation animation: a bit
//! string drives the amplitude (ASK), frequency (FSK), or phase (PSK) of
//! a carrier across a fixed time window.
//!
//! Each bit occupies `window / bit_rate` seconds; times past the end of
//! the sequence read as bit 0, so short sequences simply trail off into
//! the zero waveform. Resolution scales with the carrier so fast carriers
//! stay smooth: `max(1000, fc · 100)` intervals across the window.
//!
//! ## Example
//!
//! ```rust
//! use siglab_core::digital_modulation::{BitSequence, DigitalModulator, KeyingScheme};
//!
//! let bits = BitSequence::parse("1011").unwrap();
//! let modulator = DigitalModulator::new(KeyingScheme::Ask { zero_amplitude: 0.0 });
//! let series = modulator.generate(&bits);
//! assert_eq!(series.len(), modulator.resolution() + 1);
//! ```

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::types::{Series, SiglabError, SiglabResult, SignalPoint};

/// How a bit keys the carrier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "kind")]
pub enum KeyingScheme {
    /// Amplitude-shift keying: bit 1 uses the carrier amplitude, bit 0
    /// uses `zero_amplitude` (0.0 for on-off keying).
    Ask { zero_amplitude: f64 },
    /// Frequency-shift keying: bit 1 uses the carrier frequency, bit 0
    /// uses `zero_frequency_hz`.
    Fsk { zero_frequency_hz: f64 },
    /// Phase-shift keying: per-bit carrier phase, in degrees.
    Psk {
        one_phase_deg: f64,
        zero_phase_deg: f64,
    },
}

/// A parsed binary sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BitSequence {
    bits: Vec<u8>,
}

impl BitSequence {
    /// Parse a string of `'0'` and `'1'` characters.
    pub fn parse(text: &str) -> SiglabResult<Self> {
        let mut bits = Vec::with_capacity(text.len());
        for (position, character) in text.chars().enumerate() {
            match character {
                '0' => bits.push(0),
                '1' => bits.push(1),
                _ => return Err(SiglabError::InvalidBit { position, character }),
            }
        }
        Ok(Self { bits })
    }

    /// Number of bits.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// True for the empty sequence.
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Truncate to the bit-rate capacity (one bit per bit slot).
    pub fn truncate(&mut self, max_bits: usize) {
        self.bits.truncate(max_bits);
    }

    /// The bit governing the waveform at index `position`; past the end
    /// of the sequence everything reads as 0.
    pub fn bit(&self, position: usize) -> u8 {
        self.bits.get(position).copied().unwrap_or(0)
    }
}

/// Generator for one keyed waveform over the demo window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DigitalModulator {
    /// Active keying scheme.
    pub scheme: KeyingScheme,
    /// Carrier amplitude (bit-1 amplitude for ASK).
    pub carrier_amplitude: f64,
    /// Carrier frequency in Hz (bit-1 frequency for FSK).
    pub carrier_frequency: f64,
    /// Bits per window.
    pub bit_rate: usize,
    /// Window length in seconds.
    pub time_window: f64,
}

impl DigitalModulator {
    /// Modulator with the demo defaults: 1 V carrier at 10 Hz, 4 bits
    /// across a 1 s window.
    pub fn new(scheme: KeyingScheme) -> Self {
        Self {
            scheme,
            carrier_amplitude: 1.0,
            carrier_frequency: 10.0,
            bit_rate: 4,
            time_window: 1.0,
        }
    }

    /// Seconds each bit occupies.
    pub fn bit_duration(&self) -> f64 {
        self.time_window / self.bit_rate as f64
    }

    /// The bit in effect at time `t`.
    pub fn bit_at(&self, bits: &BitSequence, t: f64) -> u8 {
        let position = (t / self.bit_duration()).floor();
        if position < 0.0 {
            return 0;
        }
        bits.bit(position as usize)
    }

    /// Number of evaluation intervals across the window; rises with the
    /// carrier frequency so high carriers keep their shape.
    pub fn resolution(&self) -> usize {
        1000_usize.max((self.carrier_frequency * 100.0) as usize)
    }

    /// Evaluate the keyed waveform at time `t` for the given bit.
    pub fn waveform_value(&self, bit: u8, t: f64) -> f64 {
        match self.scheme {
            KeyingScheme::Ask { zero_amplitude } => {
                let amplitude = if bit == 1 {
                    self.carrier_amplitude
                } else {
                    zero_amplitude
                };
                amplitude * (2.0 * PI * self.carrier_frequency * t).cos()
            }
            KeyingScheme::Fsk { zero_frequency_hz } => {
                let frequency = if bit == 1 {
                    self.carrier_frequency
                } else {
                    zero_frequency_hz
                };
                self.carrier_amplitude * (2.0 * PI * frequency * t).cos()
            }
            KeyingScheme::Psk {
                one_phase_deg,
                zero_phase_deg,
            } => {
                let phase_deg = if bit == 1 { one_phase_deg } else { zero_phase_deg };
                let phase = phase_deg * PI / 180.0;
                self.carrier_amplitude * (2.0 * PI * self.carrier_frequency * t + phase).cos()
            }
        }
    }

    /// Generate the modulated series: `resolution() + 1` points spanning
    /// the window inclusive of both ends.
    pub fn generate(&self, bits: &BitSequence) -> Series {
        let intervals = self.resolution();
        let step = self.time_window / intervals as f64;
        (0..=intervals)
            .map(|i| {
                let t = i as f64 * step;
                let bit = self.bit_at(bits, t);
                SignalPoint::new(t, self.waveform_value(bit, t))
            })
            .collect()
    }
}
