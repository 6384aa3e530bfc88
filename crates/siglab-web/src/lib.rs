//! Siglab - WASM Entry Point
//!
//! This crate exposes the siglab engine to the browser animations. Each
//! page owns one [`WebSession`] and wires its sliders and buttons to the
//! methods here; every series crosses the boundary as a plain JS array of
//! `{time, value}` objects, ready for a d3 line generator.
//!
//! This crate only compiles for wasm32 target.

#![cfg(target_arch = "wasm32")]

use wasm_bindgen::prelude::*;

use siglab_core::analog_modulation::{ModulationKind, ModulationParams};
use siglab_core::digital_modulation::{BitSequence, DigitalModulator};
use siglab_core::fdm::allocate_bands;
use siglab_core::hopping::HopSchedule;
use siglab_core::{ParamKind, SamplingSession, SiglabConfig};

/// Set up panic reporting and console logging for the page.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    // Second init (another animation on the same page) is fine.
    let _ = console_log::init_with_level(log::Level::Info);

    log::info!("siglab engine loaded");
    Ok(())
}

fn to_js<T: serde::Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// One sampling/reconstruction animation instance.
#[wasm_bindgen]
pub struct WebSession {
    inner: SamplingSession,
}

#[wasm_bindgen]
impl WebSession {
    /// Session with the default demo parameters.
    #[wasm_bindgen(constructor)]
    pub fn new() -> WebSession {
        WebSession {
            inner: SamplingSession::from_config(&SiglabConfig::default()),
        }
    }

    /// Apply a slider change; `kind` is "amplitude", "frequency", or
    /// "sampling_frequency".
    pub fn set_param(&mut self, kind: &str, value: f64) -> Result<(), JsValue> {
        let kind = match kind {
            "amplitude" => ParamKind::Amplitude,
            "frequency" => ParamKind::Frequency,
            "sampling_frequency" => ParamKind::SamplingFrequency,
            other => return Err(JsValue::from_str(&format!("unknown parameter: {other}"))),
        };
        self.inner.set_param(kind, value);
        Ok(())
    }

    /// The dense series for the signal path.
    pub fn dense_series(&self) -> Result<JsValue, JsValue> {
        to_js(&self.inner.dense_series())
    }

    /// Run a sampling pass and return the sample markers.
    pub fn sample(&mut self) -> Result<JsValue, JsValue> {
        let points = self
            .inner
            .sample()
            .map_err(|e| JsValue::from_str(&e.to_string()))?
            .to_vec();
        to_js(&points)
    }

    /// Sinc-reconstruct from the current samples.
    pub fn reconstruct(&mut self) -> Result<JsValue, JsValue> {
        let series = self
            .inner
            .reconstruct()
            .map_err(|e| JsValue::from_str(&e.to_string()))?
            .to_vec();
        to_js(&series)
    }

    /// Nyquist advisory for the readout panel.
    pub fn nyquist_report(&self) -> Result<JsValue, JsValue> {
        to_js(&self.inner.nyquist_report())
    }

    /// Enter drawn-signal input.
    pub fn enter_drawing(&mut self) {
        self.inner.enter_drawing();
    }

    /// Leave drawn-signal input and restore the generated tone.
    pub fn leave_drawing(&mut self) {
        self.inner.leave_drawing();
    }

    /// Place a drawn point (plot coordinates already inverted to
    /// time/value by the page).
    pub fn add_drawn_point(&mut self, time: f64, value: f64) {
        self.inner.add_drawn_point(time, value);
    }

    /// Smooth the drawn points into a dense curve.
    pub fn smooth_drawn(&mut self) -> Result<JsValue, JsValue> {
        self.inner
            .smooth_drawn()
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        to_js(&self.inner.drawn_signal().points())
    }

    /// The drawn points in time order, padded to the window.
    pub fn drawn_series(&self) -> Result<JsValue, JsValue> {
        let window_end = self.inner.window().time_window;
        to_js(&self.inner.drawn_signal().normalized(window_end))
    }

    /// Reset to the default parameters and generated signal.
    pub fn reset(&mut self) {
        self.inner.reset();
    }
}

/// Evaluate one analog-modulation waveform over the demo window.
///
/// `kind` is "baseband", "carrier", "am", or "fm"; the params object has
/// the shape of [`ModulationParams`].
#[wasm_bindgen]
pub fn modulation_series(kind: &str, params: JsValue) -> Result<JsValue, JsValue> {
    let params: ModulationParams =
        serde_wasm_bindgen::from_value(params).map_err(|e| JsValue::from_str(&e.to_string()))?;
    let kind = match kind {
        "baseband" => ModulationKind::Baseband,
        "carrier" => ModulationKind::Carrier,
        "am" => ModulationKind::Am,
        "fm" => ModulationKind::Fm,
        other => return Err(JsValue::from_str(&format!("unknown waveform: {other}"))),
    };
    to_js(&params.generate(kind, siglab_core::AnalysisWindow::default()))
}

/// Generate a keyed waveform for the digital-modulation page.
#[wasm_bindgen]
pub fn keyed_series(modulator: JsValue, bits: &str) -> Result<JsValue, JsValue> {
    let modulator: DigitalModulator =
        serde_wasm_bindgen::from_value(modulator).map_err(|e| JsValue::from_str(&e.to_string()))?;
    let mut bits =
        BitSequence::parse(bits).map_err(|e| JsValue::from_str(&e.to_string()))?;
    bits.truncate(modulator.bit_rate);
    to_js(&modulator.generate(&bits))
}

/// Equal FDM band split for the multiplexing page.
#[wasm_bindgen]
pub fn fdm_bands(total_bandwidth_hz: f64, num_users: usize) -> Result<JsValue, JsValue> {
    to_js(&allocate_bands(total_bandwidth_hz, num_users))
}

/// One hop-schedule editor instance.
#[wasm_bindgen]
pub struct WebHopSchedule {
    inner: HopSchedule,
}

#[wasm_bindgen]
impl WebHopSchedule {
    /// Schedule with the page's slot/channel grid.
    #[wasm_bindgen(constructor)]
    pub fn new(num_slots: usize, num_channels: usize) -> WebHopSchedule {
        WebHopSchedule {
            inner: HopSchedule::new(num_slots, num_channels),
        }
    }

    /// Assign a channel to a slot; pass a negative channel to clear it.
    pub fn set_slot(&mut self, slot: usize, channel: i32) -> Result<(), JsValue> {
        let channel = if channel < 0 { None } else { Some(channel as usize) };
        self.inner
            .set_slot(slot, channel)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// The hold-then-jump polyline for the plot.
    pub fn hop_path(&self) -> Result<JsValue, JsValue> {
        to_js(&self.inner.hop_path())
    }

    /// Clear every slot.
    pub fn clear(&mut self) {
        self.inner.clear();
    }
}
