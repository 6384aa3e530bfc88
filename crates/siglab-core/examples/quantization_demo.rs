//! # Quantization Demo
//!
//! Quantizes a tone at two step sizes and prints the resulting error, then
//! shows the noise mode with its moving-average cleanup.
//!
//! Run with: cargo run --example quantization_demo

use siglab_core::quantization::{
    add_noise, moving_average, noise_level_from_db, NoiseSource, UniformQuantizer,
};
use siglab_core::signal_generator::{generate, AnalysisWindow};
use siglab_core::types::SignalPoint;

fn rms_error(a: &[SignalPoint], b: &[SignalPoint]) -> f64 {
    let sum: f64 = a
        .iter()
        .zip(b.iter())
        .map(|(x, y)| (x.value - y.value).powi(2))
        .sum();
    (sum / a.len() as f64).sqrt()
}

fn main() {
    let tone = generate(2.0, 10.0, AnalysisWindow::default());

    println!("=== Quantization Demo ===");
    for step in [1.0, 0.25] {
        let q = UniformQuantizer::new(step);
        let quantized = q.quantize_series(&tone);
        println!(
            "step {:.2} V: {} levels over ±2 V, RMS error {:.4} V",
            step,
            q.level_count(2.0),
            rms_error(&tone, &quantized)
        );
    }
    println!();

    let level = noise_level_from_db(-12.0);
    let noisy = add_noise(&tone, level, &mut NoiseSource::default());
    let cleaned = moving_average(&noisy, 5);
    println!(
        "noise at -12 dB (±{:.2} V): RMS error {:.4} V, after moving average {:.4} V",
        level,
        rms_error(&tone, &noisy),
        rms_error(&tone, &cleaned)
    );
}
