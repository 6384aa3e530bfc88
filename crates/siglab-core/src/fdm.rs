//! # Frequency-Division Multiplexing
//!
//! Band planning for the multiplexing animation: a total bandwidth is
//! split equally among the active users, and each user gets a display
//! tone to draw inside their channel lane.
//!
//! ## Example
//!
//! ```rust
//! use siglab_core::fdm::allocate_bands;
//!
//! let bands = allocate_bands(15.0, 3);
//! assert_eq!(bands.len(), 3);
//! assert_eq!(bands[0].start_hz, 0.0);
//! assert_eq!(bands[2].end_hz, 15.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::types::{Series, SignalPoint};

/// One user's slice of the shared spectrum.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Band {
    /// Lower edge in Hz.
    pub start_hz: f64,
    /// Upper edge in Hz.
    pub end_hz: f64,
}

impl Band {
    /// Width of the band in Hz.
    pub fn width_hz(&self) -> f64 {
        self.end_hz - self.start_hz
    }

    /// Center frequency in Hz.
    pub fn center_hz(&self) -> f64 {
        (self.start_hz + self.end_hz) / 2.0
    }
}

/// Split `total_bandwidth_hz` equally among `num_users` contiguous bands.
///
/// Zero users yields an empty plan (the animation shows an idle channel).
pub fn allocate_bands(total_bandwidth_hz: f64, num_users: usize) -> Vec<Band> {
    if num_users == 0 {
        return Vec::new();
    }
    let per_user = total_bandwidth_hz / num_users as f64;
    (0..num_users)
        .map(|i| Band {
            start_hz: i as f64 * per_user,
            end_hz: (i + 1) as f64 * per_user,
        })
        .collect()
}

/// Display tone for one user's lane: `amplitude · sin(2π f x + phase)`
/// evaluated on `num_points` unit steps, plus a vertical offset so lanes
/// stack without overlapping. Pure data; the lane geometry is the
/// renderer's business.
pub fn lane_tone(
    frequency_hz: f64,
    amplitude: f64,
    phase: f64,
    offset: f64,
    num_points: usize,
) -> Series {
    (0..num_points)
        .map(|x| {
            let t = x as f64;
            SignalPoint::new(
                t,
                offset + amplitude * (0.02 * frequency_hz * t + phase).sin(),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bands_partition_the_spectrum() {
        let bands = allocate_bands(15.0, 3);
        assert_eq!(bands.len(), 3);
        for pair in bands.windows(2) {
            assert_eq!(pair[0].end_hz, pair[1].start_hz);
        }
        assert_eq!(bands[0].start_hz, 0.0);
        assert_eq!(bands[2].end_hz, 15.0);
        assert!((bands[1].width_hz() - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_single_user_takes_everything() {
        let bands = allocate_bands(15.0, 1);
        assert_eq!(bands.len(), 1);
        assert_eq!(bands[0].width_hz(), 15.0);
    }

    #[test]
    fn test_zero_users_is_empty() {
        assert!(allocate_bands(15.0, 0).is_empty());
    }

    #[test]
    fn test_band_center() {
        let bands = allocate_bands(10.0, 2);
        assert!((bands[0].center_hz() - 2.5).abs() < 1e-12);
        assert!((bands[1].center_hz() - 7.5).abs() < 1e-12);
    }

    #[test]
    fn test_lane_tone_offset_and_bounds() {
        let tone = lane_tone(3.0, 1.0, 0.0, 10.0, 200);
        assert_eq!(tone.len(), 200);
        assert!(tone.iter().all(|p| (p.value - 10.0).abs() <= 1.0 + 1e-12));
        assert!(tone.iter().any(|p| (p.value - 10.0).abs() > 0.5));
    }
}
