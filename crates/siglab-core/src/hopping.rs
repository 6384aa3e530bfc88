//! # Frequency Hopping
//!
//! Hop-pattern editor for the spread-spectrum animation: the user assigns
//! a channel to each time slot, and the engine renders the assignments as
//! a hold-then-jump step path the plot draws as one polyline.
//!
//! Slots with no assignment leave the previous channel held until the
//! next assigned slot, so the drawn line never breaks; a transmitter
//! dwells on its last channel the same way.
//!
//! ## Example
//!
//! ```rust
//! use siglab_core::hopping::HopSchedule;
//!
//! let mut schedule = HopSchedule::new(8, 8);
//! schedule.set_slot(0, Some(2)).unwrap();
//! schedule.set_slot(1, Some(5)).unwrap();
//! let path = schedule.hop_path();
//! // Hold on 2, jump to 5, dwell to the slot end.
//! assert_eq!(path.len(), 4);
//! ```

use serde::{Deserialize, Serialize};

use crate::types::{SiglabError, SiglabResult};

/// One vertex of the step path: a slot-time coordinate and the channel
/// occupied there. Jumps appear as two vertices sharing a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HopPoint {
    /// Slot index as a time coordinate (slot `t` spans `[t, t+1)`).
    pub slot: usize,
    /// Channel index occupied at this vertex.
    pub channel: usize,
}

/// Per-slot channel assignments for the hopping demo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HopSchedule {
    num_channels: usize,
    slots: Vec<Option<usize>>,
}

impl HopSchedule {
    /// Schedule with `num_slots` empty slots over `num_channels` channels.
    pub fn new(num_slots: usize, num_channels: usize) -> Self {
        Self {
            num_channels,
            slots: vec![None; num_slots],
        }
    }

    /// Number of time slots.
    pub fn num_slots(&self) -> usize {
        self.slots.len()
    }

    /// Number of selectable channels.
    pub fn num_channels(&self) -> usize {
        self.num_channels
    }

    /// Assign (or clear, with `None`) the channel for one slot.
    pub fn set_slot(&mut self, slot: usize, channel: Option<usize>) -> SiglabResult<()> {
        if slot >= self.slots.len() {
            return Err(SiglabError::InvalidSlot {
                slot,
                num_slots: self.slots.len(),
            });
        }
        if let Some(channel) = channel {
            if channel >= self.num_channels {
                return Err(SiglabError::InvalidChannel {
                    channel,
                    num_channels: self.num_channels,
                });
            }
        }
        self.slots[slot] = channel;
        Ok(())
    }

    /// The channel assigned to a slot, if any.
    pub fn slot(&self, slot: usize) -> Option<usize> {
        self.slots.get(slot).copied().flatten()
    }

    /// Clear every slot.
    pub fn clear(&mut self) {
        self.slots.iter_mut().for_each(|s| *s = None);
    }

    /// Build the hold-then-jump step path.
    ///
    /// For each assigned slot: a vertex holding the previous channel at
    /// the jump time (when there is a previous one), the new channel at
    /// the same time, and a dwell vertex at the slot end when the next
    /// slot is unassigned or the schedule ends.
    pub fn hop_path(&self) -> Vec<HopPoint> {
        let mut path = Vec::new();
        let mut last_channel = None;

        for (slot, assignment) in self.slots.iter().enumerate() {
            let Some(channel) = *assignment else { continue };

            if let Some(previous) = last_channel {
                path.push(HopPoint {
                    slot,
                    channel: previous,
                });
            }
            path.push(HopPoint { slot, channel });

            let next_unassigned = self.slots.get(slot + 1).map_or(true, Option::is_none);
            if next_unassigned {
                path.push(HopPoint {
                    slot: slot + 1,
                    channel,
                });
            }
            last_channel = Some(channel);
        }
        path
    }

    /// Map a channel index onto a real frequency: `base + channel · spacing`.
    pub fn channel_frequency(&self, channel: usize, base_hz: f64, spacing_hz: f64) -> f64 {
        base_hz + channel as f64 * spacing_hz
    }
}
