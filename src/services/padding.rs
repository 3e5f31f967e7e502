// src/services/padding.rs

//! Fixed-size result lists.

use crate::models::JobSlot;

/// Append `gap` placeholders to `slots`. A zero gap leaves the list as is.
pub fn pad(slots: &mut Vec<JobSlot>, gap: usize) {
    slots.extend(std::iter::repeat_n(JobSlot::Placeholder, gap));
}

/// Pad `slots` with placeholders until it holds at least `size` entries.
pub fn pad_to(slots: &mut Vec<JobSlot>, size: usize) {
    pad(slots, size.saturating_sub(slots.len()));
}

/// A list made only of placeholders.
pub fn placeholders(size: usize) -> Vec<JobSlot> {
    let mut slots = Vec::with_capacity(size);
    pad(&mut slots, size);
    slots
}
