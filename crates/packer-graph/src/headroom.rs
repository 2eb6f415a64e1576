//! Headroom clamp: pre-allocate whole largest packs for oversized targets.
//!
//! A target above `Σ pack sizes × multiplier` would make the graph search
//! walk through an unbounded number of intermediate quantities. The excess is
//! covered with whole packs of the largest size up front, leaving a remainder
//! in `[threshold, threshold + largest)` for the graph.

use packer_core::types::{PackSize, Quantity};
use tracing::debug;

/// Outcome of the clamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Headroom {
    /// `Σ pack sizes × multiplier`, saturating.
    pub threshold: Quantity,
    /// The largest pack size; receives every pre-allocated pack.
    pub largest: PackSize,
    /// Number of largest packs pre-allocated. Zero when no clamp applied.
    pub preallocated: u64,
    /// Quantity left for the graph search.
    pub remaining: Quantity,
}

impl Headroom {
    pub fn applied(&self) -> bool {
        self.preallocated > 0
    }
}

/// Clamp `quantity` against `sizes_asc` (ascending, non-empty, no zeros).
pub fn apply(quantity: Quantity, sizes_asc: &[PackSize], multiplier: i64) -> Headroom {
    let largest = sizes_asc.last().copied().unwrap_or(0);
    let threshold = sizes_asc
        .iter()
        .fold(0_i64, |acc, &s| acc.saturating_add(Quantity::from(s)))
        .saturating_mul(multiplier);

    let mut headroom = Headroom {
        threshold,
        largest,
        preallocated: 0,
        remaining: quantity,
    };
    if largest == 0 || quantity <= threshold {
        return headroom;
    }

    let largest_q = Quantity::from(largest);
    let count = (quantity - threshold) / largest_q;
    headroom.preallocated = count.unsigned_abs();
    headroom.remaining = quantity - count * largest_q;

    debug!(
        quantity,
        threshold,
        largest,
        preallocated = headroom.preallocated,
        remaining = headroom.remaining,
        "headroom clamp applied"
    );
    headroom
}
