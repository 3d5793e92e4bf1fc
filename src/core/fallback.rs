//! Deterministic placeholder prices for states where every live source
//! failed. The run never emits an empty record; it emits an estimate tagged
//! as such instead.

use crate::domain::model::{FuelQuote, PriceSource};

const PETROL_BASE: f64 = 102.50;
const DIESEL_BASE: f64 = 94.30;
const DIESEL_OFFSET_RATIO: f64 = 0.8;

// 1001 steps of one paisa, shifted to be symmetric: offsets span ±5.00.
const OFFSET_STEPS: u64 = 1001;
const OFFSET_SHIFT: i64 = 500;

/// Estimate a petrol/diesel pair for a state.
///
/// The offset is derived from an FNV-1a 64-bit hash of the state name, so
/// the same state always gets the same estimate, across runs and across
/// implementations. The numbers are placeholders, not market data.
pub fn estimate_prices(state: &str) -> FuelQuote {
    let offset = ((fnv1a64(state) % OFFSET_STEPS) as i64 - OFFSET_SHIFT) as f64 / 100.0;
    FuelQuote {
        petrol: format!("{:.2}", PETROL_BASE + offset),
        diesel: format!("{:.2}", DIESEL_BASE + offset * DIESEL_OFFSET_RATIO),
        source: PriceSource::Estimated,
    }
}

// FNV-1a, 64-bit. Pinned here rather than using a std hasher: std's hash
// output is allowed to change between releases, and estimates must not.
fn fnv1a64(input: &str) -> u64 {
    let mut hash: u64 = 0xcbf2_9ce4_8422_2325;
    for byte in input.bytes() {
        hash ^= u64::from(byte);
        hash = hash.wrapping_mul(0x0000_0100_0000_01b3);
    }
    hash
}
