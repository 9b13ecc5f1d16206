//! Savings values and pair ranking.
//!
//! - [`compute_savings`] — saving of every canonical pair, O(n²)
//! - [`rank_pairs`] — pairs by descending saving with a deterministic tie-break, O(n² log n)

mod ranking;
mod table;

pub use ranking::{rank_pairs, RankedPair};
pub use table::{compute_savings, saving, SavingsTable};
