//! Savings-based route construction.
//!
//! - [`clarke_wright_savings`] — Clarke-Wright savings algorithm (1964), O(n² log n)
//! - [`ConstructionEngine`] — the per-pair decision loop behind it
//! - [`NodeRegistry`] / [`RouteTable`] — construction state
//! - [`compact`] — tombstone removal

mod clarke_wright;
mod engine;
mod registry;
mod route_table;

pub use clarke_wright::clarke_wright_savings;
pub use engine::{ConstructionEngine, Decision, SkipReason};
pub use registry::NodeRegistry;
pub use route_table::{compact, RouteTable};
