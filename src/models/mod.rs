//! Domain model types for savings-based route construction.
//!
//! Provides the core abstractions: canonical point pairs, route records,
//! per-point demands and construction state, and a validated problem
//! instance that ties everything together.

mod demand;
mod node;
mod pair;
mod problem;
mod route;

pub use demand::DemandMap;
pub use node::Node;
pub use pair::Pair;
pub use problem::SavingsProblem;
pub use route::Route;

/// Index of the depot in the distance matrix.
pub const DEPOT: usize = 0;
