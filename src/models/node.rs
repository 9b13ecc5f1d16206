//! Per-point construction state.

/// Route membership and edge count of a single point during construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Node {
    /// Index of the owning route in the route table.
    pub route_index: usize,
    /// Number of route edges touching this point (0, 1 or 2).
    pub connections: u8,
}

impl Node {
    /// Edge count at which a point is interior to its route.
    pub const MAX_CONNECTIONS: u8 = 2;

    /// Creates a node bound to `route_index`.
    pub fn new(route_index: usize, connections: u8) -> Self {
        Self {
            route_index,
            connections,
        }
    }

    /// Returns `true` if the point cannot accept another edge.
    pub fn is_saturated(&self) -> bool {
        self.connections >= Self::MAX_CONNECTIONS
    }
}
