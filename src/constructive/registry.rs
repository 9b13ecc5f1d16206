//! Per-point route membership bookkeeping.

use crate::models::Node;

/// Tracks, for every point, the route that owns it and how many route edges
/// touch it.
///
/// Entries appear the first time a point is bound and are never removed;
/// after a merge they are repointed at the combined route.
///
/// # Examples
///
/// ```
/// use savings_routing::constructive::NodeRegistry;
///
/// let mut registry = NodeRegistry::new(4);
/// assert!(registry.lookup(2).is_none());
///
/// registry.bind(2, 0, 1);
/// registry.increment_connections(2);
/// registry.rebind(2, 5);
///
/// let node = registry.lookup(2).unwrap();
/// assert_eq!(node.route_index, 5);
/// assert_eq!(node.connections, 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct NodeRegistry {
    nodes: Vec<Option<Node>>,
}

impl NodeRegistry {
    /// Creates a registry sized for `size` points (depot included).
    pub fn new(size: usize) -> Self {
        Self {
            nodes: vec![None; size],
        }
    }

    /// State of `point`, or `None` if it has not been bound yet.
    pub fn lookup(&self, point: usize) -> Option<Node> {
        self.nodes.get(point).copied().flatten()
    }

    /// Binds `point` to a route with the given edge count.
    pub fn bind(&mut self, point: usize, route_index: usize, connections: u8) {
        if point >= self.nodes.len() {
            self.nodes.resize(point + 1, None);
        }
        self.nodes[point] = Some(Node::new(route_index, connections));
    }

    /// Records one more edge at `point`. No-op for an unbound point.
    pub fn increment_connections(&mut self, point: usize) {
        if let Some(node) = self.node_mut(point) {
            node.connections = node.connections.saturating_add(1);
        }
    }

    /// Moves `point` to another route, keeping its edge count. No-op for an
    /// unbound point.
    pub fn rebind(&mut self, point: usize, route_index: usize) {
        if let Some(node) = self.node_mut(point) {
            node.route_index = route_index;
        }
    }

    /// Number of bound points.
    pub fn num_bound(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_some()).count()
    }

    fn node_mut(&mut self, point: usize) -> Option<&mut Node> {
        self.nodes.get_mut(point).and_then(Option::as_mut)
    }
}
