//! Append-only route storage with tombstones.

use crate::models::Route;

/// Arena of routes addressed by stable indices.
///
/// Routes are only ever appended. A merge appends the combined route and
/// leaves empty tombstones in the two source slots, so indices held by the
/// node registry stay valid until they are repointed. Tombstones are dropped
/// by [`compact`] once construction is over.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a route, returning its index.
    pub fn push(&mut self, route: Route) -> usize {
        self.routes.push(route);
        self.routes.len() - 1
    }

    /// Route at `index` (possibly a tombstone).
    pub fn get(&self, index: usize) -> Option<&Route> {
        self.routes.get(index)
    }

    /// Mutable route at `index`.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Route> {
        self.routes.get_mut(index)
    }

    /// Joins the routes at `head` and `tail` into a new entry so that
    /// `head_end` and `tail_start` are adjacent, tombstoning both sources.
    ///
    /// Returns the index of the combined route, or `None` if the indices are
    /// equal or out of range.
    pub fn merge(
        &mut self,
        head: usize,
        head_end: usize,
        tail: usize,
        tail_start: usize,
    ) -> Option<usize> {
        if head == tail || head >= self.routes.len() || tail >= self.routes.len() {
            return None;
        }
        let head_route = std::mem::take(&mut self.routes[head]);
        let tail_route = std::mem::take(&mut self.routes[tail]);
        let combined = Route::joined(&head_route, head_end, &tail_route, tail_start);
        Some(self.push(combined))
    }

    /// Number of slots, tombstones included.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Returns `true` if no route was ever created.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Number of non-tombstone routes.
    pub fn num_live(&self) -> usize {
        self.routes.iter().filter(|r| !r.is_empty()).count()
    }

    /// All slots in creation order.
    pub fn iter(&self) -> impl Iterator<Item = &Route> {
        self.routes.iter()
    }

    /// Consumes the table, returning the live routes in creation order.
    pub fn into_routes(self) -> Vec<Route> {
        compact(self.routes)
    }
}

/// Removes tombstones, preserving the order of the remaining routes.
///
/// # Examples
///
/// ```
/// use savings_routing::constructive::compact;
/// use savings_routing::models::Route;
///
/// let routes = vec![
///     Route::default(),
///     Route::from_pair(1, 2, 2.0, 1.0, 1.0),
///     Route::default(),
/// ];
/// let compacted = compact(routes);
/// assert_eq!(compacted.len(), 1);
/// assert_eq!(compact(compacted.clone()), compacted);
/// ```
pub fn compact(mut routes: Vec<Route>) -> Vec<Route> {
    routes.retain(|r| !r.is_empty());
    routes
}
