//! Route records built by the savings algorithm.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::DEPOT;

/// An ordered sequence of delivery points served by one vehicle trip.
///
/// The trip implicitly starts and ends at the depot, which is never stored
/// in `points`. A route with no points is a tombstone: a slot left behind
/// after its points were absorbed by a merge.
///
/// Serializes with the field names `warehouses`, `first_warehouse`,
/// `last_warehouse`, `total_capacity`, `total_distance` and `total_save`.
///
/// # Examples
///
/// ```
/// use savings_routing::models::Route;
///
/// let mut route = Route::from_pair(1, 2, 10.0, 1.0, 4.0);
/// route.add_point(3, 5.0, 2.0, 1.5);
/// assert_eq!(route.points(), &[1, 2, 3]);
/// assert_eq!(route.first(), 1);
/// assert_eq!(route.last(), 3);
/// assert_eq!(route.to_string(), "0-1-2-3");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Route {
    #[serde(rename = "warehouses")]
    points: Vec<usize>,
    #[serde(rename = "first_warehouse")]
    first: usize,
    #[serde(rename = "last_warehouse")]
    last: usize,
    total_capacity: f64,
    total_distance: f64,
    #[serde(rename = "total_save")]
    total_saving: f64,
}

impl Route {
    /// Creates a two-point route `[first, last]`.
    pub fn from_pair(first: usize, last: usize, load: f64, distance: f64, saving: f64) -> Self {
        Self {
            points: vec![first, last],
            first,
            last,
            total_capacity: load,
            total_distance: distance,
            total_saving: saving,
        }
    }

    /// Concatenates two routes so that `head_end` and `tail_start` become
    /// neighbours.
    ///
    /// `head` is reversed if `head_end` is its first point, `tail` is
    /// reversed if `tail_start` is its last point. Totals are summed; the
    /// connecting edge itself is not counted.
    pub fn joined(head: &Route, head_end: usize, tail: &Route, tail_start: usize) -> Self {
        let mut points = Vec::with_capacity(head.len() + tail.len());
        if head.last == head_end {
            points.extend_from_slice(&head.points);
        } else {
            points.extend(head.points.iter().rev().copied());
        }
        if tail.first == tail_start {
            points.extend_from_slice(&tail.points);
        } else {
            points.extend(tail.points.iter().rev().copied());
        }

        Self {
            first: points.first().copied().unwrap_or(DEPOT),
            last: points.last().copied().unwrap_or(DEPOT),
            points,
            total_capacity: head.total_capacity + tail.total_capacity,
            total_distance: head.total_distance + tail.total_distance,
            total_saving: head.total_saving + tail.total_saving,
        }
    }

    /// Returns `true` if `point` is the first or last point of this route.
    ///
    /// Always `false` for a tombstone.
    pub fn at_border(&self, point: usize) -> bool {
        !self.is_empty() && (self.first == point || self.last == point)
    }

    /// Appends a point after the current last point.
    pub fn add_point(&mut self, point: usize, load: f64, distance: f64, saving: f64) {
        self.points.push(point);
        self.last = point;
        self.accumulate(load, distance, saving);
    }

    /// Inserts a point before the current first point.
    pub fn insert_point(&mut self, point: usize, load: f64, distance: f64, saving: f64) {
        self.points.insert(0, point);
        self.first = point;
        self.accumulate(load, distance, saving);
    }

    /// Adds the cost of one connecting edge to the totals.
    pub fn add_edge(&mut self, distance: f64, saving: f64) {
        self.total_distance += distance;
        self.total_saving += saving;
    }

    fn accumulate(&mut self, load: f64, distance: f64, saving: f64) {
        self.total_capacity += load;
        self.add_edge(distance, saving);
    }

    /// Delivery points in visit order (depot excluded).
    pub fn points(&self) -> &[usize] {
        &self.points
    }

    /// First point after leaving the depot.
    pub fn first(&self) -> usize {
        self.first
    }

    /// Last point before returning to the depot.
    pub fn last(&self) -> usize {
        self.last
    }

    /// Number of delivery points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` for a tombstone.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Sum of the demands of all points.
    pub fn total_capacity(&self) -> f64 {
        self.total_capacity
    }

    /// Sum of the edges between consecutive points (depot legs excluded).
    pub fn total_distance(&self) -> f64 {
        self.total_distance
    }

    /// Sum of the savings of all accepted edges.
    pub fn total_saving(&self) -> f64 {
        self.total_saving
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{DEPOT}")?;
        for point in &self.points {
            write!(f, "-{point}")?;
        }
        Ok(())
    }
}
