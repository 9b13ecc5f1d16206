//! Distance matrices.
//!
//! Provides a dense distance matrix over the depot and delivery points.

mod matrix;

pub use matrix::DistanceMatrix;
