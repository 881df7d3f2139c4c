//! Distance metric and distance providers.
//!
//! Every cost in this crate is measured with [`euclidean`]: the Euclidean
//! distance rounded to the nearest integer, halves away from zero. Integer
//! weights are what make ties common enough for the MST tie-break to matter.
//!
//! Algorithms read distances through the [`Distances`] trait so that small
//! instances can use a precomputed [`DistanceMatrix`] and large ones the
//! allocation-free [`PointDistances`].

mod lazy;
mod matrix;
mod metric;

pub use lazy::PointDistances;
pub use matrix::DistanceMatrix;
pub use metric::euclidean;

/// Symmetric integer distances between node indices `0..size()`.
pub trait Distances {
    /// Number of nodes.
    fn size(&self) -> usize;

    /// Distance between nodes `from` and `to`.
    ///
    /// # Panics
    ///
    /// Implementations panic if either index is out of bounds.
    fn get(&self, from: usize, to: usize) -> i64;
}
