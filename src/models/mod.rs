//! Domain model types for the Euclidean TSP.
//!
//! Points are read once and never mutated. A tour is an ordering of point
//! indices that the local search rewrites in place.

mod instance;
mod point;
mod tour;

pub use instance::Instance;
pub use point::{Point, MAX_COORDINATE};
pub use tour::Tour;
