//! # u-tsp
//!
//! Euclidean traveling salesman heuristic: a minimum spanning tree with
//! randomized tie-breaking, a depth-first walk of that tree as the initial
//! tour, and bounded best-improvement 2-opt to refine it.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Point, Tour, Instance)
//! - [`distance`] — Rounded Euclidean metric, distance matrix and lazy distances
//! - [`graph`] — Union-Find, Kruskal MST, adjacency lists
//! - [`constructive`] — Depth-first tour construction
//! - [`local_search`] — 2-opt improvement and tour cost measures
//! - [`solver`] — The end-to-end pipeline and its configuration
//! - [`tsplib`] — TSPLIB reader and tour writer
//!
//! ## Example
//!
//! ```
//! use u_tsp::models::Point;
//! use u_tsp::solver::{solve, SolverConfig};
//!
//! let points = vec![
//!     Point::new(1, 0.0, 0.0),
//!     Point::new(2, 1.0, 0.0),
//!     Point::new(3, 2.0, 0.0),
//! ];
//! let report = solve(&points, &SolverConfig::default().with_seed(1)).unwrap();
//! assert_eq!(report.cost, 4);
//! assert_eq!(report.closed_ids().len(), 4);
//! ```

pub mod constructive;
pub mod distance;
pub mod error;
pub mod graph;
pub mod local_search;
pub mod models;
pub mod solver;
pub mod tsplib;

pub use error::{Error, Result};
