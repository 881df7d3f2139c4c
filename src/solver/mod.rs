//! End-to-end MST + DFS + 2-opt pipeline.
//!
//! ```text
//! points → distances → kruskal_mst → Adjacency → dfs_tour → two_opt_improve → TourReport
//! ```
//!
//! The only randomness is the MST tie-break, driven by a single
//! [`StdRng`] seeded from [`SolverConfig::seed`]; the seed actually used is
//! always reported so any run can be reproduced.

mod config;
mod report;

pub use config::{SolverConfig, DEFAULT_MATRIX_LIMIT};
pub use report::TourReport;

use std::time::{SystemTime, UNIX_EPOCH};

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::constructive::dfs_tour;
use crate::distance::{DistanceMatrix, Distances, PointDistances};
use crate::error::{Error, Result};
use crate::graph::{kruskal_mst, mst_weight, Adjacency};
use crate::local_search::two_opt_improve;
use crate::models::{Point, MAX_COORDINATE};

/// Node index the depth-first tour starts from.
const ROOT: usize = 0;

/// Checks that a loaded point list has the declared size.
///
/// # Errors
///
/// [`Error::DimensionMismatch`] if `points.len() != expected`.
pub fn check_dimension(points: &[Point], expected: usize) -> Result<()> {
    if points.len() != expected {
        return Err(Error::DimensionMismatch {
            expected,
            found: points.len(),
        });
    }
    Ok(())
}

/// Checks that every point lies within [`MAX_COORDINATE`] of the origin.
///
/// # Errors
///
/// [`Error::CoordinateOutOfRange`] for the first point that does not,
/// including points with NaN or infinite coordinates.
pub fn check_coordinates(points: &[Point]) -> Result<()> {
    match points.iter().find(|p| !p.in_bounds()) {
        Some(p) => Err(Error::CoordinateOutOfRange {
            id: p.id(),
            x: p.x(),
            y: p.y(),
        }),
        None => Ok(()),
    }
}

/// Computes a tour over `points`.
///
/// A single point yields the one-node tour with zero cost.
///
/// # Errors
///
/// - [`Error::EmptyInstance`] if `points` is empty.
/// - [`Error::CoordinateOutOfRange`] if a coordinate is not finite or
///   exceeds [`MAX_COORDINATE`] in magnitude.
///
/// # Examples
///
/// ```
/// use u_tsp::models::Point;
/// use u_tsp::solver::{solve, SolverConfig};
///
/// let points = vec![
///     Point::new(1, 0.0, 0.0),
///     Point::new(2, 0.0, 1.0),
///     Point::new(3, 1.0, 1.0),
///     Point::new(4, 1.0, 0.0),
/// ];
/// let report = solve(&points, &SolverConfig::default().with_seed(7)).unwrap();
/// assert_eq!(report.cost, 4);
/// assert_eq!(report.max_edge, 1);
/// assert_eq!(report.tour[0], 1);
/// assert_eq!(report.seed, 7);
/// ```
pub fn solve(points: &[Point], config: &SolverConfig) -> Result<TourReport> {
    if points.is_empty() {
        return Err(Error::EmptyInstance);
    }
    check_coordinates(points)?;

    let seed = config.seed.unwrap_or_else(clock_seed);
    log::info!("solving {} points with seed {}", points.len(), seed);

    let report = if points.len() <= config.matrix_limit {
        let matrix = DistanceMatrix::from_points(points);
        run(points, &matrix, seed, config.max_iterations)
    } else {
        log::debug!(
            "{} points exceed matrix limit {}, computing distances on demand",
            points.len(),
            config.matrix_limit
        );
        run(points, &PointDistances::new(points), seed, config.max_iterations)
    };

    log::info!(
        "tour cost {} (max edge {}) after {} 2-opt exchanges",
        report.cost,
        report.max_edge,
        report.exchanges
    );
    Ok(report)
}

fn run<D: Distances>(
    points: &[Point],
    distances: &D,
    seed: u64,
    max_iterations: usize,
) -> TourReport {
    let n = points.len();
    let mut rng = StdRng::seed_from_u64(seed);

    let mst = kruskal_mst(distances, &mut rng);
    log::debug!("mst: {} edges, weight {}", mst.len(), mst_weight(&mst));

    let adjacency = Adjacency::from_edges(&mst, n);
    let mut tour = dfs_tour(&adjacency, ROOT);
    debug_assert!(tour.is_permutation(n));

    let initial_cost = tour.cost(distances);
    log::debug!("initial dfs tour cost {initial_cost}");

    let outcome = two_opt_improve(tour.nodes_mut(), distances, max_iterations);
    log::debug!(
        "2-opt: {} passes, {} exchanges, gain {}{}",
        outcome.passes,
        outcome.exchanges,
        outcome.gain,
        if outcome.converged() { "" } else { " (iteration cap reached)" }
    );

    TourReport {
        tour: tour.ids(points),
        cost: tour.cost(distances),
        max_edge: tour.max_edge(distances),
        seed,
        initial_cost,
        passes: outcome.passes,
        exchanges: outcome.exchanges,
    }
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default()
}
