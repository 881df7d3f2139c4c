//! Local search for improving a tour.
//!
//! - [`two_opt_improve`] — Bounded best-improvement 2-opt, O(n²) per pass
//! - [`tour_cost`] / [`max_edge`] — Closed-tour measures

mod cost;
mod two_opt;

pub use cost::{max_edge, tour_cost};
pub use two_opt::{
    best_exchange, two_opt_improve, Exchange, TwoOptOutcome, DEFAULT_MAX_ITERATIONS,
};
