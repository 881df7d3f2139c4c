//! Solver output.

use serde::{Deserialize, Serialize};

/// Result of one solver run, in terms of point ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TourReport {
    /// Point ids in visit order, open form (no repeated closing id).
    pub tour: Vec<i64>,
    /// Length of the closed tour, wraparound edge included.
    pub cost: i64,
    /// Longest single edge of the closed tour.
    pub max_edge: i64,
    /// Seed used for MST tie-breaking.
    pub seed: u64,
    /// Closed tour length before local search.
    pub initial_cost: i64,
    /// 2-opt passes performed.
    pub passes: usize,
    /// 2-opt exchanges applied.
    pub exchanges: usize,
}

impl TourReport {
    /// Tour ids in closed-cycle form, first id repeated at the end.
    pub fn closed_ids(&self) -> Vec<i64> {
        let mut ids = self.tour.clone();
        if let Some(&first) = self.tour.first() {
            ids.push(first);
        }
        ids
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closed_ids() {
        let report = TourReport {
            tour: vec![4, 2, 9],
            cost: 0,
            max_edge: 0,
            seed: 1,
            initial_cost: 0,
            passes: 0,
            exchanges: 0,
        };
        assert_eq!(report.closed_ids(), vec![4, 2, 9, 4]);
    }

    #[test]
    fn test_serializes_tour_field() {
        let report = TourReport {
            tour: vec![1],
            cost: 0,
            max_edge: 0,
            seed: 5,
            initial_cost: 0,
            passes: 0,
            exchanges: 0,
        };
        let json = serde_json::to_value(&report).expect("serialize");
        assert_eq!(json["tour"], serde_json::json!([1]));
        assert_eq!(json["seed"], 5);
    }
}
