//! Local search over [`OptProblem`]s

mod hill_climbing;
mod hill_climbing_reset;
mod tabu;

use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use statrs::statistics::Statistics;

pub use hill_climbing::HillClimbing;
pub use hill_climbing_reset::HillClimbingReset;
pub use tabu::TabuSearch;

use super::problem::OptProblem;

/// Values closer than this are treated as equal, so rounding noise in
/// incremental evaluation never counts as an improvement.
pub const IMPROVEMENT_EPSILON: f64 = 1e-9;

/// Outcome of one local search run
#[derive(Debug, Clone, Serialize)]
pub struct LocalSearchResult<S> {
    pub algorithm: String,
    pub state: S,
    pub value: f64,
    pub iterations: usize,
    pub elapsed_ms: f64,
    /// Local optimum statistics, only for restart searches
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<RestartSummary>,
}

/// Descriptive statistics over the local optima found by restarts
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RestartSummary {
    pub runs: usize,
    pub mean: f64,
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
}

impl RestartSummary {
    /// `None` when no value was recorded
    pub fn from_values(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }
        let std_dev = if values.len() < 2 {
            0.0
        } else {
            values.iter().std_dev()
        };
        Some(Self {
            runs: values.len(),
            mean: values.iter().mean(),
            std_dev,
            min: Statistics::min(values),
            max: Statistics::max(values),
        })
    }
}

/// Steepest ascent from `state`. Returns the local optimum, its value and
/// the number of moves taken.
pub(crate) fn climb<P: OptProblem>(problem: &P, mut state: P::State) -> (P::State, f64, usize) {
    let mut value = problem.obj_val(&state);
    let mut iterations = 0;
    while let Some((action, next_value)) = problem.max_action(&state)
        && next_value > value + IMPROVEMENT_EPSILON
    {
        state = problem.result(&state, action);
        value = next_value;
        iterations += 1;
    }
    (state, value, iterations)
}

/// Selectable local search algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LocalSearchKind {
    HillClimbing,
    #[default]
    HillClimbingReset,
    Tabu,
}

impl LocalSearchKind {
    pub const ALL: [LocalSearchKind; 3] = [
        LocalSearchKind::HillClimbing,
        LocalSearchKind::HillClimbingReset,
        LocalSearchKind::Tabu,
    ];
}

impl fmt::Display for LocalSearchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            LocalSearchKind::HillClimbing => "Hill Climbing",
            LocalSearchKind::HillClimbingReset => "Hill Climbing with Random Restarts",
            LocalSearchKind::Tabu => "Tabu Search",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_of_single_value() {
        let summary = RestartSummary::from_values(&[-10.0]).unwrap();
        assert_eq!(summary.runs, 1);
        assert_eq!(summary.std_dev, 0.0);
        assert_eq!(summary.min, -10.0);
        assert_eq!(summary.max, -10.0);
    }

    #[test]
    fn test_summary_statistics() {
        let summary = RestartSummary::from_values(&[2.0, 4.0, 6.0]).unwrap();
        assert!((summary.mean - 4.0).abs() < 1e-12);
        // sample standard deviation
        assert!((summary.std_dev - 2.0).abs() < 1e-12);
        assert_eq!(summary.min, 2.0);
        assert_eq!(summary.max, 6.0);
        assert_eq!(RestartSummary::from_values(&[]), None);
    }
}
