use std::time::Instant;

use log::info;

use super::{LocalSearchResult, climb};
use crate::tsp::problem::OptProblem;

/// Steepest-ascent hill climbing from the problem's initial state
#[derive(Debug, Clone, Copy, Default)]
pub struct HillClimbing;

impl HillClimbing {
    pub const NAME: &'static str = "Hill Climbing";

    pub fn solve<P: OptProblem>(&self, problem: &P) -> LocalSearchResult<P::State> {
        let started = Instant::now();
        let (state, value, iterations) = climb(problem, problem.initial());
        let elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;
        info!("{}: value {value:.2} after {iterations} moves", Self::NAME);

        LocalSearchResult {
            algorithm: Self::NAME.to_string(),
            state,
            value,
            iterations,
            elapsed_ms,
            summary: None,
        }
    }
}
