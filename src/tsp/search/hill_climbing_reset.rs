use std::time::Instant;

use log::{debug, info};
use rand::{SeedableRng, rngs::StdRng};

use super::{LocalSearchResult, RestartSummary, climb};
use crate::tsp::problem::OptProblem;

/// Hill climbing from the initial state and then from `restarts` random
/// states, keeping the best local optimum.
#[derive(Debug, Clone)]
pub struct HillClimbingReset {
    pub restarts: usize,
    rng: StdRng,
}

impl HillClimbingReset {
    pub const NAME: &'static str = "Hill Climbing with Random Restarts";

    pub fn new(restarts: usize) -> Self {
        Self {
            restarts,
            rng: StdRng::seed_from_u64(rand::random()),
        }
    }

    pub fn with_seed(restarts: usize, seed: u64) -> Self {
        Self {
            restarts,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn solve<P: OptProblem>(&mut self, problem: &P) -> LocalSearchResult<P::State> {
        self.solve_with_progress(problem, |_| {})
    }

    /// Like [`solve`](Self::solve), calling `on_run` after every climb with
    /// the number of climbs completed so far.
    pub fn solve_with_progress<P: OptProblem>(
        &mut self,
        problem: &P,
        mut on_run: impl FnMut(usize),
    ) -> LocalSearchResult<P::State> {
        let started = Instant::now();

        let (mut best_state, mut best_value, mut iterations) = climb(problem, problem.initial());
        let mut optima = vec![best_value];
        on_run(1);

        for restart in 1..=self.restarts {
            let start = problem.random_reset(&mut self.rng);
            let (state, value, moves) = climb(problem, start);
            debug!("restart {restart}: local optimum {value:.2} after {moves} moves");
            iterations += moves;
            optima.push(value);
            if value > best_value {
                best_state = state;
                best_value = value;
            }
            on_run(restart + 1);
        }

        let elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;
        let summary = RestartSummary::from_values(&optima);
        info!(
            "{}: best {best_value:.2} over {} climbs",
            Self::NAME,
            optima.len()
        );

        LocalSearchResult {
            algorithm: Self::NAME.to_string(),
            state: best_state,
            value: best_value,
            iterations,
            elapsed_ms,
            summary,
        }
    }
}
