use std::{collections::VecDeque, time::Instant};

use log::{debug, info};

use super::{IMPROVEMENT_EPSILON, LocalSearchResult};
use crate::tsp::problem::OptProblem;

/// Tabu search: always moves to the best non-tabu successor, even a worse one.
///
/// Applied actions stay tabu for `tenure` iterations. A tabu action is still
/// taken when it would beat the best value seen so far (aspiration). The
/// search stops after `max_iterations`, or after `patience` consecutive
/// iterations without improving the best value.
#[derive(Debug, Clone)]
pub struct TabuSearch {
    pub tenure: usize,
    pub max_iterations: usize,
    pub patience: usize,
}

impl Default for TabuSearch {
    fn default() -> Self {
        Self {
            tenure: 10,
            max_iterations: 1000,
            patience: 100,
        }
    }
}

impl TabuSearch {
    pub const NAME: &'static str = "Tabu Search";

    pub fn new(tenure: usize, max_iterations: usize, patience: usize) -> Self {
        Self {
            tenure,
            max_iterations,
            patience,
        }
    }

    pub fn solve<P: OptProblem>(&self, problem: &P) -> LocalSearchResult<P::State> {
        self.solve_from(problem, problem.initial(), |_, _| {})
    }

    /// Search from `start`, reporting every applied move and the value of
    /// the state it leads to.
    pub fn solve_from<P: OptProblem>(
        &self,
        problem: &P,
        start: P::State,
        mut on_move: impl FnMut(P::Action, f64),
    ) -> LocalSearchResult<P::State> {
        let started = Instant::now();

        let mut current = start;
        let mut best_state = current.clone();
        let mut best_value = problem.obj_val(&current);
        let mut tabu: VecDeque<P::Action> = VecDeque::with_capacity(self.tenure + 1);
        let mut stale = 0;
        let mut iterations = 0;

        while iterations < self.max_iterations && stale < self.patience {
            let candidate = problem
                .successor_values(&current)
                .into_iter()
                .filter(|(action, value)| {
                    !tabu.contains(action) || *value > best_value + IMPROVEMENT_EPSILON
                })
                .fold(None, |best: Option<(P::Action, f64)>, (action, value)| {
                    match best {
                        Some((_, best_value)) if best_value >= value => best,
                        _ => Some((action, value)),
                    }
                });
            let Some((action, value)) = candidate else {
                debug!("tabu: every move is tabu at iteration {iterations}");
                break;
            };

            current = problem.result(&current, action);
            iterations += 1;
            on_move(action, value);

            tabu.push_back(action);
            if tabu.len() > self.tenure {
                tabu.pop_front();
            }

            if value > best_value + IMPROVEMENT_EPSILON {
                best_state = current.clone();
                best_value = value;
                stale = 0;
            } else {
                stale += 1;
            }
        }

        let elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;
        info!(
            "{}: best {best_value:.2} after {iterations} iterations",
            Self::NAME
        );

        LocalSearchResult {
            algorithm: Self::NAME.to_string(),
            state: best_state,
            value: best_value,
            iterations,
            elapsed_ms,
            summary: None,
        }
    }
}
