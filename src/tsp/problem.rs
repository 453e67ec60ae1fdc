//! General (maximisation) optimisation problem for local search

use std::{fmt::Debug, hash::Hash};

use rand::Rng;

/// A complete-state formulation: every state is a candidate solution and
/// actions move between neighbouring candidates.
pub trait OptProblem {
    type State: Clone + Debug;
    type Action: Copy + Eq + Hash + Debug;

    /// Starting state for the searches that do not randomise it
    fn initial(&self) -> Self::State;

    /// Actions applicable to `state`
    fn actions(&self, state: &Self::State) -> Vec<Self::Action>;

    /// Successor of `state` under `action`
    fn result(&self, state: &Self::State, action: Self::Action) -> Self::State;

    /// Objective value; higher is better
    fn obj_val(&self, state: &Self::State) -> f64;

    /// Objective value of the successor of `state` under `action`.
    ///
    /// Problems with a cheap incremental evaluation should override this so
    /// that successors are never materialised.
    fn successor_value(&self, state: &Self::State, action: Self::Action) -> f64 {
        self.obj_val(&self.result(state, action))
    }

    /// Every action with the objective value of the successor it produces
    fn successor_values(&self, state: &Self::State) -> Vec<(Self::Action, f64)> {
        self.actions(state)
            .into_iter()
            .map(|action| (action, self.successor_value(state, action)))
            .collect()
    }

    /// Action leading to the best successor, first one on ties; `None`
    /// when `state` has no successors.
    fn max_action(&self, state: &Self::State) -> Option<(Self::Action, f64)> {
        let mut best: Option<(Self::Action, f64)> = None;
        for (action, value) in self.successor_values(state) {
            if best.is_none_or(|(_, best_value)| value > best_value) {
                best = Some((action, value));
            }
        }
        best
    }

    /// A uniformly random state, used by random-restart searches
    fn random_reset<R: Rng + ?Sized>(&self, rng: &mut R) -> Self::State;
}
