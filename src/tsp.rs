//! Traveling Salesman Problem and local search over 2-opt neighbourhoods

pub mod instance;
pub mod problem;
pub mod search;

pub use instance::{Tour, Tsp, TwoOpt};
pub use problem::OptProblem;
pub use search::{
    HillClimbing, HillClimbingReset, LocalSearchKind, LocalSearchResult, RestartSummary, TabuSearch,
};
