//! Subcommand implementations

pub mod path;
pub mod tateti;
pub mod tsp;
