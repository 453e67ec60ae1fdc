//! CLI infrastructure for searchlab
//!
//! This module provides the command-line interface for running the maze
//! searches, playing Tateti and solving TSP instances.

pub mod commands;
pub mod config;
pub mod output;
