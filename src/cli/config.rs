//! Shared configuration types for CLI commands
//!
//! Every section has defaults, so a config file only needs the keys it
//! changes. Command-line flags override values loaded from the file.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{
    Error, Result,
    pathfinding::Algorithm,
    strategy::StrategyKind,
    tictactoe::GameMode,
    tsp::LocalSearchKind,
};

/// Common configuration shared across commands
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CommonConfig {
    /// Random seed for reproducibility
    pub seed: Option<u64>,

    /// Whether to show progress bars
    pub progress: bool,

    /// Verbose output
    pub verbose: bool,
}

impl Default for CommonConfig {
    fn default() -> Self {
        Self {
            seed: None,
            progress: true,
            verbose: false,
        }
    }
}

/// Grid pathfinding configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PathConfig {
    /// Search algorithm used when none is given on the command line
    pub algorithm: Algorithm,

    /// Draw the reached set on the rendered maze
    pub show_reached: bool,
}

/// Tateti configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TatetiConfig {
    /// Who plays whom in interactive sessions
    pub mode: GameMode,

    /// Strategy driving the AI players
    pub strategy: StrategyKind,

    /// Number of games in an AI-vs-AI match
    pub games: usize,
}

impl Default for TatetiConfig {
    fn default() -> Self {
        Self {
            mode: GameMode::HumanVsAi,
            strategy: StrategyKind::Minimax,
            games: 100,
        }
    }
}

/// TSP local search configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TspConfig {
    pub algorithm: LocalSearchKind,

    /// Random restarts after the initial climb
    pub restarts: usize,

    /// Iterations an applied move stays tabu
    pub tenure: usize,

    pub max_iterations: usize,

    /// Tabu iterations allowed without improving the best tour
    pub patience: usize,
}

impl Default for TspConfig {
    fn default() -> Self {
        Self {
            algorithm: LocalSearchKind::HillClimbingReset,
            restarts: 30,
            tenure: 10,
            max_iterations: 1000,
            patience: 100,
        }
    }
}

/// Complete configuration file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub common: CommonConfig,
    pub path: PathConfig,
    pub tateti: TatetiConfig,
    pub tsp: TspConfig,
}

impl AppConfig {
    /// Load configuration from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| Error::Io {
            operation: format!("read config {}", path.display()),
            source,
        })?;
        let config: Self = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    /// Defaults when `path` is `None`
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        path.map_or_else(|| Ok(Self::default()), Self::load)
    }

    fn validate(&self) -> Result<()> {
        if self.tateti.games == 0 {
            return Err(Error::InvalidConfiguration {
                message: "tateti.games must be at least 1".to_string(),
            });
        }
        if self.tsp.max_iterations == 0 || self.tsp.patience == 0 {
            return Err(Error::InvalidConfiguration {
                message: "tsp.max_iterations and tsp.patience must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}
