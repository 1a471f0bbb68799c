//! Command-line configuration for the `checkers` binary.
//!
//! Defaults come from the central config (config.toml plus `CHECKERS_*`
//! environment overrides). CLI arguments take highest priority.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use engine_config::{load_config, CentralConfig};
use engine_core::Player;
use once_cell::sync::Lazy;
use search::{DfsConfig, MctsConfig, ScoringPolicy};
use tracing::level_filters::LevelFilter;

// Load central config once at startup
static CENTRAL_CONFIG: Lazy<CentralConfig> = Lazy::new(load_config);

fn default_strategy() -> Strategy {
    CENTRAL_CONFIG
        .common
        .strategy
        .parse()
        .unwrap_or(Strategy::Mcts)
}

fn default_log_level() -> String {
    CENTRAL_CONFIG.common.log_level.clone()
}

fn default_depth() -> usize {
    CENTRAL_CONFIG.dfs.max_depth
}

fn default_scoring() -> String {
    CENTRAL_CONFIG.dfs.scoring.clone()
}

fn default_budget_ms() -> u64 {
    CENTRAL_CONFIG.mcts.time_budget_ms
}

fn default_max_rollout_plies() -> u32 {
    CENTRAL_CONFIG.mcts.max_rollout_plies
}

fn default_exploration() -> f64 {
    CENTRAL_CONFIG.mcts.exploration_constant
}

/// Which search picks the move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    Dfs,
    Mcts,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Dfs => f.write_str("dfs"),
            Strategy::Mcts => f.write_str("mcts"),
        }
    }
}

impl FromStr for Strategy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dfs" => Ok(Strategy::Dfs),
            "mcts" => Ok(Strategy::Mcts),
            other => Err(anyhow!("unknown strategy '{}', expected dfs or mcts", other)),
        }
    }
}

#[derive(Parser, Debug, Clone)]
#[command(name = "checkers")]
#[command(about = "Choose a checkers move with depth-first search or MCTS")]
#[command(
    long_about = "Reads an 8x8 board (E empty, R/B men, K/C red/black kings), runs the
chosen search for the given player and prints the selected move.

Defaults are loaded from config.toml with CHECKERS_<SECTION>_<KEY> environment
overrides. CLI arguments take highest priority."
)]
pub struct Config {
    /// Board file; the opening position when omitted
    #[arg(long)]
    pub board: Option<PathBuf>,

    /// Player to move (red or black)
    #[arg(long, default_value_t = Player::Black)]
    pub player: Player,

    /// Search strategy (dfs or mcts)
    #[arg(long, default_value_t = default_strategy())]
    pub strategy: Strategy,

    /// RNG seed for reproducible tie-breaks and rollouts
    #[arg(long)]
    pub seed: Option<u64>,

    /// DFS ply depth (at least 1)
    #[arg(long, default_value_t = default_depth())]
    pub depth: usize,

    /// DFS leaf scoring (force_advantage or material_and_jumps)
    #[arg(long, default_value_t = default_scoring())]
    pub scoring: String,

    /// MCTS wall-clock budget in milliseconds
    #[arg(long, default_value_t = default_budget_ms())]
    pub budget_ms: u64,

    /// MCTS iteration cap in addition to the time budget
    #[arg(long)]
    pub max_iterations: Option<u32>,

    /// MCTS rollout ply cap
    #[arg(long, default_value_t = default_max_rollout_plies())]
    pub max_rollout_plies: u32,

    /// MCTS exploration constant
    #[arg(long, default_value_t = default_exploration())]
    pub exploration: f64,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value_t = default_log_level())]
    pub log_level: String,
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        if self.budget_ms == 0 {
            return Err(anyhow!("budget_ms must be greater than 0"));
        }

        if self.depth == 0 {
            return Err(anyhow!("depth must be at least 1"));
        }

        if !self.exploration.is_finite() || self.exploration < 0.0 {
            return Err(anyhow!(
                "exploration must be a non-negative number, got {}",
                self.exploration
            ));
        }

        self.scoring_policy()?;

        if self.log_level.parse::<LevelFilter>().is_err() {
            return Err(anyhow!(
                "invalid log level '{}', expected one of trace, debug, info, warn, error",
                self.log_level
            ));
        }

        Ok(())
    }

    /// Seed from the command line, else from the central config.
    pub fn seed(&self) -> Option<u64> {
        self.seed.or(CENTRAL_CONFIG.common.seed)
    }

    pub fn scoring_policy(&self) -> Result<ScoringPolicy> {
        self.scoring
            .parse::<ScoringPolicy>()
            .context("invalid --scoring")
    }

    pub fn dfs_config(&self) -> Result<DfsConfig> {
        Ok(DfsConfig::default()
            .with_max_depth(self.depth)
            .with_scoring(self.scoring_policy()?))
    }

    pub fn mcts_config(&self) -> MctsConfig {
        MctsConfig::default()
            .with_time_budget(Duration::from_millis(self.budget_ms))
            .with_exploration_constant(self.exploration)
            .with_max_rollout_plies(self.max_rollout_plies)
            .with_max_iterations(self.max_iterations.or(CENTRAL_CONFIG.mcts.max_iterations))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> Config {
        Config {
            board: None,
            player: Player::Black,
            strategy: Strategy::Dfs,
            seed: Some(1),
            depth: 5,
            scoring: "force_advantage".into(),
            budget_ms: 500,
            max_iterations: None,
            max_rollout_plies: 200,
            exploration: 0.7,
            log_level: "info".into(),
        }
    }

    #[test]
    fn test_validate_accepts_defaults() {
        assert!(base_config().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_budget() {
        let mut config = base_config();
        config.budget_ms = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_depth() {
        let mut config = base_config();
        config.depth = 0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("depth"));
    }

    #[test]
    fn test_validate_rejects_bad_scoring() {
        let mut config = base_config();
        config.scoring = "greedy".into();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_bad_log_level() {
        let mut config = base_config();
        config.log_level = "loud".into();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_negative_exploration() {
        let mut config = base_config();
        config.exploration = -1.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_search_configs() {
        let mut config = base_config();
        config.depth = 3;
        config.scoring = "material_and_jumps".into();
        config.budget_ms = 250;
        config.max_iterations = Some(99);

        let dfs = config.dfs_config().unwrap();
        assert_eq!(dfs.max_depth, 3);
        assert_eq!(dfs.scoring, ScoringPolicy::MaterialAndJumps);

        let mcts = config.mcts_config();
        assert_eq!(mcts.time_budget, Duration::from_millis(250));
        assert_eq!(mcts.max_iterations, Some(99));
        assert_eq!(mcts.max_rollout_plies, 200);
    }

    #[test]
    fn test_strategy_round_trip() {
        assert_eq!("DFS".parse::<Strategy>().unwrap(), Strategy::Dfs);
        assert_eq!(Strategy::Mcts.to_string().parse::<Strategy>().unwrap(), Strategy::Mcts);
        assert!("minimax".parse::<Strategy>().is_err());
    }

    #[test]
    fn test_parse_arguments() {
        let config = Config::try_parse_from([
            "checkers",
            "--player",
            "red",
            "--strategy",
            "dfs",
            "--seed",
            "7",
            "--depth",
            "2",
        ])
        .unwrap();
        assert_eq!(config.player, Player::Red);
        assert_eq!(config.strategy, Strategy::Dfs);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.depth, 2);
    }
}
