//! Default configuration values loaded from config.defaults.toml.
//!
//! The TOML file is embedded at compile time so the binary and the
//! documented defaults can never drift apart.

use once_cell::sync::Lazy;
use serde::Deserialize;

/// The embedded defaults TOML file (loaded at compile time)
const DEFAULTS_TOML: &str = include_str!("../../../config.defaults.toml");

/// Parsed defaults structure (parsed once at first use)
static DEFAULTS: Lazy<DefaultsConfig> = Lazy::new(|| {
    toml::from_str(DEFAULTS_TOML).expect("config.defaults.toml should be valid TOML")
});

// ============================================================================
// Internal structs for parsing config.defaults.toml
// ============================================================================

#[derive(Debug, Deserialize)]
struct DefaultsConfig {
    common: CommonDefaults,
    dfs: DfsDefaults,
    mcts: MctsDefaults,
}

#[derive(Debug, Deserialize)]
struct CommonDefaults {
    log_level: String,
    strategy: String,
}

#[derive(Debug, Deserialize)]
struct DfsDefaults {
    max_depth: usize,
    scoring: String,
}

#[derive(Debug, Deserialize)]
struct MctsDefaults {
    time_budget_ms: u64,
    exploration_constant: f64,
    max_rollout_plies: u32,
}

// ============================================================================
// Public accessor functions
// ============================================================================

// Common
pub fn log_level() -> &'static str {
    &DEFAULTS.common.log_level
}
pub fn strategy() -> &'static str {
    &DEFAULTS.common.strategy
}

// DFS
pub fn max_depth() -> usize {
    DEFAULTS.dfs.max_depth
}
pub fn scoring() -> &'static str {
    &DEFAULTS.dfs.scoring
}

// MCTS
pub fn time_budget_ms() -> u64 {
    DEFAULTS.mcts.time_budget_ms
}
pub fn exploration_constant() -> f64 {
    DEFAULTS.mcts.exploration_constant
}
pub fn max_rollout_plies() -> u32 {
    DEFAULTS.mcts.max_rollout_plies
}
