//! Configuration struct definitions.
//!
//! All config structs with serde deserialization support and default values.

use crate::defaults;
use serde::Deserialize;

// ============================================================================
// Serde default functions (required for #[serde(default = "...")])
// These call the accessor functions from defaults module
// ============================================================================

fn d_log_level() -> String {
    defaults::log_level().into()
}
fn d_strategy() -> String {
    defaults::strategy().into()
}
fn d_max_depth() -> usize {
    defaults::max_depth()
}
fn d_scoring() -> String {
    defaults::scoring().into()
}
fn d_time_budget_ms() -> u64 {
    defaults::time_budget_ms()
}
fn d_exploration_constant() -> f64 {
    defaults::exploration_constant()
}
fn d_max_rollout_plies() -> u32 {
    defaults::max_rollout_plies()
}

// ============================================================================
// Configuration Structs
// ============================================================================

/// Root configuration structure matching config.toml
#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
pub struct CentralConfig {
    #[serde(default)]
    pub common: CommonConfig,
    #[serde(default)]
    pub dfs: DfsConfig,
    #[serde(default)]
    pub mcts: MctsConfig,
}

/// Settings shared by every strategy
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct CommonConfig {
    #[serde(default = "d_log_level")]
    pub log_level: String,
    /// `dfs` or `mcts`
    #[serde(default = "d_strategy")]
    pub strategy: String,
    /// Fixed RNG seed; entropy when absent.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for CommonConfig {
    fn default() -> Self {
        Self {
            log_level: defaults::log_level().into(),
            strategy: defaults::strategy().into(),
            seed: None,
        }
    }
}

/// Depth-first search settings
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct DfsConfig {
    #[serde(default = "d_max_depth")]
    pub max_depth: usize,
    /// `force_advantage` or `material_and_jumps`
    #[serde(default = "d_scoring")]
    pub scoring: String,
}

impl Default for DfsConfig {
    fn default() -> Self {
        Self {
            max_depth: defaults::max_depth(),
            scoring: defaults::scoring().into(),
        }
    }
}

/// Monte-Carlo search settings
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct MctsConfig {
    #[serde(default = "d_time_budget_ms")]
    pub time_budget_ms: u64,
    #[serde(default = "d_exploration_constant")]
    pub exploration_constant: f64,
    #[serde(default = "d_max_rollout_plies")]
    pub max_rollout_plies: u32,
    #[serde(default)]
    pub max_iterations: Option<u32>,
}

impl Default for MctsConfig {
    fn default() -> Self {
        Self {
            time_budget_ms: defaults::time_budget_ms(),
            exploration_constant: defaults::exploration_constant(),
            max_rollout_plies: defaults::max_rollout_plies(),
            max_iterations: None,
        }
    }
}
