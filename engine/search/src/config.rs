//! Search configuration parameters.

use std::time::Duration;

use crate::scoring::ScoringPolicy;

/// Configuration for the full-width depth-first search.
#[derive(Debug, Clone, PartialEq)]
pub struct DfsConfig {
    /// Plies to enumerate below the root. Every line is expanded to this
    /// depth unless the game ends first. Must be at least 1; a search with
    /// depth 0 fails with [`SearchError::ZeroDepth`](crate::SearchError::ZeroDepth).
    pub max_depth: usize,

    /// Leaf evaluation maximised by the search.
    pub scoring: ScoringPolicy,
}

impl Default for DfsConfig {
    fn default() -> Self {
        Self {
            max_depth: 5,
            scoring: ScoringPolicy::ForceAdvantage,
        }
    }
}

impl DfsConfig {
    /// Create a shallow config for testing.
    pub fn for_testing() -> Self {
        Self {
            max_depth: 3,
            ..Self::default()
        }
    }

    /// Builder pattern: set search depth (at least 1).
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    /// Builder pattern: set leaf scoring.
    pub fn with_scoring(mut self, scoring: ScoringPolicy) -> Self {
        self.scoring = scoring;
        self
    }
}

/// Configuration for Monte Carlo Tree Search.
#[derive(Debug, Clone, PartialEq)]
pub struct MctsConfig {
    /// Wall-clock budget per move. Checked between iterations, so a search
    /// overruns by at most one iteration.
    pub time_budget: Duration,

    /// Exploration constant `C` in UCB1.
    pub exploration_constant: f64,

    /// Maximum plies per random rollout.
    pub max_rollout_plies: u32,

    /// Optional iteration cap applied alongside the time budget.
    pub max_iterations: Option<u32>,
}

impl Default for MctsConfig {
    fn default() -> Self {
        Self {
            time_budget: Duration::from_millis(500),
            exploration_constant: 0.7,
            max_rollout_plies: 200,
            max_iterations: None,
        }
    }
}

impl MctsConfig {
    /// Create a fast config for testing.
    pub fn for_testing() -> Self {
        Self {
            time_budget: Duration::from_secs(10),
            max_iterations: Some(200),
            ..Self::default()
        }
    }

    /// Builder pattern: set time budget.
    pub fn with_time_budget(mut self, budget: Duration) -> Self {
        self.time_budget = budget;
        self
    }

    /// Builder pattern: set exploration constant.
    pub fn with_exploration_constant(mut self, c: f64) -> Self {
        self.exploration_constant = c;
        self
    }

    /// Builder pattern: set rollout ply cap.
    pub fn with_max_rollout_plies(mut self, plies: u32) -> Self {
        self.max_rollout_plies = plies;
        self
    }

    /// Builder pattern: cap iterations (`None` for time budget only).
    pub fn with_max_iterations(mut self, n: Option<u32>) -> Self {
        self.max_iterations = n;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_dfs_config() {
        let config = DfsConfig::default();
        assert_eq!(config.max_depth, 5);
        assert_eq!(config.scoring, ScoringPolicy::ForceAdvantage);
    }

    #[test]
    fn test_default_mcts_config() {
        let config = MctsConfig::default();
        assert_eq!(config.time_budget, Duration::from_millis(500));
        assert!((config.exploration_constant - 0.7).abs() < 1e-12);
        assert_eq!(config.max_rollout_plies, 200);
        assert!(config.max_iterations.is_none());
    }

    #[test]
    fn test_builder_pattern() {
        let dfs = DfsConfig::default()
            .with_max_depth(2)
            .with_scoring(ScoringPolicy::MaterialAndJumps);
        assert_eq!(dfs.max_depth, 2);
        assert_eq!(dfs.scoring, ScoringPolicy::MaterialAndJumps);

        let mcts = MctsConfig::default()
            .with_time_budget(Duration::from_millis(50))
            .with_exploration_constant(1.4)
            .with_max_rollout_plies(20)
            .with_max_iterations(Some(10));
        assert_eq!(mcts.time_budget, Duration::from_millis(50));
        assert!((mcts.exploration_constant - 1.4).abs() < 1e-12);
        assert_eq!(mcts.max_rollout_plies, 20);
        assert_eq!(mcts.max_iterations, Some(10));
    }

    #[test]
    fn test_testing_config_is_bounded() {
        assert!(MctsConfig::for_testing().max_iterations.is_some());
        assert!(DfsConfig::for_testing().max_depth < DfsConfig::default().max_depth);
    }
}
