//! Centralized configuration loading from config.toml.
//!
//! This crate provides the configuration structs and loading logic used by
//! the `checkers` binary. Search crates keep their own typed configs; the
//! binary maps these values onto them.
//!
//! # Configuration Priority
//!
//! Settings are loaded with the following priority (highest to lowest):
//! 1. Environment variables (`CHECKERS_<SECTION>_<KEY>`)
//! 2. config.toml file
//! 3. Built-in defaults (`config.defaults.toml`, embedded at compile time)
//!
//! # Environment Variable Override Pattern
//!
//! ```text
//! CHECKERS_<SECTION>_<KEY>=value
//!
//! Examples:
//!     CHECKERS_COMMON_LOG_LEVEL=debug
//!     CHECKERS_COMMON_SEED=42
//!     CHECKERS_DFS_MAX_DEPTH=3
//!     CHECKERS_MCTS_TIME_BUDGET_MS=1000
//! ```

mod defaults;
mod loader;
mod structs;

pub use defaults::*;
pub use loader::{
    apply_env_overrides, load_config, load_from_path, ConfigError, CONFIG_ENV_VAR,
    CONFIG_SEARCH_PATHS,
};
pub use structs::*;
