//! Configuration management for the tasklist application.
//!
//! This crate handles loading, validating, and persisting configuration,
//! and reading seed files that provide the initial task list.
//!
//! # Overview
//!
//! - [`config`]: Core configuration struct and loading logic
//! - [`persistence`]: Config file discovery, reading and writing
//! - [`seed`]: Seed file loading
//! - [`error`]: Error types for configuration operations
//!
//! # Configuration Sources (Priority)
//!
//! 1. The file named by `TASKLIST_CONFIG`
//! 2. Local config (`./tasklist.json5` or `./tasklist.json`)
//! 3. User config (`~/.config/tasklist/config.json5` or `~/.config/tasklist/config.json`)
//! 4. Built-in defaults
//!
//! # Examples
//!
//! ```no_run
//! use tasklist_config::Config;
//!
//! # fn example() -> tasklist_config::Result<()> {
//! let config = Config::load()?;
//! let seed = config.seed_entries()?;
//! println!("Starting with {} tasks", seed.len());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod persistence;
pub mod seed;

// Re-export primary types at crate root for convenience
pub use config::Config;
pub use error::{ConfigError, Result};
