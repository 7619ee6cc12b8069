//! Configuration system for pathview.
//!
//! This module provides layered configuration with support for:
//! - YAML configuration files (user config and an explicit file)
//! - Environment variable overrides
//! - Programmatic configuration via builder pattern
//!
//! # Configuration Precedence
//!
//! Configuration is merged from multiple sources with the following precedence
//! (highest to lowest):
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (`PATHVIEW_*`)
//! 3. Explicit config file (via `ConfigBuilder::with_config_file`)
//! 4. User config (`~/.pathview/config.yaml`)
//! 5. Built-in defaults
//!
//! # Examples
//!
//! Basic usage with defaults:
//!
//! ```no_run
//! use pathview::config::ConfigBuilder;
//!
//! let config = ConfigBuilder::new().build().unwrap();
//! println!("Using {} path rules", config.platform_or_current());
//! ```
//!
//! Programmatic configuration:
//!
//! ```
//! use pathview::config::{Config, ConfigBuilder};
//! use pathview::workspace::{resolve_default_base, StaticWorkspace};
//! use pathview::Platform;
//!
//! let custom = Config {
//!     platform: Some(Platform::Posix),
//!     workspace: Some(StaticWorkspace::new(vec!["/work/api".to_string()])),
//!     ..Default::default()
//! };
//!
//! let config = ConfigBuilder::new()
//!     .skip_user_config()
//!     .skip_env()
//!     .with_config(custom)
//!     .build()
//!     .unwrap();
//!
//! let base = resolve_default_base(&config.workspace(), "/", config.platform_or_current());
//! assert_eq!(base, "/work/api");
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;

// Re-export key types at module root
pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{ConfigLoader, ConfigSource};
pub use merger::ConfigMerger;
pub use schema::Config;
