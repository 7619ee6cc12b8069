//! Utility functions for CLI operations.
//!
//! This module provides common utility functions used across CLI commands:
//! configuration loading and default base resolution.

use crate::error::CliError;
use clap::Args;
use pathview::{resolve_default_base, Config, ConfigBuilder, Platform, StaticWorkspace};
use std::env;
use std::path::PathBuf;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Default)]
#[allow(dead_code)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Additional configuration file.
    pub config: Option<PathBuf>,

    /// Platform override.
    pub platform: Option<Platform>,
}

/// Workspace context given on the command line.
#[derive(Args, Debug, Clone, Default)]
pub struct WorkspaceArgs {
    /// An open workspace folder (repeatable, in priority order)
    #[arg(long = "workspace-folder", value_name = "PATH")]
    pub workspace_folders: Vec<String>,

    /// The document currently being edited
    #[arg(long, value_name = "PATH")]
    pub active_document: Option<String>,
}

impl WorkspaceArgs {
    /// The flags as a configuration layer, `None` if no flag was given.
    fn as_workspace(&self) -> Option<StaticWorkspace> {
        if self.workspace_folders.is_empty() && self.active_document.is_none() {
            return None;
        }
        Some(StaticWorkspace {
            folders: self.workspace_folders.clone(),
            active_document: self.active_document.clone(),
        })
    }
}

/// Load layered configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Command-line flags (highest priority)
/// 2. Environment variables
/// 3. The `--config` file
/// 4. The user config file
/// 5. Built-in defaults (lowest priority)
pub fn load_configuration(
    global: &GlobalOptions,
    workspace: Option<&WorkspaceArgs>,
) -> Result<Config, CliError> {
    let mut builder = ConfigBuilder::new();
    if let Some(path) = &global.config {
        builder = builder.with_config_file(path);
    }

    let overrides = Config {
        platform: global.platform,
        workspace: workspace.and_then(WorkspaceArgs::as_workspace),
        ..Default::default()
    };

    let (config, files) = builder
        .with_config(overrides)
        .build_with_sources()
        .map_err(|e| CliError::Config(e.to_string()))?;

    for file in &files {
        log::info!("Using configuration file {}", file.display());
    }

    log::info!("Applying {} path rules", config.platform_or_current());
    Ok(config)
}

/// The base used when the workspace does not supply one.
///
/// The configured fallback base, or the current working directory.
pub fn fallback_base(config: &Config) -> Result<String, CliError> {
    if let Some(base) = &config.fallback_base {
        return Ok(base.clone());
    }
    let cwd = env::current_dir()?;
    Ok(cwd.to_string_lossy().into_owned())
}

/// Resolve the default base directory from configuration.
pub fn default_base(config: &Config) -> Result<String, CliError> {
    let fallback = fallback_base(config)?;
    let base = resolve_default_base(&config.workspace(), &fallback, config.platform_or_current());
    log::info!("Default base is {base}");
    Ok(base)
}
