//! Layered configuration assembly.

use std::path::{Path, PathBuf};

use crate::config::environment::EnvironmentConfig;
use crate::config::loader::{ConfigLoader, ConfigSource};
use crate::config::merger::ConfigMerger;
use crate::config::schema::Config;
use crate::error::Result;

/// Builds a [`Config`] from files, the environment, and overrides.
///
/// Sources are applied lowest precedence first: user config, explicit
/// config file, environment variables, then programmatic overrides.
///
/// # Examples
///
/// ```
/// use pathview::config::{Config, ConfigBuilder};
/// use pathview::Platform;
///
/// let config = ConfigBuilder::new()
///     .skip_user_config()
///     .skip_env()
///     .with_config(Config {
///         platform: Some(Platform::Windows),
///         ..Default::default()
///     })
///     .build()
///     .unwrap();
///
/// assert_eq!(config.platform, Some(Platform::Windows));
/// ```
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config_file: Option<PathBuf>,
    user_config_dir: Option<PathBuf>,
    skip_user_config: bool,
    skip_env: bool,
    overrides: Option<Config>,
}

impl ConfigBuilder {
    /// Create a builder that reads the user config and the environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Also load this file, above the user config. The file must exist.
    #[must_use]
    pub fn with_config_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_file = Some(path.into());
        self
    }

    /// Read the user config from `{dir}/config.yaml` instead of
    /// `~/.pathview/config.yaml`.
    #[must_use]
    pub fn with_user_config_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.user_config_dir = Some(dir.into());
        self
    }

    /// Do not read the user config.
    #[must_use]
    pub fn skip_user_config(mut self) -> Self {
        self.skip_user_config = true;
        self
    }

    /// Do not apply `PATHVIEW_*` environment variables.
    #[must_use]
    pub fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Apply these values last, over every other source.
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.overrides = Some(config);
        self
    }

    /// Load, merge, and validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a file cannot be loaded, an environment variable
    /// is invalid, or the merged configuration fails validation.
    pub fn build(self) -> Result<Config> {
        self.build_with_sources().map(|(config, _)| config)
    }

    /// Like [`build`](Self::build), also returning the files that were read,
    /// in precedence order.
    ///
    /// # Errors
    ///
    /// Same as [`build`](Self::build).
    pub fn build_with_sources(self) -> Result<(Config, Vec<PathBuf>)> {
        let sources = self.file_sources()?;
        let paths = sources.iter().map(|source| source.path.clone()).collect();
        let mut config = ConfigMerger::merge(sources);

        if !self.skip_env {
            EnvironmentConfig::apply_overrides(&mut config)?;
        }

        if let Some(overrides) = &self.overrides {
            ConfigMerger::merge_into(&mut config, overrides);
        }

        config.validate()?;
        Ok((config, paths))
    }

    /// The configuration files that will be read, in precedence order.
    ///
    /// # Errors
    ///
    /// Returns an error if a file cannot be loaded.
    pub fn file_sources(&self) -> Result<Vec<ConfigSource>> {
        let mut sources = Vec::new();

        if !self.skip_user_config {
            let dir = self.user_config_dir.as_deref();
            if let Some(source) = ConfigLoader::load_user_config(dir)? {
                sources.push(source);
            }
        }

        if let Some(path) = self.config_file.as_deref() {
            sources.push(ConfigLoader::load_explicit(path)?);
        }

        Ok(sources)
    }

    /// The explicit config file, if one was set.
    #[must_use]
    pub fn config_file(&self) -> Option<&Path> {
        self.config_file.as_deref()
    }
}
