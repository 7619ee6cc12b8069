//! Configuration file discovery and loading.
//!
//! pathview reads at most two files: the user config at
//! `~/.pathview/config.yaml` and an explicitly named file.

use crate::config::schema::Config;
use crate::error::{Error, Result};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Precedence of the user configuration file.
pub const USER_PRECEDENCE: u8 = 1;

/// Precedence of an explicitly named configuration file.
pub const EXPLICIT_PRECEDENCE: u8 = 2;

/// Configuration source with its precedence level.
///
/// Lower precedence values are overridden by higher ones.
///
/// # Examples
///
/// ```
/// use pathview::config::ConfigSource;
/// use std::path::PathBuf;
///
/// // User config has lowest precedence
/// let user_config = ConfigSource {
///     path: PathBuf::from("~/.pathview/config.yaml"),
///     precedence: 1,
///     config: Default::default(),
/// };
/// ```
#[derive(Debug, Clone)]
pub struct ConfigSource {
    /// Path to the configuration file.
    pub path: PathBuf,
    /// Precedence level (higher values take priority).
    pub precedence: u8,
    /// Parsed configuration.
    pub config: Config,
}

/// Loads configuration from files.
///
/// # Examples
///
/// ```no_run
/// use pathview::config::ConfigLoader;
///
/// if let Some(source) = ConfigLoader::load_user_config(None).unwrap() {
///     println!("Loaded {}", source.path.display());
/// }
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load the user configuration file, if it exists.
    ///
    /// If `config_dir` is provided, loads from `{config_dir}/config.yaml`
    /// instead of the default location.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined, or if
    /// the file exists but cannot be read or parsed.
    pub fn load_user_config(config_dir: Option<&Path>) -> Result<Option<ConfigSource>> {
        let config_path = match config_dir {
            Some(dir) => dir.join("config.yaml"),
            None => Self::user_config_path()?,
        };

        if !config_path.exists() {
            log::debug!("no user config at {}", config_path.display());
            return Ok(None);
        }

        let config = Self::load_file(&config_path)?;
        Ok(Some(ConfigSource {
            path: config_path,
            precedence: USER_PRECEDENCE,
            config,
        }))
    }

    /// Load an explicitly named configuration file.
    ///
    /// Unlike the user config, the file must exist.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigNotFound`] if the file does not exist, or an
    /// error if it cannot be read or parsed.
    pub fn load_explicit(path: &Path) -> Result<ConfigSource> {
        let config = Self::load_file(path)?;
        Ok(ConfigSource {
            path: path.to_path_buf(),
            precedence: EXPLICIT_PRECEDENCE,
            config,
        })
    }

    /// Load and parse a YAML configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigNotFound`] if the file does not exist,
    /// [`Error::Io`] if it cannot be read, or [`Error::Configuration`] if
    /// the YAML is invalid.
    pub fn load_file(path: &Path) -> Result<Config> {
        let contents = fs::read_to_string(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => Error::ConfigNotFound {
                path: path.to_path_buf(),
            },
            _ => Error::Io(e),
        })?;

        log::debug!("loaded configuration from {}", path.display());
        Ok(serde_yaml::from_str(&contents)?)
    }

    /// Get the user config file path, `~/.pathview/config.yaml`.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn user_config_path() -> Result<PathBuf> {
        let home = home::home_dir().ok_or_else(|| Error::Validation {
            field: "home".into(),
            message: "Could not determine home directory".into(),
        })?;
        Ok(home.join(".pathview").join("config.yaml"))
    }
}
