//! Environment variable handling for configuration overrides.
//!
//! This module provides support for `PATHVIEW_*` environment variables that
//! override configuration file values.

use crate::config::schema::Config;
use crate::error::{Error, Result};
use crate::platform::Platform;
use std::env;

/// Overrides the platform whose path rules apply.
pub const PLATFORM_VAR: &str = "PATHVIEW_PLATFORM";

/// Workspace folders, in the OS path-list syntax (`:` or `;` separated).
pub const WORKSPACE_FOLDERS_VAR: &str = "PATHVIEW_WORKSPACE_FOLDERS";

/// The active document.
pub const ACTIVE_DOCUMENT_VAR: &str = "PATHVIEW_ACTIVE_DOCUMENT";

/// The fallback base directory.
pub const FALLBACK_BASE_VAR: &str = "PATHVIEW_FALLBACK_BASE";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use pathview::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// Empty variables are treated as unset.
    ///
    /// # Errors
    ///
    /// Returns an error if `PATHVIEW_PLATFORM` names an unknown platform or
    /// a variable is not valid Unicode.
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Some(value) = Self::var(PLATFORM_VAR)? {
            config.platform = Some(value.parse::<Platform>()?);
        }

        if let Some(value) = env::var_os(WORKSPACE_FOLDERS_VAR).filter(|v| !v.is_empty()) {
            let folders = env::split_paths(&value)
                .filter(|p| !p.as_os_str().is_empty())
                .map(|p| {
                    p.into_os_string()
                        .into_string()
                        .map_err(|_| Self::not_unicode(WORKSPACE_FOLDERS_VAR))
                })
                .collect::<Result<Vec<_>>>()?;
            config
                .workspace
                .get_or_insert_with(Default::default)
                .folders = folders;
        }

        if let Some(document) = Self::var(ACTIVE_DOCUMENT_VAR)? {
            config
                .workspace
                .get_or_insert_with(Default::default)
                .active_document = Some(document);
        }

        if let Some(base) = Self::var(FALLBACK_BASE_VAR)? {
            config.fallback_base = Some(base);
        }

        Ok(())
    }

    /// Read a variable, treating unset and empty the same.
    fn var(name: &str) -> Result<Option<String>> {
        match env::var(name) {
            Ok(value) if value.is_empty() => Ok(None),
            Ok(value) => Ok(Some(value)),
            Err(env::VarError::NotPresent) => Ok(None),
            Err(env::VarError::NotUnicode(_)) => Err(Self::not_unicode(name)),
        }
    }

    fn not_unicode(name: &str) -> Error {
        Error::Validation {
            field: name.into(),
            message: "Value is not valid Unicode".into(),
        }
    }
}
