//! Configuration schema definitions.
//!
//! This module defines the configuration structure for pathview: the
//! platform whose path rules apply, the workspace context used to pick a
//! default base directory, and the fallback base.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::platform::Platform;
use crate::workspace::StaticWorkspace;

/// Complete configuration structure.
///
/// All fields are optional so that configuration can be layered from several
/// sources; see [`ConfigMerger`](crate::config::ConfigMerger).
///
/// # Examples
///
/// ```
/// use pathview::config::Config;
/// use pathview::Platform;
///
/// let config: Config = serde_yaml::from_str(
///     "platform: windows\nworkspace:\n  folders:\n    - 'C:\\work\\api'\n",
/// ).unwrap();
/// assert_eq!(config.platform, Some(Platform::Windows));
/// assert_eq!(config.workspace().folders, vec![r"C:\work\api"]);
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Path rules to apply instead of the running platform's.
    pub platform: Option<Platform>,

    /// Open workspace folders and the active document.
    pub workspace: Option<StaticWorkspace>,

    /// Base directory used when the workspace gives no answer.
    pub fallback_base: Option<String>,
}

impl Config {
    /// The configured platform, or the running platform if none is set.
    #[must_use]
    pub fn platform_or_current(&self) -> Platform {
        self.platform.unwrap_or_else(Platform::current)
    }

    /// The configured workspace context, empty if none is set.
    #[must_use]
    pub fn workspace(&self) -> StaticWorkspace {
        self.workspace.clone().unwrap_or_default()
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns a validation error if a workspace folder, the active
    /// document, or the fallback base is an empty string.
    pub fn validate(&self) -> Result<()> {
        if let Some(workspace) = &self.workspace {
            if let Some(index) = workspace.folders.iter().position(|f| f.trim().is_empty()) {
                return Err(Error::Validation {
                    field: format!("workspace.folders[{index}]"),
                    message: "Workspace folder cannot be empty".to_string(),
                });
            }
            if workspace
                .active_document
                .as_deref()
                .is_some_and(|d| d.trim().is_empty())
            {
                return Err(Error::Validation {
                    field: "workspace.active_document".to_string(),
                    message: "Active document cannot be empty".to_string(),
                });
            }
        }

        if self
            .fallback_base
            .as_deref()
            .is_some_and(|b| b.trim().is_empty())
        {
            return Err(Error::Validation {
                field: "fallback_base".to_string(),
                message: "Fallback base cannot be empty".to_string(),
            });
        }

        Ok(())
    }
}
