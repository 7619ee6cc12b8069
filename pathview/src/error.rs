//! Error types for the pathview library.
//!
//! The path functions themselves are total and never fail. Errors only come
//! from the surrounding machinery: parsing platform names, reading and
//! parsing configuration files, and validating environment overrides.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a pathview error.
///
/// # Examples
///
/// ```
/// use pathview::{Platform, Result};
///
/// fn parse_platform(name: &str) -> Result<Platform> {
///     name.parse()
/// }
///
/// assert!(parse_platform("posix").is_ok());
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the pathview library.
#[derive(Debug, Error)]
pub enum Error {
    /// An unrecognized platform name was provided.
    #[error("invalid platform '{value}': expected 'windows' or 'posix'")]
    InvalidPlatform {
        /// The rejected platform name.
        value: String,
    },

    /// A configuration file could not be parsed.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// An explicitly requested configuration file does not exist.
    #[error("configuration file not found: {}", path.display())]
    ConfigNotFound {
        /// The missing configuration file.
        path: PathBuf,
    },
}

impl Error {
    /// Check if this error indicates a missing file.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathview::Error;
    /// use std::path::PathBuf;
    ///
    /// let err = Error::ConfigNotFound { path: PathBuf::from("/missing.yaml") };
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::ConfigNotFound { .. } => true,
            Self::Io(e) => e.kind() == std::io::ErrorKind::NotFound,
            _ => false,
        }
    }

    /// Check if this error came from configuration handling.
    #[must_use]
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            Self::Configuration(_) | Self::Validation { .. } | Self::ConfigNotFound { .. }
        )
    }
}
