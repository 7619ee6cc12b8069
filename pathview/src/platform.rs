//! Platform path conventions.
//!
//! A [`Platform`] carries the two rules that differ between operating
//! systems when reasoning about path strings: which characters separate
//! components, and whether names compare case-sensitively. Every comparison
//! in this crate takes a platform explicitly; [`Platform::current`] is only
//! consulted by the convenience functions at the crate root.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Path conventions of an operating system family.
///
/// # Examples
///
/// ```
/// use pathview::Platform;
///
/// assert!(Platform::Windows.is_separator('\\'));
/// assert!(Platform::Windows.is_separator('/'));
/// assert!(!Platform::Posix.is_separator('\\'));
///
/// assert!(!Platform::Windows.is_case_sensitive());
/// assert!(Platform::Posix.is_case_sensitive());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// Windows: `\` and `/` are separators, names are case-insensitive.
    Windows,
    /// POSIX: only `/` is a separator, names are case-sensitive.
    Posix,
}

impl Platform {
    /// The platform of the running process.
    #[must_use]
    pub const fn current() -> Self {
        if cfg!(windows) {
            Self::Windows
        } else {
            Self::Posix
        }
    }

    /// Check whether `c` separates path components on this platform.
    #[must_use]
    pub const fn is_separator(self, c: char) -> bool {
        match self {
            Self::Windows => c == '/' || c == '\\',
            Self::Posix => c == '/',
        }
    }

    /// Check whether names compare case-sensitively on this platform.
    #[must_use]
    pub const fn is_case_sensitive(self) -> bool {
        matches!(self, Self::Posix)
    }

    /// Compare two path fragments under this platform's case rule.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathview::Platform;
    ///
    /// assert!(Platform::Windows.names_equal("Users", "USERS"));
    /// assert!(!Platform::Posix.names_equal("Users", "USERS"));
    /// ```
    #[must_use]
    pub fn names_equal(self, a: &str, b: &str) -> bool {
        if self.is_case_sensitive() {
            a == b
        } else {
            a.chars()
                .flat_map(char::to_lowercase)
                .eq(b.chars().flat_map(char::to_lowercase))
        }
    }

    /// The lowercase name used in configuration and on the command line.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Windows => "windows",
            Self::Posix => "posix",
        }
    }
}

impl Default for Platform {
    fn default() -> Self {
        Self::current()
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = Error;

    /// Parses a platform name.
    ///
    /// Accepts `windows`/`win32` and `posix`/`unix`/`linux`/`macos`,
    /// case-insensitively.
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "windows" | "win32" => Ok(Self::Windows),
            "posix" | "unix" | "linux" | "macos" => Ok(Self::Posix),
            _ => Err(Error::InvalidPlatform {
                value: s.to_string(),
            }),
        }
    }
}
