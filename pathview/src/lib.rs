#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # pathview
//!
//! Cross-platform path normalization, comparison, and readable rendering.
//!
//! Paths are handled as strings under an explicit [`Platform`]: Windows rules
//! (backslash separators, drive letters, UNC shares, case-insensitive names)
//! or POSIX rules. Nothing here touches the filesystem.
//!
//! ## Core Types
//!
//! - [`normalize`]: canonical forward-slash form for display
//! - [`PathComparator`] and [`paths_equal`]: structural, case-aware equality
//! - [`ReadablePathFormatter`] and [`readable_path`]: short display forms
//! - [`WorkspaceHost`] and [`resolve_default_base`]: picking a base directory
//! - [`Config`] and [`ConfigBuilder`]: layered configuration
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use pathview::{normalize, PathComparator, Platform, ReadablePathFormatter};
//!
//! assert_eq!(normalize(r"C:\Users\test"), "C:/Users/test");
//!
//! let cmp = PathComparator::new(Platform::Windows);
//! assert!(cmp.equal(Some(r"C:\Users\Test"), Some(r"c:\users\test")));
//!
//! let fmt = ReadablePathFormatter::new(Platform::Posix);
//! assert_eq!(fmt.format("/Users/test/project", None), "project");
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod path;
pub mod platform;
pub mod workspace;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use path::normalize::normalize;
pub use path::{
    paths_equal, readable_path, PathComparator, PathRelationship, ReadablePathFormatter,
    StructuredPath,
};
pub use platform::Platform;
pub use workspace::{resolve_default_base, StaticWorkspace, WorkspaceHost};
