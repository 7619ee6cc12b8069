//! Path normalization, comparison, and readable rendering.
//!
//! Everything in this module works on path *strings* and never touches the
//! filesystem. The pieces build on each other:
//!
//! ## Separator normalization
//!
//! [`normalize::normalize`] rewrites backslashes to forward slashes, leaving
//! Windows verbatim (`\\?\`) paths alone. It is the canonical form used for
//! display.
//!
//! ## Structural normalization
//!
//! [`StructuredPath`] splits a path into a root and segments, resolving `.`
//! and `..` and collapsing redundant separators. Root parsing follows the
//! [`Platform`](crate::Platform): drive letters and UNC shares exist only on
//! Windows, and backslash is a separator only there.
//!
//! ## Comparison
//!
//! [`PathComparator`] decides equality and containment on structured paths,
//! case-insensitively on Windows and case-sensitively on POSIX.
//!
//! ```
//! use pathview::path::PathComparator;
//! use pathview::Platform;
//!
//! let cmp = PathComparator::new(Platform::Windows);
//! assert!(cmp.equal(Some(r"C:\Users\Test\..\Test"), Some("c:/users/test/")));
//! ```
//!
//! ## Readable rendering
//!
//! [`ReadablePathFormatter`] picks the shortest display form of a target
//! relative to a base directory.
//!
//! ```
//! use pathview::path::ReadablePathFormatter;
//! use pathview::Platform;
//!
//! let fmt = ReadablePathFormatter::new(Platform::Posix);
//! assert_eq!(fmt.format("/home/user/project", Some("/home/user/project/src/lib.rs")), "src/lib.rs");
//! ```

pub mod compare;
pub mod normalize;
pub mod readable;
pub mod relationship;
mod structure;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

// Re-export key types
pub use compare::{paths_equal, PathComparator};
pub use readable::{readable_path, ReadablePathFormatter};
pub use relationship::PathRelationship;
pub use structure::StructuredPath;
