//! CLI command implementations.
//!
//! - `normalize`: Print paths in canonical form
//! - `equal`: Compare two paths under the platform rules
//! - `readable`: Print a path relative to a base directory
//! - `show_base`: Print the resolved default base directory
//! - `validate`: Validate a configuration file

pub mod equal;
pub mod normalize;
pub mod readable;
pub mod show_base;
pub mod validate;

pub use equal::EqualCommand;
pub use normalize::NormalizeCommand;
pub use readable::ReadableCommand;
pub use show_base::ShowBaseCommand;
pub use validate::ValidateCommand;
