//! Command to compare two paths.

use crate::error::CliError;
use crate::utils::{load_configuration, GlobalOptions};
use clap::Args;
use pathview::PathComparator;

/// Check whether two paths denote the same location.
///
/// Prints `true` or `false` and exits with status 1 when the assertion
/// fails. An omitted path is an absent value: two absent paths are equal,
/// one absent path never is.
#[derive(Args)]
pub struct EqualCommand {
    /// First path
    #[arg(value_name = "A")]
    pub a: Option<String>,

    /// Second path
    #[arg(value_name = "B")]
    pub b: Option<String>,

    /// Invert the assertion (fail if the paths are equal)
    #[arg(long)]
    pub not: bool,
}

impl EqualCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global, None)?;
        let comparator = PathComparator::new(config.platform_or_current());

        let equal = comparator.equal(self.a.as_deref(), self.b.as_deref());
        if !global.quiet {
            println!("{equal}");
        }

        if equal != self.not {
            return Ok(());
        }

        let describe = |p: &Option<String>| p.clone().unwrap_or_else(|| "<none>".to_string());
        let (a, b) = (describe(&self.a), describe(&self.b));
        let msg = if self.not {
            format!("Assertion failed: {a} and {b} are the same path")
        } else {
            format!("Assertion failed: {a} and {b} are different paths")
        };
        Err(CliError::SemanticFailure(msg))
    }
}
