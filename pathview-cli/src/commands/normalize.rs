//! Command to print paths in canonical form.

use crate::error::CliError;
use crate::utils::{load_configuration, GlobalOptions};
use clap::Args;
use pathview::{normalize, StructuredPath};

/// Print each path with forward-slash separators, one per line.
#[derive(Args)]
pub struct NormalizeCommand {
    /// Paths to normalize
    #[arg(value_name = "PATH", required = true)]
    pub paths: Vec<String>,

    /// Also resolve `.` and `..` segments and redundant separators
    #[arg(long)]
    pub structural: bool,
}

impl NormalizeCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        if !self.structural {
            for path in &self.paths {
                println!("{}", normalize(path));
            }
            return Ok(());
        }

        let platform = load_configuration(global, None)?.platform_or_current();
        for path in &self.paths {
            println!("{}", StructuredPath::parse(path, platform).to_canonical());
        }
        Ok(())
    }
}
