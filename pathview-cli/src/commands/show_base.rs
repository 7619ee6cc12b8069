//! Command to show the resolved default base directory.

use crate::error::CliError;
use crate::utils::{default_base, load_configuration, GlobalOptions, WorkspaceArgs};
use clap::Args;

/// Show the base directory that `readable` uses when `--base` is omitted.
#[derive(Args)]
pub struct ShowBaseCommand {
    #[command(flatten)]
    pub workspace: WorkspaceArgs,
}

impl ShowBaseCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global, Some(&self.workspace))?;
        println!("{}", default_base(&config)?);
        Ok(())
    }
}
