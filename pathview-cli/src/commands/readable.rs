//! Command to print a path relative to a base directory.

use crate::error::CliError;
use crate::utils::{default_base, load_configuration, GlobalOptions, WorkspaceArgs};
use clap::{Args, ValueEnum};
use pathview::ReadablePathFormatter;
use serde::Serialize;

/// Print the shortest readable form of a path.
///
/// Without `--base`, the base is resolved from the workspace context, and
/// falls back to the configured fallback base or the working directory.
#[derive(Args)]
pub struct ReadableCommand {
    /// Path to display; defaults to the base itself
    #[arg(value_name = "TARGET")]
    pub target: Option<String>,

    /// Directory to display the path relative to
    #[arg(long, value_name = "PATH")]
    pub base: Option<String>,

    #[command(flatten)]
    pub workspace: WorkspaceArgs,

    /// Output format
    #[arg(long, value_enum, default_value = "text", ignore_case = true)]
    pub format: OutputFormat,
}

/// Output format for the readable command.
#[derive(Clone, Copy, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// The readable path alone
    Text,
    /// A JSON object with the base, target, and readable path
    Json,
}

#[derive(Serialize)]
struct ReadableOutput<'a> {
    base: &'a str,
    target: Option<&'a str>,
    readable: &'a str,
}

impl ReadableCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global, Some(&self.workspace))?;

        let base = match self.base {
            Some(base) => base,
            None => default_base(&config)?,
        };

        let formatter = ReadablePathFormatter::new(config.platform_or_current());
        let readable = formatter.format(&base, self.target.as_deref());

        match self.format {
            OutputFormat::Text => println!("{readable}"),
            OutputFormat::Json => {
                let output = ReadableOutput {
                    base: &base,
                    target: self.target.as_deref(),
                    readable: &readable,
                };
                let json = serde_json::to_string_pretty(&output)
                    .map_err(|e| CliError::Io(e.into()))?;
                println!("{json}");
            }
        }
        Ok(())
    }
}
