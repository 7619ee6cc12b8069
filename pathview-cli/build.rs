//! Build script for pathview-cli.
//!
//! This script generates the man page at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, ArgAction, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

fn workspace_args() -> [Arg; 2] {
    [
        Arg::new("workspace-folder")
            .long("workspace-folder")
            .help("An open workspace folder (repeatable, in priority order)")
            .value_name("PATH")
            .action(ArgAction::Append),
        Arg::new("active-document")
            .long("active-document")
            .help("The document currently being edited")
            .value_name("PATH"),
    ]
}

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
fn build_cli() -> Command {
    Command::new("pathview")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Normalize, compare, and display paths")
        .long_about(
            "Command-line tool for normalizing, comparing, and displaying paths under Windows or POSIX rules",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Load an additional configuration file")
                .value_name("PATH")
                .global(true)
                .env("PATHVIEW_CONFIG"),
        )
        .arg(
            Arg::new("platform")
                .long("platform")
                .help("Apply this platform's path rules (windows or posix)")
                .value_name("PLATFORM")
                .global(true),
        )
        .subcommands(vec![
            Command::new("normalize")
                .about("Print paths in canonical forward-slash form")
                .arg(Arg::new("paths").value_name("PATH").num_args(1..).required(true))
                .arg(
                    Arg::new("structural")
                        .long("structural")
                        .help("Also resolve . and .. segments and redundant separators")
                        .action(ArgAction::SetTrue),
                ),
            Command::new("equal")
                .about("Check whether two paths denote the same location")
                .long_about("Print true or false; exit with status 1 when the paths differ")
                .arg(Arg::new("a").value_name("A"))
                .arg(Arg::new("b").value_name("B"))
                .arg(
                    Arg::new("not")
                        .long("not")
                        .help("Invert the assertion (fail if the paths are equal)")
                        .action(ArgAction::SetTrue),
                ),
            Command::new("readable")
                .about("Print a path relative to a base directory")
                .arg(Arg::new("target").value_name("TARGET"))
                .arg(
                    Arg::new("base")
                        .long("base")
                        .help("Directory to display the path relative to")
                        .value_name("PATH"),
                )
                .args(workspace_args())
                .arg(
                    Arg::new("format")
                        .long("format")
                        .help("Output format")
                        .value_parser(["text", "json"])
                        .default_value("text"),
                ),
            Command::new("show-base")
                .about("Print the base directory readable paths are relative to")
                .args(workspace_args()),
            Command::new("validate")
                .about("Validate a configuration file")
                .arg(Arg::new("config-path").value_name("CONFIG_PATH").required(true)),
        ])
}

fn main() -> std::io::Result<()> {
    let out_dir = PathBuf::from(std::env::var_os("OUT_DIR").ok_or_else(|| {
        std::io::Error::new(std::io::ErrorKind::NotFound, "OUT_DIR is not set")
    })?);
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir)?;

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();
    man.render(&mut buffer)?;
    fs::write(man_dir.join("pathview.1"), buffer)?;

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
    Ok(())
}
