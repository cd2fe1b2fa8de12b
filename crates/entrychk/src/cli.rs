//! Clap argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// `entrychk`: check contest submission sources and metadata documents.
///
/// Rule-counts a C source under the two contest size rules and validates
/// the `.info.json` / `.author.json` documents against their schemas.
#[derive(Parser, Debug)]
#[command(name = "entrychk", version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Verbose output (repeat for more detail).
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Add a diagnostic code to the ignore list. Repeatable.
    ///
    /// Reserved internal codes (0..=199) are never suppressed.
    #[arg(short = 'W', long = "ignore", value_name = "CODE", global = true)]
    pub ignore: Vec<i32>,

    /// Strict mode: validation problems exit 2 instead of 1.
    #[arg(long, global = true)]
    pub strict: bool,

    /// Report format.
    #[arg(long, value_enum, default_value_t = Format::Text, global = true)]
    pub format: Format,

    /// Path to an entrychk.toml config file (def: ./entrychk.toml if present).
    #[arg(long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
#[value(rename_all = "lower")]
pub enum Format {
    #[default]
    Text,
    Json,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Rule-count a C source file and print the two size metrics.
    Size(SizeArgs),

    /// Validate a .info.json document.
    Info(FileArgs),

    /// Validate a .author.json document.
    Auth(FileArgs),

    /// Validate both documents of a submission directory.
    Check(CheckArgs),
}

#[derive(Args, Debug, Clone)]
pub struct SizeArgs {
    /// Path to the C source (typically prog.c).
    pub prog_c: PathBuf,
}

#[derive(Args, Debug, Clone)]
pub struct FileArgs {
    /// Path to the JSON document.
    pub file: PathBuf,
}

#[derive(Args, Debug, Clone)]
pub struct CheckArgs {
    /// Submission directory containing .info.json and .author.json.
    pub dir: PathBuf,
}
