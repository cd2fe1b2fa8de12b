//! # entrychk
//!
//! **CLI Binary**
//!
//! This is the entry point for the `entrychk` command-line application.
//! It orchestrates the other crates to perform the requested actions.
//!
//! ## Responsibilities
//! * Parse command line arguments
//! * Load configuration and seed the ignore-code registry
//! * Dispatch commands to the measurement and validation engines
//! * Render reports and map outcomes to the exit-code contract
//!
//! This crate should contain minimal business logic.
//!
//! ## Exit codes
//! * `0`: all checks passed
//! * `1`: validation errors detected
//! * `2`: validation errors detected in strict mode
//! * `3`: `-h`/`-V` printed and stopped
//! * `4`: command-line usage error
//! * `>=5`: internal/unexpected error

mod cli;
mod commands;
mod config;
mod report;

use clap::error::ErrorKind;
use clap::Parser;

pub use cli::{Cli, Commands, Format, GlobalArgs};
pub use config::{Config, Limits};
pub use report::{DocumentReport, SizeReport, ToolInfo};

pub const EXIT_OK: i32 = 0;
pub const EXIT_INVALID: i32 = 1;
pub const EXIT_STRICT_INVALID: i32 = 2;
pub const EXIT_HELP: i32 = 3;
pub const EXIT_USAGE: i32 = 4;
pub const EXIT_INTERNAL: i32 = 5;

/// Run the CLI and return the process exit code.
pub fn run() -> i32 {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let code = match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => EXIT_HELP,
                _ => EXIT_USAGE,
            };
            // clap renders help to stdout and errors to stderr.
            let _ = err.print();
            return code;
        }
    };
    match commands::dispatch(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err:#}");
            EXIT_INTERNAL
        }
    }
}
