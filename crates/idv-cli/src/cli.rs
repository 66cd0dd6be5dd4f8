//! CLI argument definitions for the validation front end.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "idv",
    version,
    about = "Identifier validation - tax IDs, email addresses, passwords",
    long_about = "Validate identifiers against format and checksum rules.\n\n\
                  Supports the 11- and 14-digit national tax-ID formats, email\n\
                  addresses, and policy-driven password evaluation.\n\
                  Exits 0 for valid input, 1 for invalid input, 2 on errors."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,
}

#[derive(Subcommand)]
pub enum Command {
    /// Validate one value and report every rule it broke.
    Check(CheckArgs),

    /// List the supported validation kinds.
    Kinds,
}

#[derive(Parser)]
pub struct CheckArgs {
    /// Validation kind (see `idv kinds`).
    #[arg(value_name = "KIND")]
    pub kind: String,

    /// The raw value to validate.
    #[arg(value_name = "VALUE")]
    pub value: String,

    /// JSON password policy file; omitted fields keep their defaults.
    /// Only meaningful for the password kind.
    #[arg(long = "policy-file", value_name = "PATH")]
    pub policy_file: Option<PathBuf>,

    /// Emit the report as JSON instead of a table.
    #[arg(long = "json")]
    pub json: bool,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
