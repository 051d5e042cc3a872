//! CLI argument parsing for the cryptogram workbench

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for the log-probability table
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `ngram log-probability` lines sorted by N-gram (default)
    Text,
    /// JSON object for machine parsing
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "cryptogram")]
#[command(version)]
#[command(about = "Solve substitution cryptograms interactively", long_about = None)]
pub struct Cli {
    /// Enable debug tracing on stderr
    #[arg(long, global = true)]
    pub debug: bool,

    /// Path to a cryptogram.toml configuration file
    #[arg(long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Disable ANSI colors regardless of configuration
    #[arg(long = "no-color", global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Solve a cryptogram interactively
    ///
    /// Commands: `substitute FROM TO` (sub, s), `revert LETTERS` (rev, r),
    /// `export [json]` (x), `quit` (q).
    Repl {
        /// Input puzzle as a single-line text file
        puzzle_file: PathBuf,
    },

    /// Compute n-gram log-probabilities over a reference text
    #[command(name = "compute-logprobs")]
    ComputeLogprobs {
        /// Text file to calibrate log-probabilities on
        input_txt_file: PathBuf,

        /// Window size (defaults to ngram.default_n from config, 4 otherwise)
        #[arg(short = 'n', value_name = "N")]
        n: Option<usize>,

        /// Output format
        #[arg(long = "format", value_enum, default_value = "text")]
        format: OutputFormat,
    },
}
