use anyhow::{Context, Result};
use clap::Parser;
use cryptogram::cli::{Cli, CliCommand, OutputFormat};
use cryptogram::config::Config;
use cryptogram::ngram::NgramCounter;
use cryptogram::render::{self, Renderer};
use cryptogram::repl::Repl;
use std::fs::{self, File};
use std::io::{self, BufReader};
use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Initialize tracing subscriber for debug output
fn init_tracing(debug: bool) {
    if debug {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive(tracing::Level::TRACE.into()),
            )
            .with_writer(std::io::stderr)
            .init();
    }
}

/// Run an interactive session on the puzzle in `puzzle_file`
fn run_repl(puzzle_file: &Path, renderer: Renderer) -> Result<()> {
    let puzzle = fs::read_to_string(puzzle_file)
        .with_context(|| format!("Failed to read puzzle {}", puzzle_file.display()))?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    Repl::new(puzzle.trim(), renderer).run(stdin.lock(), stdout.lock())
}

/// Print the log-probability table for `input_file`
fn run_compute_logprobs(input_file: &Path, n: usize, format: OutputFormat) -> Result<()> {
    if n == 0 {
        anyhow::bail!("Invalid value for -n: {} (must be >= 1)", n);
    }

    let file = File::open(input_file)
        .with_context(|| format!("Failed to open corpus {}", input_file.display()))?;
    let counter = NgramCounter::from_reader(BufReader::new(file), n)
        .with_context(|| format!("Failed to read corpus {}", input_file.display()))?;
    let probs = counter
        .log_probs()
        .with_context(|| format!("Cannot estimate {}-grams from {}", n, input_file.display()))?;

    match format {
        OutputFormat::Text => print!("{}", render::log_prob_table(&probs)),
        OutputFormat::Json => println!("{}", render::log_prob_json(&probs)?),
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Cli::parse();

    init_tracing(args.debug);

    let mut config = match &args.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };
    if args.no_color {
        config.display.color = false;
    }

    match args.command {
        CliCommand::Repl { puzzle_file } => {
            run_repl(&puzzle_file, Renderer::from_config(&config.display))
        }
        CliCommand::ComputeLogprobs {
            input_txt_file,
            n,
            format,
        } => run_compute_logprobs(
            &input_txt_file,
            n.unwrap_or(config.ngram.default_n),
            format,
        ),
    }
}
