use std::{io, path::PathBuf};

use clap::Parser;
use cutoff_sum::{sum_qualifying_path, DEFAULT_CUTOFF, DEFAULT_INPUT};
use miette::Result;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Sums the lines of a file that are integers at or above a cutoff.
#[derive(Parser)]
#[command(name = "cutoff_sum", version, about)]
struct Cli {
    /// Input file with one number per line, `-` for stdin
    #[arg(default_value = DEFAULT_INPUT)]
    input: PathBuf,

    /// Smallest value that still counts toward the sum
    #[arg(long, default_value_t = DEFAULT_CUTOFF, allow_negative_numbers = true)]
    cutoff: i64,
}

// stdout carries only the answer, so logs go to stderr
fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(env_filter)
        .init();
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();

    let total = sum_qualifying_path(&cli.input, cli.cutoff)?;

    println!("{total}");

    Ok(())
}
