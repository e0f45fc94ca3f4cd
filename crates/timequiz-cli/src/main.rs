//! quiz — a timed console quiz over a CSV file of `question,answer` records.

use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod config;
mod run;

#[derive(Parser)]
#[command(
    name = "quiz",
    version,
    about = "Timed quiz over a CSV file of question,answer pairs"
)]
struct Cli {
    /// A CSV file in the format of 'question,answer' [default: problems.csv]
    #[arg(long, value_name = "FILE")]
    csv: Option<PathBuf>,

    /// Time limit for the whole quiz, in seconds [default: 30]
    #[arg(long, value_name = "SEC")]
    time: Option<u64>,

    /// Config file path
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() {
    // stdout carries the quiz itself, so diagnostics go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("timequiz=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run::execute(cli.csv, cli.time, cli.config).await {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
