//! CPU scheduling simulator CLI
//!
//! Reads a `<base>.in` file, simulates it, and writes `<base>.out`.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use u_cpusim::runner::{run, RunOptions};

#[derive(Parser)]
#[command(name = "u-cpusim")]
#[command(about = "Simulate FCFS, preemptive SJF, or Round-Robin CPU scheduling")]
#[command(version)]
struct Cli {
    /// Input file (must end in .in)
    input: PathBuf,

    /// Write the text report here instead of <base>.out
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Also write a JSON report to <base>.json
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries only the result line
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut options = RunOptions::new(cli.input).with_json(cli.json);
    if let Some(output) = cli.output {
        options = options.with_output(output);
    }

    match run(&options) {
        Ok(summary) => {
            println!("Output written to {}", summary.output.display());
            if let Some(json) = summary.json {
                println!("JSON written to {}", json.display());
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
