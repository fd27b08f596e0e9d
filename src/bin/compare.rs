//! Report comparison CLI
//!
//! Compares two files line by line, ignoring trailing whitespace.
//! Exits with status 1 when the files differ or cannot be read.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use u_cpusim::diff::compare_files;

#[derive(Parser)]
#[command(name = "u-cpusim-compare")]
#[command(about = "Compare a generated report against a reference output")]
#[command(version)]
struct Cli {
    /// First file
    file1: PathBuf,

    /// Second file
    file2: PathBuf,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match compare_files(&cli.file1, &cli.file2) {
        Ok(report) => {
            println!("{report}");
            if report.is_match() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
