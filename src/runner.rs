//! File-level orchestration: input file in, report file out.
//!
//! # Pipeline
//!
//! 1. Read `<base>.in` and parse it ([`crate::input`]).
//! 2. Validate the parameters ([`crate::validation`]).
//! 3. Simulate ([`crate::scheduler::simulate`]).
//! 4. Write the text report to `<base>.out` (and optionally `<base>.json`).

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::Error;
use crate::input::parse_input;
use crate::models::SimulationParams;
use crate::report::Report;
use crate::scheduler::simulate;
use crate::validation::validate_params;

/// Required input file extension.
pub const INPUT_EXTENSION: &str = "in";
/// Text report extension.
pub const OUTPUT_EXTENSION: &str = "out";
/// JSON report extension.
pub const JSON_EXTENSION: &str = "json";

/// Configuration for one run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunOptions {
    /// Input file path (must end in `.in`).
    pub input: PathBuf,
    /// Text report path. `None` = `<base>.out`.
    pub output: Option<PathBuf>,
    /// Also write `<base>.json`.
    pub json: bool,
}

impl RunOptions {
    /// Creates options for the given input file.
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: None,
            json: false,
        }
    }

    /// Set an explicit text report path.
    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = Some(output.into());
        self
    }

    /// Enable the JSON report.
    pub fn with_json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }
}

/// What a run produced.
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// Text report path.
    pub output: PathBuf,
    /// JSON report path, if requested.
    pub json: Option<PathBuf>,
    /// The composed report.
    pub report: Report,
}

/// Text report path for an input file: same base name, `.out` extension.
///
/// Fails with [`Error::Usage`] if the input does not end in `.in`.
pub fn output_path(input: &Path) -> Result<PathBuf, Error> {
    check_extension(input)?;
    Ok(input.with_extension(OUTPUT_EXTENSION))
}

/// Reads, parses, and validates an input file.
pub fn load_params(path: &Path) -> Result<SimulationParams, Error> {
    let text = fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let params = parse_input(&text)?;
    validate_params(&params).map_err(Error::Validation)?;
    debug!(
        path = %path.display(),
        scheduler = params.policy.keyword(),
        processes = params.process_count(),
        runfor = params.runfor,
        "loaded input"
    );
    Ok(params)
}

/// Runs the whole pipeline for one input file.
pub fn run(options: &RunOptions) -> Result<RunSummary, Error> {
    check_extension(&options.input)?;
    let params = load_params(&options.input)?;

    let outcome = simulate(&params);
    let report = Report::compose(&outcome);

    let output = match &options.output {
        Some(path) => path.clone(),
        None => output_path(&options.input)?,
    };
    write_file(&output, &report.to_string())?;
    info!(path = %output.display(), "report written");

    let json = if options.json {
        let path = options.input.with_extension(JSON_EXTENSION);
        write_file(&path, &report.to_json()?)?;
        info!(path = %path.display(), "json report written");
        Some(path)
    } else {
        None
    };

    info!(
        completed = report.kpi.completed,
        unfinished = report.kpi.unfinished,
        avg_waiting = report.kpi.avg_waiting,
        cpu_utilization = report.kpi.cpu_utilization,
        "simulation summary"
    );

    Ok(RunSummary {
        output,
        json,
        report,
    })
}

fn check_extension(input: &Path) -> Result<(), Error> {
    match input.extension().and_then(|e| e.to_str()) {
        Some(INPUT_EXTENSION) => Ok(()),
        _ => Err(Error::Usage(format!(
            "input file must end in .{INPUT_EXTENSION}: {}",
            input.display()
        ))),
    }
}

fn write_file(path: &Path, contents: &str) -> Result<(), Error> {
    fs::write(path, contents).map_err(|source| Error::Write {
        path: path.to_path_buf(),
        source,
    })
}
