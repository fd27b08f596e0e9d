//! Deterministic CPU scheduling simulator.
//!
//! Simulates a single CPU over a fixed horizon of integer ticks under one of
//! three policies and reports a tick-by-tick event log with per-process
//! metrics.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Process`, `SelectionEvent`, `Timeline`,
//!   `Policy`, `SimulationParams`
//! - **`scheduler`**: Policy engines (FCFS, preemptive SJF, Round-Robin),
//!   `simulate`, and aggregate KPIs
//! - **`report`**: Event log and metrics composition (text and JSON)
//! - **`input`**: Input file grammar
//! - **`validation`**: Semantic checks (duplicate names, zero bursts)
//! - **`runner`**: File-level pipeline used by the `u-cpusim` binary
//! - **`diff`**: Line comparison used by the `u-cpusim-compare` binary
//! - **`workload`**: Seeded random workloads
//!
//! # Architecture
//!
//! Engines record selection events on each process; the timeline is
//! reconstructed from those events, and the report is derived from the
//! processes and the timeline alone.
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", §2.4

pub mod diff;
pub mod error;
pub mod input;
pub mod models;
pub mod report;
pub mod runner;
pub mod scheduler;
pub mod validation;
pub mod workload;

pub use error::{ConfigError, Error};
