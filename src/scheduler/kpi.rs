//! Simulation quality metrics (KPIs).
//!
//! Aggregates the per-process metrics of a finished run into summary
//! indicators.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Avg Waiting | Mean (turnaround - burst) over completed processes |
//! | Avg Turnaround | Mean (completion - arrival) over completed processes |
//! | Avg Response | Mean (first dispatch - arrival) over completed processes |
//! | CPU Utilization | Busy ticks / horizon |
//! | Throughput | Completed processes / horizon |
//! | Dispatches | Total selection events (context switches in) |
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2: Scheduling Criteria

use serde::{Deserialize, Serialize};

use super::SimulationOutcome;
use crate::models::Tick;

/// Run-level performance indicators.
///
/// Time averages are in ticks. Only completed processes are averaged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationKpi {
    /// Processes that completed within the horizon.
    pub completed: usize,
    /// Processes still unfinished at the horizon.
    pub unfinished: usize,
    /// Mean waiting time (ticks).
    pub avg_waiting: f64,
    /// Mean turnaround time (ticks).
    pub avg_turnaround: f64,
    /// Mean response time (ticks).
    pub avg_response: f64,
    /// Fraction of ticks the CPU was busy (0.0..1.0).
    pub cpu_utilization: f64,
    /// Completed processes per tick.
    pub throughput: f64,
    /// Total number of dispatches.
    pub dispatches: usize,
}

impl SimulationKpi {
    /// Computes KPIs from a finished run.
    pub fn calculate(outcome: &SimulationOutcome) -> Self {
        let mut completed: usize = 0;
        let mut total_waiting: u64 = 0;
        let mut total_turnaround: u64 = 0;
        let mut total_response: u64 = 0;

        for process in outcome.completed() {
            if let (Some(waiting), Some(turnaround), Some(response)) = (
                process.waiting_time(),
                process.turnaround_time(),
                process.response_time(),
            ) {
                completed += 1;
                total_waiting += u64::from(waiting);
                total_turnaround += u64::from(turnaround);
                total_response += u64::from(response);
            }
        }

        let mean = |total: u64| {
            if completed == 0 {
                0.0
            } else {
                total as f64 / completed as f64
            }
        };
        let per_tick = |count: usize, runfor: Tick| {
            if runfor == 0 {
                0.0
            } else {
                count as f64 / f64::from(runfor)
            }
        };

        Self {
            completed,
            unfinished: outcome.processes.len() - completed,
            avg_waiting: mean(total_waiting),
            avg_turnaround: mean(total_turnaround),
            avg_response: mean(total_response),
            cpu_utilization: per_tick(outcome.timeline.busy_ticks(), outcome.runfor),
            throughput: per_tick(completed, outcome.runfor),
            dispatches: outcome.processes.iter().map(|p| p.selections.len()).sum(),
        }
    }

    /// Whether the run meets the given quality thresholds.
    pub fn meets_thresholds(&self, max_avg_waiting: f64, min_utilization: f64) -> bool {
        self.avg_waiting <= max_avg_waiting && self.cpu_utilization >= min_utilization
    }
}
