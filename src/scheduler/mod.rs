//! Scheduling engines and KPI evaluation.
//!
//! Each engine takes exclusive ownership of one run's process records,
//! mutates them in a single pass, and returns the CPU timeline.
//!
//! | Engine | Preemptive | Timeline source |
//! |--------|-----------|-----------------|
//! | [`Fcfs`] | no | reconstructed from selection events |
//! | [`PreemptiveSjf`] | every tick | filled inline |
//! | [`RoundRobin`] | at quantum expiry | reconstructed from selection events |
//!
//! # Example
//!
//! ```
//! use u_cpusim::models::{Policy, ProcessSpec, SimulationParams};
//! use u_cpusim::scheduler::simulate;
//!
//! let params = SimulationParams::new(Policy::Fcfs, 10)
//!     .with_process(ProcessSpec::new("A", 0, 4))
//!     .with_process(ProcessSpec::new("B", 1, 3));
//!
//! let outcome = simulate(&params);
//! assert_eq!(outcome.processes[1].completion_time, Some(7));
//! assert_eq!(outcome.timeline.busy_ticks(), 7);
//! ```
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5

mod fcfs;
mod kpi;
mod round_robin;
mod sjf;

pub use fcfs::Fcfs;
pub use kpi::SimulationKpi;
pub use round_robin::RoundRobin;
pub use sjf::PreemptiveSjf;

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use tracing::debug;

use crate::models::{Policy, Process, ProcessId, SimulationParams, Tick, Timeline};

/// A CPU scheduling policy engine.
///
/// Engines assume validated input and never fail: a process that cannot
/// finish within the horizon is a normal outcome.
pub trait Scheduler: Debug {
    /// Policy name (e.g., "Round-Robin").
    fn name(&self) -> &'static str;

    /// Simulates ticks `0..runfor`, mutating `processes` in place.
    ///
    /// Returns the CPU ownership of every tick.
    fn schedule(&self, processes: &mut [Process], runfor: Tick) -> Timeline;
}

impl Policy {
    /// Engine implementing this policy.
    pub fn scheduler(&self) -> Box<dyn Scheduler> {
        match *self {
            Policy::Fcfs => Box::new(Fcfs),
            Policy::Sjf => Box::new(PreemptiveSjf),
            Policy::RoundRobin { quantum } => Box::new(RoundRobin::new(quantum)),
        }
    }
}

/// Read-only result of one simulation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationOutcome {
    /// Policy that produced this outcome.
    pub policy: Policy,
    /// Horizon in ticks.
    pub runfor: Tick,
    /// Final process records, in declaration order.
    pub processes: Vec<Process>,
    /// CPU ownership per tick.
    pub timeline: Timeline,
}

impl SimulationOutcome {
    /// Processes that fully completed within the horizon.
    pub fn completed(&self) -> impl Iterator<Item = &Process> {
        self.processes.iter().filter(|p| p.is_complete())
    }

    /// Processes still unfinished at the horizon.
    pub fn unfinished(&self) -> impl Iterator<Item = &Process> {
        self.processes.iter().filter(|p| !p.is_complete())
    }
}

/// Runs one simulation.
///
/// Creates fresh process records from `params`, runs the engine for
/// `params.policy`, and returns the final state.
pub fn simulate(params: &SimulationParams) -> SimulationOutcome {
    let mut processes: Vec<Process> = params.processes.iter().map(Process::from_spec).collect();
    let scheduler = params.policy.scheduler();
    let timeline = scheduler.schedule(&mut processes, params.runfor);

    let outcome = SimulationOutcome {
        policy: params.policy,
        runfor: params.runfor,
        processes,
        timeline,
    };
    debug!(
        scheduler = scheduler.name(),
        runfor = params.runfor,
        completed = outcome.completed().count(),
        unfinished = outcome.unfinished().count(),
        "simulation finished"
    );
    outcome
}

/// Process indices sorted by arrival. Stable: ties keep declaration order.
pub(crate) fn arrival_order(processes: &[Process]) -> Vec<ProcessId> {
    let mut order: Vec<ProcessId> = (0..processes.len()).collect();
    order.sort_by_key(|&id| processes[id].arrival_time);
    order
}
