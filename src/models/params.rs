//! Simulation parameters.
//!
//! The fully validated input of one simulation run: which policy to use,
//! how long to run, and which processes exist.

use serde::{Deserialize, Serialize};
use std::num::NonZeroU32;

use super::Tick;

/// Scheduling policy.
///
/// The quantum only exists for Round-Robin and is positive by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "scheduler", rename_all = "snake_case")]
pub enum Policy {
    /// First-Come First-Served, non-preemptive.
    Fcfs,
    /// Preemptive Shortest Job First (shortest remaining time).
    Sjf,
    /// Round-Robin with a fixed time quantum.
    #[serde(rename = "rr")]
    RoundRobin {
        /// Maximum ticks per dispatch.
        quantum: NonZeroU32,
    },
}

impl Policy {
    /// Input-file keyword (`use <keyword>`).
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Fcfs => "fcfs",
            Self::Sjf => "sjf",
            Self::RoundRobin { .. } => "rr",
        }
    }

    /// Human-readable name used in reports.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Fcfs => "First-Come First-Served",
            Self::Sjf => "preemptive Shortest Job First",
            Self::RoundRobin { .. } => "Round-Robin",
        }
    }

    /// Quantum, for Round-Robin only.
    pub fn quantum(&self) -> Option<Tick> {
        match self {
            Self::RoundRobin { quantum } => Some(quantum.get()),
            _ => None,
        }
    }
}

/// Static definition of one process, as declared in the input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessSpec {
    /// Unique process name.
    pub name: String,
    /// Arrival tick.
    pub arrival: Tick,
    /// Required CPU ticks.
    pub burst: Tick,
}

impl ProcessSpec {
    /// Creates a process definition.
    pub fn new(name: impl Into<String>, arrival: Tick, burst: Tick) -> Self {
        Self {
            name: name.into(),
            arrival,
            burst,
        }
    }
}

/// Parameters of one simulation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationParams {
    /// Scheduling policy.
    pub policy: Policy,
    /// Horizon: ticks `0..runfor` are simulated.
    pub runfor: Tick,
    /// Processes in declaration order.
    pub processes: Vec<ProcessSpec>,
}

impl SimulationParams {
    /// Creates parameters with no processes.
    pub fn new(policy: Policy, runfor: Tick) -> Self {
        Self {
            policy,
            runfor,
            processes: Vec::new(),
        }
    }

    /// Appends a process definition.
    pub fn with_process(mut self, spec: ProcessSpec) -> Self {
        self.processes.push(spec);
        self
    }

    /// Replaces the process list.
    pub fn with_processes(mut self, processes: Vec<ProcessSpec>) -> Self {
        self.processes = processes;
        self
    }

    /// Number of declared processes.
    pub fn process_count(&self) -> usize {
        self.processes.len()
    }
}
