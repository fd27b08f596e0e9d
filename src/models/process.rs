//! Process record model.
//!
//! A process is the unit of work being scheduled: a named CPU burst that
//! becomes ready at its arrival tick. The record carries the static input,
//! the dynamic state mutated by a scheduling engine, and the ordered log
//! of selection (dispatch) events.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5

use serde::{Deserialize, Serialize};

use super::ProcessSpec;

/// Discrete unit of simulated CPU time.
pub type Tick = u32;

/// Index of a process in input declaration order.
pub type ProcessId = usize;

/// One dispatch of a process onto the CPU.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionEvent {
    /// Tick at which the process was dispatched.
    pub tick: Tick,
    /// Remaining burst at the moment of selection (before executing).
    pub remaining: Tick,
    /// Ticks executed before the process yielded the CPU.
    pub executed: Tick,
}

/// A simulated process and its scheduling state.
///
/// # Invariant
/// The executed ticks across `selections` always equal
/// `burst_time - remaining_time`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Unique process name.
    pub name: String,
    /// Tick at which the process becomes ready.
    pub arrival_time: Tick,
    /// Total CPU ticks required.
    pub burst_time: Tick,
    /// Ticks still to execute.
    pub remaining_time: Tick,
    /// Tick of first dispatch. `None` = never selected.
    pub start_time: Option<Tick>,
    /// Tick at which execution stopped. `None` = still running at the horizon
    /// (RR/SJF) or never selected.
    pub completion_time: Option<Tick>,
    /// Dispatch log, in chronological order.
    pub selections: Vec<SelectionEvent>,
}

impl Process {
    /// Creates a process that has not run yet.
    pub fn new(name: impl Into<String>, arrival_time: Tick, burst_time: Tick) -> Self {
        Self {
            name: name.into(),
            arrival_time,
            burst_time,
            remaining_time: burst_time,
            start_time: None,
            completion_time: None,
            selections: Vec::new(),
        }
    }

    /// Creates the initial record for an input definition.
    pub fn from_spec(spec: &ProcessSpec) -> Self {
        Self::new(spec.name.clone(), spec.arrival, spec.burst)
    }

    /// Whether the process has arrived and still needs CPU time at `now`.
    #[inline]
    pub fn is_ready(&self, now: Tick) -> bool {
        self.arrival_time <= now && self.remaining_time > 0
    }

    /// Whether the whole burst has executed.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.remaining_time == 0
    }

    /// Logs a dispatch at `tick` that will execute `executed` ticks.
    ///
    /// The first dispatch fixes `start_time`.
    pub fn select(&mut self, tick: Tick, executed: Tick) {
        if self.start_time.is_none() {
            self.start_time = Some(tick);
        }
        self.selections.push(SelectionEvent {
            tick,
            remaining: self.remaining_time,
            executed,
        });
    }

    /// Credits `ticks` more execution to the latest dispatch.
    pub fn extend_selection(&mut self, ticks: Tick) {
        if let Some(last) = self.selections.last_mut() {
            last.executed += ticks;
        }
    }

    /// Consumes `ticks` of the remaining burst.
    pub fn execute(&mut self, ticks: Tick) {
        debug_assert!(
            ticks <= self.remaining_time,
            "process {} cannot execute {ticks} ticks with {} remaining",
            self.name,
            self.remaining_time
        );
        self.remaining_time = self.remaining_time.saturating_sub(ticks);
    }

    /// Ticks between arrival and first dispatch.
    pub fn response_time(&self) -> Option<Tick> {
        self.start_time.map(|start| start - self.arrival_time)
    }

    /// Ticks between arrival and completion. Only defined once complete.
    pub fn turnaround_time(&self) -> Option<Tick> {
        if !self.is_complete() {
            return None;
        }
        self.completion_time
            .map(|completion| completion - self.arrival_time)
    }

    /// Turnaround minus burst: time spent ready but not running.
    pub fn waiting_time(&self) -> Option<Tick> {
        self.turnaround_time()
            .map(|turnaround| turnaround - self.burst_time)
    }

    /// Total ticks executed across all dispatches.
    pub fn executed_ticks(&self) -> Tick {
        self.selections.iter().map(|s| s.executed).sum()
    }
}
