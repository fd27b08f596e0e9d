//! Event log and metrics composition.
//!
//! Turns a finished [`SimulationOutcome`] into the three-section report:
//!
//! 1. Header: process count, policy name, and (Round-Robin) quantum.
//! 2. Tick-ordered event log, ending with the `Finished at time` marker.
//! 3. Per-process metrics and the "did not finish" aggregate.
//!
//! Within a tick, events are ordered arrival, finish, selection, idle;
//! within a category, by process declaration order.

use serde::Serialize;
use std::fmt;

use crate::models::{Policy, Process, Tick, Timeline};
use crate::scheduler::{SimulationKpi, SimulationOutcome};

/// What happened at a tick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum EventKind {
    /// A process became ready.
    Arrived { process: String },
    /// A process completed its burst.
    Finished { process: String },
    /// A process was dispatched with `burst` ticks remaining.
    Selected { process: String, burst: Tick },
    /// No process was ready.
    Idle,
}

/// A log line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogEvent {
    /// Tick of the event.
    pub tick: Tick,
    /// Event payload.
    #[serde(flatten)]
    pub kind: EventKind,
}

impl fmt::Display for LogEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Time {:3} : ", self.tick)?;
        match &self.kind {
            EventKind::Arrived { process } => write!(f, "{process} arrived"),
            EventKind::Finished { process } => write!(f, "{process} finished"),
            EventKind::Selected { process, burst } => {
                write!(f, "{process} selected (burst {burst:3})")
            }
            EventKind::Idle => write!(f, "Idle"),
        }
    }
}

/// Final status of one process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ProcessSummary {
    /// Completed within the horizon.
    Completed {
        name: String,
        wait: Tick,
        turnaround: Tick,
        response: Tick,
    },
    /// Still unfinished at the horizon.
    DidNotFinish { name: String },
}

impl fmt::Display for ProcessSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Completed {
                name,
                wait,
                turnaround,
                response,
            } => write!(
                f,
                "{name} wait {wait:3} turnaround {turnaround:3} response {response:3}"
            ),
            Self::DidNotFinish { name } => write!(f, "{name} did not finish"),
        }
    }
}

/// Builds the tick-ordered event log (without the finish marker).
pub fn compose_log(processes: &[Process], timeline: &Timeline, runfor: Tick) -> Vec<LogEvent> {
    let mut events = Vec::new();

    for tick in 0..runfor {
        let event = |kind| LogEvent { tick, kind };

        events.extend(
            processes
                .iter()
                .filter(|p| p.arrival_time == tick)
                .map(|p| event(EventKind::Arrived {
                    process: p.name.clone(),
                })),
        );
        events.extend(
            processes
                .iter()
                .filter(|p| p.is_complete() && p.completion_time == Some(tick))
                .map(|p| event(EventKind::Finished {
                    process: p.name.clone(),
                })),
        );
        events.extend(processes.iter().flat_map(|p| {
            p.selections
                .iter()
                .filter(move |s| s.tick == tick)
                .map(move |s| {
                    event(EventKind::Selected {
                        process: p.name.clone(),
                        burst: s.remaining,
                    })
                })
        }));
        if timeline.is_idle(tick) {
            events.push(event(EventKind::Idle));
        }
    }

    events
}

/// Summarizes every process, in declaration order.
pub fn summarize(processes: &[Process]) -> Vec<ProcessSummary> {
    processes
        .iter()
        .map(|p| {
            match (p.waiting_time(), p.turnaround_time(), p.response_time()) {
                (Some(wait), Some(turnaround), Some(response)) => ProcessSummary::Completed {
                    name: p.name.clone(),
                    wait,
                    turnaround,
                    response,
                },
                _ => ProcessSummary::DidNotFinish {
                    name: p.name.clone(),
                },
            }
        })
        .collect()
}

/// The full simulation report.
///
/// `Display` renders the text format; `Serialize` gives the JSON form.
///
/// # Example
///
/// ```
/// use u_cpusim::models::{Policy, ProcessSpec, SimulationParams};
/// use u_cpusim::report::Report;
/// use u_cpusim::scheduler::simulate;
///
/// let params = SimulationParams::new(Policy::Fcfs, 3)
///     .with_process(ProcessSpec::new("A", 0, 2));
/// let report = Report::compose(&simulate(&params));
///
/// assert_eq!(
///     report.to_string(),
///     "1 processes\nUsing First-Come First-Served\n\
///      Time   0 : A arrived\n\
///      Time   0 : A selected (burst   2)\n\
///      Time   2 : A finished\n\
///      Time   2 : Idle\n\
///      Finished at time 3\n\n\
///      A wait   0 turnaround   2 response   0"
/// );
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    /// Number of processes simulated.
    pub process_count: usize,
    /// Policy used.
    pub policy: Policy,
    /// Horizon in ticks.
    pub runfor: Tick,
    /// Tick-ordered event log.
    pub events: Vec<LogEvent>,
    /// Per-process outcome.
    pub summaries: Vec<ProcessSummary>,
    /// Aggregate indicators.
    pub kpi: SimulationKpi,
}

impl Report {
    /// Composes the report for a finished run.
    pub fn compose(outcome: &SimulationOutcome) -> Self {
        Self {
            process_count: outcome.processes.len(),
            policy: outcome.policy,
            runfor: outcome.runfor,
            events: compose_log(&outcome.processes, &outcome.timeline, outcome.runfor),
            summaries: summarize(&outcome.processes),
            kpi: SimulationKpi::calculate(outcome),
        }
    }

    /// Summaries of processes that did not finish.
    pub fn unfinished(&self) -> impl Iterator<Item = &ProcessSummary> {
        self.summaries
            .iter()
            .filter(|s| matches!(s, ProcessSummary::DidNotFinish { .. }))
    }

    /// Pretty-printed JSON form.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    fn write_header(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} processes", self.process_count)?;
        writeln!(f, "Using {}", self.policy.display_name())?;
        if let Some(quantum) = self.policy.quantum() {
            write!(f, "Quantum   {quantum}\n\n")?;
        }
        Ok(())
    }

    fn write_metrics(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut lines: Vec<String> = self
            .summaries
            .iter()
            .filter(|s| matches!(s, ProcessSummary::Completed { .. }))
            .map(ToString::to_string)
            .collect();

        let unfinished: Vec<String> = self.unfinished().map(ToString::to_string).collect();
        if !unfinished.is_empty() {
            lines.push(unfinished.join(" "));
        }
        write!(f, "{}", lines.join("\n"))
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_header(f)?;
        for event in &self.events {
            writeln!(f, "{event}")?;
        }
        write!(f, "Finished at time {}\n\n", self.runfor)?;
        self.write_metrics(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ProcessSpec, SimulationParams};
    use crate::scheduler::simulate;
    use std::num::NonZeroU32;

    fn report(params: &SimulationParams) -> Report {
        Report::compose(&simulate(params))
    }

    #[test]
    fn test_event_formatting() {
        let e = LogEvent {
            tick: 7,
            kind: EventKind::Selected {
                process: "P1".into(),
                burst: 12,
            },
        };
        assert_eq!(e.to_string(), "Time   7 : P1 selected (burst  12)");

        let idle = LogEvent {
            tick: 120,
            kind: EventKind::Idle,
        };
        assert_eq!(idle.to_string(), "Time 120 : Idle");
    }

    #[test]
    fn test_round_robin_report() {
        let params = SimulationParams::new(
            Policy::RoundRobin {
                quantum: NonZeroU32::new(2).unwrap(),
            },
            8,
        )
        .with_process(ProcessSpec::new("A", 0, 3))
        .with_process(ProcessSpec::new("B", 1, 3));

        let expected = "\
2 processes
Using Round-Robin
Quantum   2

Time   0 : A arrived
Time   0 : A selected (burst   3)
Time   1 : B arrived
Time   2 : B selected (burst   3)
Time   4 : A selected (burst   1)
Time   5 : A finished
Time   5 : B selected (burst   1)
Time   6 : B finished
Time   6 : Idle
Time   7 : Idle
Finished at time 8

A wait   2 turnaround   5 response   0
B wait   2 turnaround   5 response   1";
        assert_eq!(report(&params).to_string(), expected);
    }

    #[test]
    fn test_event_order_within_tick() {
        // At tick 3: C arrives, A finishes, B is selected.
        let params = SimulationParams::new(Policy::Fcfs, 6)
            .with_process(ProcessSpec::new("A", 0, 3))
            .with_process(ProcessSpec::new("B", 1, 2))
            .with_process(ProcessSpec::new("C", 3, 1));

        let events: Vec<String> = report(&params)
            .events
            .iter()
            .filter(|e| e.tick == 3)
            .map(ToString::to_string)
            .collect();
        assert_eq!(
            events,
            vec![
                "Time   3 : C arrived",
                "Time   3 : A finished",
                "Time   3 : B selected (burst   2)"
            ]
        );
    }

    #[test]
    fn test_did_not_finish_aggregate() {
        let params = SimulationParams::new(Policy::Sjf, 4)
            .with_process(ProcessSpec::new("A", 0, 1))
            .with_process(ProcessSpec::new("B", 0, 5))
            .with_process(ProcessSpec::new("C", 0, 6));

        let r = report(&params);
        assert_eq!(r.unfinished().count(), 2);

        let text = r.to_string();
        let tail: Vec<&str> = text.rsplit("\n\n").next().unwrap().lines().collect();
        assert_eq!(
            tail,
            vec![
                "A wait   0 turnaround   1 response   0",
                "B did not finish C did not finish"
            ]
        );
        // Unfinished processes never get a finish event.
        assert!(!text.contains("B finished"));
    }

    #[test]
    fn test_truncated_fcfs_not_reported_finished() {
        let params = SimulationParams::new(Policy::Fcfs, 5)
            .with_process(ProcessSpec::new("A", 0, 9));
        let text = report(&params).to_string();
        assert!(text.ends_with("Finished at time 5\n\nA did not finish"));
        assert!(!text.contains("A finished"));
    }

    #[test]
    fn test_empty_horizon() {
        let params = SimulationParams::new(Policy::Sjf, 0);
        assert_eq!(
            report(&params).to_string(),
            "0 processes\nUsing preemptive Shortest Job First\nFinished at time 0\n\n"
        );
    }

    #[test]
    fn test_json_shape() {
        let params = SimulationParams::new(Policy::Fcfs, 2)
            .with_process(ProcessSpec::new("A", 1, 5));
        let json: serde_json::Value =
            serde_json::from_str(&report(&params).to_json().unwrap()).unwrap();

        assert_eq!(json["policy"]["scheduler"], "fcfs");
        assert_eq!(json["events"][0]["event"], "idle");
        assert_eq!(json["events"][1]["event"], "arrived");
        assert_eq!(json["events"][1]["process"], "A");
        assert_eq!(json["summaries"][0]["status"], "did_not_finish");
        assert_eq!(json["kpi"]["unfinished"], 1);
    }
}
