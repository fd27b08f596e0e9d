//! Preemptive Shortest Job First (shortest remaining time) engine.
//!
//! # Algorithm
//!
//! At every tick the CPU runs the arrived, unfinished process with the
//! smallest remaining time. Ties go to the process declared first in the
//! input, not the one that arrived first.
//!
//! A selection event is logged on every context switch; a process that keeps
//! the CPU extends its current event instead. Ownership can change every
//! tick, so this engine fills the timeline directly.

use tracing::{debug, trace};

use super::Scheduler;
use crate::models::{Process, ProcessId, Tick, Timeline};

/// Tick-driven, remaining-time-ordered scheduler.
#[derive(Debug, Clone, Copy, Default)]
pub struct PreemptiveSjf;

impl Scheduler for PreemptiveSjf {
    fn name(&self) -> &'static str {
        "preemptive Shortest Job First"
    }

    fn schedule(&self, processes: &mut [Process], runfor: Tick) -> Timeline {
        let mut timeline = Timeline::idle(runfor);
        let mut last_chosen: Option<ProcessId> = None;

        for now in 0..runfor {
            let Some(chosen) = shortest_remaining(processes, now) else {
                trace!(now, "idle");
                continue;
            };

            let process = &mut processes[chosen];
            if last_chosen == Some(chosen) {
                process.extend_selection(1);
            } else {
                trace!(process = %process.name, now, remaining = process.remaining_time, "selected");
                process.select(now, 1);
                last_chosen = Some(chosen);
            }

            timeline.assign(now, chosen);
            process.execute(1);

            if process.is_complete() {
                process.completion_time = Some(now + 1);
                debug!(process = %process.name, completion = now + 1, "finished");
                last_chosen = None;
            }
        }

        timeline
    }
}

/// First ready process with the minimum remaining time, in declaration order.
fn shortest_remaining(processes: &[Process], now: Tick) -> Option<ProcessId> {
    processes
        .iter()
        .enumerate()
        .filter(|(_, p)| p.is_ready(now))
        .min_by_key(|(_, p)| p.remaining_time)
        .map(|(id, _)| id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sjf_scenario_c() {
        let mut procs = vec![Process::new("A", 0, 5), Process::new("B", 2, 2)];
        let timeline = PreemptiveSjf.schedule(&mut procs, 10);

        let names: Vec<_> = timeline.names(&procs);
        assert_eq!(
            names,
            vec![
                Some("A"),
                Some("A"),
                Some("B"),
                Some("B"),
                Some("A"),
                Some("A"),
                Some("A"),
                None,
                None,
                None
            ]
        );

        let (a, b) = (&procs[0], &procs[1]);
        assert_eq!(b.completion_time, Some(4));
        assert_eq!(a.completion_time, Some(7));
        assert_eq!(a.waiting_time(), Some(2));
        assert_eq!(b.response_time(), Some(0));

        // A: dispatched at 0 and again at 4 (after preemption)
        let ticks: Vec<_> = a.selections.iter().map(|s| (s.tick, s.remaining)).collect();
        assert_eq!(ticks, vec![(0, 5), (4, 3)]);
        assert_eq!(b.selections.len(), 1);
        assert_eq!(b.selections[0].remaining, 2);
    }

    #[test]
    fn test_sjf_executed_sum_matches_progress() {
        let mut procs = vec![Process::new("A", 0, 5), Process::new("B", 2, 2)];
        PreemptiveSjf.schedule(&mut procs, 10);
        assert_eq!(procs[0].selections[0].executed, 2);
        assert_eq!(procs[0].selections[1].executed, 3);
        for p in &procs {
            assert_eq!(p.executed_ticks(), p.burst_time - p.remaining_time);
        }
    }

    /// Equal remaining times resolve by declaration order, even when the
    /// later-declared process arrived earlier.
    #[test]
    fn test_sjf_tie_break_is_declaration_order() {
        let mut procs = vec![Process::new("declared_first", 1, 3), Process::new("arrived_first", 0, 4)];
        let timeline = PreemptiveSjf.schedule(&mut procs, 10);

        // t=0: only arrived_first (4). t=1: arrived_first has 3 left, declared_first has 3.
        assert_eq!(timeline.owner(0), Some(1));
        assert_eq!(timeline.owner(1), Some(0));
        assert_eq!(procs[0].completion_time, Some(4));
        assert_eq!(procs[1].completion_time, Some(7));
    }

    #[test]
    fn test_sjf_idle_gap() {
        let mut procs = vec![Process::new("A", 0, 1), Process::new("B", 3, 1)];
        let timeline = PreemptiveSjf.schedule(&mut procs, 5);

        assert!(timeline.is_idle(1));
        assert!(timeline.is_idle(2));
        assert_eq!(timeline.owner(3), Some(1));
        assert!(timeline.is_idle(4));
    }

    #[test]
    fn test_sjf_new_event_after_completion() {
        // A finishes at 2 and B (same remaining as before) takes over: one event each.
        let mut procs = vec![Process::new("A", 0, 2), Process::new("B", 0, 3)];
        PreemptiveSjf.schedule(&mut procs, 10);
        assert_eq!(procs[0].selections.len(), 1);
        assert_eq!(procs[1].selections.len(), 1);
        assert_eq!(procs[1].selections[0].tick, 2);
        assert_eq!(procs[1].completion_time, Some(5));
    }

    #[test]
    fn test_sjf_truncation() {
        let mut procs = vec![Process::new("A", 0, 8)];
        let timeline = PreemptiveSjf.schedule(&mut procs, 5);
        assert_eq!(procs[0].remaining_time, 3);
        assert_eq!(procs[0].completion_time, None);
        assert_eq!(procs[0].turnaround_time(), None);
        assert_eq!(timeline.busy_ticks(), 5);
    }

    #[test]
    fn test_sjf_idempotent() {
        let build = || {
            vec![
                Process::new("A", 0, 3),
                Process::new("B", 0, 3),
                Process::new("C", 1, 2),
                Process::new("D", 2, 3),
            ]
        };
        let mut first = build();
        let mut second = build();
        let t1 = PreemptiveSjf.schedule(&mut first, 15);
        let t2 = PreemptiveSjf.schedule(&mut second, 15);
        assert_eq!(first, second);
        assert_eq!(t1, t2);
    }
}
