//! First-Come First-Served engine.
//!
//! # Algorithm
//!
//! 1. Order processes by arrival (stable: ties keep declaration order).
//! 2. Run each to completion before the next starts, idling the CPU until
//!    a process arrives when nothing is ready.
//! 3. A process still running at the horizon is cut off there and keeps a
//!    positive remaining time.
//!
//! Every dispatched process has exactly one selection event.

use tracing::{debug, trace};

use super::{arrival_order, Scheduler};
use crate::models::{Process, Tick, Timeline};

/// Non-preemptive, arrival-ordered scheduler.
#[derive(Debug, Clone, Copy, Default)]
pub struct Fcfs;

impl Fcfs {
    /// Runs the engine, mutating the process records in place.
    ///
    /// Does not build a timeline; see [`Timeline::from_selections`].
    pub fn run(processes: &mut [Process], runfor: Tick) {
        let mut now: Tick = 0;

        for id in arrival_order(processes) {
            let process = &mut processes[id];
            now = now.max(process.arrival_time);
            if now >= runfor {
                trace!(process = %process.name, now, "horizon reached before dispatch");
                break;
            }

            let executed = process.burst_time.min(runfor - now);
            trace!(process = %process.name, now, burst = process.burst_time, "selected");
            process.select(now, executed);
            process.execute(executed);

            now += executed;
            process.completion_time = Some(now);
            if process.is_complete() {
                debug!(process = %process.name, completion = now, "finished");
            } else {
                debug!(
                    process = %process.name,
                    remaining = process.remaining_time,
                    "truncated at horizon"
                );
            }
        }
    }
}

impl Scheduler for Fcfs {
    fn name(&self) -> &'static str {
        "First-Come First-Served"
    }

    fn schedule(&self, processes: &mut [Process], runfor: Tick) -> Timeline {
        Self::run(processes, runfor);
        Timeline::from_selections(processes, runfor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fcfs_scenario_a() {
        let mut procs = vec![Process::new("A", 0, 4), Process::new("B", 1, 3)];
        let timeline = Fcfs.schedule(&mut procs, 10);

        let (a, b) = (&procs[0], &procs[1]);
        assert_eq!(a.completion_time, Some(4));
        assert_eq!(a.waiting_time(), Some(0));
        assert_eq!(a.response_time(), Some(0));
        assert_eq!(b.completion_time, Some(7));
        assert_eq!(b.turnaround_time(), Some(6));
        assert_eq!(b.waiting_time(), Some(3));
        assert_eq!(b.response_time(), Some(3));

        assert!((0..4).all(|t| timeline.owner(t) == Some(0)));
        assert!((4..7).all(|t| timeline.owner(t) == Some(1)));
        assert!((7..10).all(|t| timeline.is_idle(t)));
    }

    #[test]
    fn test_fcfs_idles_until_arrival() {
        let mut procs = vec![Process::new("late", 5, 2)];
        let timeline = Fcfs.schedule(&mut procs, 10);

        assert_eq!(procs[0].start_time, Some(5));
        assert_eq!(procs[0].completion_time, Some(7));
        assert!((0..5).all(|t| timeline.is_idle(t)));
    }

    #[test]
    fn test_fcfs_stable_tie_break() {
        let mut procs = vec![
            Process::new("second", 2, 1),
            Process::new("X", 0, 2),
            Process::new("Y", 0, 2),
        ];
        Fcfs::run(&mut procs, 10);

        assert_eq!(procs[1].start_time, Some(0));
        assert_eq!(procs[2].start_time, Some(2));
        assert_eq!(procs[0].start_time, Some(4));
    }

    #[test]
    fn test_fcfs_truncation() {
        let mut procs = vec![
            Process::new("A", 0, 6),
            Process::new("B", 1, 5),
            Process::new("C", 2, 1),
        ];
        let timeline = Fcfs.schedule(&mut procs, 8);

        let b = &procs[1];
        assert_eq!(b.completion_time, Some(8));
        assert_eq!(b.remaining_time, 3);
        assert_eq!(b.turnaround_time(), None);
        assert_eq!(b.selections[0].remaining, 5);
        assert_eq!(b.executed_ticks(), 2);

        // Never selected
        let c = &procs[2];
        assert!(c.selections.is_empty());
        assert_eq!(c.remaining_time, 1);
        assert_eq!(c.completion_time, None);

        assert_eq!(timeline.len(), 8);
        assert_eq!(timeline.busy_ticks(), 8);
    }

    #[test]
    fn test_fcfs_arrival_past_horizon() {
        let mut procs = vec![Process::new("A", 12, 3)];
        let timeline = Fcfs.schedule(&mut procs, 10);

        assert!(procs[0].selections.is_empty());
        assert_eq!(procs[0].remaining_time, 3);
        assert_eq!(timeline.busy_ticks(), 0);
    }

    #[test]
    fn test_fcfs_one_selection_per_process() {
        let mut procs = vec![
            Process::new("A", 0, 3),
            Process::new("B", 0, 3),
            Process::new("C", 1, 3),
        ];
        Fcfs::run(&mut procs, 20);
        assert!(procs.iter().all(|p| p.selections.len() == 1));
        assert!(procs.iter().all(Process::is_complete));
    }
}
