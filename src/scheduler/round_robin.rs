//! Round-Robin engine.
//!
//! # Algorithm
//!
//! Ready processes wait in a FIFO queue. Each dispatch runs the front
//! process for `min(quantum, remaining)` ticks (clipped at the horizon).
//! Processes that arrived during the slice are queued *before* the
//! preempted process goes back to the tail.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3.4

use std::collections::VecDeque;
use std::num::NonZeroU32;

use tracing::{debug, trace};

use super::{arrival_order, Scheduler};
use crate::models::{Process, ProcessId, Tick, Timeline};

/// Quantum-sliced, queue-driven scheduler.
#[derive(Debug, Clone, Copy)]
pub struct RoundRobin {
    quantum: NonZeroU32,
}

impl RoundRobin {
    /// Creates a Round-Robin scheduler with the given time quantum.
    pub fn new(quantum: NonZeroU32) -> Self {
        Self { quantum }
    }

    /// Time quantum in ticks.
    pub fn quantum(&self) -> Tick {
        self.quantum.get()
    }

    /// Runs the engine, mutating the process records in place.
    ///
    /// Selection events carry the executed tick count so the timeline can
    /// be rebuilt with [`Timeline::from_selections`].
    pub fn run(&self, processes: &mut [Process], runfor: Tick) {
        let mut arrivals = ArrivalCursor::new(arrival_order(processes));
        let mut queue: VecDeque<ProcessId> = VecDeque::new();
        let mut now: Tick = 0;

        while now < runfor {
            arrivals.admit(processes, now, &mut queue);

            let Some(id) = queue.pop_front() else {
                trace!(now, "idle");
                now += 1;
                continue;
            };

            let slice = {
                let process = &mut processes[id];
                let slice = self
                    .quantum()
                    .min(process.remaining_time)
                    .min(runfor - now);
                trace!(process = %process.name, now, remaining = process.remaining_time, slice, "selected");
                process.select(now, slice);
                process.execute(slice);
                slice
            };
            now += slice;

            arrivals.admit(processes, now, &mut queue);

            let process = &mut processes[id];
            if process.is_complete() {
                process.completion_time = Some(now);
                debug!(process = %process.name, completion = now, "finished");
            } else {
                queue.push_back(id);
            }
        }
    }
}

impl Scheduler for RoundRobin {
    fn name(&self) -> &'static str {
        "Round-Robin"
    }

    fn schedule(&self, processes: &mut [Process], runfor: Tick) -> Timeline {
        self.run(processes, runfor);
        Timeline::from_selections(processes, runfor)
    }
}

/// Walks the arrival-ordered process list, admitting arrivals once.
#[derive(Debug)]
struct ArrivalCursor {
    order: Vec<ProcessId>,
    next: usize,
}

impl ArrivalCursor {
    fn new(order: Vec<ProcessId>) -> Self {
        Self { order, next: 0 }
    }

    fn admit(&mut self, processes: &[Process], now: Tick, queue: &mut VecDeque<ProcessId>) {
        while let Some(&id) = self.order.get(self.next) {
            if processes[id].arrival_time > now {
                break;
            }
            queue.push_back(id);
            self.next += 1;
        }
    }
}
