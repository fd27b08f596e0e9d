//! Per-tick CPU ownership.
//!
//! A timeline has one slot per simulated tick. Each slot is owned by at
//! most one process or is idle.

use serde::{Deserialize, Serialize};

use super::{Process, ProcessId, Tick};

/// CPU ownership for ticks `0..runfor`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    slots: Vec<Option<ProcessId>>,
}

impl Timeline {
    /// Creates an all-idle timeline of `runfor` ticks.
    pub fn idle(runfor: Tick) -> Self {
        Self {
            slots: vec![None; runfor as usize],
        }
    }

    /// Rebuilds ownership from the processes' selection events.
    ///
    /// Each event `(t, _, executed)` owns ticks `t..min(t + executed, runfor)`.
    /// Engines never dispatch two processes at once, so events do not overlap
    /// and no conflict resolution is needed.
    pub fn from_selections(processes: &[Process], runfor: Tick) -> Self {
        let mut timeline = Self::idle(runfor);
        for (id, process) in processes.iter().enumerate() {
            for event in &process.selections {
                let end = event.tick.saturating_add(event.executed).min(runfor);
                for tick in event.tick..end {
                    debug_assert!(
                        timeline.owner(tick).is_none(),
                        "tick {tick} claimed twice (second claim by {})",
                        process.name
                    );
                    timeline.assign(tick, id);
                }
            }
        }
        timeline
    }

    /// Marks `tick` as owned by `owner`. Ticks past the horizon are ignored.
    pub fn assign(&mut self, tick: Tick, owner: ProcessId) {
        if let Some(slot) = self.slots.get_mut(tick as usize) {
            *slot = Some(owner);
        }
    }

    /// Owner of `tick`, or `None` if idle or out of range.
    #[inline]
    pub fn owner(&self, tick: Tick) -> Option<ProcessId> {
        self.slots.get(tick as usize).copied().flatten()
    }

    /// Whether no process owns `tick`.
    #[inline]
    pub fn is_idle(&self, tick: Tick) -> bool {
        self.owner(tick).is_none()
    }

    /// Number of slots (the horizon).
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the horizon is zero.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Iterates slots in tick order.
    pub fn iter(&self) -> impl Iterator<Item = Option<ProcessId>> + '_ {
        self.slots.iter().copied()
    }

    /// Ticks owned by some process.
    pub fn busy_ticks(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    /// Ticks owned by `id`.
    pub fn ticks_owned_by(&self, id: ProcessId) -> usize {
        self.slots.iter().filter(|s| **s == Some(id)).count()
    }

    /// Resolves slot owners to process names.
    pub fn names<'a>(&self, processes: &'a [Process]) -> Vec<Option<&'a str>> {
        self.slots
            .iter()
            .map(|slot| slot.and_then(|id| processes.get(id)).map(|p| p.name.as_str()))
            .collect()
    }
}
