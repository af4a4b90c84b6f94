//! Frame snapshots — the replay table plus the statistics a frame displays.

use std::collections::HashMap;

use walker_core::NodeId;
use walker_trace::Trace;

use crate::engine::reconstruct;
use crate::state::WalkerState;

/// The reconstructed world at one query time.
///
/// This is what a rendering layer consumes per frame: the live-walker table,
/// the time it was built for, and the trace-wide event count shown alongside
/// the active-walker counter.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Snapshot {
    /// The query time this snapshot was reconstructed for.
    pub time: f64,

    /// Live walkers keyed by id.
    pub walkers: HashMap<NodeId, WalkerState>,

    /// Total accepted events in the source trace (constant across frames).
    pub total_events: usize,
}

impl Snapshot {
    /// Reconstruct the snapshot of `trace` at `time`.
    pub fn at(trace: &Trace, time: f64) -> Self {
        Self {
            time,
            walkers: reconstruct(trace.events(), time),
            total_events: trace.len(),
        }
    }

    /// Number of currently-live walkers.
    #[inline]
    pub fn active_count(&self) -> usize {
        self.walkers.len()
    }

    #[inline]
    pub fn get(&self, id: &str) -> Option<&WalkerState> {
        self.walkers.get(id)
    }

    #[inline]
    pub fn contains(&self, id: &str) -> bool {
        self.walkers.contains_key(id)
    }

    /// Walker ids in sorted order, for deterministic iteration (output
    /// writers, marker z-ordering).
    pub fn sorted_ids(&self) -> Vec<&NodeId> {
        let mut ids: Vec<&NodeId> = self.walkers.keys().collect();
        ids.sort();
        ids
    }
}
