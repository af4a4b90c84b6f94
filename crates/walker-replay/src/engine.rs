//! The replay fold.

use std::collections::HashMap;

use walker_core::NodeId;
use walker_trace::Event;

use crate::state::WalkerState;

/// Seconds a walker may go without an event before it is presumed departed.
pub const IDLE_TIMEOUT_SECS: f64 = 30.0;

/// Rebuild the live-walker table for `query_time`.
///
/// `events` must be sorted ascending by time ([`Trace`][walker_trace::Trace]
/// guarantees this).  Pure and idempotent: the result depends only on the
/// arguments, never on prior queries.
///
/// A `query_time` outside the trace's range is valid — before the first
/// `create` the table is empty, far past the last event everything has
/// expired.
pub fn reconstruct(events: &[Event], query_time: f64) -> HashMap<NodeId, WalkerState> {
    // Events are pre-sorted, so the `time <= query_time` prefix is a
    // partition point rather than a full-slice filter.
    let cut = events.partition_point(|e| e.time() <= query_time);

    let mut walkers: HashMap<NodeId, WalkerState> = HashMap::new();

    for event in &events[..cut] {
        match event {
            Event::Create { time, node, pos } => {
                // Overwrites any stale state for a reused id, clearing
                // speed/eta from the previous incarnation.
                walkers.insert(node.clone(), WalkerState::entered(*pos, *time));
            }
            Event::SetDest {
                time,
                node,
                pos,
                speed,
                eta,
            } => {
                // No-op for walkers that were never created or already
                // destroyed — a known artifact of the source traces.
                if let Some(walker) = walkers.get_mut(node.as_str()) {
                    walker.pos = *pos;
                    walker.last_update = *time;
                    walker.speed = Some(*speed);
                    walker.eta = Some(*eta);
                }
            }
            Event::Destroy { node, .. } => {
                walkers.remove(node.as_str());
            }
        }
    }

    walkers.retain(|_, w| !w.expired_at(query_time));
    walkers
}
