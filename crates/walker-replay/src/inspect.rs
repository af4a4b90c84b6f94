//! Per-walker inspection — the data behind a "selected node" details panel.

use walker_core::{NodeId, Point};
use walker_trace::{Event, Trace};

use crate::snapshot::Snapshot;

/// Details for one selected walker at a snapshot's time.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WalkerDetails {
    pub id: NodeId,
    pub pos: Point,
    /// Speed from the walker's most recent `setdest` at or before the
    /// snapshot time; `None` when it has never been given a destination.
    pub speed: Option<f64>,
}

/// Look up details for the walker `id` in `snap`.
///
/// Returns `None` when the walker is not live at the snapshot time — either
/// it never existed or it has left the observed area; the caller decides how
/// to phrase that.
pub fn inspect(trace: &Trace, snap: &Snapshot, id: &str) -> Option<WalkerDetails> {
    let state = snap.get(id)?;
    Some(WalkerDetails {
        id: NodeId::from(id),
        pos: state.pos,
        speed: last_setdest_speed(trace.events(), id, snap.time),
    })
}

/// Speed from the most recent `setdest` for `id` at or before `query_time`.
///
/// Scans the event log rather than the fold table so the answer covers the
/// walker's full history, matching what an inspection panel reports.
pub fn last_setdest_speed(events: &[Event], id: &str, query_time: f64) -> Option<f64> {
    let cut = events.partition_point(|e| e.time() <= query_time);
    events[..cut].iter().rev().find_map(|event| match event {
        Event::SetDest { node, speed, .. } if node.as_str() == id => Some(*speed),
        _ => None,
    })
}
