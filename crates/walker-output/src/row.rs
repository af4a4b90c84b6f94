//! Plain data row types written by output backends.

use walker_core::NodeId;
use walker_replay::WalkerState;

/// One live walker at one frame time.
#[derive(Debug, Clone, PartialEq)]
pub struct WalkerRow {
    pub time: f64,
    pub node_id: NodeId,
    pub x: f64,
    pub y: f64,
    /// `None` until the walker's first `setdest`.
    pub speed: Option<f64>,
    pub eta: Option<f64>,
}

impl WalkerRow {
    pub fn new(time: f64, node_id: NodeId, state: &WalkerState) -> Self {
        Self {
            time,
            node_id,
            x: state.pos.x,
            y: state.pos.y,
            speed: state.speed,
            eta: state.eta,
        }
    }
}

/// Summary statistics for one playback frame.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameSummaryRow {
    pub time: f64,
    pub active_walkers: usize,
    pub total_events: usize,
}
