//! Per-walker reconstructed state.

use walker_core::Point;

/// The state of one live walker at a query time.
///
/// Owned by the table a single [`reconstruct`][crate::reconstruct] call
/// returns; never mutated across queries.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WalkerState {
    /// Current position in metres.
    pub pos: Point,

    /// Time of the most recent event affecting this walker.  Drives the idle
    /// timeout.
    pub last_update: f64,

    /// Walking speed in m/s from the most recent `setdest`; `None` until the
    /// walker has received one (a fresh `create` clears it).
    pub speed: Option<f64>,

    /// Absolute trace time at which the walker is expected to have reached
    /// its destination, from the most recent `setdest`.
    pub eta: Option<f64>,
}

impl WalkerState {
    /// The state of a walker that just entered the area at `pos`.
    #[inline]
    pub fn entered(pos: Point, time: f64) -> Self {
        Self {
            pos,
            last_update: time,
            speed: None,
            eta: None,
        }
    }

    /// Whether this walker should be pruned at `query_time`.
    ///
    /// True when no event has touched it for over
    /// [`IDLE_TIMEOUT_SECS`][crate::IDLE_TIMEOUT_SECS], or when its eta has
    /// passed.  Both model a walker that logically departed without an
    /// explicit `destroy` being recorded.
    #[inline]
    pub fn expired_at(&self, query_time: f64) -> bool {
        query_time - self.last_update > crate::IDLE_TIMEOUT_SECS
            || self.eta.is_some_and(|eta| query_time > eta)
    }
}
