//! Playback observer trait for rendering and data collection.

use walker_replay::Snapshot;

/// Callbacks invoked by [`Player::run`][crate::Player::run] as playback
/// advances.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — frame counter
///
/// ```rust,ignore
/// struct FrameCounter { frames: usize }
///
/// impl PlayerObserver for FrameCounter {
///     fn on_frame(&mut self, _time: f64, snap: &Snapshot) {
///         self.frames += 1;
///         println!("{} walkers active", snap.active_count());
///     }
/// }
/// ```
pub trait PlayerObserver {
    /// Called once per frame with the freshly reconstructed snapshot.
    fn on_frame(&mut self, _time: f64, _snapshot: &Snapshot) {}

    /// Called when playback reaches the end of the trace and auto-pauses.
    fn on_finished(&mut self, _final_time: f64) {}
}

/// A [`PlayerObserver`] that does nothing.  Use when you need to call `run`
/// but don't want callbacks.
pub struct NoopObserver;

impl PlayerObserver for NoopObserver {}
