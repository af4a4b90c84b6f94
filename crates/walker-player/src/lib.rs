//! `walker-player` — the cooperative playback clock.
//!
//! # Crate layout
//!
//! | Module       | Contents                                         |
//! |--------------|--------------------------------------------------|
//! | [`player`]   | `Player` — cursor, speed, play/pause, stepping   |
//! | [`observer`] | `PlayerObserver` trait, `NoopObserver`           |
//!
//! The player owns only *playback* state (cursor time, speed multiplier,
//! playing flag).  World state is never cached: every frame asks
//! `walker-replay` for a fresh snapshot, so pausing, scrubbing backward, or
//! abandoning playback mid-trace can never leave anything stale.  Rendering
//! is pushed to an injected [`PlayerObserver`] rather than driven from here.

pub mod observer;
pub mod player;


pub use observer::{NoopObserver, PlayerObserver};
pub use player::{Player, FRAME_STEP_SECS, NUDGE_COARSE_SECS, NUDGE_FINE_SECS};
