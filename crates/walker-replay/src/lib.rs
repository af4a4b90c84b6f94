//! `walker-replay` — deterministic reconstruction of walker state at a time.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                |
//! |--------------|---------------------------------------------------------|
//! | [`state`]    | `WalkerState` — per-walker reconstructed state          |
//! | [`engine`]   | `reconstruct` — the replay fold + expiry pruning        |
//! | [`snapshot`] | `Snapshot` — state table + frame statistics             |
//! | [`inspect`]  | `WalkerDetails` — per-walker inspection panel data      |
//!
//! # Replay model (full replay per query)
//!
//! Every query rebuilds the live-walker table from scratch by folding the
//! event prefix with `time <= query_time`:
//!
//! 1. `create` inserts (or overwrites) a walker at its entry position.
//! 2. `setdest` updates position, speed, and eta — but only for a walker that
//!    is currently live; otherwise it is a no-op.
//! 3. `destroy` removes the walker if present.
//! 4. Post-fold, walkers that went 30 s without an event, or whose eta has
//!    passed, are pruned (the trace format records no `destroy` for walkers
//!    that simply wander out of the observed area).
//!
//! Rebuilding from scratch makes every query a pure function of
//! `(events, query_time)`: the player can be scrubbed forward or backward
//! arbitrarily and there is no hidden cursor to desynchronize.  Cost is
//! O(events) per query, fine for the thousands-of-events traces this targets;
//! a much larger trace would want a per-node index and a monotonic cursor
//! with fallback to full replay on backward jumps.

pub mod engine;
pub mod inspect;
pub mod snapshot;
pub mod state;


pub use engine::{reconstruct, IDLE_TIMEOUT_SECS};
pub use inspect::{inspect, last_setdest_speed, WalkerDetails};
pub use snapshot::Snapshot;
pub use state::WalkerState;
