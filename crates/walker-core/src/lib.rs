//! `walker-core` — foundational types for the walker trace framework.
//!
//! This crate is a dependency of every other `walker-*` crate.  It
//! intentionally has no `walker-*` dependencies and no required external ones
//! (only optional `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                   |
//! |------------|--------------------------------------------|
//! | [`ids`]    | `NodeId` — opaque walker identifier        |
//! | [`point`]  | `Point`, Euclidean distance                |
//! | [`bounds`] | `Extent`, `TraceBounds`                    |
//! | [`time`]   | `TimeRange`                                |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod bounds;
pub mod ids;
pub mod point;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use bounds::{Extent, TraceBounds};
pub use ids::NodeId;
pub use point::Point;
pub use time::TimeRange;
