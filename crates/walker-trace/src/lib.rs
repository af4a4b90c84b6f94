//! `walker-trace` — parsing of ns-2 style pedestrian mobility traces.
//!
//! # Crate layout
//!
//! | Module     | Contents                                              |
//! |------------|-------------------------------------------------------|
//! | [`event`]  | `Event` — the three trace event kinds                 |
//! | [`parser`] | Line-level parsing and bounds reduction               |
//! | [`trace`]  | `Trace` — sorted events + bounds, file/reader loading |
//! | [`error`]  | `TraceError`, `TraceResult<T>`                        |
//!
//! # Trace format
//!
//! One event per line, whitespace-separated fields:
//!
//! ```text
//! <time> create  <node> <x> <y> <reserved>
//! <time> setdest <node> <x> <y> <reserved> <speed> <eta>
//! <time> destroy <node>
//! ```
//!
//! Lines that don't match one of the three tags, are missing required fields,
//! or carry an unparsable/non-finite number are dropped silently — partial
//! lines at end-of-file are a normal artifact of the source datasets.  Only
//! I/O failures are fatal.

pub mod error;
pub mod event;
pub mod parser;
pub mod trace;

#[cfg(test)]
mod tests;

pub use error::{TraceError, TraceResult};
pub use event::Event;
pub use trace::Trace;
