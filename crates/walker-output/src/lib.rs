//! `walker-output` — playback output writers for the walker trace framework.
//!
//! Writes the per-frame data a rendering layer would display to flat files
//! instead, so a playback run can be analyzed offline.
//!
//! | Module       | Contents                                               |
//! |--------------|--------------------------------------------------------|
//! | [`writer`]   | `SnapshotWriter` trait                                 |
//! | [`row`]      | `WalkerRow`, `FrameSummaryRow`                         |
//! | [`csv`]      | `CsvWriter` — `walker_snapshots.csv`, `frame_summaries.csv` |
//! | [`observer`] | `PlayerOutputObserver` — bridges `PlayerObserver`      |
//! | [`error`]    | `OutputError`, `OutputResult<T>`                       |
//!
//! # Usage
//!
//! ```rust,ignore
//! use walker_output::{CsvWriter, PlayerOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = PlayerOutputObserver::new(writer);
//! player.run(&mut obs);
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::PlayerOutputObserver;
pub use row::{FrameSummaryRow, WalkerRow};
pub use writer::SnapshotWriter;
