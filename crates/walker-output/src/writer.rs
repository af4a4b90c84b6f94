//! The `SnapshotWriter` trait implemented by backend writers.

use crate::{FrameSummaryRow, OutputResult, WalkerRow};

/// Trait implemented by playback output backends.
///
/// All methods are infallible from the observer's perspective — errors are
/// stored internally and retrieved with
/// [`PlayerOutputObserver::take_error`][crate::PlayerOutputObserver::take_error].
pub trait SnapshotWriter {
    /// Write a batch of walker rows for one frame.
    fn write_walkers(&mut self, rows: &[WalkerRow]) -> OutputResult<()>;

    /// Write one frame summary row.
    fn write_frame_summary(&mut self, row: &FrameSummaryRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
