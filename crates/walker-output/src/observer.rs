//! `PlayerOutputObserver<W>` — bridges `PlayerObserver` to a `SnapshotWriter`.

use walker_player::PlayerObserver;
use walker_replay::Snapshot;

use crate::writer::SnapshotWriter;
use crate::{FrameSummaryRow, OutputError, WalkerRow};

/// A [`PlayerObserver`] that writes walker rows and frame summaries to any
/// [`SnapshotWriter`] backend.
///
/// Errors from the writer are stored internally because `PlayerObserver`
/// methods have no return value.  After `player.run()` returns, check for
/// errors with [`take_error`][Self::take_error].
pub struct PlayerOutputObserver<W: SnapshotWriter> {
    writer: W,
    last_error: Option<OutputError>,
}

impl<W: SnapshotWriter> PlayerOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            last_error: None,
        }
    }

    /// Take the stored write error (if any) after `player.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: crate::OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: SnapshotWriter> PlayerObserver for PlayerOutputObserver<W> {
    fn on_frame(&mut self, time: f64, snapshot: &Snapshot) {
        // Sorted ids make row order deterministic regardless of hash order.
        let rows: Vec<WalkerRow> = snapshot
            .sorted_ids()
            .into_iter()
            .map(|id| WalkerRow::new(time, id.clone(), &snapshot.walkers[id]))
            .collect();

        if !rows.is_empty() {
            let result = self.writer.write_walkers(&rows);
            self.store_err(result);
        }

        let summary = FrameSummaryRow {
            time,
            active_walkers: snapshot.active_count(),
            total_events: snapshot.total_events,
        };
        let result = self.writer.write_frame_summary(&summary);
        self.store_err(result);
    }

    fn on_finished(&mut self, _final_time: f64) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
