//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `walker_snapshots.csv`
//! - `frame_summaries.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::SnapshotWriter;
use crate::{FrameSummaryRow, OutputResult, WalkerRow};

/// Writes playback output to two CSV files.
pub struct CsvWriter {
    snapshots: Writer<File>,
    summaries: Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut snapshots = Writer::from_path(dir.join("walker_snapshots.csv"))?;
        snapshots.write_record(["time", "node_id", "x", "y", "speed", "eta"])?;

        let mut summaries = Writer::from_path(dir.join("frame_summaries.csv"))?;
        summaries.write_record(["time", "active_walkers", "total_events"])?;

        Ok(Self {
            snapshots,
            summaries,
            finished: false,
        })
    }
}

/// Optional fields render as empty cells, not a sentinel number.
fn opt(v: Option<f64>) -> String {
    v.map(|v| v.to_string()).unwrap_or_default()
}

impl SnapshotWriter for CsvWriter {
    fn write_walkers(&mut self, rows: &[WalkerRow]) -> OutputResult<()> {
        for row in rows {
            self.snapshots.write_record(&[
                row.time.to_string(),
                row.node_id.to_string(),
                row.x.to_string(),
                row.y.to_string(),
                opt(row.speed),
                opt(row.eta),
            ])?;
        }
        Ok(())
    }

    fn write_frame_summary(&mut self, row: &FrameSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.time.to_string(),
            row.active_walkers.to_string(),
            row.total_events.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.snapshots.flush()?;
        self.summaries.flush()?;
        Ok(())
    }
}
