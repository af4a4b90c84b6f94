//! Integration tests for walker-output.

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use walker_core::{NodeId, Point};
    use walker_replay::WalkerState;

    use crate::csv::CsvWriter;
    use crate::row::{FrameSummaryRow, WalkerRow};
    use crate::writer::SnapshotWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn walker_row(id: &str, time: f64) -> WalkerRow {
        let state = WalkerState {
            pos: Point::new(12.5, 7.25),
            last_update: time,
            speed: Some(1.3),
            eta: None,
        };
        WalkerRow::new(time, NodeId::from(id), &state)
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("walker_snapshots.csv").exists());
        assert!(dir.path().join("frame_summaries.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("walker_snapshots.csv")).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, ["time", "node_id", "x", "y", "speed", "eta"]);

        let mut rdr2 = csv::Reader::from_path(dir.path().join("frame_summaries.csv")).unwrap();
        let headers2: Vec<_> = rdr2.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers2, ["time", "active_walkers", "total_events"]);
    }

    #[test]
    fn walker_rows_written_with_empty_optionals() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_walkers(&[walker_row("1", 0.5), walker_row("2", 0.5)])
            .unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("walker_snapshots.csv")).unwrap();
        let records: Vec<csv::StringRecord> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(records.len(), 2);
        assert_eq!(&records[0][1], "1");
        assert_eq!(&records[0][4], "1.3");
        assert_eq!(&records[0][5], ""); // eta unset → empty cell
    }

    #[test]
    fn frame_summaries_written() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_frame_summary(&FrameSummaryRow {
            time: 1.5,
            active_walkers: 3,
            total_events: 40,
        })
        .unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("frame_summaries.csv")).unwrap();
        let rec = rdr.records().next().unwrap().unwrap();
        assert_eq!(&rec[0], "1.5");
        assert_eq!(&rec[1], "3");
        assert_eq!(&rec[2], "40");
    }

    #[test]
    fn finish_is_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }
}

#[cfg(test)]
mod observer_tests {
    use tempfile::TempDir;

    use walker_player::Player;
    use walker_trace::Trace;

    use crate::csv::CsvWriter;
    use crate::observer::PlayerOutputObserver;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    #[test]
    fn full_run_writes_all_frames() {
        let dir = tmp();
        let writer = CsvWriter::new(dir.path()).unwrap();
        let mut obs = PlayerOutputObserver::new(writer);

        // Two walkers over a 2-second trace: 5 frames at the 0.5 s step.
        let trace = Trace::parse(
            "0 create 1 0 0 0\n0 create 2 5 5 0\n1 setdest 1 2 2 0 1.3 60\n2 destroy 2",
        );
        let mut player = Player::new(trace);
        player.run(&mut obs);
        assert!(obs.take_error().is_none());

        let mut summaries =
            csv::Reader::from_path(dir.path().join("frame_summaries.csv")).unwrap();
        let counts: Vec<u32> = summaries
            .records()
            .map(|r| r.unwrap()[1].parse().unwrap())
            .collect();
        // Walker 2 is destroyed exactly at t=2.0, the final frame.
        assert_eq!(counts, vec![2, 2, 2, 2, 1]);
    }

    #[test]
    fn rows_sorted_by_node_id_within_frame() {
        let dir = tmp();
        let writer = CsvWriter::new(dir.path()).unwrap();
        let mut obs = PlayerOutputObserver::new(writer);

        let trace = Trace::parse("0 create b 1 1 0\n0 create a 2 2 0\n0.4 destroy a\n0.4 destroy b");
        let mut player = Player::new(trace);
        player.run(&mut obs);
        assert!(obs.take_error().is_none());

        let mut rdr = csv::Reader::from_path(dir.path().join("walker_snapshots.csv")).unwrap();
        let ids: Vec<String> = rdr.records().map(|r| r.unwrap()[1].to_owned()).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }
}
