//! Unit tests for walker-trace.

use std::io::Cursor;

use walker_core::Point;

use crate::{Event, Trace};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// The KTH trace excerpt used across tests: two walkers, one full lifecycle.
const SAMPLE: &str = "\
0.0 create 1 10.0 20.0 0
0.6 setdest 1 12.0 21.0 0 1.3 9.5
2.0 create 2 0.0 0.0 0
5.0 destroy 1
";

fn times(trace: &Trace) -> Vec<f64> {
    trace.events().iter().map(Event::time).collect()
}

// ── Line acceptance ───────────────────────────────────────────────────────────

#[cfg(test)]
mod line_acceptance {
    use super::*;

    #[test]
    fn parses_all_three_tags() {
        let trace = Trace::parse(SAMPLE);
        assert_eq!(trace.len(), 4);
        assert!(matches!(trace.events()[0], Event::Create { .. }));
        assert!(matches!(trace.events()[1], Event::SetDest { .. }));
        assert!(matches!(trace.events()[3], Event::Destroy { .. }));
    }

    #[test]
    fn setdest_carries_speed_and_eta() {
        let trace = Trace::parse("0.6 setdest 1 12.0 21.0 0 1.3 9.5");
        match &trace.events()[0] {
            Event::SetDest {
                pos, speed, eta, ..
            } => {
                assert_eq!(*pos, Point::new(12.0, 21.0));
                assert_eq!(*speed, 1.3);
                assert_eq!(*eta, 9.5);
            }
            other => panic!("expected SetDest, got {other:?}"),
        }
    }

    #[test]
    fn destroy_needs_only_three_fields() {
        let trace = Trace::parse("5 destroy 1");
        assert_eq!(trace.len(), 1);
        assert!(matches!(trace.events()[0], Event::Destroy { .. }));
    }

    #[test]
    fn unknown_tag_is_dropped() {
        let trace = Trace::parse("1.0 teleport 1 5 5 0");
        assert!(trace.is_empty());
    }

    #[test]
    fn short_lines_are_dropped() {
        // A create missing its y coordinate, a bare timestamp, a blank line.
        let trace = Trace::parse("1.0 create 1 5\n2.0\n\n3.0 create 2 1 1 0");
        assert_eq!(trace.len(), 1);
        assert_eq!(trace.events()[0].node().as_str(), "2");
    }

    #[test]
    fn setdest_missing_eta_is_dropped() {
        let trace = Trace::parse("1.0 setdest 1 5 5 0 1.3");
        assert!(trace.is_empty());
    }

    #[test]
    fn non_numeric_time_drops_line() {
        // Scenario: "abc create 1 1 1 0" must not appear in the event stream.
        let trace = Trace::parse("abc create 1 1 1 0\n1.0 create 2 1 1 0");
        assert_eq!(trace.len(), 1);
        assert_eq!(trace.events()[0].node().as_str(), "2");
    }

    #[test]
    fn non_finite_numbers_drop_line() {
        let trace = Trace::parse("NaN create 1 1 1 0\ninf create 2 1 1 0\n1 create 3 NaN 1 0");
        assert!(trace.is_empty());
    }

    #[test]
    fn node_id_is_opaque() {
        let trace = Trace::parse("0 create 0042abc 1 1 0");
        assert_eq!(trace.events()[0].node().as_str(), "0042abc");
    }

    #[test]
    fn reserved_field_is_ignored() {
        // Field 5 is not numeric in some generator outputs; it must not
        // affect acceptance.
        let trace = Trace::parse("0 create 1 1 1 junk\n1 setdest 1 2 2 junk 1.0 5.0");
        assert_eq!(trace.len(), 2);
    }
}

// ── Ordering ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod ordering {
    use super::*;

    #[test]
    fn events_sorted_ascending_by_time() {
        let trace = Trace::parse("5 destroy 1\n0 create 1 1 1 0\n2 setdest 1 2 2 0 1 9");
        let t = times(&trace);
        assert!(t.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(t, vec![0.0, 2.0, 5.0]);
    }

    #[test]
    fn ties_keep_input_order() {
        let trace = Trace::parse("1 create a 1 1 0\n1 create b 2 2 0\n1 create c 3 3 0");
        let ids: Vec<&str> = trace.events().iter().map(|e| e.node().as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }
}

// ── Bounds ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod bounds {
    use super::*;

    #[test]
    fn reductions_over_sample() {
        let trace = Trace::parse(SAMPLE);
        let b = trace.bounds().unwrap();
        let e = b.extent.unwrap();
        assert_eq!((e.min_x, e.max_x), (0.0, 12.0));
        assert_eq!((e.min_y, e.max_y), (0.0, 21.0));
        assert_eq!((b.time.start, b.time.end), (0.0, 5.0));
    }

    #[test]
    fn destroy_contributes_time_but_not_extent() {
        let trace = Trace::parse("3 destroy 1");
        let b = trace.bounds().unwrap();
        assert!(b.extent.is_none());
        assert_eq!((b.time.start, b.time.end), (3.0, 3.0));
    }

    #[test]
    fn empty_trace_has_no_bounds() {
        let trace = Trace::parse("");
        assert!(trace.is_empty());
        assert!(trace.bounds().is_none());
        assert!(trace.time_range().is_none());
    }
}

// ── Loading ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod loading {
    use super::*;

    #[test]
    fn from_reader_matches_parse() {
        let via_reader = Trace::from_reader(Cursor::new(SAMPLE.as_bytes())).unwrap();
        assert_eq!(via_reader, Trace::parse(SAMPLE));
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let err = Trace::load(std::path::Path::new("/nonexistent/walkers.trace")).unwrap_err();
        assert!(matches!(err, crate::TraceError::Io(_)));
    }
}
