//! Line-level trace parsing and bounds reduction.
//!
//! # Field layout
//!
//! | Field | `create`     | `setdest`    | `destroy` |
//! |-------|--------------|--------------|-----------|
//! | 0     | time         | time         | time      |
//! | 1     | `create`     | `setdest`    | `destroy` |
//! | 2     | node id      | node id      | node id   |
//! | 3     | x            | x            | —         |
//! | 4     | y            | y            | —         |
//! | 5     | *(reserved)* | *(reserved)* | —         |
//! | 6     | —            | speed        | —         |
//! | 7     | —            | eta          | —         |
//!
//! Each tag has its own minimum field count (`create` 5, `setdest` 8,
//! `destroy` 3); shorter lines are dropped.  Any numeric field that fails to
//! parse, or parses to NaN/∞, drops the whole line rather than letting a
//! non-finite sentinel reach the sort and the replay fold.

use walker_core::{Extent, NodeId, Point, TimeRange, TraceBounds};

use crate::event::Event;

/// Minimum whitespace-separated fields per tag.
const MIN_FIELDS_CREATE: usize = 5;
const MIN_FIELDS_SETDEST: usize = 8;
const MIN_FIELDS_DESTROY: usize = 3;

// ── Text parsing ──────────────────────────────────────────────────────────────

/// Parse raw trace text into a time-sorted event vector plus bounds.
///
/// Never fails: every malformed line is dropped.  A text with zero valid
/// lines yields `(vec![], None)`.
pub(crate) fn parse_text(text: &str) -> (Vec<Event>, Option<TraceBounds>) {
    let mut events = Vec::new();
    let mut extent: Option<Extent> = None;
    let mut time: Option<TimeRange> = None;

    for line in text.lines() {
        let Some(event) = parse_line(line) else {
            continue;
        };

        let t = event.time();
        match &mut time {
            None => time = Some(TimeRange::new(t, t)),
            Some(r) => {
                r.start = r.start.min(t);
                r.end = r.end.max(t);
            }
        }

        if let Some(pos) = event.position() {
            match &mut extent {
                None => extent = Some(Extent::from_point(pos)),
                Some(e) => e.include(pos),
            }
        }

        events.push(event);
    }

    // Stable: ties keep original input order (the format has no secondary key).
    events.sort_by(|a, b| a.time().total_cmp(&b.time()));

    let bounds = time.map(|time| TraceBounds { extent, time });
    (events, bounds)
}

// ── Line parsing ──────────────────────────────────────────────────────────────

/// Parse one line, or `None` if it should be dropped.
fn parse_line(line: &str) -> Option<Event> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() < MIN_FIELDS_DESTROY {
        return None;
    }

    let time = finite(fields[0])?;
    let tag = fields[1];
    let node = NodeId::from(fields[2]);

    match tag {
        "create" => {
            if fields.len() < MIN_FIELDS_CREATE {
                return None;
            }
            let pos = Point::new(finite(fields[3])?, finite(fields[4])?);
            Some(Event::Create { time, node, pos })
        }
        "setdest" => {
            if fields.len() < MIN_FIELDS_SETDEST {
                return None;
            }
            let pos = Point::new(finite(fields[3])?, finite(fields[4])?);
            // Field 5 is reserved in the source format and skipped.
            let speed = finite(fields[6])?;
            let eta = finite(fields[7])?;
            Some(Event::SetDest {
                time,
                node,
                pos,
                speed,
                eta,
            })
        }
        "destroy" => Some(Event::Destroy { time, node }),
        _ => None,
    }
}

/// Parse a field as a finite `f64`, rejecting NaN and infinities.
#[inline]
fn finite(field: &str) -> Option<f64> {
    field.parse::<f64>().ok().filter(|v| v.is_finite())
}
