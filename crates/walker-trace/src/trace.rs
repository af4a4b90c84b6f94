//! The `Trace` type — a parsed, immutable event log.

use std::io::Read;
use std::path::Path;

use walker_core::{TimeRange, TraceBounds};

use crate::error::TraceResult;
use crate::event::Event;
use crate::parser::parse_text;

/// A parsed trace: events sorted ascending by time, plus load-time bounds.
///
/// Immutable after construction.  The replay engine treats `events()` as a
/// read-only slice, so a `Trace` may be shared freely between callers.
#[derive(Clone, Debug, PartialEq)]
pub struct Trace {
    events: Vec<Event>,
    bounds: Option<TraceBounds>,
}

impl Trace {
    /// Parse trace text.  Infallible — malformed lines are dropped.
    pub fn parse(text: &str) -> Self {
        let (events, bounds) = parse_text(text);
        Self { events, bounds }
    }

    /// Read a whole trace file into memory and parse it.
    ///
    /// The source datasets are small (thousands of events), so there is no
    /// streaming mode — the one-shot read matches how the traces are served.
    pub fn load(path: &Path) -> TraceResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(Self::parse(&text))
    }

    /// Like [`Trace::load`] but accepts any `Read` source.
    ///
    /// Useful for testing (pass a `std::io::Cursor`) or loading from network
    /// streams.
    pub fn from_reader<R: Read>(mut reader: R) -> TraceResult<Self> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        Ok(Self::parse(&text))
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// All accepted events, sorted ascending by time (stable on ties).
    #[inline]
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Load-time min/max reductions; `None` for a trace with zero events.
    #[inline]
    pub fn bounds(&self) -> Option<&TraceBounds> {
        self.bounds.as_ref()
    }

    /// The `[first event, last event]` time interval, if any events exist.
    #[inline]
    pub fn time_range(&self) -> Option<TimeRange> {
        self.bounds.map(|b| b.time)
    }

    /// Total accepted events.
    #[inline]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
