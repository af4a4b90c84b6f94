//! Trace time model.
//!
//! # Design
//!
//! Trace timestamps are fractional seconds from the recording's own origin,
//! so time is carried as `f64` seconds rather than an integer tick counter.
//! The parser guarantees every timestamp entering the system is finite, which
//! makes `f64::total_cmp` a true total order everywhere downstream.

/// The closed interval `[start, end]` covered by a trace.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimeRange {
    /// Timestamp of the earliest accepted event.
    pub start: f64,
    /// Timestamp of the latest accepted event.
    pub end: f64,
}

impl TimeRange {
    #[inline]
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// Seconds spanned by the trace.
    #[inline]
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }

    #[inline]
    pub fn contains(&self, t: f64) -> bool {
        self.start <= t && t <= self.end
    }

    /// Clamp `t` into the range.  Used by scrubbing and keyboard stepping so
    /// the playback cursor can never leave the trace.
    #[inline]
    pub fn clamp(&self, t: f64) -> f64 {
        t.clamp(self.start, self.end)
    }
}

impl std::fmt::Display for TimeRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:.1} s, {:.1} s]", self.start, self.end)
    }
}
