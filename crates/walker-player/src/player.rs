//! The `Player` struct and its frame loop.

use walker_core::TimeRange;
use walker_replay::Snapshot;
use walker_trace::Trace;

use crate::observer::PlayerObserver;

/// Seconds of trace time one frame advances at speed 1.0.
pub const FRAME_STEP_SECS: f64 = 0.5;

/// Keyboard-step size (arrow key).
pub const NUDGE_FINE_SECS: f64 = 0.1;

/// Coarse keyboard-step size (shift + arrow key).
pub const NUDGE_COARSE_SECS: f64 = 1.0;

/// A scrubbable playback cursor over one trace.
///
/// Drives [`walker_replay::Snapshot`] queries from a cursor the caller can
/// play, pause, scrub, and step.  Holds no reconstructed world state — each
/// frame is a fresh query — so any interleaving of scrubs and frames yields
/// the same snapshots a fresh player would.
#[derive(Debug)]
pub struct Player {
    trace: Trace,
    /// Scrub range, `[first event, last event]`.  Collapses to `[0, 0]` for
    /// an empty trace, which renders as permanently empty.
    range: TimeRange,
    current_time: f64,
    speed: f64,
    playing: bool,
}

impl Player {
    /// Create a paused player with its cursor at the trace's first event.
    pub fn new(trace: Trace) -> Self {
        let range = trace
            .time_range()
            .unwrap_or_else(|| TimeRange::new(0.0, 0.0));
        Self {
            trace,
            range,
            current_time: range.start,
            speed: 1.0,
            playing: false,
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn trace(&self) -> &Trace {
        &self.trace
    }

    #[inline]
    pub fn time_range(&self) -> TimeRange {
        self.range
    }

    #[inline]
    pub fn current_time(&self) -> f64 {
        self.current_time
    }

    #[inline]
    pub fn speed(&self) -> f64 {
        self.speed
    }

    #[inline]
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    // ── Transport controls ────────────────────────────────────────────────

    #[inline]
    pub fn play(&mut self) {
        self.playing = true;
    }

    #[inline]
    pub fn pause(&mut self) {
        self.playing = false;
    }

    /// Toggle play/pause; returns the new playing state.
    #[inline]
    pub fn toggle(&mut self) -> bool {
        self.playing = !self.playing;
        self.playing
    }

    /// Set the playback speed multiplier (1.0 = real frame rate).
    #[inline]
    pub fn set_speed(&mut self, speed: f64) {
        self.speed = speed;
    }

    /// Scrub the cursor to `t`, clamped into the trace's range.
    ///
    /// Scrubbing pauses playback, mirroring a timeline slider grabbing the
    /// transport.
    pub fn seek(&mut self, t: f64) {
        self.playing = false;
        self.current_time = self.range.clamp(t);
    }

    /// Step the cursor by one keyboard increment without touching the
    /// playing state.  `forward` picks the direction, `coarse` the step size.
    pub fn nudge(&mut self, forward: bool, coarse: bool) {
        let step = if coarse {
            NUDGE_COARSE_SECS
        } else {
            NUDGE_FINE_SECS
        };
        let delta = if forward { step } else { -step };
        self.current_time = self.range.clamp(self.current_time + delta);
    }

    // ── Frames ────────────────────────────────────────────────────────────

    /// Reconstruct the snapshot at the current cursor without advancing.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::at(&self.trace, self.current_time)
    }

    /// Produce the current frame's snapshot, then — if playing — advance the
    /// cursor by `FRAME_STEP_SECS * speed`.
    ///
    /// When the advance would pass the last event, the cursor clamps to the
    /// end of the range and playback auto-pauses.
    pub fn frame(&mut self) -> Snapshot {
        let snapshot = self.snapshot();
        if self.playing {
            let next = self.current_time + FRAME_STEP_SECS * self.speed;
            if next > self.range.end {
                self.current_time = self.range.end;
                self.playing = false;
            } else {
                self.current_time = next;
            }
        }
        snapshot
    }

    /// Play from the current cursor to the end of the trace, invoking
    /// `observer` once per frame.
    ///
    /// Cooperative: each iteration is one `frame()` call, and the loop exits
    /// as soon as playback pauses — including a pause made by the observer
    /// itself through some side channel (there is no hidden state to lose by
    /// stopping early).
    pub fn run<O: PlayerObserver>(&mut self, observer: &mut O) {
        self.play();
        while self.playing {
            let time = self.current_time;
            let snapshot = self.frame();
            observer.on_frame(time, &snapshot);
        }
        observer.on_finished(self.current_time);
    }
}
