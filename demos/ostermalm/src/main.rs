//! ostermalm — smallest example for the walker trace framework.
//!
//! Replays an embedded excerpt in the style of the KTH Walkers dataset
//! (pedestrians crossing a street grid in Ostermalm, Stockholm; positions in
//! metres, ~0.6 s between movement updates).  Pass a path to replay a real
//! trace file instead:
//!
//! ```text
//! cargo run -p ostermalm -- path/to/walkers.tr
//! ```
//!
//! Writes `walker_snapshots.csv` and `frame_summaries.csv` to `./output`.

use std::path::Path;

use anyhow::{Context, Result};

use walker_output::{CsvWriter, PlayerOutputObserver};
use walker_player::{Player, PlayerObserver};
use walker_replay::{inspect, Snapshot};
use walker_trace::Trace;

// ── Constants ─────────────────────────────────────────────────────────────────

const OUTPUT_DIR: &str = "./output";
const PLAYBACK_SPEED: f64 = 2.0;
const PROGRESS_EVERY_FRAMES: usize = 10;

// ── Embedded trace ────────────────────────────────────────────────────────────

// Three walkers entering through different passages.  Walker 3 receives no
// destroy and no further updates — it expires through the 30 s idle timeout.
const TRACE: &str = "\
0.0 create 1 12.0 80.5 0
0.6 setdest 1 13.1 79.8 0 1.31 1.5
1.2 setdest 1 14.3 78.9 0 1.28 2.4
2.0 create 2 61.0 4.0 0
2.6 setdest 2 60.2 5.3 0 0.92 28.0
3.0 create 3 33.0 41.0 0
3.6 setdest 1 15.5 78.0 0 1.30 25.0
4.2 setdest 2 59.1 6.8 0 0.95 28.0
9.8 setdest 1 22.0 74.0 0 1.27 25.0
14.0 destroy 2
24.9 destroy 1
";

// ── Progress observer ─────────────────────────────────────────────────────────

struct ConsolePrinter {
    frames: usize,
}

impl PlayerObserver for ConsolePrinter {
    fn on_frame(&mut self, time: f64, snapshot: &Snapshot) {
        if self.frames % PROGRESS_EVERY_FRAMES == 0 {
            println!("  t={time:>5.1} s  active walkers: {}", snapshot.active_count());
        }
        self.frames += 1;
    }

    fn on_finished(&mut self, final_time: f64) {
        println!("  playback finished at t={final_time:.1} s ({} frames)", self.frames);
    }
}

/// Fan out player callbacks to the console printer and the CSV writer.
struct Tee<'a, A: PlayerObserver, B: PlayerObserver>(&'a mut A, &'a mut B);

impl<A: PlayerObserver, B: PlayerObserver> PlayerObserver for Tee<'_, A, B> {
    fn on_frame(&mut self, time: f64, snapshot: &Snapshot) {
        self.0.on_frame(time, snapshot);
        self.1.on_frame(time, snapshot);
    }

    fn on_finished(&mut self, final_time: f64) {
        self.0.on_finished(final_time);
        self.1.on_finished(final_time);
    }
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let trace = match std::env::args().nth(1) {
        Some(path) => Trace::load(Path::new(&path))
            .with_context(|| format!("loading trace {path}"))?,
        None => Trace::parse(TRACE),
    };

    println!("── Dataset ──────────────────────────────");
    println!("  events: {}", trace.len());
    if let Some(bounds) = trace.bounds() {
        println!("  time range: {}", bounds.time);
        if let Some(extent) = bounds.extent {
            let view = extent.padded(0.05);
            println!(
                "  area: {:.1} m × {:.1} m (view {:.1} × {:.1})",
                extent.width(),
                extent.height(),
                view.width(),
                view.height(),
            );
        }
    }

    std::fs::create_dir_all(OUTPUT_DIR)?;
    let writer = CsvWriter::new(Path::new(OUTPUT_DIR))?;
    let mut output = PlayerOutputObserver::new(writer);
    let mut console = ConsolePrinter { frames: 0 };

    println!("── Playback ({PLAYBACK_SPEED}x) ─────────────────────");
    let mut player = Player::new(trace);
    player.set_speed(PLAYBACK_SPEED);
    player.run(&mut Tee(&mut console, &mut output));

    if let Some(e) = output.take_error() {
        return Err(e).context("writing playback output");
    }

    // Scrub back and inspect walker 1 mid-trace, the way a details panel would.
    println!("── Inspection ───────────────────────────");
    player.seek(10.0);
    let snapshot = player.snapshot();
    match inspect(player.trace(), &snapshot, "1") {
        Some(d) => {
            let speed = d.speed.map_or("N/A".into(), |s| format!("{s:.2} m/s"));
            println!("  walker 1 at t=10.0: pos {}, speed {speed}", d.pos);
        }
        None => println!("  walker 1 has left the observed area"),
    }

    println!("  output written to {OUTPUT_DIR}");
    Ok(())
}
