//! Dataset bounds derived at parse time.
//!
//! The replay engine itself never consults bounds; they exist for rendering
//! layers that need to map trace metres onto screen coordinates, and for the
//! player to know the scrubbing range.

use crate::{Point, TimeRange};

// ── Extent ────────────────────────────────────────────────────────────────────

/// Axis-aligned spatial bounding box over the positions in a trace, metres.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Extent {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl Extent {
    /// The degenerate extent of a single position.
    #[inline]
    pub fn from_point(p: Point) -> Self {
        Self {
            min_x: p.x,
            max_x: p.x,
            min_y: p.y,
            max_y: p.y,
        }
    }

    /// Grow the extent to include `p`.
    pub fn include(&mut self, p: Point) {
        self.min_x = self.min_x.min(p.x);
        self.max_x = self.max_x.max(p.x);
        self.min_y = self.min_y.min(p.y);
        self.max_y = self.max_y.max(p.y);
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.min_x <= p.x && p.x <= self.max_x && self.min_y <= p.y && p.y <= self.max_y
    }

    /// Expand each axis by `frac` of its span on both sides.
    ///
    /// Renderers use a small pad (5 % in the reference visualization) so
    /// markers at the edge of the observed area sit just inside the viewport.
    pub fn padded(&self, frac: f64) -> Extent {
        let dx = self.width() * frac;
        let dy = self.height() * frac;
        Extent {
            min_x: self.min_x - dx,
            max_x: self.max_x + dx,
            min_y: self.min_y - dy,
            max_y: self.max_y + dy,
        }
    }
}

// ── TraceBounds ───────────────────────────────────────────────────────────────

/// Min/max reductions over one trace, computed once at load time.
///
/// `extent` covers x/y from `create`/`setdest` events only; `time` covers all
/// accepted events.  A trace consisting solely of `destroy` events has a time
/// range but no extent.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TraceBounds {
    pub extent: Option<Extent>,
    pub time: TimeRange,
}
