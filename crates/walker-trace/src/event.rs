//! Trace event model.

use walker_core::{NodeId, Point};

/// One parsed trace line.
///
/// Events are immutable once parsed.  `time` is guaranteed finite by the
/// parser, as are all coordinates, speeds, and etas.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "lowercase"))]
pub enum Event {
    /// A walker entered the observed area at `pos`.
    Create { time: f64, node: NodeId, pos: Point },

    /// A walker was assigned a new destination.
    ///
    /// `eta` is the absolute trace time at which the walker is expected to
    /// have reached `pos`, not a duration.
    SetDest {
        time: f64,
        node: NodeId,
        pos: Point,
        speed: f64,
        eta: f64,
    },

    /// A walker left the observed area.
    Destroy { time: f64, node: NodeId },
}

impl Event {
    #[inline]
    pub fn time(&self) -> f64 {
        match self {
            Event::Create { time, .. }
            | Event::SetDest { time, .. }
            | Event::Destroy { time, .. } => *time,
        }
    }

    #[inline]
    pub fn node(&self) -> &NodeId {
        match self {
            Event::Create { node, .. }
            | Event::SetDest { node, .. }
            | Event::Destroy { node, .. } => node,
        }
    }

    /// The position carried by the event, if any (`destroy` carries none).
    #[inline]
    pub fn position(&self) -> Option<Point> {
        match self {
            Event::Create { pos, .. } | Event::SetDest { pos, .. } => Some(*pos),
            Event::Destroy { .. } => None,
        }
    }
}
