//! Walker node identifier.
//!
//! Trace files identify nodes with a whitespace-delimited token that happens
//! to look numeric in the KTH dataset but carries no numeric guarantee, so the
//! id is kept as an opaque string.  `NodeId` is `Ord + Hash` so it works as a
//! map key and sorts deterministically for output.

use std::borrow::Borrow;
use std::fmt;

/// An opaque walker identifier, scoped to currently-live nodes.
///
/// An id may be destroyed and later reused by a subsequent `create`; the two
/// occurrences denote distinct walkers that merely share a label.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeId(Box<str>);

impl NodeId {
    #[inline]
    pub fn new(id: impl Into<Box<str>>) -> Self {
        Self(id.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for NodeId {
    #[inline]
    fn from(s: &str) -> Self {
        Self(s.into())
    }
}

impl From<String> for NodeId {
    #[inline]
    fn from(s: String) -> Self {
        Self(s.into())
    }
}

/// Allows `HashMap<NodeId, _>` lookups with a plain `&str` key.
impl Borrow<str> for NodeId {
    #[inline]
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
