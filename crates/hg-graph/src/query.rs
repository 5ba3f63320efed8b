//! Read-only scans over a built [`HighwayGraph`].
//!
//! Every query is a single forward pass.  Ties always keep the first
//! candidate met in scan order: vertices by index, then each vertex's edges
//! in chain order.

use std::fmt;

use tracing::warn;

use hg_core::{EdgeId, VertexId};

use crate::graph::{HighwayGraph, Vertex};
use crate::{GraphError, GraphResult};

// ── Vertex extremes ───────────────────────────────────────────────────────────

/// Which extremal vertex to look for.
///
/// `Easternmost` picks the smallest longitude and `Westernmost` the largest.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum VertexExtreme {
    Northernmost,
    Southernmost,
    Easternmost,
    Westernmost,
    LongestLabel,
    ShortestLabel,
}

impl VertexExtreme {
    pub const ALL: [VertexExtreme; 6] = [
        VertexExtreme::Northernmost,
        VertexExtreme::Southernmost,
        VertexExtreme::Easternmost,
        VertexExtreme::Westernmost,
        VertexExtreme::LongestLabel,
        VertexExtreme::ShortestLabel,
    ];

    fn key(self, v: &Vertex) -> f64 {
        match self {
            Self::Northernmost | Self::Southernmost => v.pos.lat,
            Self::Easternmost | Self::Westernmost => v.pos.lng,
            Self::LongestLabel | Self::ShortestLabel => v.label.chars().count() as f64,
        }
    }

    /// Does `candidate` strictly beat `champion`?
    fn beats(self, candidate: f64, champion: f64) -> bool {
        match self {
            Self::Northernmost | Self::Westernmost | Self::LongestLabel => candidate > champion,
            Self::Southernmost | Self::Easternmost | Self::ShortestLabel => candidate < champion,
        }
    }
}

impl fmt::Display for VertexExtreme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Northernmost  => "Northernmost Vertex",
            Self::Southernmost  => "Southernmost Vertex",
            Self::Easternmost   => "Easternmost Vertex",
            Self::Westernmost   => "Westernmost Vertex",
            Self::LongestLabel  => "Longest Vertex Label",
            Self::ShortestLabel => "Shortest Vertex Label",
        };
        f.write_str(s)
    }
}

/// All six extremal vertices of a graph.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct VertexExtremes {
    pub northernmost:   VertexId,
    pub southernmost:   VertexId,
    pub easternmost:    VertexId,
    pub westernmost:    VertexId,
    pub longest_label:  VertexId,
    pub shortest_label: VertexId,
}

impl VertexExtremes {
    pub fn get(&self, kind: VertexExtreme) -> VertexId {
        match kind {
            VertexExtreme::Northernmost  => self.northernmost,
            VertexExtreme::Southernmost  => self.southernmost,
            VertexExtreme::Easternmost   => self.easternmost,
            VertexExtreme::Westernmost   => self.westernmost,
            VertexExtreme::LongestLabel  => self.longest_label,
            VertexExtreme::ShortestLabel => self.shortest_label,
        }
    }
}

// ── Edge extremes ─────────────────────────────────────────────────────────────

/// Longest and shortest undirected edges, and how many were scanned.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct EdgeExtremes {
    pub longest:  EdgeId,
    pub shortest: EdgeId,
    pub counted:  usize,
}

/// Undirected edges found by a scan versus the count the input declared.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct EdgeCountCheck {
    pub counted:  usize,
    pub declared: usize,
}

impl EdgeCountCheck {
    #[inline]
    pub fn is_consistent(&self) -> bool {
        self.counted == self.declared
    }
}

// ── Queries ───────────────────────────────────────────────────────────────────

impl HighwayGraph {
    /// The first vertex in index order that is extremal under `kind`.
    ///
    /// # Errors
    ///
    /// [`GraphError::EmptyGraph`] if the graph has no vertices.
    pub fn extreme_vertex(&self, kind: VertexExtreme) -> GraphResult<VertexId> {
        let mut vertices = self.vertices();
        let (mut best, first) = vertices.next().ok_or(GraphError::EmptyGraph)?;
        let mut best_key = kind.key(first);

        for (id, v) in vertices {
            let key = kind.key(v);
            if kind.beats(key, best_key) {
                best = id;
                best_key = key;
            }
        }
        Ok(best)
    }

    /// Every [`VertexExtreme`] at once.
    pub fn vertex_extremes(&self) -> GraphResult<VertexExtremes> {
        Ok(VertexExtremes {
            northernmost:   self.extreme_vertex(VertexExtreme::Northernmost)?,
            southernmost:   self.extreme_vertex(VertexExtreme::Southernmost)?,
            easternmost:    self.extreme_vertex(VertexExtreme::Easternmost)?,
            westernmost:    self.extreme_vertex(VertexExtreme::Westernmost)?,
            longest_label:  self.extreme_vertex(VertexExtreme::LongestLabel)?,
            shortest_label: self.extreme_vertex(VertexExtreme::ShortestLabel)?,
        })
    }

    /// One edge record per undirected edge: the copy whose destination index
    /// is greater than its source index.
    ///
    /// Self-loops (`from == to`) never qualify.
    pub fn undirected_edges(&self) -> impl Iterator<Item = EdgeId> + '_ {
        self.vertices().flat_map(move |(id, _)| {
            self.out_edges(id).filter(move |&e| self.edge(e).to > id)
        })
    }

    /// Longest and shortest undirected edge by `length_mi`.
    ///
    /// # Errors
    ///
    /// [`GraphError::EmptyGraph`] if no edge qualifies.
    pub fn edge_extremes(&self) -> GraphResult<EdgeExtremes> {
        let mut edges = self.undirected_edges();
        let first = edges.next().ok_or(GraphError::EmptyGraph)?;

        let mut out = EdgeExtremes { longest: first, shortest: first, counted: 1 };
        let mut longest_mi = self.edge(first).length_mi;
        let mut shortest_mi = longest_mi;

        for e in edges {
            out.counted += 1;
            let len = self.edge(e).length_mi;
            if len > longest_mi {
                out.longest = e;
                longest_mi = len;
            }
            if len < shortest_mi {
                out.shortest = e;
                shortest_mi = len;
            }
        }
        Ok(out)
    }

    /// Compare the scanned undirected edge count with the declared one.
    ///
    /// A mismatch is logged and returned, never raised as an error.
    pub fn check_edge_count(&self) -> EdgeCountCheck {
        let check = EdgeCountCheck {
            counted:  self.undirected_edges().count(),
            declared: self.declared_edge_count(),
        };
        if !check.is_consistent() {
            warn!(
                counted = check.counted,
                declared = check.declared,
                "undirected edge count does not match the declared count"
            );
        }
        check
    }
}
