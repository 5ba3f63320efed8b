//! Whole-graph summary for presentation.
//!
//! [`GraphSummary`] is plain data: labels, positions, shape points and
//! rounded lengths, with destinations already resolved to their labels.
//! Its `Display` impl renders the classic text dump:
//!
//! ```text
//! |V|=<vertices>, |E|=<edges>
//! <label> (<lat>,<lng>)
//!   to <label> (<lat>,<lng>) on <road>[ via (<lat>,<lng>) ...] length <miles>
//! ```

use std::fmt;

use hg_core::GeoPoint;

use crate::config::GraphConfig;
use crate::graph::HighwayGraph;

/// One outgoing edge record as seen from its source vertex.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct EdgeSummary {
    pub dest_label:   String,
    pub dest_pos:     GeoPoint,
    pub label:        String,
    pub shape_points: Vec<GeoPoint>,
    /// Length in miles, rounded to `GraphConfig::length_decimals` places.
    pub length_mi:    f64,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct VertexSummary {
    pub label: String,
    pub pos:   GeoPoint,
    /// Outgoing edges in chain order.
    pub edges: Vec<EdgeSummary>,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GraphSummary {
    pub vertex_count: usize,
    pub edge_count:   usize,
    pub vertices:     Vec<VertexSummary>,
}

impl GraphSummary {
    pub fn new(graph: &HighwayGraph, config: &GraphConfig) -> Self {
        let vertices = graph
            .vertices()
            .map(|(id, v)| VertexSummary {
                label: v.label.clone(),
                pos:   v.pos,
                edges: graph
                    .out_edges(id)
                    .map(|e| {
                        let edge = graph.edge(e);
                        let dest = graph.vertex(edge.to);
                        EdgeSummary {
                            dest_label:   dest.label.clone(),
                            dest_pos:     dest.pos,
                            label:        edge.label.clone(),
                            shape_points: edge.shape_points.clone(),
                            length_mi:    config.round_length(edge.length_mi),
                        }
                    })
                    .collect(),
            })
            .collect();

        Self {
            vertex_count: graph.vertex_count(),
            edge_count: graph.declared_edge_count(),
            vertices,
        }
    }
}

impl fmt::Display for GraphSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "|V|={}, |E|={}", self.vertex_count, self.edge_count)?;
        for v in &self.vertices {
            writeln!(f, "{} {}", v.label, v.pos)?;
            for e in &v.edges {
                write!(f, "  to {} {} on {}", e.dest_label, e.dest_pos, e.label)?;
                if !e.shape_points.is_empty() {
                    f.write_str(" via")?;
                    for p in &e.shape_points {
                        write!(f, " {p}")?;
                    }
                }
                // Shortest round-trip form: no trailing zeros.
                writeln!(f, " length {}", e.length_mi)?;
            }
        }
        Ok(())
    }
}
