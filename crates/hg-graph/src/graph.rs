//! Highway graph representation and builder.
//!
//! # Data layout
//!
//! Vertices live in one `Vec<Vertex>` indexed by [`VertexId`]; directed edge
//! records live in one `Vec<Edge>` arena indexed by [`EdgeId`].  Each vertex
//! keeps the `EdgeId`s of its outgoing records in an adjacency `Vec`.
//!
//! An undirected road between `a` and `b` is stored as two records: one in
//! `a`'s adjacency (to `b`, shape points ordered `a → b`) and one in `b`'s
//! (to `a`, shape points reversed).  Both carry the same `length_mi` scalar.
//!
//! # Adjacency order
//!
//! Adjacency vectors are appended in arrival order, and
//! [`HighwayGraph::out_edges`] walks them back to front: the most recently
//! added road comes first, matching a head-inserted chain.

use hg_core::{EdgeId, GeoPoint, VertexId, path_length_mi};

use crate::{GraphError, GraphResult};

/// Upper bound on up-front allocation; counts from a file header are not
/// trusted beyond this.
pub(crate) const MAX_PREALLOC: usize = 1 << 20;

// ── Vertex / Edge ─────────────────────────────────────────────────────────────

/// A labelled waypoint.
#[derive(Clone, Debug)]
pub struct Vertex {
    pub label: String,
    pub pos:   GeoPoint,
    /// Outgoing edge records in arrival order.  Use
    /// [`HighwayGraph::out_edges`] for chain order.
    adjacency: Vec<EdgeId>,
}

/// One direction of an undirected road segment.
#[derive(Clone, Debug)]
pub struct Edge {
    pub label: String,
    pub from:  VertexId,
    pub to:    VertexId,
    /// Intermediate points ordered from `from` to `to`.  May be empty.
    pub shape_points: Vec<GeoPoint>,
    /// Great-circle length in miles: `from`, each shape point, then `to`.
    pub length_mi: f64,
}

// ── HighwayGraph ──────────────────────────────────────────────────────────────

/// Immutable undirected highway graph.
///
/// Do not construct directly; use [`HighwayGraphBuilder`] or
/// [`load_tmg`](crate::load_tmg).
#[derive(Clone, Debug)]
pub struct HighwayGraph {
    vertices: Vec<Vertex>,
    edges:    Vec<Edge>,
    declared_edge_count: usize,
}

impl HighwayGraph {
    // ── Graph dimensions ──────────────────────────────────────────────────

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of directed edge records (twice the number of roads).
    pub fn edge_record_count(&self) -> usize {
        self.edges.len()
    }

    /// Undirected edge count as declared by the input.
    pub fn declared_edge_count(&self) -> usize {
        self.declared_edge_count
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    // ── Element access ────────────────────────────────────────────────────

    #[inline]
    pub fn vertex(&self, id: VertexId) -> &Vertex {
        &self.vertices[id.index()]
    }

    #[inline]
    pub fn edge(&self, id: EdgeId) -> &Edge {
        &self.edges[id.index()]
    }

    /// All vertices with their ids, in index order.
    pub fn vertices(&self) -> impl Iterator<Item = (VertexId, &Vertex)> + '_ {
        // `build` guarantees every index fits in a `u32`.
        self.vertices.iter().zip(0u32..).map(|(v, i)| (VertexId(i), v))
    }

    // ── Graph traversal ───────────────────────────────────────────────────

    /// Outgoing edge records of `vertex`, most recently added first.
    #[inline]
    pub fn out_edges(&self, vertex: VertexId) -> impl Iterator<Item = EdgeId> + '_ {
        self.vertices[vertex.index()].adjacency.iter().rev().copied()
    }

    #[inline]
    pub fn out_degree(&self, vertex: VertexId) -> usize {
        self.vertices[vertex.index()].adjacency.len()
    }
}

// ── HighwayGraphBuilder ───────────────────────────────────────────────────────

/// Collect vertices and roads, then call [`build`](Self::build).
///
/// Roads are recorded as plain tuples and not checked until `build`, which
/// validates every endpoint before materializing any edge record.
///
/// # Example
///
/// ```
/// use hg_core::GeoPoint;
/// use hg_graph::HighwayGraphBuilder;
///
/// let mut b = HighwayGraphBuilder::new();
/// let a = b.add_vertex("NY5@I-87", GeoPoint::new(42.70, -73.80));
/// let c = b.add_vertex("NY5@US9", GeoPoint::new(42.65, -73.75));
/// b.add_road(a, c, "NY5", vec![GeoPoint::new(42.68, -73.78)]);
/// let g = b.build().unwrap();
/// assert_eq!(g.vertex_count(), 2);
/// assert_eq!(g.edge_record_count(), 2); // one record per direction
/// ```
pub struct HighwayGraphBuilder {
    vertices:  Vec<Vertex>,
    raw_roads: Vec<RawRoad>,
    declared_edge_count: Option<usize>,
}

struct RawRoad {
    a:            VertexId,
    b:            VertexId,
    label:        String,
    shape_points: Vec<GeoPoint>,
}

impl HighwayGraphBuilder {
    pub fn new() -> Self {
        Self { vertices: Vec::new(), raw_roads: Vec::new(), declared_edge_count: None }
    }

    /// Pre-allocate for the expected counts (each capped at 2^20).
    pub fn with_capacity(vertices: usize, roads: usize) -> Self {
        Self {
            vertices:  Vec::with_capacity(vertices.min(MAX_PREALLOC)),
            raw_roads: Vec::with_capacity(roads.min(MAX_PREALLOC)),
            declared_edge_count: None,
        }
    }

    /// Add a vertex and return its `VertexId` (sequential from 0).
    ///
    /// Past the `u32` id space this returns [`VertexId::INVALID`] and
    /// [`build`](Self::build) fails.
    pub fn add_vertex(&mut self, label: impl Into<String>, pos: GeoPoint) -> VertexId {
        let id = VertexId::try_from(self.vertices.len()).unwrap_or(VertexId::INVALID);
        self.vertices.push(Vertex { label: label.into(), pos, adjacency: Vec::new() });
        id
    }

    /// Record an undirected road from `a` to `b`, with `shape_points`
    /// ordered `a → b`.
    pub fn add_road(
        &mut self,
        a: VertexId,
        b: VertexId,
        label: impl Into<String>,
        shape_points: Vec<GeoPoint>,
    ) {
        self.raw_roads.push(RawRoad { a, b, label: label.into(), shape_points });
    }

    /// Override the declared undirected edge count.  Defaults to the number
    /// of roads added.
    pub fn declared_edge_count(&mut self, count: usize) -> &mut Self {
        self.declared_edge_count = Some(count);
        self
    }

    pub fn vertex_count(&self) -> usize { self.vertices.len() }
    pub fn road_count(&self) -> usize { self.raw_roads.len() }

    /// Consume the builder and produce a [`HighwayGraph`].
    ///
    /// # Errors
    ///
    /// [`GraphError::UnknownVertex`] if any road endpoint is not a vertex
    /// id, [`GraphError::IdSpaceExhausted`] if vertices or edge records do
    /// not fit in `u32` ids.  Nothing is materialized in either case.
    pub fn build(self) -> GraphResult<HighwayGraph> {
        let vertex_count = self.vertices.len();
        check_id_space("vertex", vertex_count)?;
        check_id_space("edge record", self.raw_roads.len().saturating_mul(2))?;

        // Validate every endpoint before touching any adjacency.
        for road in &self.raw_roads {
            for end in [road.a, road.b] {
                if end.index() >= vertex_count {
                    return Err(GraphError::UnknownVertex { index: end.0, vertex_count });
                }
            }
        }

        let declared_edge_count = self.declared_edge_count.unwrap_or(self.raw_roads.len());
        let mut vertices = self.vertices;
        let mut edges: Vec<Edge> = Vec::with_capacity(self.raw_roads.len() * 2);

        for (road, n) in self.raw_roads.into_iter().zip(0u32..) {
            let start = vertices[road.a.index()].pos;
            let end = vertices[road.b.index()].pos;

            let length_mi = path_length_mi(
                std::iter::once(start)
                    .chain(road.shape_points.iter().copied())
                    .chain(std::iter::once(end)),
            );

            // Reverse point order, not the coordinates within a point.
            let reversed: Vec<GeoPoint> = road.shape_points.iter().rev().copied().collect();

            let forward = EdgeId(2 * n);
            edges.push(Edge {
                label: road.label.clone(),
                from: road.a,
                to: road.b,
                shape_points: road.shape_points,
                length_mi,
            });
            vertices[road.a.index()].adjacency.push(forward);

            let backward = EdgeId(2 * n + 1);
            edges.push(Edge {
                label: road.label,
                from: road.b,
                to: road.a,
                shape_points: reversed,
                length_mi,
            });
            vertices[road.b.index()].adjacency.push(backward);
        }

        Ok(HighwayGraph { vertices, edges, declared_edge_count })
    }
}

/// Ids are `u32` and `u32::MAX` is reserved for `INVALID`.
pub(crate) fn check_id_space(what: &'static str, count: usize) -> GraphResult<()> {
    if count < u32::MAX as usize {
        Ok(())
    } else {
        Err(GraphError::IdSpaceExhausted { what, count })
    }
}

impl Default for HighwayGraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}
