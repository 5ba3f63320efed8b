//! TMG graph loader.
//!
//! # File format
//!
//! ```text
//! TMG 1.0 simple
//! 3 2
//! NY5@I-87 42.70 -73.80
//! NY5@US9 42.65 -73.75
//! US9@I-90 42.62 -73.72
//! 0 1 NY5 42.68 -73.78 42.66 -73.76
//! 1 2 US9
//! ```
//!
//! Line 1 is the header, line 2 holds `vertexCount edgeCount`, then one
//! `label lat lng` line per vertex and one `v1 v2 label [lat lng ...]` line
//! per undirected edge.  Edge endpoints are 0-based vertex positions; the
//! optional trailing pairs are shape points ordered `v1 → v2`.
//!
//! Blank lines between records are skipped.  Anything after the last
//! declared edge is ignored.
//!
//! # Staging
//!
//! The whole file is parsed into plain records first, with every endpoint
//! checked against the vertex count as its line is read.  Only then is a
//! [`HighwayGraphBuilder`] filled and built.  Any failure aborts the load.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;
use std::str::FromStr;

use tracing::{debug, info};

use hg_core::{GeoPoint, VertexId};

use crate::config::{GraphConfig, HeaderCheck};
use crate::graph::{HighwayGraph, HighwayGraphBuilder, MAX_PREALLOC, check_id_space};
use crate::{GraphError, GraphResult};

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a highway graph from a TMG file.
pub fn load_tmg(path: &Path, config: &GraphConfig) -> GraphResult<HighwayGraph> {
    let file = File::open(path)?;
    debug!(path = %path.display(), "opened TMG file");
    load_tmg_reader(file, config)
}

/// Like [`load_tmg`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or for input that does not
/// come from a file.
pub fn load_tmg_reader<R: Read>(reader: R, config: &GraphConfig) -> GraphResult<HighwayGraph> {
    let records = parse_records(reader, config)?;

    let mut builder =
        HighwayGraphBuilder::with_capacity(records.vertices.len(), records.roads.len());
    for v in records.vertices {
        builder.add_vertex(v.label, v.pos);
    }
    for r in records.roads {
        builder.add_road(r.v1, r.v2, r.label, r.shape_points);
    }
    builder.declared_edge_count(records.declared_edge_count);

    let graph = builder.build()?;
    info!(
        vertices = graph.vertex_count(),
        edges = graph.declared_edge_count(),
        "loaded TMG graph"
    );
    Ok(graph)
}

// ── Intermediate records ──────────────────────────────────────────────────────

struct VertexRecord {
    label: String,
    pos:   GeoPoint,
}

struct RoadRecord {
    v1:           VertexId,
    v2:           VertexId,
    label:        String,
    shape_points: Vec<GeoPoint>,
}

struct TmgRecords {
    vertices: Vec<VertexRecord>,
    roads:    Vec<RoadRecord>,
    declared_edge_count: usize,
}

// ── Line reader ───────────────────────────────────────────────────────────────

struct TmgLines<R> {
    inner:   std::io::Lines<BufReader<R>>,
    line_no: usize,
}

impl<R: Read> TmgLines<R> {
    fn new(reader: R) -> Self {
        Self { inner: BufReader::new(reader).lines(), line_no: 0 }
    }

    /// Next physical line, or `None` at end of input.
    fn next_raw(&mut self) -> GraphResult<Option<String>> {
        match self.inner.next() {
            None => Ok(None),
            Some(line) => {
                self.line_no += 1;
                Ok(Some(line?))
            }
        }
    }

    /// Next non-blank line; end of input is a format error naming `expected`.
    fn next_record(&mut self, expected: &str) -> GraphResult<String> {
        loop {
            match self.next_raw()? {
                None => {
                    return Err(GraphError::Format {
                        line:    self.line_no + 1,
                        message: format!("unexpected end of input, expected {expected}"),
                    });
                }
                Some(line) if line.trim().is_empty() => continue,
                Some(line) => return Ok(line),
            }
        }
    }

    fn format_error(&self, message: impl Into<String>) -> GraphError {
        GraphError::Format { line: self.line_no, message: message.into() }
    }
}

// ── Parsing ───────────────────────────────────────────────────────────────────

fn parse_records<R: Read>(reader: R, config: &GraphConfig) -> GraphResult<TmgRecords> {
    let mut lines = TmgLines::new(reader);

    // Header.
    let Some(header) = lines.next_raw()? else {
        return Err(GraphError::Format { line: 1, message: "missing TMG header line".into() });
    };
    if config.header == HeaderCheck::Strict {
        check_header(&header).map_err(|m| lines.format_error(m))?;
    }

    // Counts.
    let counts = lines.next_record("vertex and edge counts")?;
    let (vertex_count, edge_count) = match counts.split_whitespace().collect::<Vec<_>>()[..] {
        [v, e] => (
            parse_token::<usize>(v, "vertex count").map_err(|m| lines.format_error(m))?,
            parse_token::<usize>(e, "edge count").map_err(|m| lines.format_error(m))?,
        ),
        _ => return Err(lines.format_error("expected `<vertexCount> <edgeCount>`")),
    };
    if check_id_space("vertex", vertex_count).is_err() {
        return Err(lines.format_error(format!("vertex count {vertex_count} is too large")));
    }
    debug!(vertex_count, edge_count, "read TMG counts");

    // Vertices.
    let mut vertices = Vec::with_capacity(vertex_count.min(MAX_PREALLOC));
    for _ in 0..vertex_count {
        let line = lines.next_record("a vertex line")?;
        let vertex = parse_vertex(&line).map_err(|m| lines.format_error(m))?;
        vertices.push(vertex);
    }

    // Edges.
    let mut roads = Vec::with_capacity(edge_count.min(MAX_PREALLOC));
    for _ in 0..edge_count {
        let line = lines.next_record("an edge line")?;
        let road = parse_road(&line, lines.line_no, vertex_count)?;
        roads.push(road);
    }

    let mut trailing = 0usize;
    while let Some(line) = lines.next_raw()? {
        if !line.trim().is_empty() {
            trailing += 1;
        }
    }
    if trailing > 0 {
        debug!(trailing, "ignoring lines after the last declared edge");
    }

    Ok(TmgRecords { vertices, roads, declared_edge_count: edge_count })
}

fn check_header(header: &str) -> Result<(), String> {
    match header.split_whitespace().collect::<Vec<_>>()[..] {
        ["TMG", _, "simple"] => Ok(()),
        ["TMG", _, format] => Err(format!("unsupported TMG graph format {format:?}, expected \"simple\"")),
        _ => Err(format!("not a TMG header: {:?}", header.trim())),
    }
}

fn parse_vertex(line: &str) -> Result<VertexRecord, String> {
    match line.split_whitespace().collect::<Vec<_>>()[..] {
        [label, lat, lng] => Ok(VertexRecord {
            label: label.to_owned(),
            pos:   GeoPoint::new(parse_coord(lat, "latitude")?, parse_coord(lng, "longitude")?),
        }),
        ref tokens => Err(format!("vertex line needs `label lat lng`, found {} tokens", tokens.len())),
    }
}

fn parse_road(line: &str, line_no: usize, vertex_count: usize) -> GraphResult<RoadRecord> {
    let format_error = |message: String| GraphError::Format { line: line_no, message };
    let tokens: Vec<&str> = line.split_whitespace().collect();

    let [v1, v2, label, rest @ ..] = &tokens[..] else {
        return Err(format_error(format!(
            "edge line needs `v1 v2 label`, found {} tokens",
            tokens.len()
        )));
    };

    let v1 = parse_endpoint(v1, line_no, vertex_count)?;
    let v2 = parse_endpoint(v2, line_no, vertex_count)?;

    if rest.len() % 2 != 0 {
        return Err(format_error(format!(
            "odd number of shape point coordinates ({}) on edge {label}",
            rest.len()
        )));
    }
    let shape_points = rest
        .chunks_exact(2)
        .map(|pair| {
            Ok(GeoPoint::new(
                parse_coord(pair[0], "shape point latitude")?,
                parse_coord(pair[1], "shape point longitude")?,
            ))
        })
        .collect::<Result<Vec<_>, String>>()
        .map_err(format_error)?;

    Ok(RoadRecord { v1, v2, label: (*label).to_owned(), shape_points })
}

fn parse_endpoint(token: &str, line_no: usize, vertex_count: usize) -> GraphResult<VertexId> {
    let index = parse_token::<i64>(token, "vertex index")
        .map_err(|message| GraphError::Format { line: line_no, message })?;

    usize::try_from(index)
        .ok()
        .filter(|&i| i < vertex_count)
        .and_then(|i| VertexId::try_from(i).ok())
        .ok_or(GraphError::VertexIndex { line: line_no, index, vertex_count })
}

fn parse_coord(token: &str, what: &str) -> Result<f64, String> {
    let value = parse_token::<f64>(token, what)?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(format!("invalid {what} {token:?}: not a finite number"))
    }
}

fn parse_token<T: FromStr>(token: &str, what: &str) -> Result<T, String> {
    token.parse::<T>().map_err(|_| format!("invalid {what} {token:?}"))
}
