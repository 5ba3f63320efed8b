//! `hg-graph` — highway graph model, TMG loading, and read-only queries.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`graph`]   | `HighwayGraph` (vertex + edge arenas), `HighwayGraphBuilder` |
//! | [`loader`]  | `load_tmg`, `load_tmg_reader`                               |
//! | [`query`]   | Extremal vertices and edges, edge-count consistency check   |
//! | [`summary`] | `GraphSummary` for presentation                             |
//! | [`config`]  | `GraphConfig`, `HeaderCheck`                                |
//! | [`error`]   | `GraphError`, `GraphResult<T>`                              |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives serde traits on config and summary types.           |

pub mod config;
pub mod error;
pub mod graph;
pub mod loader;
pub mod query;
pub mod summary;


pub use config::{GraphConfig, HeaderCheck, MAX_LENGTH_DECIMALS};
pub use error::{GraphError, GraphResult};
pub use graph::{Edge, HighwayGraph, HighwayGraphBuilder, Vertex};
pub use loader::{load_tmg, load_tmg_reader};
pub use query::{EdgeCountCheck, EdgeExtremes, VertexExtreme, VertexExtremes};
pub use summary::{EdgeSummary, GraphSummary, VertexSummary};
