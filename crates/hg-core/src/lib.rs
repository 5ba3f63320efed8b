//! `hg-core` — foundational types for the `highway_graph` workspace.
//!
//! This crate has no `hg-*` dependencies and no required external ones
//! (`serde` is optional).
//!
//! # What lives here
//!
//! | Module  | Contents                                                   |
//! |---------|------------------------------------------------------------|
//! | [`geo`] | `GeoPoint`, great-circle distance, polyline length         |
//! | [`ids`] | `VertexId`, `EdgeId`                                       |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod geo;
pub mod ids;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use geo::{EARTH_RADIUS_MI, GeoPoint, path_length_mi};
pub use ids::{EdgeId, VertexId};
