//! Procedural closed-loop track generation on a grid of road tiles
//!
//! A 3x3 ring is grown by duplicating through-rows and through-columns, then every
//! patch of the grid is rewritten with a randomly chosen simple path between its
//! boundary connectors. The finished grid is walked once to emit placement commands,
//! and the placed road meshes are welded into a single collision surface.

#![forbid(unsafe_code)]

/// Patch rewriting: connector scanning, path search, tile resolution and the generation pipeline
pub mod algorithm;
/// Input/output operations, configuration and error handling
pub mod io;
/// Mesh combination, vertex welding and reference road geometry
pub mod mesh;
/// Host scene capabilities the generator places tiles through
pub mod scene;
/// Grid coordinates, directions, tile types and the track grid
pub mod spatial;
/// Loop traversal, placement streams and the generation session
pub mod track;

pub use io::error::{Result, TrackError};
