//! Collision mesh assembly
//!
//! Placed road meshes are combined in world space and their near-duplicate
//! vertices welded into one collider.

/// Indexed triangle meshes and world placement
pub mod geometry;
/// Reference road plates for each asset kind
pub mod primitives;
/// Vertex welding and collider building
pub mod weld;

pub use geometry::{Mesh, PlacedMesh};
pub use weld::{CollisionMeshBuilder, WeldReport, WeldThresholds, weld_vertices};
