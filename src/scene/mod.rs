//! Host scene capabilities
//!
//! The generator never owns scene objects. It asks the host to place assets,
//! keeps the opaque handles it gets back and later reads their geometry to build
//! the collider.

use glam::{Quat, Vec3};
use std::fmt;

use crate::mesh::{Mesh, PlacedMesh};
use crate::track::AssetKind;

/// In-memory scene used by the command-line tool and tests
pub mod memory;

pub use memory::{AssetHandle, MemoryScene};

/// Placement, cleanup, mesh access and collider assignment offered by a host
pub trait Scene {
    /// Opaque reference to one placed asset
    type Handle: Copy + Eq + fmt::Debug;

    /// Instantiate `asset` at `position` with `rotation`
    fn place(&mut self, asset: AssetKind, position: Vec3, rotation: Quat) -> Self::Handle;

    /// Remove every asset referenced by `handles`
    fn destroy_all(&mut self, handles: &[Self::Handle]);

    /// Geometry and world transform of a placed asset
    fn placed_mesh(&self, handle: Self::Handle) -> Option<PlacedMesh<'_>>;

    /// Install the collider for the whole track
    fn set_collision_mesh(&mut self, mesh: Mesh);
}
