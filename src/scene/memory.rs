//! A scene that keeps placed assets in memory

use glam::{Mat4, Quat, Vec3};
use log::debug;
use std::collections::HashMap;

use crate::mesh::primitives::road_mesh;
use crate::mesh::{Mesh, PlacedMesh};
use crate::scene::Scene;
use crate::track::AssetKind;

/// Index of a placement slot in a [`MemoryScene`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AssetHandle(usize);

impl AssetHandle {
    /// Slot index
    pub const fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone)]
struct Placement {
    asset: AssetKind,
    transform: Mat4,
}

/// Scene storing placements as transforms over a shared mesh library
///
/// Destroyed slots stay allocated so handles are never reused.
#[derive(Debug, Clone)]
pub struct MemoryScene {
    library: HashMap<AssetKind, Mesh>,
    slots: Vec<Option<Placement>>,
    collider: Option<Mesh>,
    collider_updates: usize,
}

impl MemoryScene {
    /// Scene whose library holds the reference road plates for `spacing`
    pub fn new(spacing: f32) -> Self {
        Self::with_library(
            AssetKind::ALL
                .into_iter()
                .map(|asset| (asset, road_mesh(asset, spacing))),
        )
    }

    /// Scene using caller-provided meshes; assets missing from `library` have no geometry
    pub fn with_library(library: impl IntoIterator<Item = (AssetKind, Mesh)>) -> Self {
        Self {
            library: library.into_iter().collect(),
            slots: Vec::new(),
            collider: None,
            collider_updates: 0,
        }
    }

    /// Number of placements not yet destroyed
    pub fn live_count(&self) -> usize {
        self.slots.iter().flatten().count()
    }

    /// Number of placements ever made
    pub fn placed_total(&self) -> usize {
        self.slots.len()
    }

    /// Asset kind of a live placement
    pub fn asset(&self, handle: AssetHandle) -> Option<AssetKind> {
        self.slot(handle).map(|placement| placement.asset)
    }

    /// Collider installed by the last [`Scene::set_collision_mesh`] call
    pub const fn collider(&self) -> Option<&Mesh> {
        self.collider.as_ref()
    }

    /// Number of times a collider was installed
    pub const fn collider_updates(&self) -> usize {
        self.collider_updates
    }

    fn slot(&self, handle: AssetHandle) -> Option<&Placement> {
        self.slots.get(handle.0).and_then(Option::as_ref)
    }
}

impl Scene for MemoryScene {
    type Handle = AssetHandle;

    fn place(&mut self, asset: AssetKind, position: Vec3, rotation: Quat) -> Self::Handle {
        let handle = AssetHandle(self.slots.len());
        self.slots.push(Some(Placement {
            asset,
            transform: Mat4::from_rotation_translation(rotation, position),
        }));
        handle
    }

    fn destroy_all(&mut self, handles: &[Self::Handle]) {
        for handle in handles {
            if let Some(slot) = self.slots.get_mut(handle.0) {
                *slot = None;
            }
        }
        debug!(
            "Destroyed {} placements, {} still live",
            handles.len(),
            self.live_count()
        );
    }

    fn placed_mesh(&self, handle: Self::Handle) -> Option<PlacedMesh<'_>> {
        let placement = self.slot(handle)?;
        let mesh = self.library.get(&placement.asset)?;
        Some(PlacedMesh::new(mesh, placement.transform))
    }

    fn set_collision_mesh(&mut self, mesh: Mesh) {
        self.collider = Some(mesh);
        self.collider_updates += 1;
    }
}
