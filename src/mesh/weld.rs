//! Vertex welding and collider assembly
//!
//! Every raw vertex is compared against the vertices accepted so far and merged
//! into the first one that is close enough in both position and normal. The scan
//! is quadratic in vertex count, which is fine for the few hundred vertices of a
//! track collider.

use glam::Vec3;
use log::{debug, warn};

use crate::io::configuration::{WELD_ANGLE_DEGREES, WELD_DISTANCE_SQUARED};
use crate::mesh::geometry::{Mesh, PlacedMesh};

/// Tolerances under which two vertices are considered the same
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeldThresholds {
    /// Maximum squared distance between positions
    pub distance_squared: f32,
    /// Maximum angle between normals, in degrees
    pub angle_degrees: f32,
}

impl Default for WeldThresholds {
    fn default() -> Self {
        Self {
            distance_squared: WELD_DISTANCE_SQUARED,
            angle_degrees: WELD_ANGLE_DEGREES,
        }
    }
}

/// Vertex and triangle counts of one weld
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WeldReport {
    /// Vertices before welding
    pub input_vertices: usize,
    /// Vertices after welding
    pub output_vertices: usize,
    /// Triangles kept in the output
    pub triangles: usize,
}

impl WeldReport {
    /// Number of vertices merged away
    pub const fn merged(&self) -> usize {
        self.input_vertices.saturating_sub(self.output_vertices)
    }
}

/// Angle in degrees between two normals
///
/// Two zero normals are treated as equal; a zero normal against a non-zero one
/// is treated as opposite.
pub fn normal_angle_degrees(a: Vec3, b: Vec3) -> f32 {
    let a = a.normalize_or_zero();
    let b = b.normalize_or_zero();
    match (a == Vec3::ZERO, b == Vec3::ZERO) {
        (true, true) => 0.0,
        (true, false) | (false, true) => 180.0,
        (false, false) => a.dot(b).clamp(-1.0, 1.0).acos().to_degrees(),
    }
}

/// Merge near-duplicate vertices and remap triangles onto the survivors
///
/// The first vertex of each merged group is kept unchanged. Triangles referencing
/// a vertex that does not exist are dropped.
pub fn weld_vertices(mesh: &Mesh, thresholds: WeldThresholds) -> (Mesh, WeldReport) {
    let mut positions: Vec<Vec3> = Vec::new();
    let mut normals: Vec<Vec3> = Vec::new();
    let mut remap = Vec::with_capacity(mesh.vertex_count());

    for (i, &position) in mesh.positions.iter().enumerate() {
        let normal = mesh.normal(i);
        let existing = positions.iter().zip(&normals).position(|(&kept, &kept_normal)| {
            position.distance_squared(kept) <= thresholds.distance_squared
                && normal_angle_degrees(normal, kept_normal) <= thresholds.angle_degrees
        });

        let target = existing.unwrap_or_else(|| {
            positions.push(position);
            normals.push(normal);
            positions.len() - 1
        });
        remap.push(target as u32);
    }

    let mut indices = Vec::with_capacity(mesh.indices.len());
    let mut dropped = 0;
    for triangle in mesh.indices.chunks_exact(3) {
        let mapped: Option<Vec<u32>> = triangle
            .iter()
            .map(|&index| remap.get(index as usize).copied())
            .collect();
        match mapped {
            Some(corners) => indices.extend(corners),
            None => dropped += 1,
        }
    }

    if dropped > 0 {
        warn!("Dropped {dropped} triangles referencing missing vertices");
    }
    let trailing = mesh.indices.len() % 3;
    if trailing > 0 {
        warn!("Ignoring {trailing} trailing indices that do not form a triangle");
    }

    if !mesh.has_normals() {
        normals.clear();
    }

    let welded = Mesh::new(positions, normals, indices);
    let report = WeldReport {
        input_vertices: mesh.vertex_count(),
        output_vertices: welded.vertex_count(),
        triangles: welded.triangle_count(),
    };
    (welded, report)
}

/// Accumulates placed meshes and welds them into one collider
#[derive(Debug, Clone, Default)]
pub struct CollisionMeshBuilder {
    thresholds: WeldThresholds,
    raw: Mesh,
    sources: usize,
}

impl CollisionMeshBuilder {
    /// Create a builder with the given weld tolerances
    pub fn new(thresholds: WeldThresholds) -> Self {
        Self {
            thresholds,
            raw: Mesh::default(),
            sources: 0,
        }
    }

    /// Append one placed mesh in world space
    pub fn add(&mut self, placed: PlacedMesh<'_>) {
        self.raw.append_transformed(placed.mesh, placed.transform);
        self.sources += 1;
    }

    /// Combined mesh before welding
    pub const fn raw(&self) -> &Mesh {
        &self.raw
    }

    /// Number of meshes added so far
    pub const fn sources(&self) -> usize {
        self.sources
    }

    /// Weld the combined mesh into the final collider
    pub fn build(self) -> (Mesh, WeldReport) {
        let (collider, report) = weld_vertices(&self.raw, self.thresholds);
        debug!(
            "Welded {} placed meshes: {} -> {} vertices, {} triangles",
            self.sources, report.input_vertices, report.output_vertices, report.triangles
        );
        (collider, report)
    }
}

impl<'a> Extend<PlacedMesh<'a>> for CollisionMeshBuilder {
    fn extend<I: IntoIterator<Item = PlacedMesh<'a>>>(&mut self, iter: I) {
        for placed in iter {
            self.add(placed);
        }
    }
}
