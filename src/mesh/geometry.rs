//! Indexed triangle meshes

use glam::{Mat3, Mat4, Vec3};

/// Triangle mesh with per-vertex positions and optional per-vertex normals
///
/// `normals` is either empty or holds one entry per position. Every three
/// consecutive `indices` form one triangle.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    /// Vertex positions
    pub positions: Vec<Vec3>,
    /// Vertex normals, empty when the mesh carries none
    pub normals: Vec<Vec3>,
    /// Triangle list indices into `positions`
    pub indices: Vec<u32>,
}

impl Mesh {
    /// Create a mesh from raw buffers
    pub const fn new(positions: Vec<Vec3>, normals: Vec<Vec3>, indices: Vec<u32>) -> Self {
        Self {
            positions,
            normals,
            indices,
        }
    }

    /// Number of vertices
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of complete triangles
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Whether the mesh carries vertex normals
    pub fn has_normals(&self) -> bool {
        !self.normals.is_empty()
    }

    /// Whether the mesh has no vertices
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Normal of vertex `index`, or zero when absent
    pub fn normal(&self, index: usize) -> Vec3 {
        self.normals.get(index).copied().unwrap_or(Vec3::ZERO)
    }

    /// Append `other` after applying `transform` to it
    ///
    /// Positions go through the full transform, normals through the inverse
    /// transpose of its linear part and are renormalized. Missing normals on
    /// either side are padded with zero vectors once any mesh carries normals.
    pub fn append_transformed(&mut self, other: &Self, transform: Mat4) {
        let base = self.positions.len();

        if other.has_normals() && self.normals.len() < base {
            self.normals.resize(base, Vec3::ZERO);
        }

        self.positions.extend(
            other
                .positions
                .iter()
                .map(|&position| transform.transform_point3(position)),
        );

        if other.has_normals() {
            let normal_matrix = Mat3::from_mat4(transform).inverse().transpose();
            self.normals.extend(
                (0..other.vertex_count())
                    .map(|i| (normal_matrix * other.normal(i)).normalize_or_zero()),
            );
        } else if self.has_normals() {
            self.normals.resize(self.positions.len(), Vec3::ZERO);
        }

        let offset = base as u32;
        self.indices
            .extend(other.indices.iter().map(|&index| index + offset));
    }

    /// Copy of this mesh with `transform` applied
    pub fn transformed(&self, transform: Mat4) -> Self {
        let mut mesh = Self::default();
        mesh.append_transformed(self, transform);
        mesh
    }

    /// Merge placed meshes into one world-space mesh
    pub fn combine<'a>(placed: impl IntoIterator<Item = PlacedMesh<'a>>) -> Self {
        let mut combined = Self::default();
        for PlacedMesh { mesh, transform } in placed {
            combined.append_transformed(mesh, transform);
        }
        combined
    }
}

/// Read-only view of a mesh together with its world transform
#[derive(Debug, Clone, Copy)]
pub struct PlacedMesh<'a> {
    /// Local-space geometry
    pub mesh: &'a Mesh,
    /// Local to world transform
    pub transform: Mat4,
}

impl<'a> PlacedMesh<'a> {
    /// Pair a mesh with its world transform
    pub const fn new(mesh: &'a Mesh, transform: Mat4) -> Self {
        Self { mesh, transform }
    }
}
