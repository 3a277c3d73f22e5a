//! Flat road plates used as reference geometry for each asset kind

use glam::Vec3;

use crate::mesh::geometry::Mesh;
use crate::track::AssetKind;

/// Upward facing plate geometry for `asset`
///
/// Single-cell assets are one `spacing` x `spacing` quad centred on the origin.
/// The medium corner is an L of three quads around the centre of its 2x2 block,
/// laid out for the South-East orientation: the bend in the north-west cell, one
/// arm running south and one running east. Quads do not share vertices.
pub fn road_mesh(asset: AssetKind, spacing: f32) -> Mesh {
    let half = spacing * 0.5;
    let mut mesh = Mesh::default();
    match asset {
        AssetKind::Straight | AssetKind::SmallCorner => push_quad(&mut mesh, 0.0, 0.0, half),
        AssetKind::MediumCorner => {
            push_quad(&mut mesh, -half, half, half);
            push_quad(&mut mesh, -half, -half, half);
            push_quad(&mut mesh, half, half, half);
        }
    }
    mesh
}

// Winding is counter-clockwise seen from +Y
fn push_quad(mesh: &mut Mesh, centre_x: f32, centre_z: f32, half: f32) {
    let base = mesh.positions.len() as u32;
    let corners = [(-half, -half), (half, -half), (half, half), (-half, half)];
    for (dx, dz) in corners {
        mesh.positions
            .push(Vec3::new(centre_x + dx, 0.0, centre_z + dz));
        mesh.normals.push(Vec3::Y);
    }
    mesh.indices
        .extend([0, 2, 1, 0, 3, 2].map(|offset| base + offset));
}
