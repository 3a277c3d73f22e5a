//! Tests for the in-memory scene

#[cfg(test)]
mod tests {
    use glam::{Quat, Vec3};
    use looptrack::io::configuration::GRID_SPACING;
    use looptrack::mesh::Mesh;
    use looptrack::scene::{MemoryScene, Scene};
    use looptrack::track::AssetKind;

    // Tests handles are handed out in placement order and never reused
    // Verified by reusing destroyed slots
    #[test]
    fn test_place_and_destroy() {
        let mut scene = MemoryScene::new(GRID_SPACING);
        let first = scene.place(AssetKind::Straight, Vec3::ZERO, Quat::IDENTITY);
        let second = scene.place(AssetKind::MediumCorner, Vec3::X, Quat::IDENTITY);
        assert_eq!((first.index(), second.index()), (0, 1));
        assert_eq!(scene.asset(second), Some(AssetKind::MediumCorner));

        scene.destroy_all(&[first]);
        assert_eq!(scene.live_count(), 1);
        assert!(scene.asset(first).is_none());
        assert!(scene.placed_mesh(first).is_none());

        let third = scene.place(AssetKind::SmallCorner, Vec3::ZERO, Quat::IDENTITY);
        assert_eq!(third.index(), 2);
        assert_eq!(scene.placed_total(), 3);
    }

    // Tests placed meshes carry the placement transform
    // Verified by applying rotation after translation
    #[test]
    fn test_placed_mesh_transform() {
        let mut scene = MemoryScene::new(GRID_SPACING);
        let handle = scene.place(
            AssetKind::Straight,
            Vec3::new(10.0, 0.0, -10.0),
            Quat::from_rotation_y(90f32.to_radians()),
        );

        let placed = scene.placed_mesh(handle);
        assert_eq!(placed.map(|placed| placed.mesh.vertex_count()), Some(4));
        let origin = placed.map_or(Vec3::NAN, |placed| placed.transform.transform_point3(Vec3::ZERO));
        assert!(origin.abs_diff_eq(Vec3::new(10.0, 0.0, -10.0), 1e-5));
    }

    // Tests assets missing from a custom library have no geometry
    // Verified by falling back to the default plates
    #[test]
    fn test_custom_library() {
        let mut scene = MemoryScene::with_library([(AssetKind::Straight, Mesh::default())]);
        let straight = scene.place(AssetKind::Straight, Vec3::ZERO, Quat::IDENTITY);
        let corner = scene.place(AssetKind::SmallCorner, Vec3::ZERO, Quat::IDENTITY);

        assert!(scene.placed_mesh(straight).is_some_and(|placed| placed.mesh.is_empty()));
        assert!(scene.placed_mesh(corner).is_none());
    }

    // Tests each collider assignment replaces the previous one
    // Verified by keeping the first collider
    #[test]
    fn test_set_collision_mesh() {
        let mut scene = MemoryScene::new(GRID_SPACING);
        assert!(scene.collider().is_none());

        scene.set_collision_mesh(Mesh::default());
        scene.set_collision_mesh(Mesh::new(vec![Vec3::ZERO], Vec::new(), Vec::new()));
        assert_eq!(scene.collider_updates(), 2);
        assert_eq!(scene.collider().map(Mesh::vertex_count), Some(1));
    }
}
