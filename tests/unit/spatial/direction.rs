//! Tests for directions, axes and grid points

#[cfg(test)]
mod tests {
    use glam::Vec3;
    use looptrack::spatial::{Direction, Point};

    // Tests mirroring swaps opposite sides and keeps Unset
    // Verified by mapping East to East
    #[test]
    fn test_mirror_pairs() {
        assert_eq!(Direction::North.mirror(), Direction::South);
        assert_eq!(Direction::South.mirror(), Direction::North);
        assert_eq!(Direction::East.mirror(), Direction::West);
        assert_eq!(Direction::West.mirror(), Direction::East);
        assert_eq!(Direction::Unset.mirror(), Direction::Unset);

        for direction in Direction::CARDINALS {
            assert_eq!(direction.mirror().mirror(), direction);
        }
    }

    // Tests stepping follows rows growing southwards
    // Verified by swapping the sign of the North offset
    #[test]
    fn test_point_step() {
        let origin = Point::new(2, 2);
        assert_eq!(origin.step(Direction::North), Point::new(2, 1));
        assert_eq!(origin.step(Direction::South), Point::new(2, 3));
        assert_eq!(origin.step(Direction::East), Point::new(3, 2));
        assert_eq!(origin.step(Direction::West), Point::new(1, 2));
        assert_eq!(origin.step(Direction::Unset), origin);
    }

    // Tests translation and relative coordinates are inverse
    // Verified by adding instead of subtracting in relative_to
    #[test]
    fn test_translate_and_relative_to() {
        let origin = Point::new(4, 6);
        let local = Point::new(1, 0);

        let global = local.translate(origin);
        assert_eq!(global, Point::new(5, 6));
        assert_eq!(global.relative_to(origin), local);
    }

    // Tests square containment and array indices
    // Verified by using <= for the upper bound
    #[test]
    fn test_within_square_and_index() {
        assert!(Point::new(0, 0).within_square(2));
        assert!(Point::new(1, 1).within_square(2));
        assert!(!Point::new(2, 0).within_square(2));
        assert!(!Point::new(0, -1).within_square(2));

        assert_eq!(Point::new(3, 1).index(), Some([1, 3]));
        assert_eq!(Point::new(-1, 1).index(), None);
    }

    // Tests grid North maps to world +Z and rows move towards -Z
    // Verified by dropping the negation of z
    #[test]
    fn test_world_mapping() {
        assert_eq!(Point::new(0, 1).world_position(10.0), Vec3::new(0.0, 0.0, -10.0));
        assert_eq!(Point::new(2, 0).world_position(10.0), Vec3::new(20.0, 0.0, 0.0));

        assert_eq!(Direction::North.world_vector(), Vec3::Z);
        assert_eq!(Direction::East.world_vector(), Vec3::X);

        // One step North moves one spacing along the world vector
        let point = Point::new(3, 3);
        let moved = point.step(Direction::North).world_position(10.0);
        assert_eq!(moved - point.world_position(10.0), Direction::North.world_vector() * 10.0);
    }

    // Tests cardinal indices follow the search order
    // Verified by returning Some(0) for Unset
    #[test]
    fn test_cardinal_index() {
        for (i, direction) in Direction::CARDINALS.into_iter().enumerate() {
            assert_eq!(direction.cardinal_index(), Some(i));
            assert!(direction.is_set());
        }
        assert_eq!(Direction::Unset.cardinal_index(), None);
        assert!(!Direction::Unset.is_set());
    }
}
