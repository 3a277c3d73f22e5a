//! Tests for boundary connector scanning

#[cfg(test)]
mod tests {
    use looptrack::TrackError;
    use looptrack::algorithm::connectors::{Connector, scan_connectors};
    use looptrack::spatial::{Direction, Point, TileType, TrackGrid};

    // Tests a region of empty cells has no connectors
    // Verified by treating empty cells as open on every side
    #[test]
    fn test_scan_empty_region() {
        let grid = TrackGrid::empty(4, 4);
        let connectors = scan_connectors(&grid, Point::new(2, 2), 2).unwrap_or_default();
        assert!(connectors.is_empty());
    }

    // Tests connectors sit exactly where seed tiles cross the patch edge
    // Verified by scanning the east edge at column zero
    #[test]
    fn test_scan_seed_corner_patch() {
        let grid = TrackGrid::seed();
        let connectors = scan_connectors(&grid, Point::new(0, 0), 2).unwrap_or_default();

        assert_eq!(
            connectors,
            vec![
                Connector::new(Point::new(0, 1), Direction::South),
                Connector::new(Point::new(1, 0), Direction::East),
            ]
        );
    }

    // Tests a cell on a region corner is reported once per edge it crosses
    // Verified by stopping after the first connector per cell
    #[test]
    fn test_corner_cell_on_two_edges() {
        let mut grid = TrackGrid::empty(3, 3);
        assert!(grid.set(Point::new(1, 1), TileType::CornerNW));

        let connectors = scan_connectors(&grid, Point::new(1, 1), 1).unwrap_or_default();
        assert_eq!(
            connectors,
            vec![
                Connector::new(Point::new(1, 1), Direction::North),
                Connector::new(Point::new(1, 1), Direction::West),
            ]
        );
    }

    // Tests regions outside the grid are rejected
    // Verified by removing the bounds check
    #[test]
    fn test_scan_out_of_bounds() {
        let grid = TrackGrid::seed();

        assert!(matches!(
            scan_connectors(&grid, Point::new(2, 2), 2),
            Err(TrackError::RegionOutOfBounds { size: 2, .. })
        ));
        assert!(scan_connectors(&grid, Point::new(-1, 0), 2).is_err());
        assert!(scan_connectors(&grid, Point::new(0, 0), 0).is_err());
    }

    // Tests local conversion subtracts the region origin
    // Verified by translating instead of subtracting
    #[test]
    fn test_connector_to_local() {
        let connector = Connector::new(Point::new(5, 3), Direction::West);
        let local = connector.to_local(Point::new(4, 2));
        assert_eq!(local.point, Point::new(1, 1));
        assert_eq!(local.direction, Direction::West);
    }
}
