//! Tests for BFS shortest path search: optimality, adjacency, failure modes

#[cfg(test)]
mod tests {

    use mazesnap::MazeError;
    use mazesnap::algorithm::solve::shortest_path;
    use mazesnap::spatial::{Bitmap, Coord};

    fn assert_valid_path(bitmap: &Bitmap, path: &[Coord], start: Coord, end: Coord) {
        assert_eq!(path.first(), Some(&start));
        assert_eq!(path.last(), Some(&end));
        for coord in path {
            assert!(bitmap.is_open(*coord), "path crosses wall at {coord}");
        }
        for pair in path.windows(2) {
            let [a, b] = pair else { unreachable!() };
            let manhattan = a.x.abs_diff(b.x) + a.y.abs_diff(b.y);
            assert_eq!(manhattan, 1, "non-unit step from {a} to {b}");
        }
    }

    #[test]
    fn test_straight_corridor() {
        let bitmap = Bitmap::from_rows(&[vec![1, 1, 1, 1, 1]]).unwrap();
        let start = Coord::new(0, 0);
        let end = Coord::new(4, 0);

        let path = shortest_path(&bitmap, start, end).unwrap();
        assert_eq!(path.len(), 5);
        assert_valid_path(&bitmap, &path, start, end);
    }

    #[test]
    fn test_open_grid_is_optimal() {
        // On a fully open grid the shortest path length is the Manhattan distance
        let bitmap = Bitmap::from_rows(&vec![vec![1; 5]; 5]).unwrap();
        let start = Coord::new(0, 0);
        let end = Coord::new(4, 4);

        let path = shortest_path(&bitmap, start, end).unwrap();
        assert_eq!(path.len() - 1, 8);
        assert_valid_path(&bitmap, &path, start, end);
    }

    #[test]
    fn test_detour_around_wall() {
        let bitmap = Bitmap::from_rows(&[
            vec![1, 1, 1],
            vec![0, 0, 1],
            vec![1, 1, 1],
        ])
        .unwrap();
        let start = Coord::new(0, 0);
        let end = Coord::new(0, 2);

        let path = shortest_path(&bitmap, start, end).unwrap();
        // Forced through the right column: 6 steps instead of 2
        assert_eq!(path.len() - 1, 6);
        assert_valid_path(&bitmap, &path, start, end);
    }

    #[test]
    fn test_single_cell_start_equals_end() {
        let bitmap = Bitmap::from_rows(&[vec![1]]).unwrap();
        let origin = Coord::new(0, 0);

        let path = shortest_path(&bitmap, origin, origin).unwrap();
        assert_eq!(path, vec![origin]);
    }

    #[test]
    fn test_deterministic_result() {
        let bitmap = Bitmap::from_rows(&vec![vec![1; 4]; 4]).unwrap();
        let start = Coord::new(0, 0);
        let end = Coord::new(3, 3);

        let first = shortest_path(&bitmap, start, end).unwrap();
        let second = shortest_path(&bitmap, start, end).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_blocked_start() {
        let bitmap = Bitmap::from_rows(&[vec![0, 1], vec![1, 1]]).unwrap();

        let result = shortest_path(&bitmap, Coord::new(0, 0), Coord::new(1, 1));
        assert!(matches!(
            result,
            Err(MazeError::BlockedEndpoint { coord }) if coord == Coord::new(0, 0)
        ));
    }

    #[test]
    fn test_blocked_end() {
        let bitmap = Bitmap::from_rows(&[vec![1, 1], vec![1, 0]]).unwrap();

        let result = shortest_path(&bitmap, Coord::new(0, 0), Coord::new(1, 1));
        assert!(matches!(result, Err(MazeError::BlockedEndpoint { .. })));
    }

    #[test]
    fn test_out_of_bounds_endpoint() {
        let bitmap = Bitmap::from_rows(&[vec![1, 1], vec![1, 1]]).unwrap();

        let result = shortest_path(&bitmap, Coord::new(0, 0), Coord::new(5, 0));
        assert!(matches!(
            result,
            Err(MazeError::OutOfBounds { width: 2, height: 2, .. })
        ));
    }

    #[test]
    fn test_disconnected_regions() {
        // A wall column splits the grid into two open components
        let bitmap = Bitmap::from_rows(&[
            vec![1, 0, 1],
            vec![1, 0, 1],
            vec![1, 0, 1],
        ])
        .unwrap();

        let result = shortest_path(&bitmap, Coord::new(0, 0), Coord::new(2, 2));
        assert!(matches!(result, Err(MazeError::NoPathFound { .. })));
    }
}
