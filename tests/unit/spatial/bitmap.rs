//! Tests for bitmap construction invariants and coordinate queries

#[cfg(test)]
mod tests {

    use mazesnap::spatial::{Bitmap, Coord};

    #[test]
    fn test_from_rows_rejects_empty() {
        assert!(Bitmap::from_rows(&[]).is_err());
        assert!(Bitmap::from_rows(&[vec![]]).is_err());
    }

    #[test]
    fn test_from_rows_rejects_ragged_rows() {
        let result = Bitmap::from_rows(&[vec![1, 0], vec![1]]);
        assert!(result.is_err());
    }

    #[test]
    fn test_nonzero_values_normalize_to_open() {
        let bitmap = Bitmap::from_rows(&[vec![0, 2], vec![255, 1]]).unwrap();
        assert!(!bitmap.is_open(Coord::new(0, 0)));
        assert!(bitmap.is_open(Coord::new(1, 0)));
        assert!(bitmap.is_open(Coord::new(0, 1)));
        assert_eq!(bitmap.get(Coord::new(1, 0)), Some(1));
    }

    #[test]
    fn test_dimensions_and_bounds() {
        let bitmap = Bitmap::from_rows(&[vec![1, 1, 1], vec![1, 1, 1]]).unwrap();
        assert_eq!(bitmap.width(), 3);
        assert_eq!(bitmap.height(), 2);
        assert!(bitmap.contains(Coord::new(2, 1)));
        assert!(!bitmap.contains(Coord::new(3, 0)));
        assert!(!bitmap.contains(Coord::new(0, 2)));
    }

    #[test]
    fn test_out_of_bounds_is_not_open() {
        let bitmap = Bitmap::from_rows(&[vec![1]]).unwrap();
        assert!(!bitmap.is_open(Coord::new(1, 0)));
        assert_eq!(bitmap.get(Coord::new(0, 1)), None);
    }

    #[test]
    fn test_on_border() {
        let bitmap = Bitmap::from_rows(&[
            vec![1, 1, 1],
            vec![1, 1, 1],
            vec![1, 1, 1],
        ])
        .unwrap();
        assert!(bitmap.on_border(Coord::new(0, 1)));
        assert!(bitmap.on_border(Coord::new(2, 2)));
        assert!(bitmap.on_border(Coord::new(1, 0)));
        assert!(!bitmap.on_border(Coord::new(1, 1)));
        assert!(!bitmap.on_border(Coord::new(3, 3)));
    }

    #[test]
    fn test_linear_index_is_row_major() {
        let bitmap = Bitmap::from_rows(&[vec![1, 1, 1, 1], vec![1, 1, 1, 1]]).unwrap();
        assert_eq!(bitmap.linear_index(Coord::new(0, 0)), 0);
        assert_eq!(bitmap.linear_index(Coord::new(3, 0)), 3);
        assert_eq!(bitmap.linear_index(Coord::new(0, 1)), 4);
        assert_eq!(bitmap.linear_index(Coord::new(3, 1)), 7);
    }
}
