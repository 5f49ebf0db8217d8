use super::*;

#[test]
fn test_new_is_zero_filled() {
  let grid = SampleGrid::new(4, 3).unwrap();
  assert_eq!(grid.width(), 4);
  assert_eq!(grid.height(), 3);
  assert_eq!(grid.as_slice().len(), 12);
  assert!(grid.as_slice().iter().all(|&v| v == 0.0));
}

#[test]
fn test_from_vec_rejects_wrong_length() {
  let err = SampleGrid::from_vec(3, 3, vec![0.0; 8]).unwrap_err();
  assert_eq!(
    err,
    GridError::DimensionMismatch {
      width: 3,
      height: 3,
      len: 8,
      expected: 9,
    }
  );
}

#[test]
fn test_overflowing_dimensions_are_rejected() {
  let err = SampleGrid::new(usize::MAX, 2).unwrap_err();
  assert_eq!(
    err,
    GridError::Overflow {
      width: usize::MAX,
      height: 2,
    }
  );
}

#[test]
fn test_from_rows_is_row_major() {
  let grid = SampleGrid::from_rows(&[[0.0f32, 1.0, 2.0], [3.0, 4.0, 5.0]]).unwrap();
  assert_eq!(grid.width(), 3);
  assert_eq!(grid.height(), 2);
  assert_eq!(grid.get(1, 0), Some(1.0));
  assert_eq!(grid.get(0, 1), Some(3.0));
  assert_eq!(grid.get(2, 1), Some(5.0));
  assert_eq!(grid.get(3, 0), None);
  assert_eq!(grid.get(0, 2), None);
}

#[test]
fn test_from_rows_rejects_ragged_rows() {
  let rows = vec![vec![0.0f32, 1.0], vec![1.0]];
  let err = SampleGrid::from_rows(&rows).unwrap_err();
  assert_eq!(
    err,
    GridError::RaggedRow {
      row: 1,
      len: 1,
      expected: 2,
    }
  );
}

#[test]
fn test_from_rows_empty() {
  let rows: Vec<Vec<f32>> = Vec::new();
  let grid = SampleGrid::from_rows(&rows).unwrap();
  assert_eq!(grid.width(), 0);
  assert_eq!(grid.height(), 0);
  assert!(!grid.has_cells());
}

#[test]
fn test_from_fn_matches_coordinates() {
  let grid = SampleGrid::from_fn(4, 3, |x, y| (x * 10 + y) as f32).unwrap();
  assert_eq!(grid.get(3, 2), Some(32.0));
  assert_eq!(grid.get(1, 0), Some(10.0));
}

#[test]
fn test_corners_follow_cell_layout() {
  // A=(x,y) B=(x+1,y) C=(x+1,y+1) D=(x,y+1)
  let grid = SampleGrid::from_fn(3, 3, |x, y| (y * 3 + x) as f32).unwrap();
  assert_eq!(grid.corners(0, 0), [0.0, 1.0, 4.0, 3.0]);
  assert_eq!(grid.corners(1, 1), [4.0, 5.0, 8.0, 7.0]);
}

#[test]
fn test_cell_count() {
  assert_eq!(SampleGrid::new(5, 4).unwrap().cell_count(), 12);
  assert_eq!(SampleGrid::new(1, 4).unwrap().cell_count(), 0);
  assert_eq!(SampleGrid::new(0, 0).unwrap().cell_count(), 0);
  assert!(SampleGrid::new(2, 2).unwrap().has_cells());
  assert!(!SampleGrid::new(2, 1).unwrap().has_cells());
}

#[test]
fn test_scaled_applies_gain() {
  let grid = SampleGrid::from_rows(&[[0.0f32, 0.5], [1.0, 2.0]]).unwrap();
  let scaled = grid.scaled(2.0);
  assert_eq!(scaled.as_slice(), &[0.0, 1.0, 2.0, 4.0]);
  // Original untouched
  assert_eq!(grid.get(1, 0), Some(0.5));
}

#[test]
fn test_quantized_is_binary() {
  let grid = SampleGrid::from_rows(&[[0.1f32, 0.5], [0.49, 3.0]]).unwrap();
  let q = grid.quantized(0.5);
  assert_eq!(q.as_slice(), &[0.0, 1.0, 0.0, 1.0]);
}

#[test]
fn test_get_mut_writes_sample() {
  let mut grid = SampleGrid::new(2, 2).unwrap();
  *grid.get_mut(1, 1).unwrap() = 1.0;
  assert_eq!(grid.corners(0, 0), [0.0, 0.0, 1.0, 0.0]);
  assert!(grid.get_mut(2, 0).is_none());
}

#[test]
fn test_error_messages() {
  let err = SampleGrid::from_vec(2, 2, vec![0.0]).unwrap_err();
  assert_eq!(
    err.to_string(),
    "sample buffer holds 1 values but a 2x2 grid needs 4"
  );
}
