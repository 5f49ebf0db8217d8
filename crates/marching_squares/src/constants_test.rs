use super::*;

#[test]
fn test_corner_offsets_match_point_offsets() {
  for (corner, offset) in CORNER_OFFSETS.iter().enumerate() {
    let point = POINT_OFFSETS[corner];
    assert_eq!(point[0], offset[0] as f32, "corner {} x", corner);
    assert_eq!(point[1], offset[1] as f32, "corner {} z", corner);
  }
}

#[test]
fn test_midpoints_bisect_their_edges() {
  // E on AB, F on BC, G on DC, H on AD
  let edges = [(4, 0, 1), (5, 1, 2), (6, 3, 2), (7, 0, 3)];

  for (mid, from, to) in edges {
    let a = POINT_OFFSETS[from];
    let b = POINT_OFFSETS[to];
    let expected = [(a[0] + b[0]) * 0.5, (a[1] + b[1]) * 0.5];
    assert_eq!(POINT_OFFSETS[mid], expected, "midpoint {}", mid);
  }
}

#[test]
fn test_corner_weights_cover_all_cases() {
  let all: u8 = CORNER_WEIGHTS.iter().sum();
  assert_eq!(all as usize, CASE_COUNT - 1);

  // Each weight is a distinct single bit
  let mut seen = 0u8;
  for w in CORNER_WEIGHTS {
    assert_eq!(w.count_ones(), 1);
    assert_eq!(seen & w, 0);
    seen |= w;
  }
}
