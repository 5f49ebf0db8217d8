//! Test utilities shared across module tests.
//!
//! Grid fixtures plus position-based mesh comparison helpers, so tests can
//! compare triangle sets without depending on vertex numbering.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::grid::SampleGrid;
use crate::types::Mesh;

// =============================================================================
// Grid fixtures
// =============================================================================

/// 2×2 grid whose single cell has the given case.
pub fn single_cell_grid(case: u8) -> SampleGrid {
  let bit = |i: u8| -> f32 { if (case >> i) & 1 == 1 { 1.0 } else { 0.0 } };
  // A=(0,0) B=(1,0) C=(1,1) D=(0,1)
  SampleGrid::from_rows(&[[bit(0), bit(1)], [bit(3), bit(2)]]).unwrap()
}

/// Grid with every sample set to `value`.
pub fn filled_grid(width: usize, height: usize, value: f32) -> SampleGrid {
  SampleGrid::from_fn(width, height, |_, _| value).unwrap()
}

/// Seeded random binary grid.
pub fn random_binary_grid(width: usize, height: usize, seed: u64) -> SampleGrid {
  let mut rng = StdRng::seed_from_u64(seed);
  SampleGrid::from_fn(width, height, |_, _| {
    if rng.random_bool(0.5) {
      1.0
    } else {
      0.0
    }
  })
  .unwrap()
}

// =============================================================================
// Geometry helpers
// =============================================================================

/// Area of a triangle projected onto the XZ plane.
pub fn triangle_area_xz(tri: [[f32; 3]; 3]) -> f32 {
  let [p0, p1, p2] = tri;
  let twice = (p1[0] - p0[0]) * (p2[2] - p0[2]) - (p2[0] - p0[0]) * (p1[2] - p0[2]);
  twice.abs() * 0.5
}

/// Sum of projected triangle areas.
pub fn mesh_area(mesh: &Mesh) -> f32 {
  mesh.triangle_positions().map(triangle_area_xz).sum()
}

/// Integer key for a position on the half-unit lattice.
fn lattice_key(p: [f32; 3]) -> [i64; 3] {
  p.map(|c| (c * 2.0).round() as i64)
}

/// Triangle as lattice keys, rotated so the smallest vertex comes first.
/// Rotation keeps winding, so mirrored triangles stay distinct.
pub fn canonical_triangle(tri: [[f32; 3]; 3]) -> [[i64; 3]; 3] {
  let keys = tri.map(lattice_key);
  let first = (0..3).min_by_key(|&i| keys[i]).unwrap_or(0);
  [keys[first], keys[(first + 1) % 3], keys[(first + 2) % 3]]
}

/// Sorted multiset of canonical triangles, independent of vertex numbering
/// and emission order.
pub fn triangle_set(mesh: &Mesh) -> Vec<[[i64; 3]; 3]> {
  let mut set: Vec<_> = mesh.triangle_positions().map(canonical_triangle).collect();
  set.sort();
  set
}
