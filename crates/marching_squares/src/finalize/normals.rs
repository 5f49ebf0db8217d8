//! Geometry-based vertex normals.
//!
//! Every vertex normal is the average of the face normals of the triangles
//! that reference its index. Two weightings are supported:
//!
//! - **Area**: raw cross products are summed, so larger faces pull harder.
//! - **Angle**: unit face normals are weighted by the interior angle at the
//!   vertex (Thürmer & Wüthrich, "Mean Weighted by Angle"), which is stable
//!   when triangle sizes vary a lot.
//!
//! Degenerate triangles contribute nothing. A vertex whose incident triangles
//! are all degenerate keeps the zero vector.

use glam::Vec3A;

use crate::constants::DEGENERATE_SIN_SQ;
use crate::types::NormalWeighting;

/// Unit normal of `(p1, p2, p3)`, or zero if the triangle is degenerate.
#[inline]
pub fn face_normal(p1: [f32; 3], p2: [f32; 3], p3: [f32; 3]) -> [f32; 3] {
  let p1 = Vec3A::from_array(p1);
  let e01 = Vec3A::from_array(p2) - p1;
  let e02 = Vec3A::from_array(p3) - p1;

  match scaled_cross(e01, e02) {
    Some(cross) => cross.normalize_or_zero().to_array(),
    None => [0.0; 3],
  }
}

/// Compute one normal per position.
///
/// Triangles that reference a missing vertex are ignored.
pub fn compute(
  positions: &[[f32; 3]],
  indices: &[u32],
  weighting: NormalWeighting,
) -> Vec<[f32; 3]> {
  let mut accum = vec![Vec3A::ZERO; positions.len()];

  for tri in indices.chunks_exact(3) {
    let [i0, i1, i2] = [tri[0] as usize, tri[1] as usize, tri[2] as usize];
    let (Some(&p0), Some(&p1), Some(&p2)) = (positions.get(i0), positions.get(i1), positions.get(i2))
    else {
      continue;
    };

    let p0 = Vec3A::from_array(p0);
    let p1 = Vec3A::from_array(p1);
    let p2 = Vec3A::from_array(p2);

    let e01 = p1 - p0;
    let e02 = p2 - p0;
    let e12 = p2 - p1;

    let Some(scaled) = scaled_cross(e01, e02) else {
      continue;
    };

    match weighting {
      NormalWeighting::Area => {
        let cross = e01.cross(e02);
        accum[i0] += cross;
        accum[i1] += cross;
        accum[i2] += cross;
      }
      NormalWeighting::Angle => {
        let unit = scaled.normalize_or_zero();
        accum[i0] += unit * vertex_angle(e01, e02);
        accum[i1] += unit * vertex_angle(-e01, e12);
        accum[i2] += unit * vertex_angle(-e02, -e12);
      }
    }
  }

  accum
    .into_iter()
    .map(|n| unit_or_zero(n).to_array())
    .collect()
}

/// Cross product of the edges after scaling both so their largest component
/// is 1, or `None` when the triangle is degenerate.
///
/// Degenerate means zero area, a sliver whose squared corner sine is below
/// `DEGENERATE_SIN_SQ`, or non-finite input. Scaling first keeps the squared
/// lengths in range for any finite triangle.
#[inline]
fn scaled_cross(e01: Vec3A, e02: Vec3A) -> Option<Vec3A> {
  let extent = e01.abs().max_element().max(e02.abs().max_element());
  if !(extent > 0.0 && extent.is_finite()) {
    return None;
  }

  let a = e01 / extent;
  let b = e02 / extent;
  let cross = a.cross(b);
  let edge_sq = a.length_squared() * b.length_squared();
  (cross.length_squared() > DEGENERATE_SIN_SQ * edge_sq).then_some(cross)
}

/// Normalize, rescaling first so huge accumulated sums do not overflow.
#[inline]
fn unit_or_zero(n: Vec3A) -> Vec3A {
  let extent = n.abs().max_element();
  if !(extent > 0.0 && extent.is_finite()) {
    return Vec3A::ZERO;
  }
  (n / extent).normalize_or_zero()
}

/// Interior angle between two edges leaving the same vertex.
#[inline]
fn vertex_angle(e1: Vec3A, e2: Vec3A) -> f32 {
  let a = e1.normalize_or_zero();
  let b = e2.normalize_or_zero();
  if a == Vec3A::ZERO || b == Vec3A::ZERO {
    return 0.0;
  }
  a.dot(b).clamp(-1.0, 1.0).acos()
}

#[cfg(test)]
#[path = "normals_test.rs"]
mod normals_test;
