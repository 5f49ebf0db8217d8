//! Spatial-hash vertex welding.
//!
//! Positions are snapped to integer lattice keys `round(p / epsilon)` so no
//! float ever becomes a hash key. The first vertex that lands on a key
//! survives; later ones are remapped onto it.
//!
//! Non-finite positions never merge. Each one keeps its own vertex.

use std::collections::HashMap;

use thiserror::Error;
use tracing::debug;

use crate::types::Mesh;

#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum WeldError {
  #[error("weld epsilon must be positive and finite, got {0}")]
  InvalidEpsilon(f32),

  #[error("coordinate {coordinate} divided by epsilon {epsilon} does not fit a lattice key")]
  KeyOverflow { coordinate: f32, epsilon: f32 },
}

/// 2^63, the first magnitude an `i64` key cannot hold.
const KEY_LIMIT: f32 = 9_223_372_036_854_775_808.0;

/// Lattice key of a finite position, `None` for NaN or infinite positions.
fn lattice_key(position: [f32; 3], epsilon: f32) -> Result<Option<[i64; 3]>, WeldError> {
  if !position.iter().all(|c| c.is_finite()) {
    return Ok(None);
  }

  let mut key = [0i64; 3];
  for (slot, &coordinate) in key.iter_mut().zip(position.iter()) {
    let q = (coordinate / epsilon).round();
    if !(q.abs() < KEY_LIMIT) {
      return Err(WeldError::KeyOverflow {
        coordinate,
        epsilon,
      });
    }
    *slot = q as i64;
  }
  Ok(Some(key))
}

/// Merge vertices that quantize to the same key.
///
/// Surviving vertices keep their first-occurrence order. Triangles that
/// collapse onto fewer than three distinct vertices are dropped.
///
/// Fails with [`WeldError::KeyOverflow`] when `epsilon` is so small that a
/// coordinate of the mesh has no exact integer key.
#[cfg_attr(feature = "profiling", tracing::instrument(skip_all, name = "marching_squares::weld"))]
pub fn weld(mesh: &Mesh, epsilon: f32) -> Result<Mesh, WeldError> {
  if !(epsilon > 0.0 && epsilon.is_finite()) {
    return Err(WeldError::InvalidEpsilon(epsilon));
  }

  let mut lookup: HashMap<[i64; 3], u32> = HashMap::with_capacity(mesh.vertex_count());
  let mut remap = Vec::with_capacity(mesh.vertex_count());
  let mut welded = Mesh::new();

  for &position in &mesh.vertices {
    let index = match lattice_key(position, epsilon)? {
      Some(key) => *lookup
        .entry(key)
        .or_insert_with(|| welded.append_vertex(position)),
      None => welded.append_vertex(position),
    };
    remap.push(index);
  }

  let mut dropped = 0usize;
  for [i, j, k] in mesh.triangles() {
    let (Some(&a), Some(&b), Some(&c)) = (
      remap.get(i as usize),
      remap.get(j as usize),
      remap.get(k as usize),
    ) else {
      dropped += 1;
      continue;
    };

    if a == b || b == c || a == c {
      dropped += 1;
      continue;
    }
    welded.append_triangle(a, b, c);
  }

  debug!(
    vertices_in = mesh.vertex_count(),
    vertices_out = welded.vertex_count(),
    triangles_dropped = dropped,
    epsilon,
    "weld complete"
  );

  Ok(welded)
}

#[cfg(test)]
#[path = "weld_test.rs"]
mod weld_test;
