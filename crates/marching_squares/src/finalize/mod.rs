//! Mesh finalization: export a tessellated [`Mesh`] as a
//! [`RenderableBuffer`] with smooth vertex normals.
//!
//! Vertices are copied in order and never merged here. Run [`weld`] first
//! when normals should blend across triangles that only share a position.

mod normals;
mod weld;

pub use normals::face_normal;
pub use weld::{weld, WeldError};

use tracing::debug;

use crate::constants::SMOOTH_GROUP_ALL;
use crate::types::{Mesh, NormalWeighting, RenderableBuffer};

/// Finalize with the default (area) normal weighting.
pub fn finalize(mesh: &Mesh) -> RenderableBuffer {
  finalize_with(mesh, NormalWeighting::default())
}

/// Build the renderable buffer: positions, one smoothing group for the
/// whole buffer, and per-vertex normals averaged over the triangles that
/// share each vertex index.
#[cfg_attr(feature = "profiling", tracing::instrument(skip_all, name = "marching_squares::finalize"))]
pub fn finalize_with(mesh: &Mesh, weighting: NormalWeighting) -> RenderableBuffer {
  let positions = mesh.vertices.clone();
  let normals = normals::compute(&positions, &mesh.indices, weighting);
  let smooth_groups = vec![SMOOTH_GROUP_ALL; positions.len()];
  let bounds = mesh.bounds();

  debug!(
    vertices = positions.len(),
    triangles = mesh.triangle_count(),
    ?weighting,
    "mesh finalized"
  );

  RenderableBuffer {
    positions,
    normals,
    smooth_groups,
    indices: mesh.indices.clone(),
    bounds,
  }
}
