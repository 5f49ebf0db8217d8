//! Polygon emission into the accumulating mesh.
//!
//! Every triangle appends three fresh vertices; nothing is shared between
//! triangles, polygons or cells.

use glam::Vec3A;

use crate::case_table::{CellPoint, Polygon};
use crate::types::Mesh;

/// World placement of one cell.
///
/// `origin` is in cell units on X/Z and world units on Y; only X/Z are
/// scaled by `cell_size`.
#[derive(Clone, Copy, Debug)]
pub struct CellFrame {
  origin: Vec3A,
  cell_size: f32,
}

impl CellFrame {
  pub fn new(x: usize, y: usize, cell_size: f32, height: f32) -> Self {
    Self {
      origin: Vec3A::new(x as f32, height, y as f32),
      cell_size,
    }
  }

  /// World position of a named cell point.
  #[inline]
  pub fn point(&self, point: CellPoint) -> [f32; 3] {
    let [dx, dz] = point.offset();
    [
      (self.origin.x + dx) * self.cell_size,
      self.origin.y,
      (self.origin.z + dz) * self.cell_size,
    ]
  }
}

#[inline]
pub fn add_triangle(mesh: &mut Mesh, p1: [f32; 3], p2: [f32; 3], p3: [f32; 3]) {
  let i = mesh.append_vertex(p1);
  let j = mesh.append_vertex(p2);
  let k = mesh.append_vertex(p3);
  mesh.append_triangle(i, j, k);
}

/// Split along p2-p4: (p1,p2,p4), (p2,p3,p4).
#[inline]
pub fn add_quad(mesh: &mut Mesh, p1: [f32; 3], p2: [f32; 3], p3: [f32; 3], p4: [f32; 3]) {
  add_triangle(mesh, p1, p2, p4);
  add_triangle(mesh, p2, p3, p4);
}

/// Fan from p1: (p1,p2,p3), (p1,p3,p4), (p1,p4,p5).
#[inline]
pub fn add_pentagon(
  mesh: &mut Mesh,
  p1: [f32; 3],
  p2: [f32; 3],
  p3: [f32; 3],
  p4: [f32; 3],
  p5: [f32; 3],
) {
  add_triangle(mesh, p1, p2, p3);
  add_triangle(mesh, p1, p3, p4);
  add_triangle(mesh, p1, p4, p5);
}

/// Emit a case-table polygon placed by `frame`, returning triangles added.
pub fn add_polygon(mesh: &mut Mesh, frame: &CellFrame, polygon: &Polygon) -> usize {
  match *polygon {
    Polygon::Triangle(p) => {
      let [a, b, c] = p.map(|pt| frame.point(pt));
      add_triangle(mesh, a, b, c);
    }
    Polygon::Quad(p) => {
      let [a, b, c, d] = p.map(|pt| frame.point(pt));
      add_quad(mesh, a, b, c, d);
    }
    Polygon::Pentagon(p) => {
      let [a, b, c, d, e] = p.map(|pt| frame.point(pt));
      add_pentagon(mesh, a, b, c, d, e);
    }
  }
  polygon.triangle_count()
}

#[cfg(test)]
#[path = "emit_test.rs"]
mod emit_test;
