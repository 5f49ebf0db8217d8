//! Core data types for marching squares tessellation.

use tracing::warn;

use crate::constants::SMOOTH_GROUP_ALL;

/// How corner samples are turned into a cell case.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum CaseMode {
  /// `floor(a) + floor(b)*2 + floor(c)*4 + floor(d)*8`, truncated.
  ///
  /// Only bit-accurate for samples already quantized to {0, 1}; anything
  /// else may land outside [0, 15] and the cell is skipped.
  #[default]
  Truncate,

  /// A corner is filled when its sample is `>= cutoff`. Always yields a
  /// valid case.
  Threshold(f32),
}

/// Face normal blending used when computing vertex normals.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum NormalWeighting {
  /// Faces contribute in proportion to their area.
  #[default]
  Area,

  /// Faces contribute unit normals weighted by the interior angle at the
  /// vertex.
  Angle,
}

/// Axis-aligned bounding box.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MinMaxAABB {
  pub min: [f32; 3],
  pub max: [f32; 3],
}

impl MinMaxAABB {
  /// Create AABB with inverted extents (ready for encapsulation).
  pub fn empty() -> Self {
    Self {
      min: [f32::INFINITY; 3],
      max: [f32::NEG_INFINITY; 3],
    }
  }

  /// Grow to contain `point`.
  #[inline]
  pub fn encapsulate(&mut self, point: [f32; 3]) {
    self.min = std::array::from_fn(|axis| self.min[axis].min(point[axis]));
    self.max = std::array::from_fn(|axis| self.max[axis].max(point[axis]));
  }

  /// False for an empty box that has not encapsulated any point.
  pub fn is_valid(&self) -> bool {
    self.min.iter().zip(self.max.iter()).all(|(lo, hi)| lo <= hi)
  }

  pub fn from_points<'a>(points: impl IntoIterator<Item = &'a [f32; 3]>) -> Self {
    let mut aabb = Self::empty();
    for p in points {
      aabb.encapsulate(*p);
    }
    aabb
  }
}

impl Default for MinMaxAABB {
  fn default() -> Self {
    Self::empty()
  }
}

/// Indexed triangle mesh accumulated during tessellation.
///
/// Every triangle appends its own three vertices, so coincident points from
/// neighbouring triangles or cells keep distinct indices.
///
/// Indices are `u32`; debug builds assert when a mesh outgrows that range.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Mesh {
  /// Vertex positions.
  pub vertices: Vec<[f32; 3]>,

  /// Triangle indices (3 indices per triangle).
  pub indices: Vec<u32>,
}

impl Mesh {
  pub fn new() -> Self {
    Self::default()
  }

  /// Preallocate room for `triangles` unshared triangles.
  pub fn with_triangle_capacity(triangles: usize) -> Self {
    Self {
      vertices: Vec::with_capacity(triangles * 3),
      indices: Vec::with_capacity(triangles * 3),
    }
  }

  /// Clear all buffers, preserving capacity.
  pub fn clear(&mut self) {
    self.vertices.clear();
    self.indices.clear();
  }

  /// Returns true if no geometry was generated.
  pub fn is_empty(&self) -> bool {
    self.vertices.is_empty()
  }

  pub fn vertex_count(&self) -> usize {
    self.vertices.len()
  }

  /// Number of triangles in the mesh.
  pub fn triangle_count(&self) -> usize {
    self.indices.len() / 3
  }

  /// Append a vertex, returning its index.
  #[inline]
  pub fn append_vertex(&mut self, position: [f32; 3]) -> u32 {
    let index = vertex_index(self.vertices.len());
    self.vertices.push(position);
    index
  }

  /// Append a triangle over already-appended vertices.
  #[inline]
  pub fn append_triangle(&mut self, i: u32, j: u32, k: u32) {
    debug_assert!(
      (i.max(j).max(k) as usize) < self.vertices.len(),
      "triangle references a vertex that has not been appended"
    );
    self.indices.extend_from_slice(&[i, j, k]);
  }

  /// Iterate triangles as index triples.
  pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
    self
      .indices
      .chunks_exact(3)
      .map(|tri| [tri[0], tri[1], tri[2]])
  }

  /// Iterate triangles as position triples.
  pub fn triangle_positions(&self) -> impl Iterator<Item = [[f32; 3]; 3]> + '_ {
    self
      .triangles()
      .map(|tri| tri.map(|i| self.vertices[i as usize]))
  }

  /// Append another mesh, rebasing its indices onto this one.
  pub fn append(&mut self, other: &Mesh) {
    let base = vertex_index(self.vertices.len());
    if let Some(last) = other.vertices.len().checked_sub(1) {
      // Range check on the highest rebased index
      vertex_index(self.vertices.len() + last);
    }
    self.vertices.extend_from_slice(&other.vertices);
    self
      .indices
      .extend(other.indices.iter().map(|&i| i + base));
  }

  pub fn bounds(&self) -> MinMaxAABB {
    MinMaxAABB::from_points(&self.vertices)
  }
}

/// Index of the vertex at position `len`.
///
/// Index buffers are `u32`, so a mesh holds at most `u32::MAX + 1` vertices.
#[inline]
fn vertex_index(len: usize) -> u32 {
  debug_assert!(
    len <= u32::MAX as usize,
    "mesh exceeds the u32 index range ({} vertices)",
    len
  );
  len as u32
}

/// Finalized mesh ready for upload: positions, normals and smoothing flags
/// parallel to each other.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RenderableBuffer {
  /// Vertex positions, in mesh order.
  pub positions: Vec<[f32; 3]>,

  /// Unit vertex normals, or zero for vertices touching only degenerate
  /// triangles.
  pub normals: Vec<[f32; 3]>,

  /// Smoothing group per vertex.
  pub smooth_groups: Vec<u32>,

  /// Triangle indices copied from the mesh. For an unwelded mesh this is
  /// `0, 1, 2, ...` and triangles are sequential vertex triples.
  pub indices: Vec<u32>,

  /// Bounding box encompassing all vertices.
  pub bounds: MinMaxAABB,
}

impl RenderableBuffer {
  pub fn is_empty(&self) -> bool {
    self.positions.is_empty()
  }

  pub fn vertex_count(&self) -> usize {
    self.positions.len()
  }

  pub fn triangle_count(&self) -> usize {
    self.indices.len() / 3
  }

  /// True when every vertex belongs to the shared smoothing group.
  pub fn is_single_smooth_group(&self) -> bool {
    self.smooth_groups.iter().all(|&g| g == SMOOTH_GROUP_ALL)
  }

  /// Positions flattened to `[x0, y0, z0, x1, ...]`.
  pub fn flat_positions(&self) -> Vec<f32> {
    self.positions.iter().flatten().copied().collect()
  }

  /// Normals flattened to `[x0, y0, z0, x1, ...]`.
  pub fn flat_normals(&self) -> Vec<f32> {
    self.normals.iter().flatten().copied().collect()
  }
}

/// A cell skipped because its case fell outside [0, 15].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InvalidCell {
  pub x: usize,
  pub y: usize,
  /// Case value before truncation (may be NaN).
  pub raw_case: f32,
}

/// Per-pass tessellation statistics.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TessellationReport {
  pub cells_visited: usize,
  pub triangles_emitted: usize,
  pub invalid_cells: Vec<InvalidCell>,
}

impl TessellationReport {
  /// True when no cell was skipped.
  pub fn is_clean(&self) -> bool {
    self.invalid_cells.is_empty()
  }

  /// Fold another report into this one, keeping invalid cells in order.
  pub fn merge(&mut self, other: TessellationReport) {
    self.cells_visited += other.cells_visited;
    self.triangles_emitted += other.triangles_emitted;
    self.invalid_cells.extend(other.invalid_cells);
  }
}

/// Configuration for tessellation.
#[derive(Clone, Debug)]
pub struct TessellationConfig {
  /// Corner classification rule.
  pub case_mode: CaseMode,

  /// Scale factor applied to X/Z positions. Must be positive and finite;
  /// other values tessellate to an empty mesh.
  pub cell_size: f32,

  /// Y coordinate of every emitted vertex.
  pub height: f32,

  /// Tessellate rows in parallel on rayon.
  pub parallel: bool,

  /// Normal blending used when the mesh is finalized.
  pub normal_weighting: NormalWeighting,
}

impl Default for TessellationConfig {
  fn default() -> Self {
    Self {
      case_mode: CaseMode::default(),
      cell_size: 1.0,
      height: 0.0,
      parallel: false,
      normal_weighting: NormalWeighting::default(),
    }
  }
}

impl TessellationConfig {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_case_mode(mut self, mode: CaseMode) -> Self {
    self.case_mode = mode;
    self
  }

  /// Shorthand for `with_case_mode(CaseMode::Threshold(cutoff))`.
  pub fn with_threshold(mut self, cutoff: f32) -> Self {
    self.case_mode = CaseMode::Threshold(cutoff);
    self
  }

  /// Set the cell size. Values that are not positive and finite are
  /// ignored and the current size is kept.
  pub fn with_cell_size(mut self, size: f32) -> Self {
    if is_valid_cell_size(size) {
      self.cell_size = size;
    } else {
      warn!(size, "ignoring invalid cell size");
    }
    self
  }

  pub fn with_height(mut self, height: f32) -> Self {
    self.height = height;
    self
  }

  pub fn with_parallel(mut self, parallel: bool) -> Self {
    self.parallel = parallel;
    self
  }

  pub fn with_normal_weighting(mut self, weighting: NormalWeighting) -> Self {
    self.normal_weighting = weighting;
    self
  }
}

/// Cell sizes that place vertices at distinct, finite positions.
#[inline]
pub fn is_valid_cell_size(size: f32) -> bool {
  size > 0.0 && size.is_finite()
}

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;
