//! marching_squares - engine independent heightmap contour meshing
//!
//! This crate turns a 2D grid of scalar samples into a flat triangulated
//! surface using the Marching Squares algorithm, then packages the result as a
//! renderable buffer with per-vertex normals.
//!
//! # Features
//!
//! - **16-case tessellation**: triangles, quads and pentagons emitted per cell
//!   from a static case table, with fixed-diagonal saddle resolution
//! - **Truncating or thresholded classification**: raw sample truncation, or
//!   a configurable cutoff that always yields a valid case
//! - **Smooth-group normals**: area or angle weighted vertex normals
//! - **Optional welding**: spatial-hash merge of coincident vertices
//! - **Parallel paths**: per-row tessellation and whole-grid batches on rayon
//!
//! # Example
//!
//! ```
//! use marching_squares::{finalize, tessellate, SampleGrid};
//!
//! let grid = SampleGrid::from_rows(&[[1.0f32, 1.0, 0.0], [1.0, 1.0, 0.0]]).unwrap();
//! let mesh = tessellate(&grid);
//! let buffer = finalize(&mesh);
//!
//! assert_eq!(buffer.triangle_count(), 4);
//! assert_eq!(buffer.normals.len(), buffer.positions.len());
//! ```

pub mod constants;
pub mod case_table;
pub mod grid;
pub mod types;

pub use case_table::{CellPoint, Polygon, CASE_TABLE};
pub use constants::{CASE_COUNT, CORNER_WEIGHTS, SMOOTH_GROUP_ALL};
pub use grid::{GridError, SampleGrid};
pub use types::{
  CaseMode, InvalidCell, Mesh, MinMaxAABB, NormalWeighting, RenderableBuffer, TessellationConfig,
  TessellationReport,
};

// Cell classification and polygon emission
pub mod tessellate;
pub use tessellate::{tessellate, tessellate_with_config, tessellate_with_report};

// Buffer export, normals and welding
pub mod finalize;
pub use finalize::{finalize, finalize_with, weld, WeldError};

// Parallel multi-grid tessellation
pub mod batch;
pub use batch::{tessellate_batch, tessellate_job, TessellationJob, TessellationResult};

#[cfg(test)]
mod test_utils;
