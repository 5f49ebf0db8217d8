//! Marching squares tessellation.
//!
//! Converts a [`SampleGrid`] into a flat triangle [`Mesh`] one cell at a
//! time.
//!
//! # Processing Pipeline
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                        INPUT                                    │
//! │  grid: SampleGrid        - W×H samples, row-major               │
//! │  config: TessellationConfig                                     │
//! └─────────────────────────────────────────────────────────────────┘
//!                               │
//!                               ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    PHASE 1: Corner Classification               │
//! │  For each 2×2 cell:                                             │
//! │    Load A, B, C, D samples                                      │
//! │    Build 4-bit case (truncate or threshold)                     │
//! │    Out-of-range case → warn, record, skip cell                  │
//! └─────────────────────────────────────────────────────────────────┘
//!                               │
//!                               ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    PHASE 2: Emission                            │
//! │    Lookup polygons in CASE_TABLE[case]                          │
//! │    Place cell points (corners + edge midpoints)                 │
//! │    Triangle → 1 tri, Quad → 2 tris, Pentagon → 3-tri fan        │
//! │    Each triangle appends 3 fresh vertices                       │
//! └─────────────────────────────────────────────────────────────────┘
//!                               │
//!                               ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                        OUTPUT                                   │
//! │  Mesh { vertices, indices }                                     │
//! │  TessellationReport { cells_visited, triangles, invalid_cells } │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Cells are visited row by row (`y` outer, `x` inner). The parallel path
//! tessellates each row independently and concatenates rows in order, so it
//! produces exactly the same mesh as the sequential path.

mod cell_case;
mod emit;

pub use cell_case::classify;
pub use emit::{add_pentagon, add_quad, add_triangle};

use rayon::prelude::*;
use tracing::{debug, warn};

use crate::case_table::CASE_TABLE;
use crate::grid::SampleGrid;
use crate::types::{
  is_valid_cell_size, InvalidCell, Mesh, TessellationConfig, TessellationReport,
};
use emit::CellFrame;

/// Tessellate with the default configuration.
pub fn tessellate(grid: &SampleGrid) -> Mesh {
  tessellate_with_config(grid, &TessellationConfig::default())
}

/// Tessellate, discarding the report.
pub fn tessellate_with_config(grid: &SampleGrid, config: &TessellationConfig) -> Mesh {
  tessellate_with_report(grid, config).0
}

/// Tessellate a grid, returning the mesh and per-pass statistics.
///
/// Grids narrower or shorter than 2 samples have no cells and produce an
/// empty mesh, as does a `cell_size` that is not positive and finite. Cells
/// whose case falls outside [0, 15] are logged, recorded in the report and
/// skipped; the pass never aborts.
#[cfg_attr(feature = "profiling", tracing::instrument(skip_all, name = "marching_squares::tessellate"))]
pub fn tessellate_with_report(
  grid: &SampleGrid,
  config: &TessellationConfig,
) -> (Mesh, TessellationReport) {
  if !grid.has_cells() {
    debug!(
      width = grid.width(),
      height = grid.height(),
      "grid has no cells, nothing to tessellate"
    );
    return (Mesh::new(), TessellationReport::default());
  }

  if !is_valid_cell_size(config.cell_size) {
    warn!(cell_size = config.cell_size, "invalid cell size, nothing to tessellate");
    return (Mesh::new(), TessellationReport::default());
  }

  let rows = grid.height() - 1;

  let (mesh, report) = if config.parallel {
    let parts: Vec<(Mesh, TessellationReport)> = (0..rows)
      .into_par_iter()
      .map(|y| {
        let mut mesh = Mesh::new();
        let mut report = TessellationReport::default();
        process_row(grid, y, config, &mut mesh, &mut report);
        (mesh, report)
      })
      .collect();

    let triangles: usize = parts.iter().map(|(m, _)| m.triangle_count()).sum();
    let mut mesh = Mesh::with_triangle_capacity(triangles);
    let mut report = TessellationReport::default();
    for (part, part_report) in parts {
      mesh.append(&part);
      report.merge(part_report);
    }
    (mesh, report)
  } else {
    let mut mesh = Mesh::new();
    let mut report = TessellationReport::default();
    for y in 0..rows {
      process_row(grid, y, config, &mut mesh, &mut report);
    }
    (mesh, report)
  };

  debug!(
    cells = report.cells_visited,
    triangles = report.triangles_emitted,
    skipped = report.invalid_cells.len(),
    parallel = config.parallel,
    "tessellation complete"
  );

  (mesh, report)
}

/// Process every cell of row `y`.
fn process_row(
  grid: &SampleGrid,
  y: usize,
  config: &TessellationConfig,
  mesh: &mut Mesh,
  report: &mut TessellationReport,
) {
  for x in 0..(grid.width() - 1) {
    process_cell(grid, [x, y], config, mesh, report);
  }
}

/// Classify a single 2×2 cell and emit its polygons.
fn process_cell(
  grid: &SampleGrid,
  pos: [usize; 2],
  config: &TessellationConfig,
  mesh: &mut Mesh,
  report: &mut TessellationReport,
) {
  let [x, y] = pos;
  report.cells_visited += 1;

  let case = match classify(grid.corners(x, y), config.case_mode) {
    Ok(case) => case,
    Err(raw_case) => {
      warn!(x, y, raw_case, "invalid cell case, skipping cell");
      report.invalid_cells.push(InvalidCell { x, y, raw_case });
      return;
    }
  };

  let frame = CellFrame::new(x, y, config.cell_size, config.height);
  for polygon in CASE_TABLE[case as usize] {
    report.triangles_emitted += emit::add_polygon(mesh, &frame, polygon);
  }
}
