//! Batch tessellation: many grids, finalized in parallel.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │ Batch                                                                   │
//! │                                                                         │
//! │  TessellationJob { id, grid, config }                                   │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  ┌─────────────────────────────────────────────────────────┐            │
//! │  │ tessellate_with_report(&grid, &config)                  │            │
//! │  │ finalize_with(&mesh, config.normal_weighting)           │            │
//! │  └─────────────────────────────────────────────────────────┘            │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  TessellationResult { id, buffer, report, timing_us }                   │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use web_time::Instant;

use rayon::prelude::*;
use tracing::debug;

use crate::finalize::finalize_with;
use crate::grid::SampleGrid;
use crate::tessellate::tessellate_with_report;
use crate::types::{RenderableBuffer, TessellationConfig, TessellationReport};

/// One grid to tessellate. `id` is chosen by the host and passed through.
#[derive(Clone, Debug)]
pub struct TessellationJob {
  pub id: u64,
  pub grid: SampleGrid,
  pub config: TessellationConfig,
}

#[derive(Clone, Debug)]
pub struct TessellationResult {
  pub id: u64,
  pub buffer: RenderableBuffer,
  pub report: TessellationReport,
  /// Wall time for tessellation plus finalization.
  pub timing_us: u64,
}

/// Tessellate and finalize a single job.
pub fn tessellate_job(job: TessellationJob) -> TessellationResult {
  let start = Instant::now();
  let (mesh, report) = tessellate_with_report(&job.grid, &job.config);
  let buffer = finalize_with(&mesh, job.config.normal_weighting);
  let timing_us = start.elapsed().as_micros() as u64;

  TessellationResult {
    id: job.id,
    buffer,
    report,
    timing_us,
  }
}

/// Run every job on the rayon pool. Results come back in job order.
pub fn tessellate_batch(jobs: Vec<TessellationJob>) -> Vec<TessellationResult> {
  let results: Vec<TessellationResult> = jobs.into_par_iter().map(tessellate_job).collect();

  let skipped: usize = results.iter().map(|r| r.report.invalid_cells.len()).sum();
  debug!(jobs = results.len(), skipped_cells = skipped, "batch complete");

  results
}

#[cfg(test)]
#[path = "batch_test.rs"]
mod batch_test;
