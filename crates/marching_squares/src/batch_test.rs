//! Tests for batch tessellation.

use super::{tessellate_batch, tessellate_job, TessellationJob};
use crate::finalize::finalize;
use crate::tessellate::tessellate;
use crate::test_utils::*;
use crate::types::{NormalWeighting, TessellationConfig};

fn job(id: u64, seed: u64) -> TessellationJob {
  TessellationJob {
    id,
    grid: random_binary_grid(16, 12, seed),
    config: TessellationConfig::default(),
  }
}

// =============================================================================
// Single job
// =============================================================================

#[test]
fn test_job_matches_direct_calls() {
  let input = job(7, 3);
  let expected = finalize(&tessellate(&input.grid));

  let result = tessellate_job(input);

  assert_eq!(result.id, 7);
  assert_eq!(result.buffer, expected);
  assert!(result.report.is_clean());
  assert_eq!(result.report.cells_visited, 15 * 11);
}

#[test]
fn test_job_carries_report() {
  let mut input = job(1, 0);
  *input.grid.get_mut(0, 0).unwrap() = 9.0;

  let result = tessellate_job(input);

  assert_eq!(result.report.invalid_cells.len(), 1);
  assert_eq!((result.report.invalid_cells[0].x, result.report.invalid_cells[0].y), (0, 0));
}

#[test]
fn test_job_uses_config() {
  let mut input = job(2, 0);
  input.grid = filled_grid(3, 3, 1.0);
  input.config = TessellationConfig::new()
    .with_cell_size(0.5)
    .with_height(-1.0)
    .with_normal_weighting(NormalWeighting::Angle);

  let result = tessellate_job(input);

  assert_eq!(result.buffer.bounds.min, [0.0, -1.0, 0.0]);
  assert_eq!(result.buffer.bounds.max, [1.0, -1.0, 1.0]);
}

// =============================================================================
// Batches
// =============================================================================

#[test]
fn test_empty_batch() {
  assert!(tessellate_batch(Vec::new()).is_empty());
}

#[test]
fn test_batch_preserves_order_and_ids() {
  let jobs: Vec<_> = (0..12).map(|i| job(100 + i, i)).collect();
  let expected: Vec<_> = jobs
    .iter()
    .map(|j| finalize(&tessellate(&j.grid)))
    .collect();

  let results = tessellate_batch(jobs);

  assert_eq!(results.len(), 12);
  for (i, (result, buffer)) in results.iter().zip(expected.iter()).enumerate() {
    assert_eq!(result.id, 100 + i as u64);
    assert_eq!(&result.buffer, buffer, "job {}", i);
  }
}

#[test]
fn test_batch_with_parallel_rows() {
  let jobs: Vec<_> = (0..4)
    .map(|i| {
      let mut j = job(i, i + 50);
      j.config = TessellationConfig::new().with_parallel(true);
      j
    })
    .collect();
  let sequential: Vec<_> = (0..4).map(|i| tessellate_job(job(i, i + 50))).collect();

  let results = tessellate_batch(jobs);

  for (par, seq) in results.iter().zip(sequential.iter()) {
    assert_eq!(par.buffer, seq.buffer);
    assert_eq!(par.report, seq.report);
  }
}
