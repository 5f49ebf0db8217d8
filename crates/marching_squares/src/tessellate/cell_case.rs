//! Cell case classification.
//!
//! The case is a 4-bit value where each bit marks a filled corner:
//! - Bit 0: corner A (x, y)
//! - Bit 1: corner B (x+1, y)
//! - Bit 2: corner C (x+1, y+1)
//! - Bit 3: corner D (x, y+1)

use crate::constants::{CASE_COUNT, CORNER_WEIGHTS};
use crate::types::CaseMode;

/// Classify four corner samples (A, B, C, D order).
///
/// Returns `Err(raw)` with the untruncated case value when it falls outside
/// [0, 15]. Only [`CaseMode::Truncate`] can fail.
#[inline]
pub fn classify(corners: [f32; 4], mode: CaseMode) -> Result<u8, f32> {
  match mode {
    CaseMode::Truncate => truncated(corners),
    CaseMode::Threshold(cutoff) => Ok(thresholded(corners, cutoff)),
  }
}

/// Weighted sum of floored samples.
///
/// Samples outside {0, 1} push the sum past the valid range; NaN and
/// infinities never classify.
#[inline]
pub fn truncated(corners: [f32; 4]) -> Result<u8, f32> {
  let raw: f32 = corners
    .iter()
    .zip(CORNER_WEIGHTS)
    .map(|(&value, weight)| value.floor() * weight as f32)
    .sum();

  if (0.0..CASE_COUNT as f32).contains(&raw) {
    Ok(raw as u8)
  } else {
    Err(raw)
  }
}

/// Set bit for every corner whose sample is `>= cutoff`.
#[inline]
pub fn thresholded(corners: [f32; 4], cutoff: f32) -> u8 {
  corners
    .iter()
    .zip(CORNER_WEIGHTS)
    .filter(|&(&value, _)| value >= cutoff)
    .fold(0, |case, (_, weight)| case | weight)
}

#[cfg(test)]
#[path = "cell_case_test.rs"]
mod cell_case_test;
