//! Sample grid consumed by the tessellator.
//!
//! Samples are stored row-major: `index = y * width + x`. A grid is plain
//! data; producing it from an image or noise source is the caller's job.

use thiserror::Error;

use crate::constants::CORNER_OFFSETS;

/// Errors raised while building a [`SampleGrid`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GridError {
  #[error("sample buffer holds {len} values but a {width}x{height} grid needs {expected}")]
  DimensionMismatch {
    width: usize,
    height: usize,
    len: usize,
    expected: usize,
  },

  #[error("row {row} holds {len} samples, expected {expected}")]
  RaggedRow { row: usize, len: usize, expected: usize },

  #[error("grid dimensions {width}x{height} overflow the sample buffer")]
  Overflow { width: usize, height: usize },
}

/// Dense W×H grid of scalar samples.
#[derive(Clone, Debug, PartialEq)]
pub struct SampleGrid {
  width: usize,
  height: usize,
  samples: Vec<f32>,
}

impl SampleGrid {
  /// Create a zero-filled grid.
  pub fn new(width: usize, height: usize) -> Result<Self, GridError> {
    let len = checked_len(width, height)?;
    Ok(Self {
      width,
      height,
      samples: vec![0.0; len],
    })
  }

  /// Wrap a row-major sample buffer.
  pub fn from_vec(width: usize, height: usize, samples: Vec<f32>) -> Result<Self, GridError> {
    let expected = checked_len(width, height)?;
    if samples.len() != expected {
      return Err(GridError::DimensionMismatch {
        width,
        height,
        len: samples.len(),
        expected,
      });
    }
    Ok(Self {
      width,
      height,
      samples,
    })
  }

  /// Build a grid by evaluating `f(x, y)` at every sample.
  pub fn from_fn(
    width: usize,
    height: usize,
    mut f: impl FnMut(usize, usize) -> f32,
  ) -> Result<Self, GridError> {
    let len = checked_len(width, height)?;
    let mut samples = Vec::with_capacity(len);
    for y in 0..height {
      for x in 0..width {
        samples.push(f(x, y));
      }
    }
    Ok(Self {
      width,
      height,
      samples,
    })
  }

  /// Build a grid from rows, `rows[y][x]`. All rows must have equal length.
  pub fn from_rows<R: AsRef<[f32]>>(rows: &[R]) -> Result<Self, GridError> {
    let height = rows.len();
    let width = rows.first().map_or(0, |r| r.as_ref().len());
    let mut samples = Vec::with_capacity(checked_len(width, height)?);

    for (row, values) in rows.iter().enumerate() {
      let values = values.as_ref();
      if values.len() != width {
        return Err(GridError::RaggedRow {
          row,
          len: values.len(),
          expected: width,
        });
      }
      samples.extend_from_slice(values);
    }

    Ok(Self {
      width,
      height,
      samples,
    })
  }

  #[inline]
  pub fn width(&self) -> usize {
    self.width
  }

  #[inline]
  pub fn height(&self) -> usize {
    self.height
  }

  /// Raw row-major samples.
  #[inline]
  pub fn as_slice(&self) -> &[f32] {
    &self.samples
  }

  /// True when the grid has at least one 2×2 cell.
  #[inline]
  pub fn has_cells(&self) -> bool {
    self.width >= 2 && self.height >= 2
  }

  /// Number of cells, `(W-1) * (H-1)`, zero for degenerate grids.
  #[inline]
  pub fn cell_count(&self) -> usize {
    self.width.saturating_sub(1) * self.height.saturating_sub(1)
  }

  #[inline]
  pub fn get(&self, x: usize, y: usize) -> Option<f32> {
    if x < self.width && y < self.height {
      Some(self.samples[y * self.width + x])
    } else {
      None
    }
  }

  #[inline]
  pub fn get_mut(&mut self, x: usize, y: usize) -> Option<&mut f32> {
    if x < self.width && y < self.height {
      Some(&mut self.samples[y * self.width + x])
    } else {
      None
    }
  }

  /// Samples at corners A, B, C, D of the cell whose origin is `(x, y)`.
  ///
  /// Requires `x + 1 < width` and `y + 1 < height`.
  #[inline]
  pub fn corners(&self, x: usize, y: usize) -> [f32; 4] {
    debug_assert!(x + 1 < self.width && y + 1 < self.height);
    std::array::from_fn(|i| {
      let [dx, dy] = CORNER_OFFSETS[i];
      self.samples[(y + dy) * self.width + x + dx]
    })
  }

  /// Multiply every sample by `gain`.
  pub fn scale(&mut self, gain: f32) {
    for sample in &mut self.samples {
      *sample *= gain;
    }
  }

  /// Copy of the grid with every sample multiplied by `gain`.
  #[must_use]
  pub fn scaled(&self, gain: f32) -> Self {
    let mut grid = self.clone();
    grid.scale(gain);
    grid
  }

  /// Copy of the grid with every sample replaced by 1.0 if it is at least
  /// `cutoff`, else 0.0.
  #[must_use]
  pub fn quantized(&self, cutoff: f32) -> Self {
    Self {
      width: self.width,
      height: self.height,
      samples: self
        .samples
        .iter()
        .map(|&v| if v >= cutoff { 1.0 } else { 0.0 })
        .collect(),
    }
  }
}

fn checked_len(width: usize, height: usize) -> Result<usize, GridError> {
  width
    .checked_mul(height)
    .ok_or(GridError::Overflow { width, height })
}

#[cfg(test)]
#[path = "grid_test.rs"]
mod grid_test;
