//! Cell layout constants for 2D marching squares.
//!
//! # Cell Layout
//!
//! ```text
//!   A──E──B          ┌──── +X
//!   │     │          │
//!   H     F          │
//!   │     │          +Z (grid y)
//!   D──G──C
//! ```
//!
//! Corners A, B, C, D are grid samples; E, F, G, H are edge midpoints.
//! Grid `y` maps to world Z, and every emitted point lies on a single Y
//! plane.
//!
//! # Case Index
//!
//! ```text
//! case = A·1 + B·2 + C·4 + D·8
//!
//!   A ─ bit 0      B ─ bit 1
//!   D ─ bit 3      C ─ bit 2
//! ```

/// Number of distinct cell cases (4 corner bits).
pub const CASE_COUNT: usize = 16;

/// Bit weight contributed by each filled corner, in A, B, C, D order.
pub const CORNER_WEIGHTS: [u8; 4] = [1, 2, 4, 8];

/// Grid offsets `[dx, dy]` of corners A, B, C, D from the cell origin.
pub const CORNER_OFFSETS: [[usize; 2]; 4] = [[0, 0], [1, 0], [1, 1], [0, 1]];

/// Local `[x, z]` offsets of the eight cell points, indexed by `CellPoint`.
pub const POINT_OFFSETS: [[f32; 2]; 8] = [
  [0.0, 0.0], // A
  [1.0, 0.0], // B
  [1.0, 1.0], // C
  [0.0, 1.0], // D
  [0.5, 0.0], // E
  [1.0, 0.5], // F
  [0.5, 1.0], // G
  [0.0, 0.5], // H
];

/// Smoothing group flag written to every vertex of a finalized buffer.
pub const SMOOTH_GROUP_ALL: u32 = u32::MAX;

/// Squared sine of the smallest corner angle a triangle may have before its
/// face normal is treated as degenerate.
pub const DEGENERATE_SIN_SQ: f32 = 1e-12;

#[cfg(test)]
#[path = "constants_test.rs"]
mod constants_test;
