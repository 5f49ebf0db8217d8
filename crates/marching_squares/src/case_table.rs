//! Marching squares case table.
//!
//! Maps each 4-bit cell case to the polygons covering the filled part of the
//! cell. Polygon vertices are named after the cell layout in
//! [`constants`](crate::constants):
//!
//! ```text
//!   A──E──B
//!   │     │
//!   H     F
//!   │     │
//!   D──G──C
//! ```
//!
//! # Case Table
//!
//! ```text
//! Case  Corners   Emission
//! ────  ───────   ─────────────────────────────
//!   0   ----      none
//!   1   A---      tri(A,E,H)
//!   2   -B--      tri(B,F,E)
//!   3   AB--      quad(A,B,F,H)
//!   4   --C-      tri(C,G,F)
//!   5   A-C-      tri(F,C,G) + tri(H,A,E)    saddle
//!   6   -BC-      quad(E,B,C,G)
//!   7   ABC-      pentagon(A,B,C,G,H)
//!   8   ---D      tri(D,H,G)
//!   9   A--D      quad(A,E,G,D)
//!  10   -B-D      tri(G,D,H) + tri(E,B,F)    saddle
//!  11   AB-D      pentagon(A,B,F,G,D)
//!  12   --CD      quad(H,F,C,D)
//!  13   A-CD      pentagon(A,E,F,C,D)
//!  14   -BCD      pentagon(H,E,B,C,D)
//!  15   ABCD      quad(A,B,C,D)
//! ```
//!
//! Saddle cases always keep the two filled corners disconnected; the centre
//! of the cell stays empty.

use crate::constants::{CASE_COUNT, POINT_OFFSETS};

/// One of the eight named points of a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum CellPoint {
  A = 0,
  B = 1,
  C = 2,
  D = 3,
  E = 4,
  F = 5,
  G = 6,
  H = 7,
}

impl CellPoint {
  pub const ALL: [CellPoint; 8] = [
    CellPoint::A,
    CellPoint::B,
    CellPoint::C,
    CellPoint::D,
    CellPoint::E,
    CellPoint::F,
    CellPoint::G,
    CellPoint::H,
  ];

  /// Local `[x, z]` offset inside the unit cell.
  #[inline]
  pub fn offset(self) -> [f32; 2] {
    POINT_OFFSETS[self as usize]
  }

  /// True for the grid-sample corners A, B, C, D.
  #[inline]
  pub fn is_corner(self) -> bool {
    (self as u8) < 4
  }
}

/// Polygon emitted for a cell, in emission order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Polygon {
  Triangle([CellPoint; 3]),
  /// Split into (p1,p2,p4) and (p2,p3,p4).
  Quad([CellPoint; 4]),
  /// Fan from p1: (p1,p2,p3), (p1,p3,p4), (p1,p4,p5).
  Pentagon([CellPoint; 5]),
}

impl Polygon {
  pub fn points(&self) -> &[CellPoint] {
    match self {
      Polygon::Triangle(p) => p,
      Polygon::Quad(p) => p,
      Polygon::Pentagon(p) => p,
    }
  }

  /// Number of triangles this polygon is split into.
  #[inline]
  pub fn triangle_count(&self) -> usize {
    self.points().len() - 2
  }
}

use CellPoint::{A, B, C, D, E, F, G, H};

/// Polygons per cell case, indexed by case.
pub const CASE_TABLE: [&[Polygon]; CASE_COUNT] = [
  &[],
  &[Polygon::Triangle([A, E, H])],
  &[Polygon::Triangle([B, F, E])],
  &[Polygon::Quad([A, B, F, H])],
  &[Polygon::Triangle([C, G, F])],
  &[Polygon::Triangle([F, C, G]), Polygon::Triangle([H, A, E])],
  &[Polygon::Quad([E, B, C, G])],
  &[Polygon::Pentagon([A, B, C, G, H])],
  &[Polygon::Triangle([D, H, G])],
  &[Polygon::Quad([A, E, G, D])],
  &[Polygon::Triangle([G, D, H]), Polygon::Triangle([E, B, F])],
  &[Polygon::Pentagon([A, B, F, G, D])],
  &[Polygon::Quad([H, F, C, D])],
  &[Polygon::Pentagon([A, E, F, C, D])],
  &[Polygon::Pentagon([H, E, B, C, D])],
  &[Polygon::Quad([A, B, C, D])],
];

/// Look up the polygons for a case, `None` if the case is out of range.
#[inline]
pub fn polygons(case: u8) -> Option<&'static [Polygon]> {
  CASE_TABLE.get(case as usize).copied()
}

/// True for the two diagonal-corner cases resolved by a fixed diagonal.
#[inline]
pub fn is_saddle(case: u8) -> bool {
  case == 5 || case == 10
}

#[cfg(test)]
#[path = "case_table_test.rs"]
mod case_table_test;
