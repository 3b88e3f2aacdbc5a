//! LabelCache - read-only row-major view over a square walkability grid.
//!
//! The cache borrows nothing and mutates nothing: it owns a flattened copy of
//! the grid and answers point lookups. A single cache may be shared by any
//! number of independent compression runs (`&self` access only).

/// Read-only square grid of per-cell walkability labels.
///
/// Indexed `(z, x)` - z selects the row, x the column. Out-of-range access is
/// a caller error and panics; the cache never returns a plausible-but-wrong
/// cell.
#[derive(Clone, Debug)]
pub struct LabelCache {
  /// Flattened row-major cells, `size * size` entries.
  cells: Vec<bool>,
  /// Side length in cells.
  size: u32,
}

impl LabelCache {
  /// Build a cache from ordered rows.
  ///
  /// # Panics
  ///
  /// Panics if the grid is not square (any row length differs from the row
  /// count).
  pub fn new(rows: Vec<Vec<bool>>) -> Self {
    let size = rows.len();
    let mut cells = Vec::with_capacity(size * size);
    for (z, row) in rows.iter().enumerate() {
      assert_eq!(
        row.len(),
        size,
        "grid must be square: row {} has {} cells, expected {}",
        z,
        row.len(),
        size
      );
      cells.extend_from_slice(row);
    }
    Self {
      cells,
      size: size as u32,
    }
  }

  /// Build a cache by evaluating `f(z, x)` for every cell.
  pub fn from_fn(size: u32, mut f: impl FnMut(u32, u32) -> bool) -> Self {
    let mut cells = Vec::with_capacity((size as usize) * (size as usize));
    for z in 0..size {
      for x in 0..size {
        cells.push(f(z, x));
      }
    }
    Self { cells, size }
  }

  /// Side length in cells.
  #[inline]
  pub fn size(&self) -> u32 {
    self.size
  }

  /// Look up a single cell.
  ///
  /// # Panics
  ///
  /// Panics if `z` or `x` is out of range. The column check is explicit:
  /// with flattened storage an oversized `x` would otherwise silently read
  /// from the next row.
  #[inline]
  pub fn get(&self, z: u32, x: u32) -> bool {
    assert!(z < self.size, "row {} out of range (size {})", z, self.size);
    assert!(x < self.size, "col {} out of range (size {})", x, self.size);
    self.cells[(z as usize) * (self.size as usize) + (x as usize)]
  }
}

#[cfg(test)]
#[path = "grid_test.rs"]
mod grid_test;
