//! Grid shapes and coordinate containers.

use serde::{Deserialize, Serialize};

use crate::layout;

/// Logical extents of a 2D grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridShape {
    /// Number of logical rows (eta direction).
    pub rows: usize,
    /// Number of logical columns (xi direction).
    pub cols: usize,
}

impl GridShape {
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Total cell count, which is also the flattened buffer length.
    pub const fn cells(&self) -> usize {
        self.rows * self.cols
    }
}

/// Per-cell geographic coordinates for one curvilinear grid.
///
/// Both arrays are column-major flattened and exactly `shape.cells()`
/// long; the constructor enforces the length invariant.
#[derive(Debug, Clone)]
pub struct CurvilinearGrid {
    pub shape: GridShape,
    pub lat: Vec<f64>,
    pub lon: Vec<f64>,
}

impl CurvilinearGrid {
    pub fn new(shape: GridShape, lat: Vec<f64>, lon: Vec<f64>) -> Self {
        assert_eq!(lat.len(), shape.cells(), "latitude buffer length");
        assert_eq!(lon.len(), shape.cells(), "longitude buffer length");
        Self { shape, lat, lon }
    }

    /// Coordinates of logical cell `(i, j)`.
    #[inline]
    pub fn point(&self, i: usize, j: usize) -> (f64, f64) {
        let k = layout::column_major_offset(i, j, self.shape.rows);
        (self.lat[k], self.lon[k])
    }
}
