//! Flattening conventions for 2D grids stored as 1D buffers.
//!
//! The coordinate buffers are column-major (the row index varies
//! fastest), while the output index sequence is row-major (the column
//! index varies fastest). Both mappings are named here so the offset
//! arithmetic is an explicit, tested contract rather than an implicit
//! detail of the traversal loop.

/// Offset of logical cell `(i, j)` in a column-major flattened buffer
/// with `rows` rows.
#[inline]
pub const fn column_major_offset(i: usize, j: usize, rows: usize) -> usize {
    i + rows * j
}

/// Position of logical cell `(i, j)` in a row-major sequence with `cols`
/// columns.
#[inline]
pub const fn row_major_position(i: usize, j: usize, cols: usize) -> usize {
    i * cols + j
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_major_offset_varies_row_fastest() {
        let rows = 3;
        assert_eq!(column_major_offset(0, 0, rows), 0);
        assert_eq!(column_major_offset(1, 0, rows), 1);
        assert_eq!(column_major_offset(2, 0, rows), 2);
        assert_eq!(column_major_offset(0, 1, rows), 3);
        assert_eq!(column_major_offset(2, 4, rows), 14);
    }

    #[test]
    fn row_major_position_varies_column_fastest() {
        let cols = 4;
        assert_eq!(row_major_position(0, 0, cols), 0);
        assert_eq!(row_major_position(0, 1, cols), 1);
        assert_eq!(row_major_position(1, 0, cols), 4);
        assert_eq!(row_major_position(2, 3, cols), 11);
    }

    #[test]
    fn both_mappings_are_bijective_over_a_grid() {
        let (rows, cols) = (3, 5);
        let mut offsets: Vec<usize> = Vec::new();
        let mut positions: Vec<usize> = Vec::new();
        for i in 0..rows {
            for j in 0..cols {
                offsets.push(column_major_offset(i, j, rows));
                positions.push(row_major_position(i, j, cols));
            }
        }
        offsets.sort_unstable();
        positions.sort_unstable();
        let expected: Vec<usize> = (0..rows * cols).collect();
        assert_eq!(offsets, expected);
        assert_eq!(positions, expected);
    }

    #[test]
    fn degenerate_single_cell_grid() {
        assert_eq!(column_major_offset(0, 0, 1), 0);
        assert_eq!(row_major_position(0, 0, 1), 0);
    }
}
