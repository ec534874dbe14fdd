//! 2D footprint transforms.
//!
//! A piece footprint has 8 possible orientations in the plane (the dihedral
//! group of the square): 4 quarter-turn rotations, each with and without a
//! mirror flip. Symmetric footprints produce fewer unique orientations.

/// A piece footprint in one orientation: a small 0/1 grid where 1 marks a
/// covered cell.
///
/// The derived ordering (rows, then cols, then cells) fixes the variant
/// order produced by [`all_orientations`].
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub struct Footprint {
    rows: usize,
    cols: usize,
    cells: Vec<u8>,
}

impl Footprint {
    /// Builds a footprint from a row-major cell grid.
    ///
    /// Returns `None` if the rows are empty or ragged.
    pub fn from_rows(rows: Vec<Vec<u8>>) -> Option<Self> {
        let height = rows.len();
        let width = rows.first()?.len();
        if width == 0 || rows.iter().any(|row| row.len() != width) {
            return None;
        }
        let cells = rows.into_iter().flatten().collect();
        Some(Self {
            rows: height,
            cols: width,
            cells,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Value at (row, col); 1 marks a covered cell.
    #[inline]
    pub fn at(&self, row: usize, col: usize) -> u8 {
        self.cells[row * self.cols + col]
    }

    /// Number of covered cells.
    pub fn area(&self) -> usize {
        self.cells.iter().filter(|&&c| c == 1).count()
    }

    /// Rotates the footprint a quarter turn clockwise.
    pub fn rotate_cw(&self) -> Self {
        let mut cells = vec![0u8; self.cells.len()];
        for row in 0..self.rows {
            for col in 0..self.cols {
                // (row, col) lands at (col, rows - 1 - row) in the rotated grid
                cells[col * self.rows + (self.rows - 1 - row)] = self.at(row, col);
            }
        }
        Self {
            rows: self.cols,
            cols: self.rows,
            cells,
        }
    }

    /// Mirrors the footprint left-to-right.
    pub fn mirror(&self) -> Self {
        let mut cells = vec![0u8; self.cells.len()];
        for row in 0..self.rows {
            for col in 0..self.cols {
                cells[row * self.cols + (self.cols - 1 - col)] = self.at(row, col);
            }
        }
        Self {
            rows: self.rows,
            cols: self.cols,
            cells,
        }
    }
}

/// Generates all unique orientations of a footprint.
///
/// Applies the 4 rotations to the footprint and its mirror image, then
/// removes duplicates. The result is sorted so the variant order is a
/// stable contract independent of generation order.
pub fn all_orientations(base: &Footprint) -> Vec<Footprint> {
    let mut orientations = Vec::with_capacity(8);

    let mut current = base.clone();
    for _ in 0..4 {
        orientations.push(current.mirror());
        orientations.push(current.clone());
        current = current.rotate_cw();
    }

    // remove duplicate orientations (symmetric footprints produce duplicates)
    orientations.sort();
    orientations.dedup();
    orientations
}

#[cfg(test)]
mod tests {
    use super::*;

    fn l_shape() -> Footprint {
        Footprint::from_rows(vec![vec![1, 0], vec![1, 0], vec![1, 1]]).unwrap()
    }

    #[test]
    fn test_four_rotations_return_to_identity() {
        let base = l_shape();
        let rotated = base.rotate_cw().rotate_cw().rotate_cw().rotate_cw();
        assert_eq!(rotated, base);
    }

    #[test]
    fn test_mirror_is_involution() {
        let base = l_shape();
        assert_eq!(base.mirror().mirror(), base);
    }

    #[test]
    fn test_rotation_swaps_dimensions() {
        let base = l_shape();
        let rotated = base.rotate_cw();
        assert_eq!(rotated.rows(), base.cols());
        assert_eq!(rotated.cols(), base.rows());
        // top-left of the rotated grid comes from the bottom-left of the original
        assert_eq!(rotated.at(0, 0), base.at(2, 0));
    }

    #[test]
    fn test_l_shape_has_eight_orientations() {
        assert_eq!(all_orientations(&l_shape()).len(), 8);
    }

    #[test]
    fn test_rectangle_has_two_orientations() {
        let bar = Footprint::from_rows(vec![vec![1, 1, 1], vec![1, 1, 1]]).unwrap();
        assert_eq!(all_orientations(&bar).len(), 2);
    }

    #[test]
    fn test_square_has_one_orientation() {
        let square = Footprint::from_rows(vec![vec![1, 1], vec![1, 1]]).unwrap();
        assert_eq!(all_orientations(&square).len(), 1);
    }

    #[test]
    fn test_orientation_order_is_sorted() {
        let orientations = all_orientations(&l_shape());
        let mut sorted = orientations.clone();
        sorted.sort();
        assert_eq!(orientations, sorted);
    }

    #[test]
    fn test_ragged_rows_rejected() {
        assert!(Footprint::from_rows(vec![vec![1, 1], vec![1]]).is_none());
        assert!(Footprint::from_rows(vec![]).is_none());
        assert!(Footprint::from_rows(vec![vec![]]).is_none());
    }

    #[test]
    fn test_area_counts_covered_cells() {
        assert_eq!(l_shape().area(), 4);
    }
}
