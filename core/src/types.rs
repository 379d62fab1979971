use ndarray::Array2;

/// Single board axis used for row/column positions and board dimensions.
pub type Coord = u16;

/// Count type used for mine counts and total-cell counts.
pub type CellCount = u32;

/// Two-dimensional coordinates `(row, col)`.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

pub trait NeighborIterExt {
    fn iter_neighbors(&self, index: Coord2) -> NeighborIter;
}

impl<T> NeighborIterExt for Array2<T> {
    fn iter_neighbors(&self, index: Coord2) -> NeighborIter {
        let dim = self.dim();
        let size = (dim.0.try_into().unwrap(), dim.1.try_into().unwrap());
        NeighborIter::new(index, size)
    }
}

/// Walks the in-bounds Moore neighborhood of a cell: the clipped 3x3
/// window around `center`, minus the center itself.
#[derive(Debug)]
pub struct NeighborIter {
    center: Coord2,
    row: Coord,
    col: Coord,
    col_start: Coord,
    row_end: Coord,
    col_end: Coord,
    done: bool,
}

impl NeighborIter {
    fn new(center: Coord2, bounds: Coord2) -> Self {
        let (rows, cols) = bounds;
        if rows == 0 || cols == 0 || center.0 >= rows || center.1 >= cols {
            return Self {
                center,
                row: 0,
                col: 0,
                col_start: 0,
                row_end: 0,
                col_end: 0,
                done: true,
            };
        }

        let row_start = center.0.saturating_sub(1);
        let col_start = center.1.saturating_sub(1);
        Self {
            center,
            row: row_start,
            col: col_start,
            col_start,
            row_end: center.0.saturating_add(1).min(rows - 1),
            col_end: center.1.saturating_add(1).min(cols - 1),
            done: false,
        }
    }
}

impl Iterator for NeighborIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.done {
            let item = (self.row, self.col);

            if self.col < self.col_end {
                self.col += 1;
            } else if self.row < self.row_end {
                self.row += 1;
                self.col = self.col_start;
            } else {
                self.done = true;
            }

            if item != self.center {
                return Some(item);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    fn neighbors_of(bounds: Coord2, center: Coord2) -> Vec<Coord2> {
        let grid: Array2<u8> = Array2::default(bounds.to_nd_index());
        grid.iter_neighbors(center).collect()
    }

    #[test]
    fn center_cell_has_eight_neighbors() {
        let found = neighbors_of((3, 3), (1, 1));

        assert_eq!(found.len(), 8);
        assert!(!found.contains(&(1, 1)));
    }

    #[test]
    fn corner_cell_has_three_neighbors() {
        let found = neighbors_of((3, 3), (0, 0));

        assert_eq!(found, [(0, 1), (1, 0), (1, 1)]);
    }

    #[test]
    fn edge_cell_has_five_neighbors() {
        let found = neighbors_of((3, 3), (2, 1));

        assert_eq!(found, [(1, 0), (1, 1), (1, 2), (2, 0), (2, 2)]);
    }

    #[test]
    fn single_cell_board_has_no_neighbors() {
        assert!(neighbors_of((1, 1), (0, 0)).is_empty());
    }

    #[test]
    fn mult_saturates_instead_of_overflowing() {
        assert_eq!(mult(4, 5), 20);
        assert_eq!(mult(Coord::MAX, Coord::MAX), 4294836225);
    }
}
