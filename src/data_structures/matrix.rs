use std::ops::{Index, IndexMut};

/// Dense square matrix stored row-major in a single allocation.
///
/// Indexed by `(row, column)`. Used for every n x n table the all-pairs
/// algorithms produce.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T> {
    size: usize,
    cells: Vec<T>,
}

impl<T: Clone> Matrix<T> {
    /// Creates a `size x size` matrix with every cell set to `value`
    pub fn filled(size: usize, value: T) -> Self {
        Matrix {
            size,
            cells: vec![value; size * size],
        }
    }

    /// Sets every cell to `value`
    pub fn fill(&mut self, value: T) {
        self.cells.iter_mut().for_each(|cell| *cell = value.clone());
    }
}

impl<T> Matrix<T> {
    /// Builds a matrix from equally sized rows
    ///
    /// # Panics
    /// Panics if a row's length differs from the number of rows.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Self {
        let size = rows.len();
        let mut cells = Vec::with_capacity(size * size);
        for row in rows {
            assert_eq!(row.len(), size, "matrix rows must have {} entries", size);
            cells.extend(row);
        }
        Matrix { size, cells }
    }

    /// Number of rows (and columns)
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns row `i` as a slice
    pub fn row(&self, i: usize) -> &[T] {
        &self.cells[i * self.size..(i + 1) * self.size]
    }

    /// Iterates over the rows in order
    pub fn rows(&self) -> impl Iterator<Item = &[T]> + '_ {
        // chunks(0) panics, and an empty matrix has no rows anyway
        self.cells.chunks(self.size.max(1))
    }

    /// Copies the matrix into nested vectors
    pub fn to_rows(&self) -> Vec<Vec<T>>
    where
        T: Clone,
    {
        self.rows().map(|row| row.to_vec()).collect()
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, (i, j): (usize, usize)) -> &T {
        &self.cells[i * self.size + j]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut T {
        &mut self.cells[i * self.size + j]
    }
}
