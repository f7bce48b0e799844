//! Spiral traversal of a rectangular grid.
use std::fmt;

/// Row-major rectangular matrix of integers.
pub struct Matrix {
    rows: usize,
    cols: usize,
    cells: Vec<i64>,
}

/// The supplied rows do not form a rectangle.
pub enum MatrixError {
    /// A row's length differs from the first row's.
    RaggedRow { row: usize, expected: usize, found: usize },
}

impl MatrixError {
    /// Returns a human friendly error message.
    pub fn message(&self) -> String {
        match *self {
            MatrixError::RaggedRow { row, expected, found } => format!(
                "row {} has {} cells, expected {}",
                row, found, expected
            ),
        }
    }
}

impl fmt::Debug for MatrixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl fmt::Display for MatrixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for MatrixError {}

impl Matrix {
    /// Builds a matrix from equally long rows; empty input is the 0x0
    /// matrix.
    pub fn from_rows(rows: Vec<Vec<i64>>) -> Result<Self, MatrixError> {
        let cols = rows.first().map_or(0, Vec::len);
        let mut cells = Vec::with_capacity(rows.len() * cols);
        for (index, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(MatrixError::RaggedRow {
                    row: index,
                    expected: cols,
                    found: row.len(),
                });
            }
            cells.extend_from_slice(row);
        }
        Ok(Self {
            rows: rows.len(),
            cols,
            cells,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> i64 {
        self.cells[row * self.cols + col]
    }
}

/// The 6x6 grid of 1..=36 used by the console demo.
pub fn demo_grid() -> Matrix {
    let rows = (0..6)
        .map(|r| (1..=6).map(|c| (r * 6 + c) as i64).collect())
        .collect();
    match Matrix::from_rows(rows) {
        Ok(matrix) => matrix,
        Err(_) => unreachable!("demo rows are rectangular"),
    }
}

/// Clockwise spiral traversal: top row left to right, right column top to
/// bottom, bottom row right to left, left column bottom to top, with all
/// four bounds shrinking inward. Every cell is visited exactly once.
pub fn spiral(matrix: &Matrix) -> Vec<i64> {
    if matrix.rows() == 0 || matrix.cols() == 0 {
        return Vec::new();
    }
    let mut out = Vec::with_capacity(matrix.rows() * matrix.cols());
    let mut top = 0isize;
    let mut bottom = matrix.rows() as isize - 1;
    let mut left = 0isize;
    let mut right = matrix.cols() as isize - 1;
    while top <= bottom && left <= right {
        for col in left..=right {
            out.push(matrix.get(top as usize, col as usize));
        }
        top += 1;

        for row in top..=bottom {
            out.push(matrix.get(row as usize, right as usize));
        }
        right -= 1;

        if top <= bottom {
            for col in (left..=right).rev() {
                out.push(matrix.get(bottom as usize, col as usize));
            }
            bottom -= 1;
        }

        if left <= right {
            for row in (top..=bottom).rev() {
                out.push(matrix.get(row as usize, left as usize));
            }
            left += 1;
        }
    }
    out
}
