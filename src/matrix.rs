use serde::{Deserialize, Serialize};

use crate::error::MatrixError;

/// A dense matrix of [`f64`] with at least one row and one column.
///
/// Elements are stored in row-major order.
/// Construction validates the shape once,
/// so every `Matrix` reachable through this API is rectangular
/// and non-empty.
///
/// # Examples
///
/// ## In a `YAML` record
///
/// A matrix is written as a list of rows:
///
/// ```
/// let yaml = "
/// - [0, 9, 5]
/// - [4, 3, -5]
/// - [-1, 6, -4]
/// ";
/// let matrix = densemat::loads(yaml).unwrap();
/// assert_eq!(matrix.determinant().unwrap(), 324.0);
/// ```
///
/// ## Using rust code
///
/// ```
/// use densemat::Matrix;
///
/// let matrix = Matrix::try_from(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
/// assert_eq!(matrix[(1, 0)], 3.0);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<f64>>", into = "Vec<Vec<f64>>")]
pub struct Matrix {
    pub(crate) rows: usize,
    pub(crate) cols: usize,
    pub(crate) data: Vec<f64>,
}

impl Matrix {
    /// Absolute tolerance used by matrix equality.
    ///
    /// Two elements compare equal when the absolute value of their
    /// difference is at most this tolerance.
    pub const EQ_TOLERANCE: f64 = 1e-7;

    /// Build a matrix of the given shape with every element set to `0.0`.
    ///
    /// # Errors
    ///
    /// [`MatrixError::InvalidMatrix`] if `rows` or `cols` is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// let matrix = densemat::Matrix::zeros(2, 4).unwrap();
    /// assert_eq!(matrix.rows(), 2);
    /// assert_eq!(matrix.cols(), 4);
    /// assert!(matrix.row(1).iter().all(|&value| value == 0.0));
    /// ```
    pub fn zeros(rows: usize, cols: usize) -> Result<Self, MatrixError> {
        if rows == 0 || cols == 0 {
            return Err(MatrixError::InvalidMatrix(format!(
                "dimensions must be positive, got: {rows}x{cols}"
            )));
        }
        Ok(Self {
            rows,
            cols,
            data: vec![0.0; rows * cols],
        })
    }

    /// Build the `n` by `n` identity matrix.
    ///
    /// # Errors
    ///
    /// [`MatrixError::InvalidMatrix`] if `n` is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// let identity = densemat::Matrix::identity(3).unwrap();
    /// assert_eq!(identity.determinant().unwrap(), 1.0);
    /// ```
    pub fn identity(n: usize) -> Result<Self, MatrixError> {
        let mut matrix = Self::zeros(n, n)?;
        for i in 0..n {
            matrix.data[i * n + i] = 1.0;
        }
        Ok(matrix)
    }

    /// The number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// The number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// The element at `(row, col)`.
    ///
    /// # Errors
    ///
    /// [`MatrixError::IndexOutOfRange`] if either index is past the
    /// matrix bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// use densemat::{Matrix, MatrixError};
    ///
    /// let matrix = Matrix::identity(2).unwrap();
    /// assert_eq!(matrix.at(0, 0).unwrap(), 1.0);
    /// assert_eq!(matrix.at(0, 1).unwrap(), 0.0);
    /// assert!(matches!(
    ///     matrix.at(0, 2),
    ///     Err(MatrixError::IndexOutOfRange { .. })
    /// ));
    /// ```
    pub fn at(&self, row: usize, col: usize) -> Result<f64, MatrixError> {
        if row >= self.rows || col >= self.cols {
            return Err(self.out_of_range(row, col));
        }
        Ok(self.data[row * self.cols + col])
    }

    /// A mutable reference to the element at `(row, col)`.
    ///
    /// # Errors
    ///
    /// [`MatrixError::IndexOutOfRange`] if either index is past the
    /// matrix bounds.
    pub fn at_mut(&mut self, row: usize, col: usize) -> Result<&mut f64, MatrixError> {
        if row >= self.rows || col >= self.cols {
            return Err(self.out_of_range(row, col));
        }
        let cols = self.cols;
        Ok(&mut self.data[row * cols + col])
    }

    fn out_of_range(&self, row: usize, col: usize) -> MatrixError {
        MatrixError::IndexOutOfRange {
            row,
            col,
            rows: self.rows,
            cols: self.cols,
        }
    }

    /// The elements of row `row` as a slice.
    ///
    /// # Panics
    ///
    /// If `row` is past the last row.
    pub fn row(&self, row: usize) -> &[f64] {
        let start = row * self.cols;
        &self.data[start..start + self.cols]
    }

    /// The elements of row `row` as a mutable slice.
    ///
    /// # Panics
    ///
    /// If `row` is past the last row.
    pub fn row_mut(&mut self, row: usize) -> &mut [f64] {
        let start = row * self.cols;
        let cols = self.cols;
        &mut self.data[start..start + cols]
    }

    /// Set every element to `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut matrix = densemat::Matrix::zeros(2, 2).unwrap();
    /// matrix.fill(0.25);
    /// assert_eq!(matrix.at(1, 1).unwrap(), 0.25);
    /// ```
    pub fn fill(&mut self, value: f64) {
        self.data.fill(value)
    }

    /// Change the number of rows, preserving existing elements.
    ///
    /// Growing appends rows of `0.0`.
    /// Shrinking drops the trailing rows.
    /// On error, `self` is left unchanged.
    ///
    /// # Errors
    ///
    /// [`MatrixError::InvalidMatrix`] if `rows` is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut matrix = densemat::Matrix::identity(2).unwrap();
    /// matrix.set_rows(3).unwrap();
    /// assert_eq!(matrix.rows(), 3);
    /// assert_eq!(matrix.row(2), [0.0, 0.0]);
    /// ```
    pub fn set_rows(&mut self, rows: usize) -> Result<(), MatrixError> {
        let mut resized = Self::zeros(rows, self.cols)?;
        for i in 0..rows.min(self.rows) {
            resized.row_mut(i).copy_from_slice(self.row(i));
        }
        *self = resized;
        Ok(())
    }

    /// Change the number of columns, preserving existing elements.
    ///
    /// Growing pads each row with `0.0`.
    /// Shrinking truncates each row.
    /// On error, `self` is left unchanged.
    ///
    /// # Errors
    ///
    /// [`MatrixError::InvalidMatrix`] if `cols` is zero.
    pub fn set_cols(&mut self, cols: usize) -> Result<(), MatrixError> {
        let mut resized = Self::zeros(self.rows, cols)?;
        let keep = cols.min(self.cols);
        for i in 0..self.rows {
            resized.row_mut(i)[..keep].copy_from_slice(&self.row(i)[..keep]);
        }
        *self = resized;
        Ok(())
    }

    /// `true` when both dimensions are positive and the element storage
    /// matches them.
    ///
    /// Every constructor enforces this, so the check exists to audit
    /// values rather than to gate operations on them.
    pub fn is_valid(&self) -> bool {
        self.rows >= 1 && self.cols >= 1 && self.data.len() == self.rows * self.cols
    }

    /// Compare to `other` within [`EQ_TOLERANCE`](Self::EQ_TOLERANCE).
    ///
    /// Matrices of different shapes are never equal.
    /// This is also the behavior of the `==` operator.
    ///
    /// # Examples
    ///
    /// ```
    /// use densemat::Matrix;
    ///
    /// let a = Matrix::try_from(vec![vec![1.0, 2.0]]).unwrap();
    /// let b = Matrix::try_from(vec![vec![1.00000001, 2.0]]).unwrap();
    /// assert!(a.approx_eq(&b));
    /// assert_eq!(a, b);
    /// ```
    pub fn approx_eq(&self, other: &Self) -> bool {
        self.rows == other.rows
            && self.cols == other.cols
            && self
                .data
                .iter()
                .zip(other.data.iter())
                .all(|(a, b)| (a - b).abs() <= Self::EQ_TOLERANCE)
    }
}

/// The default matrix is 3 by 3, all elements `0.0`.
impl Default for Matrix {
    fn default() -> Self {
        Self {
            rows: 3,
            cols: 3,
            data: vec![0.0; 9],
        }
    }
}

impl TryFrom<Vec<Vec<f64>>> for Matrix {
    type Error = MatrixError;

    /// Build a matrix from nested rows.
    ///
    /// # Errors
    ///
    /// [`MatrixError::InvalidMatrix`] if the input is empty, contains an
    /// empty row, or the rows are not all the same length.
    fn try_from(value: Vec<Vec<f64>>) -> Result<Self, Self::Error> {
        let rows = value.len();
        let cols = value.first().map_or(0, |row| row.len());
        if rows == 0 || cols == 0 {
            return Err(MatrixError::InvalidMatrix(
                "input must contain at least one row and one column".to_string(),
            ));
        }
        let mut data = Vec::with_capacity(rows * cols);
        for (i, row) in value.iter().enumerate() {
            if row.len() != cols {
                return Err(MatrixError::InvalidMatrix(format!(
                    "row 0 has {cols} columns but row {i} has {}",
                    row.len()
                )));
            }
            data.extend_from_slice(row);
        }
        Ok(Self { rows, cols, data })
    }
}

impl From<Matrix> for Vec<Vec<f64>> {
    fn from(value: Matrix) -> Self {
        value
            .data
            .chunks_exact(value.cols)
            .map(|row| row.to_vec())
            .collect()
    }
}

impl PartialEq for Matrix {
    fn eq(&self, other: &Self) -> bool {
        self.approx_eq(other)
    }
}

impl std::ops::Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        if row >= self.rows || col >= self.cols {
            panic!("{}", self.out_of_range(row, col));
        }
        &self.data[row * self.cols + col]
    }
}

impl std::ops::IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        if row >= self.rows || col >= self.cols {
            panic!("{}", self.out_of_range(row, col));
        }
        let cols = self.cols;
        &mut self.data[row * cols + col]
    }
}

impl std::fmt::Display for Matrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for (i, row) in self.data.chunks_exact(self.cols).enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "[")?;
            for (j, value) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{value}")?;
            }
            write!(f, "]")?;
        }
        write!(f, "]")
    }
}
