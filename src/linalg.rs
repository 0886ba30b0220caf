use crate::error::MatrixError;
use crate::matrix::Matrix;

impl Matrix {
    /// The transpose of `self`.
    ///
    /// # Examples
    ///
    /// ```
    /// use densemat::Matrix;
    ///
    /// let matrix =
    ///     Matrix::try_from(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap();
    /// let transposed = matrix.transpose();
    /// assert_eq!(transposed.rows(), 3);
    /// assert_eq!(transposed.cols(), 2);
    /// assert_eq!(transposed.row(0), [1.0, 4.0]);
    /// ```
    pub fn transpose(&self) -> Matrix {
        let mut transposed = Matrix {
            rows: self.cols,
            cols: self.rows,
            data: vec![0.0; self.data.len()],
        };
        for (i, row) in self.data.chunks_exact(self.cols).enumerate() {
            for (j, value) in row.iter().enumerate() {
                transposed.data[j * self.rows + i] = *value;
            }
        }
        transposed
    }

    /// The determinant of `self`, by recursive cofactor expansion along
    /// the first row.
    ///
    /// The cost grows factorially with the matrix size,
    /// which is fine for the small matrices this crate targets.
    ///
    /// # Errors
    ///
    /// [`MatrixError::NotSquare`] if `self` is not square.
    ///
    /// # Examples
    ///
    /// ```
    /// use densemat::Matrix;
    ///
    /// let matrix = Matrix::try_from(vec![vec![1.0, 2.0], vec![2.0, 3.0]]).unwrap();
    /// assert_eq!(matrix.determinant().unwrap(), -1.0);
    /// ```
    pub fn determinant(&self) -> Result<f64, MatrixError> {
        if self.rows != self.cols {
            return Err(MatrixError::NotSquare {
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(determinant_by_cofactors(self))
    }

    /// The matrix of cofactors of `self`.
    ///
    /// Element `(i, j)` of the result is `(-1)^(i + j)` times the
    /// determinant of the minor obtained by deleting row `i` and
    /// column `j`.
    /// For a `1x1` matrix the minor is empty and its determinant is
    /// taken to be `1.0`.
    ///
    /// # Errors
    ///
    /// [`MatrixError::NotSquare`] if `self` is not square.
    ///
    /// # Examples
    ///
    /// ```
    /// use densemat::Matrix;
    ///
    /// let matrix = Matrix::try_from(vec![vec![4.0, 7.0], vec![2.0, 6.0]]).unwrap();
    /// let cofactors = matrix.cofactor_matrix().unwrap();
    /// assert_eq!(cofactors.row(0), [6.0, -2.0]);
    /// assert_eq!(cofactors.row(1), [-7.0, 4.0]);
    /// ```
    pub fn cofactor_matrix(&self) -> Result<Matrix, MatrixError> {
        if self.rows != self.cols {
            return Err(MatrixError::NotSquare {
                rows: self.rows,
                cols: self.cols,
            });
        }
        let n = self.rows;
        if n == 1 {
            // the empty minor has determinant 1 by convention
            return Ok(Matrix {
                rows: 1,
                cols: 1,
                data: vec![1.0],
            });
        }
        let mut cofactors = Matrix {
            rows: n,
            cols: n,
            data: vec![0.0; n * n],
        };
        for i in 0..n {
            for j in 0..n {
                cofactors.data[i * n + j] =
                    sign(i + j) * determinant_by_cofactors(&self.minor(i, j));
            }
        }
        Ok(cofactors)
    }

    /// The inverse of `self`, computed from the adjugate.
    ///
    /// # Errors
    ///
    /// [`MatrixError::NotSquare`] if `self` is not square.
    /// [`MatrixError::SingularMatrix`] if the determinant is exactly
    /// zero.
    /// Nearly singular matrices invert without error and the result
    /// degrades accordingly.
    ///
    /// # Examples
    ///
    /// ```
    /// use densemat::Matrix;
    ///
    /// let matrix = Matrix::try_from(vec![
    ///     vec![2.0, 5.0, 7.0],
    ///     vec![6.0, 3.0, 4.0],
    ///     vec![5.0, -2.0, -3.0],
    /// ])
    /// .unwrap();
    /// let inverse = matrix.inverse().unwrap();
    /// assert_eq!(
    ///     matrix.checked_mul(&inverse).unwrap(),
    ///     Matrix::identity(3).unwrap()
    /// );
    /// ```
    pub fn inverse(&self) -> Result<Matrix, MatrixError> {
        let det = self.determinant()?;
        if det == 0.0 {
            return Err(MatrixError::SingularMatrix);
        }
        let mut inverse = self.cofactor_matrix()?.transpose();
        for value in &mut inverse.data {
            *value /= det;
        }
        Ok(inverse)
    }

    fn minor(&self, row: usize, col: usize) -> Matrix {
        let mut data = Vec::with_capacity((self.rows - 1) * (self.cols - 1));
        for (i, r) in self.data.chunks_exact(self.cols).enumerate() {
            if i == row {
                continue;
            }
            for (j, value) in r.iter().enumerate() {
                if j != col {
                    data.push(*value);
                }
            }
        }
        Matrix {
            rows: self.rows - 1,
            cols: self.cols - 1,
            data,
        }
    }
}

fn determinant_by_cofactors(matrix: &Matrix) -> f64 {
    let n = matrix.rows;
    match n {
        1 => matrix.data[0],
        2 => matrix.data[0] * matrix.data[3] - matrix.data[1] * matrix.data[2],
        _ => {
            let mut det = 0.0;
            for j in 0..n {
                det += sign(j) * matrix.data[j] * determinant_by_cofactors(&matrix.minor(0, j));
            }
            det
        }
    }
}

fn sign(parity: usize) -> f64 {
    if parity % 2 == 0 {
        1.0
    } else {
        -1.0
    }
}

#[cfg(test)]
mod test_cofactor_expansion {
    use super::*;

    fn matrix(rows: Vec<Vec<f64>>) -> Matrix {
        Matrix::try_from(rows).unwrap()
    }

    #[test]
    fn test_minor_drops_row_and_column() {
        let m = matrix(vec![
            vec![1.0, 2.0, 3.0],
            vec![4.0, 5.0, 6.0],
            vec![7.0, 8.0, 9.0],
        ]);
        let minor = m.minor(1, 2);
        assert_eq!(minor.rows(), 2);
        assert_eq!(minor.cols(), 2);
        assert_eq!(minor.row(0), [1.0, 2.0]);
        assert_eq!(minor.row(1), [7.0, 8.0]);
    }

    #[test]
    fn test_determinant_base_cases() {
        assert_eq!(matrix(vec![vec![2.0]]).determinant().unwrap(), 2.0);
        let two_by_two = matrix(vec![vec![1.0, 2.0], vec![2.0, 3.0]]);
        assert_eq!(two_by_two.determinant().unwrap(), -1.0);
    }

    #[test]
    fn test_signs_alternate() {
        assert_eq!(sign(0), 1.0);
        assert_eq!(sign(1), -1.0);
        assert_eq!(sign(4), 1.0);
    }
}
