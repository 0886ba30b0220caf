use crate::error::MatrixError;
use crate::matrix::Matrix;

impl Matrix {
    /// Elementwise sum of `self` and `rhs`.
    ///
    /// The `+` and `+=` operators delegate here and panic on error.
    ///
    /// # Errors
    ///
    /// [`MatrixError::DimensionMismatch`] unless both operands have the
    /// same shape.
    ///
    /// # Examples
    ///
    /// ```
    /// use densemat::Matrix;
    ///
    /// let a = Matrix::try_from(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
    /// let b = Matrix::identity(2).unwrap();
    /// let expected = Matrix::try_from(vec![vec![2.0, 2.0], vec![3.0, 5.0]]).unwrap();
    /// assert_eq!(a.checked_add(&b).unwrap(), expected);
    /// ```
    pub fn checked_add(&self, rhs: &Matrix) -> Result<Matrix, MatrixError> {
        self.elementwise(rhs, |a, b| a + b)
    }

    /// Elementwise difference of `self` and `rhs`.
    ///
    /// The `-` and `-=` operators delegate here and panic on error.
    ///
    /// # Errors
    ///
    /// [`MatrixError::DimensionMismatch`] unless both operands have the
    /// same shape.
    pub fn checked_sub(&self, rhs: &Matrix) -> Result<Matrix, MatrixError> {
        self.elementwise(rhs, |a, b| a - b)
    }

    /// Matrix product of `self` and `rhs`.
    ///
    /// The `*` and `*=` operators delegate here and panic on error.
    ///
    /// # Errors
    ///
    /// [`MatrixError::DimensionMismatch`] unless the number of columns
    /// of `self` equals the number of rows of `rhs`.
    ///
    /// # Examples
    ///
    /// ```
    /// use densemat::Matrix;
    ///
    /// let a = Matrix::try_from(vec![vec![1.0, 2.0, 3.0]]).unwrap();
    /// let b = Matrix::try_from(vec![vec![4.0], vec![5.0], vec![6.0]]).unwrap();
    /// let product = a.checked_mul(&b).unwrap();
    /// assert_eq!(product.rows(), 1);
    /// assert_eq!(product.cols(), 1);
    /// assert_eq!(product.at(0, 0).unwrap(), 32.0);
    /// ```
    pub fn checked_mul(&self, rhs: &Matrix) -> Result<Matrix, MatrixError> {
        if self.cols != rhs.rows {
            return Err(MatrixError::DimensionMismatch(format!(
                "columns of the first matrix ({}) must equal rows of the second ({})",
                self.cols, rhs.rows
            )));
        }
        let mut product = Matrix {
            rows: self.rows,
            cols: rhs.cols,
            data: vec![0.0; self.rows * rhs.cols],
        };
        for i in 0..self.rows {
            for j in 0..rhs.cols {
                let mut sum = 0.0;
                for k in 0..self.cols {
                    sum += self.data[i * self.cols + k] * rhs.data[k * rhs.cols + j];
                }
                product.data[i * rhs.cols + j] = sum;
            }
        }
        Ok(product)
    }

    /// Multiply every element by `factor`, returning a new matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// let matrix = densemat::Matrix::identity(2).unwrap();
    /// let scaled = matrix.scale(6.235);
    /// assert_eq!(scaled.at(0, 0).unwrap(), 6.235);
    /// assert_eq!(scaled.at(0, 1).unwrap(), 0.0);
    /// ```
    pub fn scale(&self, factor: f64) -> Matrix {
        let mut scaled = self.clone();
        scaled.scale_mut(factor);
        scaled
    }

    /// Multiply every element by `factor` in place.
    pub fn scale_mut(&mut self, factor: f64) {
        for value in &mut self.data {
            *value *= factor;
        }
    }

    fn elementwise(
        &self,
        rhs: &Matrix,
        op: impl Fn(f64, f64) -> f64,
    ) -> Result<Matrix, MatrixError> {
        if self.rows != rhs.rows || self.cols != rhs.cols {
            return Err(MatrixError::DimensionMismatch(format!(
                "sizes are not equal: {}x{} vs {}x{}",
                self.rows, self.cols, rhs.rows, rhs.cols
            )));
        }
        let data = self
            .data
            .iter()
            .zip(rhs.data.iter())
            .map(|(a, b)| op(*a, *b))
            .collect();
        Ok(Matrix {
            rows: self.rows,
            cols: self.cols,
            data,
        })
    }
}

impl_matrix_binary_op!(Matrix, Add, add, checked_add);
impl_matrix_binary_op!(Matrix, Sub, sub, checked_sub);
impl_matrix_binary_op!(Matrix, Mul, mul, checked_mul);

impl_matrix_binary_op_assign!(Matrix, AddAssign, add_assign, checked_add);
impl_matrix_binary_op_assign!(Matrix, SubAssign, sub_assign, checked_sub);
impl_matrix_binary_op_assign!(Matrix, MulAssign, mul_assign, checked_mul);

impl std::ops::Mul<f64> for &Matrix {
    type Output = Matrix;

    fn mul(self, rhs: f64) -> Matrix {
        self.scale(rhs)
    }
}

impl std::ops::Mul<f64> for Matrix {
    type Output = Matrix;

    fn mul(mut self, rhs: f64) -> Matrix {
        self.scale_mut(rhs);
        self
    }
}

impl std::ops::Mul<&Matrix> for f64 {
    type Output = Matrix;

    fn mul(self, rhs: &Matrix) -> Matrix {
        rhs.scale(self)
    }
}

impl std::ops::Mul<Matrix> for f64 {
    type Output = Matrix;

    fn mul(self, rhs: Matrix) -> Matrix {
        rhs * self
    }
}

impl std::ops::MulAssign<f64> for Matrix {
    fn mul_assign(&mut self, rhs: f64) {
        self.scale_mut(rhs);
    }
}
