use thiserror::Error;

/// Error type for this crate.
///
/// The enum variants correspond to
/// the different ways an operation on a [Matrix](crate::Matrix)
/// can fail.
///
/// # Example
///
/// This input is incorrect because the second row
/// is shorter than the first.
/// Attempting to generate a [Matrix](crate::Matrix)
/// gives [`MatrixError::InvalidMatrix`](crate::MatrixError::InvalidMatrix).
///
/// ```
/// let yaml = "
/// - [1, 2, 3]
/// - [4, 5]
/// ";
/// assert!(matches!(
///     densemat::loads(yaml),
///     Err(densemat::MatrixError::InvalidMatrix(_))
/// ));
/// ```
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum MatrixError {
    /// A dimension is zero or the rows are not all the same length.
    #[error("invalid matrix: {0}")]
    InvalidMatrix(String),
    /// Operand shapes are incompatible with the requested operation.
    #[error("{0}")]
    DimensionMismatch(String),
    /// A square matrix was required.
    #[error("matrix is not square: {rows}x{cols}")]
    NotSquare {
        /// Number of rows of the offending matrix.
        rows: usize,
        /// Number of columns of the offending matrix.
        cols: usize,
    },
    /// The matrix cannot be inverted.
    #[error("determinant equals 0")]
    SingularMatrix,
    /// Element access outside the matrix bounds.
    #[error("index ({row}, {col}) is out of range for a {rows}x{cols} matrix")]
    IndexOutOfRange {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
        /// Number of rows of the matrix.
        rows: usize,
        /// Number of columns of the matrix.
        cols: usize,
    },
    #[error(transparent)]
    /// Errors coming from `serde_yaml`.
    YamlError(#[from] serde_yaml::Error),
    #[cfg(feature = "json")]
    #[cfg_attr(doc_cfg, doc(cfg(feature = "json")))]
    #[error(transparent)]
    /// Errors coming from `serde_json`.
    JsonError(#[from] serde_json::Error),
}
