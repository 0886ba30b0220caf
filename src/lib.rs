//! # densemat
//!
//! Dense, arbitrary-size matrices of [`f64`]
//! with the classical operation set:
//! tolerance-based equality, addition, subtraction,
//! scalar and matrix multiplication, transpose,
//! determinant, cofactor matrix, and inverse.
//!
//! A [`Matrix`] is a plain value.
//! Construction validates the shape once, and the fallible
//! operations report a [`MatrixError`] instead of panicking.
//! The arithmetic operators (`+`, `-`, `*`, and their assigning
//! forms) are sugar over the `checked_` methods and panic on
//! shape mismatch, like indexing a slice out of bounds.
//!
//! ## Reading a matrix from `YAML`
//!
//! ```
//! let yaml = "
//! - [2, 5, 7]
//! - [6, 3, 4]
//! - [5, -2, -3]
//! ";
//! let matrix = densemat::loads(yaml).unwrap();
//! assert_eq!(matrix.determinant().unwrap(), -1.0);
//! let inverse = matrix.inverse().unwrap();
//! assert_eq!(inverse.at(0, 0).unwrap(), 1.0);
//! ```
//!
//! ## Using rust code
//!
//! ```
//! use densemat::Matrix;
//!
//! let a = Matrix::try_from(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
//! let b = Matrix::identity(2).unwrap();
//! assert_eq!(&a * &b, a);
//! assert_eq!((&a - &a).determinant().unwrap(), 0.0);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]

mod macros;

mod arithmetic;
mod error;
mod linalg;
mod matrix;

pub use error::MatrixError;
pub use matrix::Matrix;

/// Generate a [`Matrix`] from a `YAML` string of nested rows.
///
/// # Errors
///
/// [`MatrixError::YamlError`] if the string is not valid `YAML`.
/// [`MatrixError::InvalidMatrix`] if the rows do not form a matrix.
///
/// # Examples
///
/// ```
/// let yaml = "
/// - [1, 0]
/// - [0, 1]
/// ";
/// let matrix = densemat::loads(yaml).unwrap();
/// assert_eq!(matrix, densemat::Matrix::identity(2).unwrap());
/// ```
pub fn loads(yaml: &str) -> Result<Matrix, MatrixError> {
    let rows: Vec<Vec<f64>> = serde_yaml::from_str(yaml)?;
    Matrix::try_from(rows)
}

/// Generate a [`Matrix`] from a type implementing [`Read`](std::io::Read).
///
/// # Errors
///
/// [`MatrixError::YamlError`] if the input is not valid `YAML`.
/// [`MatrixError::InvalidMatrix`] if the rows do not form a matrix.
///
/// # Examples
///
/// ```
/// let yaml = "
/// - [1, 0]
/// - [0, 1]
/// ";
/// let matrix = densemat::load(yaml.as_bytes()).unwrap();
/// assert_eq!(matrix.rows(), 2);
/// ```
pub fn load<T: std::io::Read>(reader: T) -> Result<Matrix, MatrixError> {
    let rows: Vec<Vec<f64>> = serde_yaml::from_reader(reader)?;
    Matrix::try_from(rows)
}

#[cfg(feature = "json")]
#[cfg_attr(doc_cfg, doc(cfg(feature = "json")))]
/// Generate a [`Matrix`] from a `JSON` string of nested rows.
///
/// # Errors
///
/// [`MatrixError::JsonError`] if the string is not valid `JSON`.
/// [`MatrixError::InvalidMatrix`] if the rows do not form a matrix.
pub fn loads_json(json: &str) -> Result<Matrix, MatrixError> {
    let rows: Vec<Vec<f64>> = serde_json::from_str(json)?;
    Matrix::try_from(rows)
}

#[cfg(feature = "json")]
#[cfg_attr(doc_cfg, doc(cfg(feature = "json")))]
/// Generate a [`Matrix`] from a type implementing [`Read`](std::io::Read),
/// treating the input as `JSON`.
///
/// # Errors
///
/// [`MatrixError::JsonError`] if the input is not valid `JSON`.
/// [`MatrixError::InvalidMatrix`] if the rows do not form a matrix.
pub fn load_json<T: std::io::Read>(reader: T) -> Result<Matrix, MatrixError> {
    let rows: Vec<Vec<f64>> = serde_json::from_reader(reader)?;
    Matrix::try_from(rows)
}
