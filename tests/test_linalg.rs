use densemat::{Matrix, MatrixError};

fn filled(rows: usize, cols: usize, offset: f64) -> Matrix {
    let mut matrix = Matrix::zeros(rows, cols).unwrap();
    for i in 0..rows {
        for j in 0..cols {
            matrix[(i, j)] = i as f64 + j as f64 + offset;
        }
    }
    matrix
}

#[test]
fn test_transpose_rectangular() {
    let matrix = Matrix::try_from(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap();
    let expected =
        Matrix::try_from(vec![vec![1.0, 4.0], vec![2.0, 5.0], vec![3.0, 6.0]]).unwrap();
    assert_eq!(matrix.transpose(), expected);
}

#[test]
fn test_transpose_twice_restores_the_matrix() {
    let matrix = filled(3, 5, 0.75);
    assert_eq!(matrix.transpose().transpose(), matrix);
}

#[test]
fn test_determinant_one_by_one() {
    let matrix = Matrix::try_from(vec![vec![2.0]]).unwrap();
    assert_eq!(matrix.determinant().unwrap(), 2.0);
}

#[test]
fn test_determinant_two_by_two() {
    assert_eq!(filled(2, 2, 1.0).determinant().unwrap(), -1.0);
}

#[test]
fn test_determinant_three_by_three() {
    let matrix = Matrix::try_from(vec![
        vec![0.0, 9.0, 5.0],
        vec![4.0, 3.0, -5.0],
        vec![-1.0, 6.0, -4.0],
    ])
    .unwrap();
    assert_eq!(matrix.determinant().unwrap(), 324.0);
}

#[test]
fn test_determinant_with_fractional_elements() {
    let matrix = Matrix::try_from(vec![
        vec![-1.2, 2.1, -4.2],
        vec![5.0, 8.0, 3.0],
        vec![3.0, -2.0, 7.0],
    ])
    .unwrap();
    let determinant = matrix.determinant().unwrap();
    assert!((determinant - 13.8).abs() < 1e-6);
}

#[test]
fn test_determinant_of_linearly_dependent_rows_is_zero() {
    let mut ones = Matrix::zeros(2, 2).unwrap();
    ones.fill(1.0);
    assert_eq!(ones.determinant().unwrap(), 0.0);
    let matrix = Matrix::try_from(vec![vec![1.0, 2.0], vec![2.0, 4.0]]).unwrap();
    assert_eq!(matrix.determinant().unwrap(), 0.0);
}

#[test]
fn test_determinant_of_identity() {
    for n in 1..=6 {
        assert_eq!(Matrix::identity(n).unwrap().determinant().unwrap(), 1.0);
    }
}

#[test]
fn test_determinant_requires_square() {
    match filled(4, 1, 0.0).determinant() {
        Err(MatrixError::NotSquare { rows, cols }) => {
            assert_eq!(rows, 4);
            assert_eq!(cols, 1);
        }
        _ => panic!(),
    }
}

#[test]
fn test_cofactor_matrix() {
    let matrix = Matrix::try_from(vec![
        vec![1.0, 2.0, 3.0],
        vec![0.0, 4.0, 2.0],
        vec![5.0, 2.0, 1.0],
    ])
    .unwrap();
    let expected = Matrix::try_from(vec![
        vec![0.0, 10.0, -20.0],
        vec![4.0, -14.0, 8.0],
        vec![-8.0, -2.0, 4.0],
    ])
    .unwrap();
    assert_eq!(matrix.cofactor_matrix().unwrap(), expected);
}

#[test]
fn test_cofactor_matrix_one_by_one() {
    let matrix = Matrix::try_from(vec![vec![5.0]]).unwrap();
    let cofactors = matrix.cofactor_matrix().unwrap();
    assert_eq!(cofactors.at(0, 0).unwrap(), 1.0);
}

#[test]
fn test_cofactor_matrix_requires_square() {
    assert!(matches!(
        filled(3, 2, 0.0).cofactor_matrix(),
        Err(MatrixError::NotSquare { .. })
    ));
}

#[test]
fn test_inverse() {
    let matrix = Matrix::try_from(vec![
        vec![2.0, 5.0, 7.0],
        vec![6.0, 3.0, 4.0],
        vec![5.0, -2.0, -3.0],
    ])
    .unwrap();
    let expected = Matrix::try_from(vec![
        vec![1.0, -1.0, 1.0],
        vec![-38.0, 41.0, -34.0],
        vec![27.0, -29.0, 24.0],
    ])
    .unwrap();
    assert_eq!(matrix.inverse().unwrap(), expected);
}

#[test]
fn test_inverse_times_original_is_identity() {
    let matrix = Matrix::try_from(vec![vec![4.0, 7.0], vec![2.0, 6.0]]).unwrap();
    let inverse = matrix.inverse().unwrap();
    let identity = Matrix::identity(2).unwrap();
    assert_eq!(matrix.checked_mul(&inverse).unwrap(), identity);
    assert_eq!(inverse.checked_mul(&matrix).unwrap(), identity);
}

#[test]
fn test_inverse_one_by_one() {
    let matrix = Matrix::try_from(vec![vec![4.0]]).unwrap();
    assert_eq!(matrix.inverse().unwrap().at(0, 0).unwrap(), 0.25);
}

#[test]
fn test_inverse_of_singular_matrix() {
    let matrix = Matrix::try_from(vec![vec![1.0, 2.0], vec![2.0, 4.0]]).unwrap();
    match matrix.inverse() {
        Err(MatrixError::SingularMatrix) => (),
        _ => panic!(),
    }
    assert_eq!(
        MatrixError::SingularMatrix.to_string(),
        "determinant equals 0"
    );
}

#[test]
fn test_inverse_requires_square() {
    assert!(matches!(
        filled(2, 3, 0.0).inverse(),
        Err(MatrixError::NotSquare { .. })
    ));
}
