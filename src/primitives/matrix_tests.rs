pub(crate) use super::*;

use crate::error::LinealError;

#[test]
fn test_from_vec() {
    let m = Matrix::from_vec(2, 3, vec![1.0_f32, 2.0, 3.0, 4.0, 5.0, 6.0])
        .expect("test data has correct dimensions: 2*3=6 elements");
    assert_eq!(m.shape(), (2, 3));
    assert_eq!(m.n_rows(), 2);
    assert_eq!(m.n_cols(), 3);
    assert!((m.get(0, 0).expect("in bounds") - 1.0).abs() < 1e-6);
    assert!((m.get(1, 2).expect("in bounds") - 6.0).abs() < 1e-6);
}

#[test]
fn test_from_vec_error() {
    let result = Matrix::from_vec(2, 3, vec![1.0_f32, 2.0, 3.0]);
    assert!(matches!(
        result.unwrap_err(),
        LinealError::DimensionMismatch { .. }
    ));
}

#[test]
fn test_zeros() {
    let m = Matrix::<i64>::zeros(2, 3);
    assert_eq!(m.shape(), (2, 3));
    assert!(m.as_slice().iter().all(|&x| x == 0));
}

#[test]
fn test_eye() {
    let m = Matrix::<i64>::eye(3);
    for i in 0..3 {
        for j in 0..3 {
            let expected = i64::from(i == j);
            assert_eq!(m.get(i, j).expect("in bounds"), expected);
        }
    }
}

#[test]
fn test_get_out_of_range() {
    let m = Matrix::<i64>::zeros(2, 3);
    let row_err = m.get(2, 0).unwrap_err();
    assert_eq!(row_err, "row 2 out of range (len=2)");
    let col_err = m.get(0, 3).unwrap_err();
    assert_eq!(col_err, "column 3 out of range (len=3)");
}

#[test]
fn test_set_out_of_range() {
    let mut m = Matrix::<i64>::zeros(2, 2);
    assert!(m.set(2, 0, 1).is_err());
    assert!(m.set(0, 2, 1).is_err());
    // failed sets leave the matrix untouched
    assert!(m.as_slice().iter().all(|&x| x == 0));
}

#[test]
fn test_set() {
    let mut m = Matrix::<f32>::zeros(2, 2);
    m.set(0, 1, 5.0).expect("indices are within 2x2");
    assert!((m.get(0, 1).expect("in bounds") - 5.0).abs() < 1e-6);
}

#[test]
fn test_row() {
    let m = Matrix::from_vec(2, 3, vec![1_i64, 2, 3, 4, 5, 6])
        .expect("test data has correct dimensions: 2*3=6 elements");
    let row = m.row(1).expect("row 1 of 2 exists");
    assert_eq!(row.as_slice(), &[4, 5, 6]);
    assert!(m.row(2).is_err());
}

#[test]
fn test_column() {
    let m = Matrix::from_vec(2, 3, vec![1_i64, 2, 3, 4, 5, 6])
        .expect("test data has correct dimensions: 2*3=6 elements");
    let col = m.column(1).expect("column 1 of 3 exists");
    assert_eq!(col.as_slice(), &[2, 5]);
    assert!(m.column(3).is_err());
}

#[test]
fn test_transpose() {
    let m = Matrix::from_vec(2, 3, vec![1_i64, 2, 3, 4, 5, 6])
        .expect("test data has correct dimensions: 2*3=6 elements");
    let t = m.transpose();
    assert_eq!(t.shape(), (3, 2));
    assert_eq!(t.get(0, 1).expect("in bounds"), 4);
    assert_eq!(t.get(2, 1).expect("in bounds"), 6);
}

#[test]
fn test_add() {
    let a = Matrix::from_vec(2, 2, vec![1_i64, 2, 3, 4])
        .expect("test data has correct dimensions: 2*2=4 elements");
    let b = Matrix::from_vec(2, 2, vec![5_i64, 6, 7, 8])
        .expect("test data has correct dimensions: 2*2=4 elements");
    let c = a.add(&b).expect("both matrices have same dimensions: 2x2");
    assert_eq!(c.as_slice(), &[6, 8, 10, 12]);
}

#[test]
fn test_add_dimension_mismatch() {
    let a = Matrix::from_vec(2, 2, vec![1_i64; 4])
        .expect("test data has correct dimensions: 2*2=4 elements");
    let b = Matrix::from_vec(3, 2, vec![1_i64; 6])
        .expect("test data has correct dimensions: 3*2=6 elements");
    assert!(a.add(&b).is_err());

    let c = Matrix::from_vec(2, 3, vec![1_i64; 6])
        .expect("test data has correct dimensions: 2*3=6 elements");
    assert!(a.add(&c).is_err());
}

#[test]
fn test_sub() {
    let a = Matrix::from_vec(2, 2, vec![10_i64, 8, 6, 12])
        .expect("test data has correct dimensions: 2*2=4 elements");
    let b = Matrix::from_vec(2, 2, vec![4_i64, 3, 2, 7])
        .expect("test data has correct dimensions: 2*2=4 elements");
    let c = a.sub(&b).expect("both matrices have same dimensions: 2x2");
    assert_eq!(c.as_slice(), &[6, 5, 4, 5]);
}

#[test]
fn test_sub_dimension_mismatch() {
    let a = Matrix::from_vec(2, 2, vec![1_i64; 4])
        .expect("test data has correct dimensions: 2*2=4 elements");
    let b = Matrix::from_vec(2, 3, vec![1_i64; 6])
        .expect("test data has correct dimensions: 2*3=6 elements");
    let err = a.sub(&b).unwrap_err();
    assert_eq!(err, "dimension mismatch: expected 2x2, got 2x3");
}

#[test]
fn test_mul_scalar() {
    let m = Matrix::from_vec(2, 2, vec![1_i64, 2, 3, 4])
        .expect("test data has correct dimensions: 2*2=4 elements");
    let result = m.mul_scalar(2);
    assert_eq!(result.as_slice(), &[2, 4, 6, 8]);
}

#[test]
fn test_matmul() {
    // 2x3 * 3x2 = 2x2
    let a = Matrix::from_vec(2, 3, vec![1_i64, 2, 3, 4, 5, 6])
        .expect("test data has correct dimensions: 2*3=6 elements");
    let b = Matrix::from_vec(3, 2, vec![7_i64, 8, 9, 10, 11, 12])
        .expect("test data has correct dimensions: 3*2=6 elements");
    let c = a
        .matmul(&b)
        .expect("matrix dimensions are compatible for multiplication: 2x3 * 3x2");

    assert_eq!(c.shape(), (2, 2));
    // c[0,0] = 1*7 + 2*9 + 3*11 = 58
    // c[0,1] = 1*8 + 2*10 + 3*12 = 64
    assert_eq!(c.as_slice(), &[58, 64, 139, 154]);
}

#[test]
fn test_matmul_dimension_error() {
    let a = Matrix::from_vec(2, 3, vec![1_i64; 6])
        .expect("test data has correct dimensions: 2*3=6 elements");
    let b = Matrix::from_vec(2, 2, vec![1_i64; 4])
        .expect("test data has correct dimensions: 2*2=4 elements");
    let err = a.matmul(&b).unwrap_err();
    assert_eq!(err, "dimension mismatch: expected inner dimension=3, got 2");
}

#[test]
fn test_norm_float() {
    let m = Matrix::from_vec(1, 2, vec![3.0_f64, 4.0])
        .expect("test data has correct dimensions: 1*2=2 elements");
    assert!((m.norm() - 5.0).abs() < 1e-12);
}

#[test]
fn test_norm_integer_truncates() {
    // sum of squares 1+4+9+16 = 30, sqrt(30) = 5.47... -> 5
    let m = Matrix::from_vec(2, 2, vec![1_i64, 2, 3, 4])
        .expect("test data has correct dimensions: 2*2=4 elements");
    assert_eq!(m.norm(), 5);
}

#[test]
fn test_determinant() {
    let m = Matrix::from_vec(2, 2, vec![1_i64, 2, 3, 4])
        .expect("test data has correct dimensions: 2*2=4 elements");
    // 1*4 - 2*3 = -2
    assert_eq!(m.determinant().expect("matrix is 2x2"), -2);
}

#[test]
fn test_determinant_unsupported_shape() {
    let m = Matrix::<i64>::zeros(3, 3);
    let err = m.determinant().unwrap_err();
    assert!(matches!(err, LinealError::UnsupportedShape { .. }));
    assert_eq!(err, "determinant is only supported for 2x2 matrices, got 3x3");
}

#[test]
fn test_inverse_float() {
    // det([[4,7],[2,6]]) = 10
    let m = Matrix::from_vec(2, 2, vec![4.0_f64, 7.0, 2.0, 6.0])
        .expect("test data has correct dimensions: 2*2=4 elements");
    let inv = m.inverse().expect("determinant is 10, matrix is invertible");
    let expected = [0.6, -0.7, -0.2, 0.4];
    for (got, want) in inv.as_slice().iter().zip(expected.iter()) {
        assert!((got - want).abs() < 1e-12);
    }
}

#[test]
fn test_inverse_integer_truncates() {
    // every entry of the real inverse is fractional, so integer division
    // truncates all four to zero
    let m = Matrix::from_vec(2, 2, vec![4_i64, 7, 2, 6])
        .expect("test data has correct dimensions: 2*2=4 elements");
    let inv = m.inverse().expect("determinant is 10, matrix is invertible");
    assert_eq!(inv.as_slice(), &[0, 0, 0, 0]);
}

#[test]
fn test_inverse_singular() {
    let m = Matrix::from_vec(2, 2, vec![2.0_f64, 4.0, 1.0, 2.0])
        .expect("test data has correct dimensions: 2*2=4 elements");
    let err = m.inverse().unwrap_err();
    assert!(matches!(err, LinealError::SingularMatrix { .. }));
}

#[test]
fn test_inverse_unsupported_shape() {
    let m = Matrix::<f64>::zeros(3, 2);
    let err = m.inverse().unwrap_err();
    assert_eq!(err, "inverse is only supported for 2x2 matrices, got 3x2");
}

#[test]
fn test_eigenvalues() {
    // trace 5, det 6, discriminant 25-24=1 -> (5+1)/2=3, (5-1)/2=2
    let m = Matrix::from_vec(2, 2, vec![2_i64, 0, 0, 3])
        .expect("test data has correct dimensions: 2*2=4 elements");
    let eig = m.eigenvalues().expect("discriminant is 1, real eigenvalues");
    assert_eq!(eig, [3, 2]);
}

#[test]
fn test_eigenvalues_float() {
    let m = Matrix::from_vec(2, 2, vec![2.0_f64, 1.0, 1.0, 2.0])
        .expect("test data has correct dimensions: 2*2=4 elements");
    let [l1, l2] = m.eigenvalues().expect("symmetric matrix, real eigenvalues");
    assert!((l1 - 3.0).abs() < 1e-12);
    assert!((l2 - 1.0).abs() < 1e-12);
}

#[test]
fn test_eigenvalues_negative_discriminant() {
    // rotation by 90 degrees: trace 0, det 1, discriminant -4
    let m = Matrix::from_vec(2, 2, vec![0_i64, -1, 1, 0])
        .expect("test data has correct dimensions: 2*2=4 elements");
    let err = m.eigenvalues().unwrap_err();
    assert!(matches!(err, LinealError::NegativeDiscriminant { .. }));
    assert_eq!(err, "negative discriminant: -4, eigenvalues are complex");
}

#[test]
fn test_eigenvalues_unsupported_shape() {
    let m = Matrix::<f64>::zeros(1, 2);
    let err = m.eigenvalues().unwrap_err();
    assert!(matches!(err, LinealError::UnsupportedShape { .. }));
}

#[test]
fn test_display() {
    let m = Matrix::from_vec(2, 2, vec![1_i64, 2, 3, 4])
        .expect("test data has correct dimensions: 2*2=4 elements");
    assert_eq!(m.to_string(), "1 2\n3 4");
}
