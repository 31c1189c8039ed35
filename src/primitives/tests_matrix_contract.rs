// =========================================================================
// FALSIFY-MX: Matrix primitives contract (lineal primitives)
//
// References:
//   - Golub & Van Loan (2013) "Matrix Computations"
// =========================================================================

use super::*;

/// FALSIFY-MX-001: Transpose involution: (A^T)^T = A
#[test]
fn falsify_mx_001_transpose_involution() {
    let a = Matrix::from_vec(2, 3, vec![1_i64, 2, 3, 4, 5, 6]).expect("valid");
    let att = a.transpose().transpose();

    assert_eq!(att.shape(), a.shape(), "FALSIFIED MX-001: shape mismatch");
    assert_eq!(
        att.as_slice(),
        a.as_slice(),
        "FALSIFIED MX-001: (A^T)^T != A"
    );
}

/// FALSIFY-MX-002: Transpose swaps shape: (m×n)^T = (n×m)
#[test]
fn falsify_mx_002_transpose_swaps_shape() {
    let a = Matrix::<i64>::zeros(3, 5);
    let at = a.transpose();

    assert_eq!(
        at.shape(),
        (5, 3),
        "FALSIFIED MX-002: transpose shape={:?}, expected (5,3)",
        at.shape()
    );
}

/// FALSIFY-MX-003: Matmul shape: (m×k) * (k×n) = (m×n)
#[test]
fn falsify_mx_003_matmul_shape() {
    let a = Matrix::from_vec(2, 3, vec![1_i64; 6]).expect("valid");
    let b = Matrix::from_vec(3, 4, vec![1_i64; 12]).expect("valid");
    let c = a.matmul(&b).expect("compatible dims");

    assert_eq!(
        c.shape(),
        (2, 4),
        "FALSIFIED MX-003: (2x3)*(3x4) shape={:?}, expected (2,4)",
        c.shape()
    );
}

/// FALSIFY-MX-004: A * inverse(A) = I for invertible 2x2 over f64
#[test]
fn falsify_mx_004_inverse_identity() {
    let a = Matrix::from_vec(2, 2, vec![4.0_f64, 7.0, 2.0, 6.0]).expect("valid");
    let inv = a.inverse().expect("determinant is 10");
    let product = a.matmul(&inv).expect("2x2 * 2x2");
    let identity = Matrix::<f64>::eye(2);

    for (got, want) in product.as_slice().iter().zip(identity.as_slice().iter()) {
        assert!(
            (got - want).abs() < 1e-12,
            "FALSIFIED MX-004: A*inv(A) entry {got} != {want}"
        );
    }
}

/// FALSIFY-MX-005: Scalar multiply by zero yields the all-zero matrix
#[test]
fn falsify_mx_005_scalar_zero_annihilates() {
    let a = Matrix::from_vec(2, 3, vec![1_i64, -2, 3, -4, 5, -6]).expect("valid");
    let z = a.mul_scalar(0);

    assert_eq!(z.shape(), a.shape(), "FALSIFIED MX-005: shape changed");
    assert!(
        z.as_slice().iter().all(|&x| x == 0),
        "FALSIFIED MX-005: nonzero entry after scaling by 0"
    );
}

/// FALSIFY-MX-006: Eigenvalues satisfy trace and determinant identities
#[test]
fn falsify_mx_006_eigenvalue_invariants() {
    let a = Matrix::from_vec(2, 2, vec![5.0_f64, 2.0, 1.0, 4.0]).expect("valid");
    let [l1, l2] = a.eigenvalues().expect("real eigenvalues");
    let trace = 9.0;
    let det = a.determinant().expect("2x2");

    assert!(
        (l1 + l2 - trace).abs() < 1e-12,
        "FALSIFIED MX-006: l1+l2={} != trace={trace}",
        l1 + l2
    );
    assert!(
        (l1 * l2 - det).abs() < 1e-12,
        "FALSIFIED MX-006: l1*l2={} != det={det}",
        l1 * l2
    );
    assert!(l1 >= l2, "FALSIFIED MX-006: roots out of order");
}

mod mx_proptest_falsify {
    use super::*;
    use proptest::prelude::*;

    fn any_matrix() -> impl Strategy<Value = Matrix<i64>> {
        (1usize..5, 1usize..5).prop_flat_map(|(rows, cols)| {
            prop::collection::vec(-50_i64..50, rows * cols).prop_map(move |data| {
                Matrix::from_vec(rows, cols, data).expect("generated length matches")
            })
        })
    }

    /// FALSIFY-MX-001-prop: transpose involution over random shapes
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(20))]

        #[test]
        fn falsify_mx_001_prop_transpose_involution(a in any_matrix()) {
            let att = a.transpose().transpose();
            prop_assert_eq!(att, a, "FALSIFIED MX-001-prop: (A^T)^T != A");
        }
    }

    /// FALSIFY-MX-005-prop: scaling by zero annihilates any matrix
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(20))]

        #[test]
        fn falsify_mx_005_prop_scalar_zero(a in any_matrix()) {
            let z = a.mul_scalar(0);
            prop_assert_eq!(z.shape(), a.shape());
            prop_assert!(
                z.as_slice().iter().all(|&x| x == 0),
                "FALSIFIED MX-005-prop: nonzero entry after scaling by 0"
            );
        }
    }
}
