// =========================================================================
// FALSIFY-VE: Vector primitives contract (lineal primitives)
//
// References:
//   - element-wise vector algebra identities (commutativity, round-trip)
// =========================================================================

use super::*;

use crate::error::LinealError;

/// FALSIFY-VE-001: Addition is commutative: a + b = b + a
#[test]
fn falsify_ve_001_add_commutative() {
    let a = Vector::from_slice(&[1_i64, -2, 3]);
    let b = Vector::from_slice(&[4_i64, 5, -6]);

    let ab = a.add(&b).expect("equal lengths");
    let ba = b.add(&a).expect("equal lengths");

    assert_eq!(
        ab.as_slice(),
        ba.as_slice(),
        "FALSIFIED VE-001: a+b != b+a"
    );
}

/// FALSIFY-VE-002: Round trip: (a + b) - b = a
#[test]
fn falsify_ve_002_add_sub_round_trip() {
    let a = Vector::from_slice(&[7_i64, 0, -3, 12]);
    let b = Vector::from_slice(&[1_i64, -5, 9, 2]);

    let round = a
        .add(&b)
        .expect("equal lengths")
        .sub(&b)
        .expect("equal lengths");

    assert_eq!(
        round.as_slice(),
        a.as_slice(),
        "FALSIFIED VE-002: (a+b)-b != a"
    );
}

/// FALSIFY-VE-003: Inner product is commutative: dot(a,b) = dot(b,a)
#[test]
fn falsify_ve_003_dot_commutative() {
    let a = Vector::from_slice(&[1_i64, 2, 3]);
    let b = Vector::from_slice(&[4_i64, 5, 6]);

    let ab = a.dot(&b).expect("equal lengths");
    let ba = b.dot(&a).expect("equal lengths");

    assert_eq!(ab, ba, "FALSIFIED VE-003: dot(a,b)={ab} != dot(b,a)={ba}");
}

/// FALSIFY-VE-004: Mismatched lengths fail, never silently truncate
#[test]
fn falsify_ve_004_length_mismatch_rejected() {
    let a = Vector::from_slice(&[1_i64, 2, 3]);
    let b = Vector::from_slice(&[1_i64, 2]);

    for result in [a.add(&b).map(|_| ()), a.sub(&b).map(|_| ()), a.dot(&b).map(|_| ())] {
        let err = result.expect_err("FALSIFIED VE-004: mismatched lengths accepted");
        assert!(
            matches!(err, LinealError::DimensionMismatch { .. }),
            "FALSIFIED VE-004: wrong error kind: {err}"
        );
    }
}

mod ve_proptest_falsify {
    use super::*;
    use proptest::prelude::*;

    fn equal_len_pair() -> impl Strategy<Value = (Vec<i64>, Vec<i64>)> {
        (1usize..8).prop_flat_map(|n| {
            (
                prop::collection::vec(-100_i64..100, n),
                prop::collection::vec(-100_i64..100, n),
            )
        })
    }

    /// FALSIFY-VE-001-prop: commutativity over random equal-length vectors
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(20))]

        #[test]
        fn falsify_ve_001_prop_add_commutative((xs, ys) in equal_len_pair()) {
            let a = Vector::from_slice(&xs);
            let b = Vector::from_slice(&ys);
            let ab = a.add(&b).expect("equal lengths");
            let ba = b.add(&a).expect("equal lengths");
            prop_assert_eq!(
                ab.as_slice(),
                ba.as_slice(),
                "FALSIFIED VE-001-prop: a+b != b+a"
            );
        }
    }

    /// FALSIFY-VE-002-prop: round trip over random equal-length vectors
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(20))]

        #[test]
        fn falsify_ve_002_prop_round_trip((xs, ys) in equal_len_pair()) {
            let a = Vector::from_slice(&xs);
            let b = Vector::from_slice(&ys);
            let round = a
                .add(&b)
                .expect("equal lengths")
                .sub(&b)
                .expect("equal lengths");
            prop_assert_eq!(
                round.as_slice(),
                a.as_slice(),
                "FALSIFIED VE-002-prop: (a+b)-b != a"
            );
        }
    }
}
