//! Integration tests for the element-wise binary operators.

use dense_arith::{
    ArithError, Array1, Array2, BinaryOp, Elementwise, FortranArray2, FortranArray3,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn ascending_grid(rows: usize, cols: usize) -> Array2<i64> {
    Array2::from_shape_vec((rows, cols), (1..=(rows * cols) as i64).collect()).unwrap()
}

fn random_vec(rng: &mut StdRng, len: usize) -> Vec<f64> {
    (0..len).map(|_| rng.gen_range(1.0..10.0)).collect()
}

// ---------------------------------------------------------------------------
// Array1
// ---------------------------------------------------------------------------

#[test]
fn array1_add_and_mul_concrete() {
    let a = Array1::from_vec(vec![1, 2, 3]);
    let b = Array1::from_vec(vec![10, 20, 30]);

    assert_eq!((&a + &b).unwrap().to_vec(), vec![11, 22, 33]);
    assert_eq!((&a * &b).unwrap().to_vec(), vec![10, 40, 90]);
    assert_eq!((&b - &a).unwrap().to_vec(), vec![9, 18, 27]);
    assert_eq!((&b / &a).unwrap().to_vec(), vec![10, 10, 10]);
}

#[test]
fn array1_ops_match_elementwise_definition() {
    let mut rng = StdRng::seed_from_u64(7);
    let a = Array1::from_vec(random_vec(&mut rng, 16));
    let b = Array1::from_vec(random_vec(&mut rng, 16));

    let sum = a.try_add(&b).unwrap();
    let diff = a.try_sub(&b).unwrap();
    let prod = a.try_mul(&b).unwrap();
    let quot = a.try_div(&b).unwrap();
    for i in 0..a.len() {
        assert_eq!(sum[i], a[i] + b[i]);
        assert_eq!(diff[i], a[i] - b[i]);
        assert_eq!(prod[i], a[i] * b[i]);
        assert_eq!(quot[i], a[i] / b[i]);
    }
}

#[test]
fn operands_are_not_modified() {
    let a = Array1::from_vec(vec![1.0, 2.0]);
    let b = Array1::from_vec(vec![3.0, 4.0]);
    let _ = (&a + &b).unwrap();
    assert_eq!(a.to_vec(), vec![1.0, 2.0]);
    assert_eq!(b.to_vec(), vec![3.0, 4.0]);
}

#[test]
fn owned_lhs_operator() {
    let a = Array1::from_vec(vec![2, 4]);
    let b = Array1::from_vec(vec![1, 1]);
    let c = (a - &b).unwrap();
    assert_eq!(c.to_vec(), vec![1, 3]);
}

#[test]
fn array1_length_mismatch_is_an_error() {
    let a = Array1::from_vec(vec![1, 2, 3]);
    let b = Array1::from_vec(vec![1, 2]);
    for result in [&a + &b, &a - &b, &a * &b, &a / &b] {
        match result {
            Err(ArithError::NonConformant { lhs, rhs, .. }) => {
                assert_eq!(lhs, vec![3]);
                assert_eq!(rhs, vec![2]);
            }
            other => panic!("expected NonConformant, got {:?}", other),
        }
    }
}

fn assert_all_ops_rejected<T: std::fmt::Debug>(
    results: [Result<T, ArithError>; 4],
    lhs_dims: &[usize],
    rhs_dims: &[usize],
) {
    let ops = [BinaryOp::Add, BinaryOp::Sub, BinaryOp::Mul, BinaryOp::Div];
    for (result, expected_op) in results.into_iter().zip(ops) {
        match result {
            Err(ArithError::NonConformant { op, lhs, rhs }) => {
                assert_eq!(op, expected_op);
                assert_eq!(lhs, lhs_dims);
                assert_eq!(rhs, rhs_dims);
            }
            other => panic!("expected NonConformant for {}, got {:?}", expected_op, other),
        }
    }
}

#[test]
fn array1_every_op_reports_its_operator() {
    let a = Array1::from_vec(vec![1, 2]);
    let b = Array1::from_vec(vec![1, 2, 3, 4]);
    assert_all_ops_rejected([&a + &b, &a - &b, &a * &b, &a / &b], &[2], &[4]);
}

#[test]
fn empty_operands_are_conformant() {
    let a: Array1<f32> = Array1::default();
    let b: Array1<f32> = Array1::default();
    let c = (&a + &b).unwrap();
    assert!(c.is_empty());
}

// ---------------------------------------------------------------------------
// Array2 / FortranArray2
// ---------------------------------------------------------------------------

#[test]
fn array2_add_elementwise() {
    let a = ascending_grid(2, 3);
    let b = ascending_grid(2, 3);
    let c = (&a + &b).unwrap();
    assert_eq!(c.shape(), (2, 3));
    for i in 0..2 {
        for j in 0..3 {
            assert_eq!(c[i][j], 2 * a[i][j]);
        }
    }
}

#[test]
fn array2_mismatched_shapes_do_not_add() {
    let a = ascending_grid(2, 3);
    let b = ascending_grid(3, 3);
    let err = (&a + &b).unwrap_err();
    assert_eq!(
        err,
        ArithError::NonConformant {
            op: BinaryOp::Add,
            lhs: vec![2, 3],
            rhs: vec![3, 3],
        }
    );
    assert_eq!(
        err.to_string(),
        "operands of '+' are not conformant: [2, 3] vs [3, 3]"
    );
}

#[test]
fn array2_transposed_shape_is_not_conformant() {
    let a = ascending_grid(2, 3);
    let b = ascending_grid(3, 2);
    assert!(a.try_mul(&b).is_err());
}

#[test]
fn fortran_array2_ops_use_one_based_indices() {
    let a = FortranArray2::from_shape_vec((2, 2), vec![1.0, 2.0, 3.0, 4.0]).unwrap();
    let b = FortranArray2::from_shape_vec((2, 2), vec![0.5, 0.5, 2.0, 2.0]).unwrap();
    let c = (&a * &b).unwrap();
    assert_eq!(c[(1, 1)], 0.5);
    assert_eq!(c[(1, 2)], 1.0);
    assert_eq!(c[(2, 1)], 6.0);
    assert_eq!(c[(2, 2)], 8.0);

    let d = (&a / &b).unwrap();
    assert_eq!(d[(2, 2)], 2.0);
}

#[test]
fn fortran_array2_mismatch_in_one_extent() {
    let a = FortranArray2::from_elem((2, 2), 1i32);
    let b = FortranArray2::from_elem((2, 3), 1i32);
    assert!((&a - &b).is_err());
}

#[test]
fn array2_mismatch_rejected_by_every_op() {
    let a = ascending_grid(2, 3);
    let b = ascending_grid(3, 3);
    assert_all_ops_rejected([&a + &b, &a - &b, &a * &b, &a / &b], &[2, 3], &[3, 3]);

    // same element count, transposed extents
    let c = ascending_grid(3, 2);
    assert_all_ops_rejected([&a + &c, &a - &c, &a * &c, &a / &c], &[2, 3], &[3, 2]);
}

#[test]
fn fortran_array2_mismatch_rejected_by_every_op() {
    let a = FortranArray2::from_elem((2, 2), 1.0f64);
    let b = FortranArray2::from_elem((2, 3), 1.0f64);
    assert_all_ops_rejected([&a + &b, &a - &b, &a * &b, &a / &b], &[2, 2], &[2, 3]);

    let c = FortranArray2::from_elem((4, 2), 1.0f64);
    assert_all_ops_rejected([&a + &c, &a - &c, &a * &c, &a / &c], &[2, 2], &[4, 2]);
}

// ---------------------------------------------------------------------------
// FortranArray3
// ---------------------------------------------------------------------------

#[test]
fn fortran_array3_sub_every_index() {
    let mut rng = StdRng::seed_from_u64(11);
    let a = FortranArray3::from_shape_vec((2, 3, 4), random_vec(&mut rng, 24)).unwrap();
    let b = FortranArray3::from_shape_vec((2, 3, 4), random_vec(&mut rng, 24)).unwrap();
    let c = (&a - &b).unwrap();
    for i in 1..=2 {
        for j in 1..=3 {
            for k in 1..=4 {
                assert_eq!(c[(i, j, k)], a[(i, j, k)] - b[(i, j, k)]);
            }
        }
    }
}

#[test]
fn fortran_array3_third_extent_mismatch() {
    let a = FortranArray3::from_elem((2, 2, 2), 1u32);
    let b = FortranArray3::from_elem((2, 2, 3), 1u32);
    match &a + &b {
        Err(ArithError::NonConformant { op, lhs, rhs }) => {
            assert_eq!(op, BinaryOp::Add);
            assert_eq!(lhs, vec![2, 2, 2]);
            assert_eq!(rhs, vec![2, 2, 3]);
        }
        other => panic!("expected NonConformant, got {:?}", other),
    }
}

#[test]
fn fortran_array3_mismatch_rejected_by_every_op() {
    let a = FortranArray3::from_elem((2, 3, 4), 2i64);
    for shape in [(1, 3, 4), (2, 1, 4), (2, 3, 1)] {
        let b = FortranArray3::from_elem(shape, 2i64);
        assert_all_ops_rejected(
            [&a + &b, &a - &b, &a * &b, &a / &b],
            &[2, 3, 4],
            &[shape.0, shape.1, shape.2],
        );
    }
}

#[test]
fn question_mark_propagates_mismatch() {
    fn combine(a: &Array1<i32>, b: &Array1<i32>) -> Result<Array1<i32>, ArithError> {
        let sum = (a + b)?;
        sum.try_mul(b)
    }

    let a = Array1::from_vec(vec![1, 2]);
    let b = Array1::from_vec(vec![3, 4]);
    assert_eq!(combine(&a, &b).unwrap().to_vec(), vec![12, 24]);
    assert!(combine(&a, &Array1::from_vec(vec![1])).is_err());
}
