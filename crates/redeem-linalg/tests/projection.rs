//! Integration tests for projection onto a column space.

use std::cell::RefCell;
use std::fmt;

use approx::assert_abs_diff_eq;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use redeem_linalg::math::{Array1, Array2};
use redeem_linalg::{project_b_colspace, project_vector, LinalgError, MatrixTools};

fn random_matrix(rng: &mut StdRng, rows: usize, cols: usize) -> Array2<f64> {
    Array2::from_shape_fn((rows, cols), |_, _| 1.0 - 2.0 * rng.gen::<f64>())
}

fn assert_all_close(a: &Array2<f64>, b: &Array2<f64>, eps: f64) {
    assert_eq!(a.shape(), b.shape());
    for (x, y) in a.as_slice().iter().zip(b.as_slice()) {
        assert_abs_diff_eq!(*x, *y, epsilon = eps);
    }
}

// ---------------------------------------------------------------------------
// Concrete scenarios
// ---------------------------------------------------------------------------

#[test]
fn drops_component_outside_the_span() {
    let a = Array2::from_shape_vec((3, 2), vec![1.0, 0.0, 0.0, 1.0, 0.0, 0.0]).unwrap();
    let b = Array2::from_row(Array1::from_vec(vec![1.0, 2.0, 3.0]));

    let p = project_b_colspace(&b, &a, true).unwrap();
    assert_eq!(p.shape(), (3, 1));
    assert_eq!(p.to_vec(), vec![1.0, 2.0, 0.0]);
}

#[test]
fn vector_form_matches_matrix_form() {
    let a = Array2::from_shape_vec((3, 2), vec![1.0, 0.0, 0.0, 1.0, 0.0, 0.0]).unwrap();
    let b = Array1::from_vec(vec![1.0, 2.0, 3.0]);
    assert_eq!(project_vector(&b, &a).unwrap().to_vec(), vec![1.0, 2.0, 0.0]);
}

#[test]
fn identity_column_space_returns_b() {
    let a = Array2::<f64>::eye(3);
    let b = Array2::from_shape_vec((3, 2), vec![1.0, -2.0, 0.5, 4.0, 3.0, 0.0]).unwrap();
    let p = project_b_colspace(&b, &a, false).unwrap();
    assert_all_close(&p, &b, 1e-12);
}

#[test]
fn least_squares_fit_of_a_line() {
    // fitting y = c0 + c1 x through (0, 6), (1, 0), (2, 0)
    let a = Array2::from_shape_vec((3, 2), vec![1.0, 0.0, 1.0, 1.0, 1.0, 2.0]).unwrap();
    let b = Array2::from_shape_vec((3, 1), vec![6.0, 0.0, 0.0]).unwrap();
    let p = project_b_colspace(&b, &a, false).unwrap();
    let expected = Array2::from_shape_vec((3, 1), vec![5.0, 2.0, -1.0]).unwrap();
    assert_all_close(&p, &expected, 1e-10);
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

#[test]
fn projection_is_idempotent() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..20 {
        let rows = rng.gen_range(2..8);
        let cols = rng.gen_range(1..=rows);
        let a = random_matrix(&mut rng, rows, cols);
        let b = random_matrix(&mut rng, rows, 1);

        let once = project_b_colspace(&b, &a, false).unwrap();
        let twice = project_b_colspace(&once, &a, false).unwrap();
        assert_all_close(&once, &twice, 1e-8);
    }
}

#[test]
fn residual_is_orthogonal_to_every_column() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..20 {
        let rows = rng.gen_range(2..8);
        let cols = rng.gen_range(1..=rows);
        let a = random_matrix(&mut rng, rows, cols);
        let b = Array1::from_vec((0..rows).map(|_| rng.gen::<f64>()).collect());

        let p = project_vector(&b, &a).unwrap();
        let residual = b.checked_sub(&p).unwrap();
        for c in 0..cols {
            assert_abs_diff_eq!(residual.dot(&a.column(c)).unwrap(), 0.0, epsilon = 1e-8);
        }
    }
}

// ---------------------------------------------------------------------------
// Failures
// ---------------------------------------------------------------------------

#[test]
fn rank_deficient_column_space_is_singular() {
    let a = Array2::from_shape_vec((3, 2), vec![1.0, 2.0, 2.0, 4.0, 3.0, 6.0]).unwrap();
    let b = Array2::from_shape_vec((3, 1), vec![1.0, 1.0, 1.0]).unwrap();
    assert_eq!(
        project_b_colspace(&b, &a, false).unwrap_err(),
        LinalgError::SingularMatrix
    );
}

#[test]
fn row_vector_without_transpose_is_a_shape_error() {
    let a = Array2::<f64>::eye(3);
    let b = Array2::from_row(Array1::from_vec(vec![1.0, 2.0, 3.0]));
    assert!(matches!(
        project_b_colspace(&b, &a, false),
        Err(LinalgError::DimensionMismatch { .. })
    ));
}

// ---------------------------------------------------------------------------
// Tracing
// ---------------------------------------------------------------------------

#[test]
fn projection_is_reported_to_the_sink() {
    let seen = RefCell::new(Vec::new());
    let tools = MatrixTools::with_sink(|label: &'static str, value: &dyn fmt::Display| {
        seen.borrow_mut().push((label, value.to_string()));
    });

    let a = Array2::from_shape_vec((2, 1), vec![1.0, 0.0]).unwrap();
    let b = Array2::from_shape_vec((2, 1), vec![3.0, 4.0]).unwrap();
    let p = tools.project_b_colspace(&b, &a, false).unwrap();
    drop(tools);

    let seen = seen.into_inner();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].0, "projection");
    assert_eq!(seen[0].1, p.to_string());
}

#[test]
fn failed_projection_reports_nothing() {
    let seen = RefCell::new(0usize);
    let tools = MatrixTools::with_sink(|_: &'static str, _: &dyn fmt::Display| {
        *seen.borrow_mut() += 1;
    });
    let a = Array2::<f64>::zeros((3, 1));
    let b = Array2::<f64>::zeros((3, 1));
    assert!(tools.project_b_colspace(&b, &a, false).is_err());
    drop(tools);
    assert_eq!(seen.into_inner(), 0);
}
