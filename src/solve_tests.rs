pub(crate) use super::*;
use crate::error::Status;

fn m(rows: &[&[f64]]) -> Matrix {
    Matrix::from_rows(rows).expect("test data is rectangular")
}

fn assert_close(actual: &Matrix, expected: &Matrix, tol: f64) {
    assert!(
        actual.approx_eq(expected, tol),
        "expected\n{expected:.6}got\n{actual:.6}"
    );
}

#[test]
fn test_determinant_2x2() {
    let a = m(&[&[1.0, 2.0], &[3.0, 4.0]]);
    let det = a.determinant().expect("non-singular");
    assert!((det - (-2.0)).abs() < 1e-12);
}

#[test]
fn test_determinant_identity() {
    for n in 1..=6 {
        let eye = Matrix::identity(n).expect("valid size");
        assert_eq!(determinant(&eye).expect("identity"), 1.0, "n = {n}");
    }
}

#[test]
fn test_determinant_3x3() {
    // 2(-1*2 - 2*1) - 1(-3*2 - 2*(-2)) + (-1)(-3*1 - (-1)(-2)) = -8 + 2 + 5 = -1
    let a = m(&[&[2.0, 1.0, -1.0], &[-3.0, -1.0, 2.0], &[-2.0, 1.0, 2.0]]);
    assert!((determinant(&a).expect("non-singular") - (-1.0)).abs() < 1e-12);
}

#[test]
fn test_determinant_row_swap_flips_sign() {
    let a = m(&[&[4.0, 3.0, 2.0], &[1.0, 5.0, 7.0], &[2.0, 8.0, 1.0]]);
    let mut swapped = a.clone();
    swapped.swap_rows(0, 2);
    let d = determinant(&a).expect("non-singular");
    let ds = determinant(&swapped).expect("non-singular");
    assert!((d + ds).abs() < 1e-9, "det(A) = {d}, det(swapped) = {ds}");
    assert!(d.abs() > 1.0);
}

#[test]
fn test_determinant_does_not_touch_input() {
    let a = m(&[&[1.0, 2.0], &[3.0, 4.0]]);
    let before = a.clone();
    let _ = determinant(&a);
    assert_eq!(a, before);
}

#[test]
fn test_determinant_singular_reports_zero() {
    let a = m(&[&[0.0, 1.0], &[0.0, 1.0]]);
    let err = determinant(&a).expect_err("zero column");
    assert_eq!(err.status(), Status::SingularMatrix);
    match err {
        LinalgError::SingularMatrix { det, .. } => assert_eq!(det, 0.0),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_determinant_non_square() {
    let a = Matrix::new(2, 3).expect("valid");
    assert_eq!(
        determinant(&a).map_err(|e| e.status()),
        Err(Status::DimensionError)
    );
    assert_eq!(
        determinant(&Matrix::default()).map_err(|e| e.status()),
        Err(Status::DimensionError)
    );
}

#[test]
fn test_solve_2x2() {
    let a = m(&[&[3.0, 2.0], &[1.0, 2.0]]);
    let b = m(&[&[5.0], &[5.0]]);
    let x = a.solve(&b).expect("non-singular");
    assert_eq!(x.shape(), (2, 1));
    assert_close(&x, &m(&[&[0.0], &[2.5]]), 1e-12);
}

#[test]
fn test_solve_3x3_residual() {
    // x + y + z = 6, 2x + y - z = 1, x - y + z = 2 => (1, 2, 3)
    let a = m(&[&[1.0, 1.0, 1.0], &[2.0, 1.0, -1.0], &[1.0, -1.0, 1.0]]);
    let b = m(&[&[6.0], &[1.0], &[2.0]]);
    let x = solve(&a, &b).expect("non-singular");
    assert_close(&x, &m(&[&[1.0], &[2.0], &[3.0]]), 1e-12);
    let ax = a.matmul(&x).expect("3x3 * 3x1");
    assert_close(&ax, &b, 1e-9);
}

#[test]
fn test_solve_needs_pivoting() {
    // zero in the leading position
    let a = m(&[&[0.0, 1.0], &[1.0, 0.0]]);
    let b = m(&[&[3.0], &[7.0]]);
    let x = solve(&a, &b).expect("permutation matrix");
    assert_close(&x, &m(&[&[7.0], &[3.0]]), 0.0);
}

#[test]
fn test_solve_singular() {
    let a = m(&[&[0.0, 1.0], &[0.0, 1.0]]);
    let b = m(&[&[1.0], &[1.0]]);
    let err = solve(&a, &b).expect_err("zero column");
    assert_eq!(err.status(), Status::SingularMatrix);
}

#[test]
fn test_solve_dimension_errors() {
    let a = Matrix::identity(2).expect("valid");
    let wide_b = Matrix::new(2, 2).expect("valid");
    let short_b = Matrix::new(3, 1).expect("valid");
    let rect_a = Matrix::new(2, 3).expect("valid");
    let b = Matrix::new(2, 1).expect("valid");
    for result in [
        solve(&a, &wide_b),
        solve(&a, &short_b),
        solve(&rect_a, &b),
        solve(&a, &Matrix::default()),
    ] {
        assert_eq!(result.map_err(|e| e.status()), Err(Status::DimensionError));
    }
}

#[test]
fn test_back_substitution_rejects_negligible_diagonal() {
    // already in echelon form, but the last diagonal is tiny
    let aug = m(&[&[1.0, 2.0, 3.0], &[0.0, 1e-14, 1.0]]);
    let err = GaussSolver::new()
        .back_substitute(&aug)
        .expect_err("diagonal below tolerance");
    assert!(matches!(err, LinalgError::SingularMatrix { column: 1, .. }));
}

#[test]
fn test_back_substitution_order() {
    // x1 = 4 / 2 = 2, x0 = (5 - 1 * 2) / 3 = 1
    let aug = m(&[&[3.0, 1.0, 5.0], &[0.0, 2.0, 4.0]]);
    let x = GaussSolver::new().back_substitute(&aug).expect("usable diagonal");
    assert_eq!(x.as_slice(), &[1.0, 2.0]);
}

#[test]
fn test_inverse_2x2() {
    let a = m(&[&[1.0, 2.0], &[3.0, 4.0]]);
    let inv = a.inverse().expect("non-singular");
    assert_close(&inv, &m(&[&[-2.0, 1.0], &[1.5, -0.5]]), 1e-12);
}

#[test]
fn test_inverse_times_matrix_is_identity() {
    let a = m(&[&[4.0, 7.0, 2.0], &[3.0, 6.0, 1.0], &[2.0, 5.0, 3.0]]);
    let inv = inverse(&a).expect("non-singular");
    let eye = Matrix::identity(3).expect("valid");
    assert_close(&a.matmul(&inv).expect("3x3 * 3x3"), &eye, 1e-9);
    assert_close(&inv.matmul(&a).expect("3x3 * 3x3"), &eye, 1e-9);
}

#[test]
fn test_inverse_zero_row_is_singular() {
    let a = m(&[&[1.0, 2.0, 3.0], &[0.0, 0.0, 0.0], &[4.0, 5.0, 6.0]]);
    assert_eq!(
        inverse(&a).map_err(|e| e.status()),
        Err(Status::SingularMatrix)
    );
}

#[test]
fn test_inverse_zero_column_is_singular() {
    let a = m(&[&[0.0, 1.0], &[0.0, 1.0]]);
    assert!(inverse(&a).expect_err("zero column").is_singular());
}

#[test]
fn test_inverse_non_square() {
    let a = Matrix::new(3, 2).expect("valid");
    assert_eq!(
        inverse(&a).map_err(|e| e.status()),
        Err(Status::DimensionError)
    );
}

#[test]
fn test_solver_tolerance_is_configurable() {
    let a = m(&[&[1e-10, 0.0], &[0.0, 1e-10]]);
    assert!(determinant(&a).is_ok());

    let loose = GaussSolver::new().with_tolerance(Tolerance::new(1e-8).expect("valid epsilon"));
    assert_eq!(loose.tolerance().epsilon(), 1e-8);
    assert!(loose.determinant(&a).expect_err("pivots below 1e-8").is_singular());
    assert!(loose.inverse(&a).expect_err("pivots below 1e-8").is_singular());
}

#[test]
fn test_solver_default() {
    assert_eq!(GaussSolver::new().tolerance(), Tolerance::DEFAULT);
}
