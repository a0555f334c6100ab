use approx::{assert_abs_diff_eq, assert_relative_eq};
use factorize::{DynMatrix, DynVector, Matrix, QrSolver, SquareMatrix, Vector};

fn assert_orthogonal<const N: usize>(q: &Matrix<f64, N, N>) {
    let qtq = q.transpose() * *q;
    for i in 0..N {
        for j in 0..N {
            let expected = if i == j { 1.0 } else { 0.0 };
            assert_abs_diff_eq!(qtq[(i, j)], expected, epsilon = 1.5e-14);
        }
    }
}

#[test]
fn solves_2x2() {
    let a = Matrix::new([[1.0_f64, 2.0], [3.0, -5.0]]);
    let qr = QrSolver::decompose(&a).unwrap();
    let sol = QrSolver::solve_linear(qr.q(), qr.r(), &Vector::from_array([4.0, 1.0])).unwrap();
    assert_abs_diff_eq!(sol.x[0], 2.0, epsilon = 1.5e-14);
    assert_abs_diff_eq!(sol.x[1], 1.0, epsilon = 1.5e-14);
}

#[test]
fn solves_3x3() {
    let a = Matrix::new([[3.0_f64, -0.1, -0.2], [0.1, 7.0, -0.3], [0.3, -0.2, 10.0]]);
    let x = a.solve_qr(&Vector::from_array([7.85, -19.3, 71.4])).unwrap().x;
    assert_abs_diff_eq!(x[0], 3.0, epsilon = 1e-14);
    assert_abs_diff_eq!(x[1], -2.5, epsilon = 1e-14);
    assert_abs_diff_eq!(x[2], 7.0, epsilon = 1e-14);
}

#[test]
fn solves_4x4() {
    let a = Matrix::new([
        [2.0_f64, -1.0, 1.0, 1.0],
        [1.0, 2.0, -1.0, -1.0],
        [-1.0, 2.0, 2.0, 2.0],
        [1.0, -1.0, 2.0, 1.0],
    ]);
    let qr = a.qr().unwrap();
    assert_orthogonal(qr.q());

    let x = qr.solve(&Vector::from_array([6.0, 3.0, 14.0, 8.0])).unwrap().x;
    let expected = [2.0, 3.0, 4.0, 1.0];
    for i in 0..4 {
        assert_abs_diff_eq!(x[i], expected[i], epsilon = 1.5e-14);
    }
}

#[test]
fn scaled_columns_match_lu() {
    let base = Matrix::new([[4.0_f64, -2.0, 1.0], [3.0, 6.0, -4.0], [2.0, 1.0, 8.0]]);
    let b = Vector::from_array([12.0, -25.0, 32.0]);
    let x_ref = base.solve(&b).unwrap().x;

    for &s in &[1e155_f64, 1e-160] {
        let qr = (base * s).qr().unwrap();
        assert_orthogonal(qr.q());
        for j in 0..3 {
            for i in (j + 1)..3 {
                assert_abs_diff_eq!(qr.r()[(i, j)] / s, 0.0, epsilon = 1e-13);
            }
        }

        let x = qr.solve(&(b * s)).unwrap().x;
        for i in 0..3 {
            assert_abs_diff_eq!(x[i], x_ref[i], epsilon = 1e-13);
        }
    }
}

#[test]
fn q_times_r_reconstructs() {
    let a = Matrix::new([
        [4.0_f64, 1.0, -2.0, 2.0, 0.5],
        [1.0, 2.0, 0.0, 1.0, -1.0],
        [-2.0, 0.0, 3.0, -2.0, 2.0],
        [2.0, 1.0, -2.0, -1.0, 0.0],
        [0.0, -3.0, 1.0, 4.0, 6.0],
    ]);
    let qr = a.qr().unwrap();
    assert_orthogonal(qr.q());

    let prod = *qr.q() * *qr.r();
    for i in 0..5 {
        for j in 0..5 {
            assert_abs_diff_eq!(prod[(i, j)], a[(i, j)], epsilon = 1e-13);
        }
        for j in 0..i {
            assert_abs_diff_eq!(qr.r()[(i, j)], 0.0, epsilon = 1e-13);
        }
    }
}

#[test]
fn agrees_with_lu() {
    let a = DynMatrix::from_fn(8, 8, |i, j| if i == j { 5.0 } else { (i as f64 - j as f64).sin() });
    let b = DynVector::from_vec((0..8).map(|i| (i * i) as f64).collect());

    let x_lu = a.solve(&b).unwrap().x;
    let x_qr = a.solve_qr(&b).unwrap().x;
    for i in 0..8 {
        assert_relative_eq!(x_lu[i], x_qr[i], epsilon = 1e-12, max_relative = 1e-10);
    }

    assert_relative_eq!(a.qr().unwrap().det(), a.det().unwrap(), max_relative = 1e-10);
}

#[test]
fn solve_uses_transposed_q() {
    let a = Matrix::new([[0.0_f64, 1.0], [1.0, 0.0]]);
    let qr = a.qr().unwrap();
    let b = Vector::from_array([3.0, 7.0]);
    let y = qr.q().transform_transposed(&b);
    let sol = qr.solve(&b).unwrap();
    // R is the identity up to sign, so x = R^-1 Q^T b
    assert_abs_diff_eq!(sol.x[0], y[0] / qr.r()[(0, 0)], epsilon = 1e-15);
    assert_abs_diff_eq!(sol.x[0], 7.0, epsilon = 1e-14);
    assert_abs_diff_eq!(sol.x[1], 3.0, epsilon = 1e-14);
}
