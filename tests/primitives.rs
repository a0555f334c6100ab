use approx::{assert_abs_diff_eq, assert_relative_eq};
use factorize::linalg::primitives::{
    find_largest_in_col, find_largest_in_row, householder_vector, householder_vector_values, hypot,
    swap_array_elements, swap_matrix_array_rows, swap_vector_components,
};
use factorize::{DynVector, LinalgError, VectorOps};

#[test]
fn hypot_matches_naive_norm() {
    for &(a, b) in &[(1.0_f64, 2.0), (-0.3, 0.4), (1e-3, -7.5), (12.0, 0.0)] {
        assert_relative_eq!(hypot(a, b), (a * a + b * b).sqrt(), max_relative = 1e-14);
    }
}

#[test]
fn hypot_handles_extremes() {
    let big = f64::MAX / 2.0;
    assert!(hypot(big, big).is_finite());
    assert_eq!(hypot(0.0, 0.0), 0.0);
    assert_eq!(hypot(f64::MIN_POSITIVE, 0.0), f64::MIN_POSITIVE);
}

#[test]
fn pivot_search_prefers_lowest_index_on_ties() {
    // [[-2, 2], [2, -2]] by columns
    let a = [-2.0_f64, 2.0, 2.0, -2.0];
    assert_eq!(find_largest_in_row(&a, 2, 0), 0);
    assert_eq!(find_largest_in_row(&a, 2, 1), 0);
    assert_eq!(find_largest_in_col(&a, 2, 0), 0);
    assert_eq!(find_largest_in_col(&a, 2, 1), 0);

    let zeros = [0.0_f64; 9];
    assert_eq!(find_largest_in_row(&zeros, 3, 2), 0);
    assert_eq!(find_largest_in_col(&zeros, 3, 2), 0);
}

#[test]
fn swapping_twice_restores() {
    let original = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0];
    let mut a = original;
    swap_matrix_array_rows(&mut a, 3, 0, 1).unwrap();
    assert_ne!(a, original);
    swap_matrix_array_rows(&mut a, 3, 1, 0).unwrap();
    assert_eq!(a, original);

    let mut e = original;
    swap_array_elements(&mut e, 3, 8);
    swap_array_elements(&mut e, 3, 8);
    assert_eq!(e, original);

    let mut v = DynVector::from_slice(&[1.0, 2.0, 3.0]);
    swap_vector_components(&mut v, 0, 2);
    assert_eq!(v.as_slice(), &[3.0, 2.0, 1.0]);
    swap_vector_components(&mut v, 0, 2);
    assert_eq!(v.as_slice(), &[1.0, 2.0, 3.0]);
}

#[test]
fn row_swap_bounds_are_checked() {
    let mut a = [0.0_f64; 9];
    assert_eq!(
        swap_matrix_array_rows(&mut a, 3, 1, 3).unwrap_err(),
        LinalgError::RowIndexOutOfBounds { index: 3, dim: 3 }
    );
}

#[test]
fn householder_annihilates_tail() {
    let column = [5.0_f64, -1.0, 2.0, 2.0, -4.0];
    let v = householder_vector_values(&column, 4, 1).unwrap();

    let norm_sq: f64 = v.iter().map(|x| x * x).sum();
    assert_abs_diff_eq!(norm_sq, 1.0, epsilon = 1e-14);

    let x = &column[1..];
    let dot: f64 = v.iter().zip(x).map(|(a, b)| a * b).sum();
    let reflected: Vec<f64> = v.iter().zip(x).map(|(vi, xi)| xi - 2.0 * vi * dot).collect();
    assert_abs_diff_eq!(reflected[0], 5.0, epsilon = 1e-14);
    for r in &reflected[1..] {
        assert_abs_diff_eq!(*r, 0.0, epsilon = 1e-14);
    }
}

#[test]
fn householder_rejects_empty() {
    let mut v: [f64; 0] = [];
    assert_eq!(
        householder_vector(&[1.0, 2.0], 1, &mut v).unwrap_err(),
        LinalgError::ZeroLengthVector
    );
    assert_eq!(
        householder_vector_values(&[1.0_f64], 0, 0).unwrap_err(),
        LinalgError::ZeroLengthVector
    );
}
