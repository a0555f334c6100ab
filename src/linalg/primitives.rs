//! Numeric building blocks shared by the LU and QR solvers.
//!
//! Matrix arguments are flat column-major `n x n` slices: element `(row, col)`
//! lives at `col * n + row`.

#[cfg(feature = "alloc")]
use alloc::{vec, vec::Vec};

use crate::linalg::LinalgError;
use crate::traits::{FloatScalar, Scalar, VectorOps};

/// Length of the hypotenuse, `sqrt(a^2 + b^2)`, without intermediate overflow.
///
/// The larger magnitude is factored out before squaring, so inputs near
/// `T::max_value()` stay finite when the true result is representable.
///
/// ```
/// use factorize::linalg::primitives::hypot;
///
/// assert_eq!(hypot(3.0_f64, 4.0), 5.0);
/// assert_eq!(hypot(0.0_f64, 0.0), 0.0);
/// assert!(hypot(1e300_f64, 1e300).is_finite());
/// ```
pub fn hypot<T: FloatScalar>(a: T, b: T) -> T {
    let a = a.abs();
    let b = b.abs();
    let (big, small) = if a > b { (a, b) } else { (b, a) };
    if big == T::zero() {
        return T::zero();
    }
    let r = small / big;
    big * (T::one() + r * r).sqrt()
}

/// Column index of the largest-magnitude entry in row `i`.
///
/// Ties go to the lowest column.
pub fn find_largest_in_row<T: FloatScalar>(values: &[T], n: usize, i: usize) -> usize {
    let mut best_col = 0;
    let mut best = T::zero();
    for col in 0..n {
        let mag = values[col * n + i].abs();
        if col == 0 || mag > best {
            best = mag;
            best_col = col;
        }
    }
    best_col
}

/// Row index of the largest-magnitude entry in column `i`.
///
/// Ties go to the lowest row.
pub fn find_largest_in_col<T: FloatScalar>(values: &[T], n: usize, i: usize) -> usize {
    let column = &values[i * n..(i + 1) * n];
    let mut best_row = 0;
    let mut best = T::zero();
    for (row, x) in column.iter().enumerate() {
        let mag = x.abs();
        if row == 0 || mag > best {
            best = mag;
            best_row = row;
        }
    }
    best_row
}

/// Exchange `a[i]` and `a[j]` in place.
///
/// Panics if either index is out of bounds.
#[inline]
pub fn swap_array_elements<T>(a: &mut [T], i: usize, j: usize) -> &mut [T] {
    if i != j {
        a.swap(i, j);
    }
    a
}

/// Exchange rows `i` and `j` of a column-major `n x n` array.
///
/// ```
/// use factorize::linalg::primitives::swap_matrix_array_rows;
///
/// // [[1, 2], [3, 4]] stored by columns
/// let mut a = [1.0, 3.0, 2.0, 4.0];
/// swap_matrix_array_rows(&mut a, 2, 0, 1).unwrap();
/// assert_eq!(a, [3.0, 1.0, 4.0, 2.0]);
/// ```
pub fn swap_matrix_array_rows<T>(
    a: &mut [T],
    n: usize,
    i: usize,
    j: usize,
) -> Result<&mut [T], LinalgError> {
    for index in [i, j] {
        if index >= n {
            return Err(LinalgError::RowIndexOutOfBounds { index, dim: n });
        }
    }
    if i != j {
        for col in 0..n {
            a.swap(col * n + i, col * n + j);
        }
    }
    Ok(a)
}

/// Exchange components `i` and `j` of a vector in place.
#[inline]
pub fn swap_vector_components<T: Scalar, V: VectorOps<T>>(v: &mut V, i: usize, j: usize) -> &mut V {
    swap_array_elements(v.as_mut_slice(), i, j);
    v
}

/// Unit Householder vector for the sub-column `x[offset..offset + v.len()]`.
///
/// Writes `v` such that `(I - 2 v v^T) x = |x| e1`. When the sub-column is
/// zero, or already a non-negative multiple of `e1`, the reflection is the
/// identity and `v` is set to zero.
///
/// Panics if the sub-column runs past the end of `x`.
pub fn householder_vector<T: FloatScalar>(
    x: &[T],
    offset: usize,
    v: &mut [T],
) -> Result<(), LinalgError> {
    let n = v.len();
    if n == 0 {
        return Err(LinalgError::ZeroLengthVector);
    }
    let x = &x[offset..offset + n];
    let x0 = x[0];

    let tail = x[1..].iter().fold(T::zero(), |acc, &xi| hypot(acc, xi));
    let alpha = hypot(x0, tail);

    // v0 = x0 - alpha, computed as -tail^2 / (x0 + alpha) when x0 > 0
    let v0 = if x0 > T::zero() {
        -(tail / (x0 + alpha)) * tail
    } else {
        x0 - alpha
    };

    if alpha == T::zero() || v0 == T::zero() {
        v.fill(T::zero());
        return Ok(());
    }

    // |x - alpha e1| without squaring, so scaled columns neither overflow nor
    // drop into subnormals
    let norm = hypot(v0, tail);

    v[0] = v0 / norm;
    for (vi, &xi) in v[1..].iter_mut().zip(&x[1..]) {
        *vi = xi / norm;
    }
    Ok(())
}

/// Allocating form of [`householder_vector`] for a sub-column of length `n`.
///
/// ```
/// use factorize::linalg::primitives::householder_vector_values;
///
/// let v = householder_vector_values(&[3.0_f64, 4.0], 2, 0).unwrap();
/// // (I - 2 v v^T) [3, 4] = [5, 0]
/// let dot = v[0] * 3.0 + v[1] * 4.0;
/// assert!((3.0 - 2.0 * v[0] * dot - 5.0).abs() < 1e-12);
/// assert!((4.0 - 2.0 * v[1] * dot).abs() < 1e-12);
/// ```
#[cfg(feature = "alloc")]
pub fn householder_vector_values<T: FloatScalar>(
    x: &[T],
    n: usize,
    offset: usize,
) -> Result<Vec<T>, LinalgError> {
    let mut v = vec![T::zero(); n];
    householder_vector(x, offset, &mut v)?;
    Ok(v)
}
