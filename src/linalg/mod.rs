pub(crate) mod lu;
pub mod primitives;
pub(crate) mod qr;

pub use lu::{Lu, LuFactors, LuSolver};
pub use qr::{Qr, QrFactors, QrSolver};

use crate::traits::{FloatScalar, MatrixRef};

/// Target used for every log record emitted by the solvers.
pub(crate) const LOG_TARGET: &str = "factorize";

/// Errors from linear algebra operations.
///
/// Structural errors (bad indices, empty input, mismatched or non-square
/// dimensions) and the zero-row singular case of LU decomposition.
/// Degenerate pivots met during back substitution are not errors; they are
/// reported through [`Solution`].
///
/// ```
/// use factorize::Matrix;
/// use factorize::linalg::LinalgError;
///
/// let zero_row = Matrix::new([[1.0_f64, 2.0], [0.0, 0.0]]);
/// assert_eq!(zero_row.lu().unwrap_err(), LinalgError::Singular);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum LinalgError {
    /// A row index passed to a swap helper is past the last row.
    #[error("row index out of bounds: {index} for a {dim}x{dim} matrix")]
    RowIndexOutOfBounds { index: usize, dim: usize },
    /// Matrix is singular (a row with no non-zero entry).
    #[error("matrix is singular")]
    Singular,
    /// Householder vector requested for an empty sub-column.
    #[error("length of vector is zero")]
    ZeroLengthVector,
    /// Right-hand side length differs from the matrix dimension.
    #[error("dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },
    /// Decomposition requested for a non-square matrix.
    #[error("matrix is not square: {nrows}x{ncols}")]
    NotSquare { nrows: usize, ncols: usize },
}

/// Settings for the triangular solves.
#[derive(Debug, Clone, Copy)]
pub struct SolveSettings<T> {
    /// A diagonal entry with `|d| <= pivot_tol` marks its unknown as free.
    ///
    /// The default of zero flags exact zeros only.
    pub pivot_tol: T,
}

impl<T: FloatScalar> Default for SolveSettings<T> {
    fn default() -> Self {
        Self {
            pivot_tol: T::zero(),
        }
    }
}

/// Result of a linear solve.
///
/// Both solvers divide through degenerate diagonal entries instead of
/// aborting, so `x` may hold non-finite values when
/// [`is_rank_deficient`](Self::is_rank_deficient) is true.
///
/// ```
/// use factorize::{Matrix, Vector};
///
/// let a = Matrix::new([[1.0_f64, 2.0], [2.0, 4.0]]);
/// let sol = a.lu().unwrap().solve(&Vector::from_array([1.0, 2.0])).unwrap();
/// assert!(sol.is_rank_deficient());
/// assert_eq!(sol.free_unknowns, 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Solution<T, V> {
    /// The computed solution.
    pub x: V,
    /// Number of diagonal pivots at or below the tolerance.
    pub free_unknowns: usize,
    /// Smallest diagonal pivot magnitude met during back substitution.
    pub min_pivot: T,
}

impl<T, V> Solution<T, V> {
    /// Whether any unknown was left free by a degenerate pivot.
    #[inline]
    pub fn is_rank_deficient(&self) -> bool {
        self.free_unknowns > 0
    }

    /// Discard the diagnostics and keep the solution vector.
    #[inline]
    pub fn into_inner(self) -> V {
        self.x
    }
}

/// Dimension of a square matrix, or `NotSquare`.
pub(crate) fn square_dim<T>(a: &impl MatrixRef<T>) -> Result<usize, LinalgError> {
    if a.nrows() != a.ncols() {
        return Err(LinalgError::NotSquare {
            nrows: a.nrows(),
            ncols: a.ncols(),
        });
    }
    Ok(a.nrows())
}

/// Solve `U x = y` in place, `x` holding `y` on entry.
///
/// Only the upper triangle (with diagonal) of `u` is read. Returns the
/// number of degenerate pivots and the smallest pivot magnitude.
pub(crate) fn back_substitute<T: FloatScalar>(
    u: &impl MatrixRef<T>,
    x: &mut [T],
    settings: &SolveSettings<T>,
) -> (usize, T) {
    let n = x.len();
    let mut free = 0;
    let mut min_pivot = T::infinity();

    for i in (0..n).rev() {
        let mut sum = T::zero();
        for j in (i + 1)..n {
            sum = sum + *u.get(i, j) * x[j];
        }
        let d = *u.get(i, i);
        let mag = d.abs();
        if mag < min_pivot {
            min_pivot = mag;
        }
        if mag <= settings.pivot_tol {
            log::warn!(target: LOG_TARGET, "x[{}] is free: pivot {:?} within tolerance", i, d);
            free += 1;
        }
        x[i] = (x[i] - sum) / d;
    }

    (free, min_pivot)
}
