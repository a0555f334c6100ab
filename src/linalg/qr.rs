use core::marker::PhantomData;

use crate::linalg::primitives::householder_vector;
use crate::linalg::{back_substitute, square_dim, LinalgError, Solution, SolveSettings, LOG_TARGET};
use crate::matrix::vector::Vector;
use crate::traits::{FloatScalar, SquareMatrix, VectorOps};
use crate::Matrix;

/// QR decomposition by Householder reflections.
///
/// Each step reflects the trailing sub-column of `R` onto its leading
/// axis; `Q` accumulates the transposed reflections so that `Q R = A`.
///
/// # Example
///
/// ```
/// use factorize::{Matrix, QrSolver, Vector};
///
/// let a = Matrix::new([[1.0_f64, 2.0], [3.0, -5.0]]);
/// let qr = QrSolver::decompose(&a).unwrap();
/// let sol = QrSolver::solve_linear(qr.q(), qr.r(), &Vector::from_array([4.0, 1.0])).unwrap();
/// assert!((sol.x[0] - 2.0).abs() < 1e-14);
/// assert!((sol.x[1] - 1.0).abs() < 1e-14);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct QrSolver;

impl QrSolver {
    /// Factor `A = Q R` with `Q` orthogonal and `R` upper triangular.
    pub fn decompose<T, M>(a: &M) -> Result<QrFactors<T, M>, LinalgError>
    where
        T: FloatScalar,
        M: SquareMatrix<T>,
    {
        let n = square_dim(a)?;
        let mut r = a.clone();
        let mut q = a.clone();
        q.set_identity();
        let mut v = a.zero_vector();
        let mut reflections = 0;

        for j in 0..n {
            if n - j <= 1 {
                continue;
            }

            v.set_scalar(T::zero());
            householder_vector(r.col_as_slice(j, 0), j, &mut v.as_mut_slice()[j..])?;
            if v.as_slice().iter().all(|&c| c == T::zero()) {
                log::trace!(target: LOG_TARGET, "qr: column {} already reduced", j);
                continue;
            }

            // H = I - 2 v v^T, acting on rows j.. only
            let two = T::one() + T::one();
            let mut h = a.outer_scaled(&v, -two);
            for i in 0..n {
                let d = *h.get(i, i);
                h.set(i, i, d + T::one());
            }

            r.premultiply(&h);
            h.transpose_in_place();
            q.multiply(&h);
            reflections += 1;
            log::trace!(target: LOG_TARGET, "qr: reflected column {} over {} rows", j, n - j);
        }

        Ok(QrFactors {
            q,
            r,
            reflections,
            _scalar: PhantomData,
        })
    }

    /// Solve `A x = b` as `R x = Q^T b`.
    pub fn solve_linear<T, M>(
        q: &M,
        r: &M,
        b: &M::Vector,
    ) -> Result<Solution<T, M::Vector>, LinalgError>
    where
        T: FloatScalar,
        M: SquareMatrix<T>,
    {
        Self::solve_linear_with(q, r, b, &SolveSettings::default())
    }

    /// [`solve_linear`](Self::solve_linear) with an explicit pivot tolerance.
    pub fn solve_linear_with<T, M>(
        q: &M,
        r: &M,
        b: &M::Vector,
        settings: &SolveSettings<T>,
    ) -> Result<Solution<T, M::Vector>, LinalgError>
    where
        T: FloatScalar,
        M: SquareMatrix<T>,
    {
        let n = square_dim(r)?;
        for got in [square_dim(q)?, b.dim()] {
            if got != n {
                return Err(LinalgError::DimensionMismatch { expected: n, got });
            }
        }

        let mut x = q.transform_transposed(b);
        let (free_unknowns, min_pivot) = back_substitute(r, x.as_mut_slice(), settings);

        Ok(Solution {
            x,
            free_unknowns,
            min_pivot,
        })
    }
}

/// Result of [`QrSolver::decompose`].
#[derive(Debug, Clone)]
pub struct QrFactors<T, M> {
    q: M,
    r: M,
    reflections: usize,
    _scalar: PhantomData<T>,
}

/// QR factors of a fixed-size matrix.
pub type Qr<T, const N: usize> = QrFactors<T, Matrix<T, N, N>>;

impl<T: FloatScalar, M: SquareMatrix<T>> QrFactors<T, M> {
    /// Orthogonal factor.
    #[inline]
    pub fn q(&self) -> &M {
        &self.q
    }

    /// Upper triangular factor.
    ///
    /// Entries below the diagonal hold rounding residue, not exact zeros.
    #[inline]
    pub fn r(&self) -> &M {
        &self.r
    }

    /// Number of non-identity reflections applied.
    #[inline]
    pub fn reflections(&self) -> usize {
        self.reflections
    }

    /// Solve `A x = b` as `R x = Q^T b`.
    pub fn solve(&self, b: &M::Vector) -> Result<Solution<T, M::Vector>, LinalgError> {
        QrSolver::solve_linear(&self.q, &self.r, b)
    }

    /// [`solve`](Self::solve) with an explicit pivot tolerance.
    pub fn solve_with(
        &self,
        b: &M::Vector,
        settings: &SolveSettings<T>,
    ) -> Result<Solution<T, M::Vector>, LinalgError> {
        QrSolver::solve_linear_with(&self.q, &self.r, b, settings)
    }

    /// Determinant: each reflection contributes a factor of `-1`.
    pub fn det(&self) -> T {
        let mut d = if self.reflections % 2 == 0 {
            T::one()
        } else {
            -T::one()
        };
        for i in 0..self.r.dim() {
            d = d * *self.r.get(i, i);
        }
        d
    }
}

impl<T: FloatScalar, const N: usize> Matrix<T, N, N> {
    /// QR decomposition using Householder reflections.
    ///
    /// ```
    /// use factorize::Matrix;
    ///
    /// let a = Matrix::new([[12.0_f64, -51.0, 4.0], [6.0, 167.0, -68.0], [-4.0, 24.0, -41.0]]);
    /// let qr = a.qr().unwrap();
    /// let qtq = qr.q().transpose() * *qr.q();
    /// assert!((qtq[(0, 0)] - 1.0).abs() < 1e-12);
    /// assert!(qtq[(0, 1)].abs() < 1e-12);
    /// assert!((qr.r()[(0, 0)] - 14.0).abs() < 1e-12);
    /// ```
    pub fn qr(&self) -> Result<Qr<T, N>, LinalgError> {
        QrSolver::decompose(self)
    }

    /// Solve `A x = b` via QR decomposition.
    pub fn solve_qr(&self, b: &Vector<T, N>) -> Result<Solution<T, Vector<T, N>>, LinalgError> {
        self.qr()?.solve(b)
    }
}
