use core::ops::Mul;

use crate::matrix::vector::Vector;
use crate::traits::Scalar;
use crate::Matrix;

// ── Matrix multiplication: (M×N) * (N×P) → (M×P) ──────────────────

impl<T: Scalar, const M: usize, const N: usize, const P: usize> Mul<Matrix<T, N, P>>
    for Matrix<T, M, N>
{
    type Output = Matrix<T, M, P>;

    fn mul(self, rhs: Matrix<T, N, P>) -> Matrix<T, M, P> {
        let mut out = Matrix::<T, M, P>::zeros();
        for i in 0..M {
            for j in 0..P {
                let mut sum = T::zero();
                for k in 0..N {
                    sum = sum + self[(i, k)] * rhs[(k, j)];
                }
                out[(i, j)] = sum;
            }
        }
        out
    }
}

impl<T: Scalar, const M: usize, const N: usize, const P: usize> Mul<&Matrix<T, N, P>>
    for &Matrix<T, M, N>
{
    type Output = Matrix<T, M, P>;
    fn mul(self, rhs: &Matrix<T, N, P>) -> Matrix<T, M, P> {
        (*self).mul(*rhs)
    }
}

// ── Scalar multiplication: matrix * scalar ──────────────────────────

impl<T: Scalar, const M: usize, const N: usize> Mul<T> for Matrix<T, M, N> {
    type Output = Self;

    fn mul(self, rhs: T) -> Self {
        let mut out = self;
        for i in 0..M {
            for j in 0..N {
                out[(i, j)] = self[(i, j)] * rhs;
            }
        }
        out
    }
}

// ── Matrix-vector product ────────────────────────────────────────────

impl<T: Scalar, const M: usize, const N: usize> Matrix<T, M, N> {
    /// Matrix-vector product: A * v → result.
    ///
    /// Takes and returns row vectors for convenience, avoiding
    /// explicit transpose. Equivalent to `(A * v^T)^T`.
    pub fn vecmul(&self, v: &Vector<T, N>) -> Vector<T, M> {
        let mut out = Vector::<T, M>::zeros();
        for i in 0..M {
            let mut sum = T::zero();
            for j in 0..N {
                sum = sum + self[(i, j)] * v[j];
            }
            out[i] = sum;
        }
        out
    }

    /// Transpose: (M×N) → (N×M).
    pub fn transpose(&self) -> Matrix<T, N, M> {
        let mut out = Matrix::<T, N, M>::zeros();
        for i in 0..M {
            for j in 0..N {
                out[(j, i)] = self[(i, j)];
            }
        }
        out
    }
}
