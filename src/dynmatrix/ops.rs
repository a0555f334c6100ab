use alloc::vec;
use core::ops::Mul;

use crate::traits::Scalar;

use super::vector::DynVector;
use super::DynMatrix;

// ── Matrix multiplication ───────────────────────────────────────────

impl<T: Scalar> Mul<&DynMatrix<T>> for &DynMatrix<T> {
    type Output = DynMatrix<T>;

    fn mul(self, rhs: &DynMatrix<T>) -> DynMatrix<T> {
        assert_eq!(
            self.ncols, rhs.nrows,
            "dimension mismatch: {}x{} * {}x{}",
            self.nrows, self.ncols, rhs.nrows, rhs.ncols,
        );
        let m = self.nrows;
        let n = self.ncols;
        let p = rhs.ncols;
        let mut data = vec![T::zero(); m * p];
        // out[:, j] += a[:, k] * b[k, j], column-major throughout
        for j in 0..p {
            for k in 0..n {
                let b_kj = rhs.data[j * n + k];
                for i in 0..m {
                    data[j * m + i] = data[j * m + i] + self.data[k * m + i] * b_kj;
                }
            }
        }
        DynMatrix {
            data,
            nrows: m,
            ncols: p,
        }
    }
}

impl<T: Scalar> Mul for DynMatrix<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        &self * &rhs
    }
}

impl<T: Scalar> DynMatrix<T> {
    /// Transpose: (M×N) → (N×M).
    pub fn transpose(&self) -> Self {
        let mut out = DynMatrix::zeros(self.ncols, self.nrows, T::zero());
        for j in 0..self.ncols {
            for i in 0..self.nrows {
                out[(j, i)] = self[(i, j)];
            }
        }
        out
    }

    /// Matrix-vector product: `A * v`.
    ///
    /// Panics if `v.len() != ncols`.
    pub fn vecmul(&self, v: &DynVector<T>) -> DynVector<T> {
        assert_eq!(v.len(), self.ncols, "vector length mismatch");
        let mut out = DynVector::zeros(self.nrows, T::zero());
        for j in 0..self.ncols {
            let vj = v[j];
            for i in 0..self.nrows {
                out[i] = out[i] + self[(i, j)] * vj;
            }
        }
        out
    }

    /// Reorder rows so that row `i` of the result is row `perm[i]` of `self`.
    ///
    /// Panics if `perm.len() != nrows`.
    pub fn permute_rows(&self, perm: &[usize]) -> Self {
        assert_eq!(perm.len(), self.nrows, "permutation length must match row count");
        let mut out = self.clone();
        for (i, &src) in perm.iter().enumerate() {
            for j in 0..self.ncols {
                out[(i, j)] = self[(src, j)];
            }
        }
        out
    }
}
