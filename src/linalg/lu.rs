use core::marker::PhantomData;

use crate::linalg::primitives::{
    find_largest_in_row, swap_array_elements, swap_matrix_array_rows, swap_vector_components,
};
use crate::linalg::{back_substitute, square_dim, LinalgError, Solution, SolveSettings, LOG_TARGET};
use crate::matrix::vector::Vector;
use crate::traits::{FloatScalar, SquareMatrix, VectorOps};
use crate::Matrix;

/// LU decomposition with scaled partial pivoting (Crout ordering).
///
/// Stateless: [`decompose`](Self::decompose) produces the packed factors and
/// permutation, [`solve_linear`](Self::solve_linear) consumes them.
///
/// # Example
///
/// ```
/// use factorize::{LuSolver, Matrix, Vector};
///
/// let a = Matrix::new([
///     [3.0_f64, -0.1, -0.2],
///     [0.1, 7.0, -0.3],
///     [0.3, -0.2, 10.0],
/// ]);
/// let lu = LuSolver::decompose(&a).unwrap();
/// let b = Vector::from_array([7.85, -19.3, 71.4]);
/// let sol = LuSolver::solve_linear(lu.packed(), lu.permutation(), &b).unwrap();
/// assert!((sol.x[0] - 3.0).abs() < 1e-14);
/// assert!((sol.x[1] + 2.5).abs() < 1e-14);
/// assert!((sol.x[2] - 7.0).abs() < 1e-14);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct LuSolver;

impl LuSolver {
    /// Factor `P A = L U`.
    ///
    /// Each row is scaled by its largest magnitude when choosing pivots. A row
    /// of zeros fails with [`LinalgError::Singular`]; any other rank
    /// deficiency surfaces later as free unknowns in [`Solution`].
    pub fn decompose<T, M>(a: &M) -> Result<LuFactors<T, M>, LinalgError>
    where
        T: FloatScalar,
        M: SquareMatrix<T>,
    {
        let n = square_dim(a)?;
        let mut lu = a.clone();
        let mut perm = lu.identity_permutation();
        let mut scalers = lu.zero_vector();
        let mut swaps = 0;

        let values = lu.as_col_major_mut();

        for i in 0..n {
            let col = find_largest_in_row(values, n, i);
            let scaler = values[col * n + i].abs();
            if scaler == T::zero() {
                return Err(LinalgError::Singular);
            }
            scalers.set_component(i, scaler);
        }

        for j in 0..n {
            // Upper part of column j
            for i in 0..j {
                let mut sum = T::zero();
                for k in 0..i {
                    sum = sum + values[k * n + i] * values[j * n + k];
                }
                values[j * n + i] = values[j * n + i] - sum;
            }

            // Diagonal and below, choosing the pivot row
            let mut pivot_row = j;
            let mut best = T::zero();
            for i in j..n {
                let mut sum = T::zero();
                for k in 0..j {
                    sum = sum + values[k * n + i] * values[j * n + k];
                }
                values[j * n + i] = values[j * n + i] - sum;

                let test = values[j * n + i].abs() / scalers.component(i);
                if test > best {
                    best = test;
                    pivot_row = i;
                }
            }

            if pivot_row != j {
                log::trace!(target: LOG_TARGET, "lu: column {} pivots on row {}", j, pivot_row);
                swap_matrix_array_rows(values, n, j, pivot_row)?;
                swap_array_elements(perm.as_mut(), j, pivot_row);
                swap_vector_components(&mut scalers, j, pivot_row);
                swaps += 1;
            }

            // An all-zero candidate column stays zero instead of 0/0
            if j + 1 < n && best > T::zero() {
                let pivot = values[j * n + j];
                for x in values[j * n + j + 1..(j + 1) * n].iter_mut() {
                    *x = *x / pivot;
                }
            }
        }

        Ok(LuFactors {
            lu,
            perm,
            swaps,
            _scalar: PhantomData,
        })
    }

    /// Solve `A x = b` from the packed factors and permutation of
    /// [`decompose`](Self::decompose).
    pub fn solve_linear<T, M>(
        lu: &M,
        perm: &[usize],
        b: &M::Vector,
    ) -> Result<Solution<T, M::Vector>, LinalgError>
    where
        T: FloatScalar,
        M: SquareMatrix<T>,
    {
        Self::solve_linear_with(lu, perm, b, &SolveSettings::default())
    }

    /// [`solve_linear`](Self::solve_linear) with an explicit pivot tolerance.
    ///
    /// Fails with [`LinalgError::RowIndexOutOfBounds`] if `perm` names a row
    /// past the end of `b`.
    pub fn solve_linear_with<T, M>(
        lu: &M,
        perm: &[usize],
        b: &M::Vector,
        settings: &SolveSettings<T>,
    ) -> Result<Solution<T, M::Vector>, LinalgError>
    where
        T: FloatScalar,
        M: SquareMatrix<T>,
    {
        let n = square_dim(lu)?;
        for got in [b.dim(), perm.len()] {
            if got != n {
                return Err(LinalgError::DimensionMismatch { expected: n, got });
            }
        }
        if let Some(&index) = perm.iter().find(|&&p| p >= n) {
            return Err(LinalgError::RowIndexOutOfBounds { index, dim: n });
        }

        let rhs = b.as_slice();
        let mut x = lu.zero_vector();
        let xs = x.as_mut_slice();

        // L y = P b, unit diagonal
        for i in 0..n {
            let mut sum = T::zero();
            for k in 0..i {
                sum = sum + *lu.get(i, k) * xs[k];
            }
            xs[i] = rhs[perm[i]] - sum;
        }

        let (free_unknowns, min_pivot) = back_substitute(lu, xs, settings);

        Ok(Solution {
            x,
            free_unknowns,
            min_pivot,
        })
    }
}

/// Result of [`LuSolver::decompose`].
///
/// Holds `L` (unit diagonal, not stored) and `U` packed into one matrix,
/// together with the row permutation `P` such that `P A = L U`.
#[derive(Debug, Clone)]
pub struct LuFactors<T, M: SquareMatrix<T>>
where
    T: FloatScalar,
{
    lu: M,
    perm: M::Permutation,
    swaps: usize,
    _scalar: PhantomData<T>,
}

/// LU factors of a fixed-size matrix.
pub type Lu<T, const N: usize> = LuFactors<T, Matrix<T, N, N>>;

impl<T: FloatScalar, M: SquareMatrix<T>> LuFactors<T, M> {
    /// Packed `L \ U` matrix.
    #[inline]
    pub fn packed(&self) -> &M {
        &self.lu
    }

    /// `P[i]` is the row of `A` that ended up in row `i`.
    #[inline]
    pub fn permutation(&self) -> &[usize] {
        self.perm.as_ref()
    }

    /// Number of row exchanges performed.
    #[inline]
    pub fn swaps(&self) -> usize {
        self.swaps
    }

    /// Unit lower triangular factor.
    pub fn lower(&self) -> M {
        let mut l = self.lu.clone();
        let n = l.dim();
        for j in 0..n {
            for i in 0..=j {
                l.set(i, j, if i == j { T::one() } else { T::zero() });
            }
        }
        l
    }

    /// Upper triangular factor.
    pub fn upper(&self) -> M {
        let mut u = self.lu.clone();
        let n = u.dim();
        for j in 0..n {
            for x in u.col_as_mut_slice(j, j + 1).iter_mut() {
                *x = T::zero();
            }
        }
        u
    }

    /// Solve `A x = b`.
    pub fn solve(&self, b: &M::Vector) -> Result<Solution<T, M::Vector>, LinalgError> {
        LuSolver::solve_linear(&self.lu, self.permutation(), b)
    }

    /// Solve `A x = b`, flagging pivots at or below `settings.pivot_tol` as
    /// free unknowns.
    pub fn solve_with(
        &self,
        b: &M::Vector,
        settings: &SolveSettings<T>,
    ) -> Result<Solution<T, M::Vector>, LinalgError> {
        LuSolver::solve_linear_with(&self.lu, self.permutation(), b, settings)
    }

    /// Determinant, signed by the parity of the row exchanges.
    pub fn det(&self) -> T {
        let mut d = if self.swaps % 2 == 0 {
            T::one()
        } else {
            -T::one()
        };
        for i in 0..self.lu.dim() {
            d = d * *self.lu.get(i, i);
        }
        d
    }

    /// Inverse by solving against each column of the identity.
    ///
    /// Fails with [`LinalgError::Singular`] when any pivot is zero.
    pub fn inverse(&self) -> Result<M, LinalgError> {
        let n = self.lu.dim();
        let mut inv = self.lu.clone();
        let mut e = self.lu.zero_vector();
        for col in 0..n {
            e.set_scalar(T::zero());
            e.set_component(col, T::one());
            let sol = self.solve(&e)?;
            if sol.is_rank_deficient() {
                return Err(LinalgError::Singular);
            }
            inv.col_as_mut_slice(col, 0).copy_from_slice(sol.x.as_slice());
        }
        Ok(inv)
    }
}

/// Convenience methods on square matrices.
impl<T: FloatScalar, const N: usize> Matrix<T, N, N> {
    /// LU decomposition with scaled partial pivoting.
    pub fn lu(&self) -> Result<Lu<T, N>, LinalgError> {
        LuSolver::decompose(self)
    }

    /// Solve `A x = b` through LU.
    ///
    /// ```
    /// use factorize::{Matrix, Vector};
    ///
    /// let a = Matrix::new([
    ///     [2.0_f64, 1.0, -1.0],
    ///     [-3.0, -1.0, 2.0],
    ///     [-2.0, 1.0, 2.0],
    /// ]);
    /// let b = Vector::from_array([8.0, -11.0, -3.0]);
    /// let x = a.solve(&b).unwrap().x;
    /// assert!((x[0] - 2.0).abs() < 1e-12);
    /// assert!((x[1] - 3.0).abs() < 1e-12);
    /// assert!((x[2] + 1.0).abs() < 1e-12);
    /// ```
    pub fn solve(&self, b: &Vector<T, N>) -> Result<Solution<T, Vector<T, N>>, LinalgError> {
        self.lu()?.solve(b)
    }

    /// Determinant via LU. A matrix with a zero row has determinant zero.
    pub fn det(&self) -> T {
        match self.lu() {
            Ok(lu) => lu.det(),
            Err(_) => T::zero(),
        }
    }

    /// Matrix inverse via LU.
    pub fn inverse(&self) -> Result<Self, LinalgError> {
        self.lu()?.inverse()
    }
}
