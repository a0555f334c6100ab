use core::fmt::Debug;
use num_traits::{Float, Num, One, Zero};

/// Trait for types that can be used as matrix elements.
///
/// Blanket-implemented for all types satisfying the bounds.
/// Covers `f32`, `f64`, and all integer types.
pub trait Scalar: Copy + PartialEq + Debug + Zero + One + Num {}

impl<T: Copy + PartialEq + Debug + Zero + One + Num> Scalar for T {}

/// Trait for floating-point matrix elements.
///
/// Required by the factorizations and the numeric primitives
/// (`sqrt`, `abs`, ordered comparisons).
pub trait FloatScalar: Scalar + Float {}

impl<T: Scalar + Float> FloatScalar for T {}

/// Read-only access to a matrix-like type.
///
/// Storage is column-major: column `col` occupies a contiguous run of
/// `nrows()` elements.
pub trait MatrixRef<T> {
    fn nrows(&self) -> usize;
    fn ncols(&self) -> usize;
    fn get(&self, row: usize, col: usize) -> &T;

    /// Column `col` from row `row_start` to the end, as a contiguous slice.
    fn col_as_slice(&self, col: usize, row_start: usize) -> &[T];
}

/// Mutable access to a matrix-like type.
pub trait MatrixMut<T>: MatrixRef<T> {
    fn get_mut(&mut self, row: usize, col: usize) -> &mut T;

    fn col_as_mut_slice(&mut self, col: usize, row_start: usize) -> &mut [T];
}

/// Vector capabilities consumed by the solvers.
///
/// Implemented by the fixed-size [`Vector`](crate::Vector) and, with the
/// `alloc` feature, by [`DynVector`](crate::DynVector).
pub trait VectorOps<T: Scalar>: Clone {
    /// Number of components.
    fn dim(&self) -> usize;

    /// Contiguous view of the components.
    fn as_slice(&self) -> &[T];

    fn as_mut_slice(&mut self) -> &mut [T];

    #[inline]
    fn component(&self, i: usize) -> T {
        self.as_slice()[i]
    }

    #[inline]
    fn set_component(&mut self, i: usize, value: T) {
        self.as_mut_slice()[i] = value;
    }

    /// Fill every component with `value`.
    fn set_scalar(&mut self, value: T) -> &mut Self {
        for x in self.as_mut_slice().iter_mut() {
            *x = value;
        }
        self
    }
}

/// Square dense matrix capabilities consumed by the LU and QR solvers.
///
/// Implementors provide storage access (column-major flattening, a vector of
/// matching dimension, an identity permutation); everything else has a
/// default implementation written against [`MatrixMut`].
///
/// Non-square `DynMatrix` values implement the trait too; the solvers reject
/// them with [`LinalgError::NotSquare`](crate::linalg::LinalgError::NotSquare).
///
/// ```
/// use factorize::{Matrix, SquareMatrix, Vector};
///
/// let mut a = Matrix::new([[1.0_f64, 2.0], [3.0, 4.0]]);
/// a.transpose_in_place();
/// assert_eq!(a[(0, 1)], 3.0);
///
/// let y = a.transform(&Vector::from_array([1.0, 1.0]));
/// assert_eq!(y[0], 4.0);
/// assert_eq!(y[1], 6.0);
/// ```
pub trait SquareMatrix<T: Scalar>: MatrixMut<T> + Clone {
    /// Vector type of the same dimension.
    type Vector: VectorOps<T>;

    /// Row permutation storage.
    type Permutation: AsRef<[usize]> + AsMut<[usize]> + Clone + Debug;

    /// All elements in column-major order.
    fn as_col_major(&self) -> &[T];

    fn as_col_major_mut(&mut self) -> &mut [T];

    /// A zero vector with `nrows()` components.
    fn zero_vector(&self) -> Self::Vector;

    /// `[0, 1, ..., nrows() - 1]`.
    fn identity_permutation(&self) -> Self::Permutation;

    #[inline]
    fn dim(&self) -> usize {
        self.nrows()
    }

    #[inline]
    fn set(&mut self, row: usize, col: usize, value: T) {
        *self.get_mut(row, col) = value;
    }

    /// Overwrite every element from a column-major slice.
    ///
    /// Panics if the lengths differ.
    fn copy_from_col_major(&mut self, values: &[T]) -> &mut Self {
        self.as_col_major_mut().copy_from_slice(values);
        self
    }

    /// Reset to the identity in place.
    fn set_identity(&mut self) -> &mut Self {
        let n = self.dim();
        for j in 0..n {
            for i in 0..n {
                *self.get_mut(i, j) = if i == j { T::one() } else { T::zero() };
            }
        }
        self
    }

    /// `self = self * rhs`.
    fn multiply(&mut self, rhs: &Self) -> &mut Self {
        let lhs = self.clone();
        mul_into(&lhs, rhs, self);
        self
    }

    /// `self = lhs * self`.
    fn premultiply(&mut self, lhs: &Self) -> &mut Self {
        let rhs = self.clone();
        mul_into(lhs, &rhs, self);
        self
    }

    fn transpose_in_place(&mut self) -> &mut Self {
        let n = self.dim();
        for j in 0..n {
            for i in (j + 1)..n {
                let tmp = *self.get(i, j);
                *self.get_mut(i, j) = *self.get(j, i);
                *self.get_mut(j, i) = tmp;
            }
        }
        self
    }

    /// Row `i` as a vector.
    fn row_vector(&self, i: usize) -> Self::Vector {
        let mut v = self.zero_vector();
        for j in 0..self.ncols() {
            v.set_component(j, *self.get(i, j));
        }
        v
    }

    /// Column `j` as a vector.
    fn col_vector(&self, j: usize) -> Self::Vector {
        let mut v = self.zero_vector();
        v.as_mut_slice().copy_from_slice(self.col_as_slice(j, 0));
        v
    }

    /// `s * v * v^T`, shaped like `self`.
    fn outer_scaled(&self, v: &Self::Vector, s: T) -> Self {
        let mut out = self.clone();
        let n = self.dim();
        for j in 0..n {
            let vj = v.component(j) * s;
            for i in 0..n {
                *out.get_mut(i, j) = v.component(i) * vj;
            }
        }
        out
    }

    /// `A * v`.
    fn transform(&self, v: &Self::Vector) -> Self::Vector {
        let n = self.dim();
        let mut out = self.zero_vector();
        for j in 0..n {
            let vj = v.component(j);
            for (o, a) in out.as_mut_slice().iter_mut().zip(self.col_as_slice(j, 0)) {
                *o = *o + *a * vj;
            }
        }
        out
    }

    /// `A^T * v`.
    fn transform_transposed(&self, v: &Self::Vector) -> Self::Vector {
        let n = self.dim();
        let mut out = self.zero_vector();
        for j in 0..n {
            let mut sum = T::zero();
            for (a, x) in self.col_as_slice(j, 0).iter().zip(v.as_slice()) {
                sum = sum + *a * *x;
            }
            out.set_component(j, sum);
        }
        out
    }
}

/// `out = lhs * rhs` for square operands of equal dimension.
fn mul_into<T: Scalar, M: MatrixMut<T>>(lhs: &M, rhs: &M, out: &mut M) {
    let n = lhs.nrows();
    for j in 0..n {
        for i in 0..n {
            let mut sum = T::zero();
            for k in 0..n {
                sum = sum + *lhs.get(i, k) * *rhs.get(k, j);
            }
            *out.get_mut(i, j) = sum;
        }
    }
}
