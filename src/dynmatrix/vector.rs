use alloc::vec::Vec;
use core::ops::{Index, IndexMut};

use crate::matrix::vector::Vector;
use crate::traits::{Scalar, VectorOps};

use super::DynMatrix;

/// Dynamically-sized vector (wraps a 1×N `DynMatrix`).
///
/// Enforces single-row constraint and provides single-index access `v[i]`.
///
/// # Examples
///
/// ```
/// use factorize::DynVector;
///
/// let v = DynVector::from_slice(&[1.0_f64, 2.0, 3.0]);
/// assert_eq!(v[0], 1.0);
/// assert_eq!(v.len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DynVector<T> {
    pub(crate) inner: DynMatrix<T>,
}

impl<T: Scalar> DynVector<T> {
    /// Create a vector from a flat slice.
    pub fn from_slice(data: &[T]) -> Self {
        Self {
            inner: DynMatrix::from_slice(1, data.len(), data),
        }
    }

    /// Create a vector from an owned `Vec`.
    ///
    /// ```
    /// use factorize::DynVector;
    /// let v = DynVector::from_vec(vec![1.0, 2.0, 3.0]);
    /// assert_eq!(v[2], 3.0);
    /// ```
    pub fn from_vec(data: Vec<T>) -> Self {
        let n = data.len();
        Self {
            inner: DynMatrix::from_vec(1, n, data),
        }
    }

    /// Create a zero vector of length `n`.
    pub fn zeros(n: usize, _zero: T) -> Self {
        Self {
            inner: DynMatrix::zeros(1, n, T::zero()),
        }
    }

    /// Number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.ncols()
    }

    /// Whether the vector is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: Scalar> VectorOps<T> for DynVector<T> {
    #[inline]
    fn dim(&self) -> usize {
        self.len()
    }

    #[inline]
    fn as_slice(&self) -> &[T] {
        self.inner.as_slice()
    }

    #[inline]
    fn as_mut_slice(&mut self) -> &mut [T] {
        self.inner.as_mut_slice()
    }
}

// ── Index ───────────────────────────────────────────────────────────

impl<T> Index<usize> for DynVector<T> {
    type Output = T;

    #[inline]
    fn index(&self, i: usize) -> &T {
        &self.inner[(0, i)]
    }
}

impl<T> IndexMut<usize> for DynVector<T> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut T {
        &mut self.inner[(0, i)]
    }
}

// ── Conversions: Vector ↔ DynVector ─────────────────────────────────

impl<T: Scalar, const N: usize> From<Vector<T, N>> for DynVector<T> {
    /// Convert a fixed-size `Vector` into a `DynVector`.
    ///
    /// ```
    /// use factorize::{Vector, DynVector};
    /// let v = Vector::from_array([1.0, 2.0, 3.0]);
    /// let dv: DynVector<f64> = v.into();
    /// assert_eq!(dv.len(), 3);
    /// assert_eq!(dv[0], 1.0);
    /// ```
    fn from(v: Vector<T, N>) -> Self {
        Self {
            inner: DynMatrix::from(v),
        }
    }
}

impl<T: Scalar, const N: usize> From<&Vector<T, N>> for DynVector<T> {
    fn from(v: &Vector<T, N>) -> Self {
        Self {
            inner: DynMatrix::from(v),
        }
    }
}
