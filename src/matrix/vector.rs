use core::ops::{Index, IndexMut};

use crate::traits::{Scalar, VectorOps};
use crate::Matrix;

/// A row vector (1×N matrix).
///
/// Vectors support single-index access (`v[i]`). Right-hand sides and solutions of the solvers are `Vector`s.
///
/// # Examples
///
/// ```
/// use factorize::Vector;
///
/// let v = Vector::from_array([3.0_f64, 4.0]);
/// assert_eq!(v[0], 3.0);
/// assert_eq!(v.len(), 2);
/// ```
pub type Vector<T, const N: usize> = Matrix<T, 1, N>;

impl<T: Scalar, const N: usize> Vector<T, N> {
    /// Create a vector from a 1D array.
    ///
    /// ```
    /// use factorize::Vector;
    /// let v = Vector::from_array([1.0, 2.0, 3.0]);
    /// assert_eq!(v[0], 1.0);
    /// ```
    #[inline]
    pub fn from_array(data: [T; N]) -> Self {
        Self::new([data])
    }

    /// Number of elements.
    #[inline]
    pub const fn len(&self) -> usize {
        N
    }
}

impl<T: Scalar, const N: usize> VectorOps<T> for Vector<T, N> {
    #[inline]
    fn dim(&self) -> usize {
        N
    }

    #[inline]
    fn as_slice(&self) -> &[T] {
        self.data.as_flattened()
    }

    #[inline]
    fn as_mut_slice(&mut self) -> &mut [T] {
        self.data.as_flattened_mut()
    }
}

// Single-index access: v[i] instead of v[(0, i)]
impl<T, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, i: usize) -> &T {
        &self[(0, i)]
    }
}

impl<T, const N: usize> IndexMut<usize> for Vector<T, N> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut T {
        &mut self[(0, i)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_array_and_index() {
        let v = Vector::from_array([1.0, 2.0, 3.0]);
        assert_eq!(v[0], 1.0);
        assert_eq!(v[2], 3.0);
        assert_eq!(v.len(), 3);
    }

    #[test]
    fn set_scalar() {
        let mut v = Vector::from_array([2.5_f64; 4]);
        v.set_scalar(0.0);
        assert_eq!(v.as_slice(), &[0.0; 4]);
    }

    #[test]
    fn vector_ops_components() {
        let mut v = Vector::from_array([1.0, 2.0, 3.0]);
        assert_eq!(v.dim(), 3);
        assert_eq!(v.component(1), 2.0);
        v.set_component(1, -2.0);
        assert_eq!(v[1], -2.0);
        assert_eq!(v.as_slice(), &[1.0, -2.0, 3.0]);
    }
}
