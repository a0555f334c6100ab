use crate::Matrix;

impl<T, const M: usize, const N: usize> Matrix<T, M, N> {
    /// View the entire matrix as a flat slice in column-major order.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.data.as_flattened()
    }

    /// View the entire matrix as a mutable flat slice in column-major order.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.data.as_flattened_mut()
    }

    /// Iterate over all elements in column-major order.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.as_slice().iter()
    }
}
