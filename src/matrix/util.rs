use crate::Matrix;

impl<T: Copy + Default, const M: usize, const N: usize> Matrix<T, M, N> {
    /// Create a matrix by calling `f(row, col)` for each element.
    ///
    /// ```
    /// use factorize::Matrix;
    /// let m: Matrix<f64, 3, 3> = Matrix::from_fn(|i, j| {
    ///     if i == j { 1.0 } else { 0.0 }
    /// });
    /// assert_eq!(m, Matrix::eye());
    /// ```
    pub fn from_fn(f: impl Fn(usize, usize) -> T) -> Self {
        let mut data = [[T::default(); M]; N];
        for (j, col) in data.iter_mut().enumerate() {
            for (i, x) in col.iter_mut().enumerate() {
                *x = f(i, j);
            }
        }
        Self { data }
    }

    /// Reorder rows so that row `i` of the result is row `perm[i]` of `self`.
    ///
    /// With the permutation of an LU factorization,
    /// `a.permute_rows(lu.permutation())` equals `L * U`.
    ///
    /// Panics if `perm.len() != M`.
    pub fn permute_rows(&self, perm: &[usize]) -> Self {
        assert_eq!(perm.len(), M, "permutation length must match row count");
        let mut out = *self;
        for (i, &src) in perm.iter().enumerate() {
            for j in 0..N {
                out.data[j][i] = self.data[j][src];
            }
        }
        out
    }
}
