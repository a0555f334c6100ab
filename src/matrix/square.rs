use crate::matrix::vector::Vector;
use crate::traits::{Scalar, SquareMatrix};
use crate::Matrix;

impl<T: Scalar, const N: usize> SquareMatrix<T> for Matrix<T, N, N> {
    type Vector = Vector<T, N>;
    type Permutation = [usize; N];

    #[inline]
    fn as_col_major(&self) -> &[T] {
        self.as_slice()
    }

    #[inline]
    fn as_col_major_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }

    #[inline]
    fn zero_vector(&self) -> Vector<T, N> {
        Vector::zeros()
    }

    fn identity_permutation(&self) -> [usize; N] {
        let mut p = [0usize; N];
        for (i, pi) in p.iter_mut().enumerate() {
            *pi = i;
        }
        p
    }

    #[inline]
    fn dim(&self) -> usize {
        N
    }

    fn transpose_in_place(&mut self) -> &mut Self {
        *self = self.transpose();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_and_flatten() {
        let mut m = Matrix::new([[5.0, 6.0], [7.0, 8.0]]);
        m.set_identity();
        assert_eq!(m, Matrix::eye());

        m.copy_from_col_major(&[1.0, 3.0, 2.0, 4.0]);
        assert_eq!(m, Matrix::new([[1.0, 2.0], [3.0, 4.0]]));
        assert_eq!(m.as_col_major(), &[1.0, 3.0, 2.0, 4.0]);
    }

    #[test]
    fn multiply_and_premultiply() {
        let a = Matrix::new([[1.0, 2.0], [3.0, 4.0]]);
        let b = Matrix::new([[5.0, 6.0], [7.0, 8.0]]);

        let mut ab = a;
        ab.multiply(&b);
        assert_eq!(ab, a * b);

        let mut ba = a;
        ba.premultiply(&b);
        assert_eq!(ba, b * a);
    }

    #[test]
    fn transpose_in_place_matches_transpose() {
        let a = Matrix::new([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]);
        let mut t = a;
        t.transpose_in_place();
        assert_eq!(t, a.transpose());
    }

    #[test]
    fn row_and_col_vectors() {
        let a = Matrix::new([[1.0, 2.0], [3.0, 4.0]]);
        assert_eq!(a.row_vector(1).as_slice(), &[3.0, 4.0]);
        assert_eq!(a.col_vector(1).as_slice(), &[2.0, 4.0]);
    }

    #[test]
    fn outer_scaled_matches_outer() {
        let a: Matrix<f64, 3, 3> = Matrix::zeros();
        let v = Vector::from_array([1.0, 2.0, 3.0]);
        let expected = Matrix::new([[1.0, 2.0, 3.0], [2.0, 4.0, 6.0], [3.0, 6.0, 9.0]]) * -2.0;
        assert_eq!(a.outer_scaled(&v, -2.0), expected);
    }

    #[test]
    fn transforms() {
        let a = Matrix::new([[1.0, 2.0], [3.0, 4.0]]);
        let v = Vector::from_array([1.0, -1.0]);
        assert_eq!(a.transform(&v), a.vecmul(&v));
        assert_eq!(a.transform_transposed(&v), a.transpose().vecmul(&v));
    }

    #[test]
    fn identity_permutation() {
        let a: Matrix<f64, 4, 4> = Matrix::zeros();
        assert_eq!(a.identity_permutation(), [0, 1, 2, 3]);
    }
}
