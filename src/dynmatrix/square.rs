use alloc::vec::Vec;

use crate::traits::{Scalar, SquareMatrix};

use super::vector::DynVector;
use super::DynMatrix;

impl<T: Scalar> SquareMatrix<T> for DynMatrix<T> {
    type Vector = DynVector<T>;
    type Permutation = Vec<usize>;

    #[inline]
    fn as_col_major(&self) -> &[T] {
        self.as_slice()
    }

    #[inline]
    fn as_col_major_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }

    #[inline]
    fn zero_vector(&self) -> DynVector<T> {
        DynVector::zeros(self.nrows, T::zero())
    }

    fn identity_permutation(&self) -> Vec<usize> {
        (0..self.nrows).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::VectorOps;

    #[test]
    fn identity_in_place() {
        let mut m = DynMatrix::from_rows(2, 2, &[5.0, 6.0, 7.0, 8.0]);
        m.set_identity();
        assert_eq!(m, DynMatrix::eye(2, 0.0));
    }

    #[test]
    fn multiply_matches_operator() {
        let a = DynMatrix::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]);
        let b = DynMatrix::from_rows(2, 2, &[5.0, 6.0, 7.0, 8.0]);

        let mut ab = a.clone();
        ab.multiply(&b);
        assert_eq!(ab, &a * &b);

        let mut ba = a.clone();
        ba.premultiply(&b);
        assert_eq!(ba, &b * &a);
    }

    #[test]
    fn transpose_in_place() {
        let a = DynMatrix::from_rows(3, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]);
        let mut t = a.clone();
        t.transpose_in_place();
        assert_eq!(t, a.transpose());
    }

    #[test]
    fn vectors_and_transforms() {
        let a = DynMatrix::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(a.col_vector(0).as_slice(), &[1.0, 3.0]);
        assert_eq!(a.row_vector(0).as_slice(), &[1.0, 2.0]);

        let v = DynVector::from_slice(&[1.0, -1.0]);
        assert_eq!(a.transform(&v), a.vecmul(&v));
        assert_eq!(a.transform_transposed(&v), a.transpose().vecmul(&v));
    }

    #[test]
    fn identity_permutation() {
        let a = DynMatrix::zeros(3, 3, 0.0_f64);
        assert_eq!(a.identity_permutation(), vec![0, 1, 2]);
        assert_eq!(a.zero_vector().dim(), 3);
    }
}
