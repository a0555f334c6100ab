use crate::linalg::{LinalgError, LuFactors, LuSolver, QrFactors, QrSolver, Solution};
use crate::traits::FloatScalar;

use super::vector::DynVector;
use super::DynMatrix;

/// LU factors of a dynamically-sized matrix.
///
/// # Example
///
/// ```
/// use factorize::{DynMatrix, DynVector};
///
/// let a = DynMatrix::from_rows(2, 2, &[2.0_f64, 1.0, 5.0, 3.0]);
/// let lu = a.lu().unwrap();
///
/// let b = DynVector::from_slice(&[4.0, 11.0]);
/// let x = lu.solve(&b).unwrap().x;
/// assert!((x[0] - 1.0).abs() < 1e-12);
/// assert!((x[1] - 2.0).abs() < 1e-12);
/// assert!((lu.det() - 1.0).abs() < 1e-12);
/// ```
pub type DynLu<T> = LuFactors<T, DynMatrix<T>>;

/// QR factors of a dynamically-sized matrix.
pub type DynQr<T> = QrFactors<T, DynMatrix<T>>;

impl<T: FloatScalar> DynMatrix<T> {
    /// LU decomposition with scaled partial pivoting.
    ///
    /// Fails with [`LinalgError::NotSquare`] for rectangular matrices.
    pub fn lu(&self) -> Result<DynLu<T>, LinalgError> {
        LuSolver::decompose(self)
    }

    /// QR decomposition using Householder reflections.
    pub fn qr(&self) -> Result<DynQr<T>, LinalgError> {
        QrSolver::decompose(self)
    }

    /// Solve `A x = b` through LU.
    pub fn solve(&self, b: &DynVector<T>) -> Result<Solution<T, DynVector<T>>, LinalgError> {
        self.lu()?.solve(b)
    }

    /// Solve `A x = b` through QR.
    ///
    /// ```
    /// use factorize::{DynMatrix, DynVector};
    ///
    /// let a = DynMatrix::from_rows(4, 4, &[
    ///     2.0_f64, -1.0, 1.0, 1.0,
    ///     1.0, 2.0, -1.0, -1.0,
    ///     -1.0, 2.0, 2.0, 2.0,
    ///     1.0, -1.0, 2.0, 1.0,
    /// ]);
    /// let b = DynVector::from_slice(&[6.0, 3.0, 14.0, 8.0]);
    /// let x = a.solve_qr(&b).unwrap().x;
    /// assert!((x[0] - 2.0).abs() < 1e-12);
    /// assert!((x[3] - 1.0).abs() < 1e-12);
    /// ```
    pub fn solve_qr(&self, b: &DynVector<T>) -> Result<Solution<T, DynVector<T>>, LinalgError> {
        self.qr()?.solve(b)
    }

    /// Determinant via LU.
    ///
    /// A matrix with a zero row has determinant zero; only `NotSquare` is an
    /// error.
    pub fn det(&self) -> Result<T, LinalgError> {
        match self.lu() {
            Ok(lu) => Ok(lu.det()),
            Err(LinalgError::Singular) => Ok(T::zero()),
            Err(e) => Err(e),
        }
    }

    /// Matrix inverse via LU.
    pub fn inverse(&self) -> Result<Self, LinalgError> {
        self.lu()?.inverse()
    }
}
