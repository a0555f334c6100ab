//! # factorize
//!
//! Dense LU and QR factorizations for small square systems, no-std
//! compatible. The solvers are written once against a narrow capability
//! interface and run on both stack-allocated and heap-allocated matrices.
//!
//! ## Quick start
//!
//! ```
//! use factorize::{Matrix, Vector};
//!
//! // Solve a linear system Ax = b
//! let a = Matrix::new([
//!     [3.0_f64, -0.1, -0.2],
//!     [0.1, 7.0, -0.3],
//!     [0.3, -0.2, 10.0],
//! ]);
//! let b = Vector::from_array([7.85, -19.3, 71.4]);
//!
//! let lu = a.solve(&b).unwrap(); // x = [3, -2.5, 7]
//! let qr = a.solve_qr(&b).unwrap();
//! assert!(!lu.is_rank_deficient());
//! assert!((lu.x[2] - qr.x[2]).abs() < 1e-12);
//! ```
//!
//! ## Modules
//!
//! - [`matrix`]: fixed-size `Matrix<T, M, N>` with const-generic dimensions,
//!   column-major `[[T; M]; N]` storage. [`Vector<T, N>`] is a 1-row matrix.
//!
//! - [`dynmatrix`]: heap-allocated `DynMatrix<T>` / [`DynVector<T>`] with
//!   runtime dimensions (requires the `alloc` feature, included with `std`).
//!
//! - [`linalg`]: [`LuSolver`] (scaled partial pivoting, Crout ordering),
//!   [`QrSolver`] (Householder reflections), the numeric
//!   [`primitives`](linalg::primitives) they share, and [`Solution`] which
//!   reports free unknowns met during back substitution.
//!
//! - [`traits`]: element traits ([`Scalar`], [`FloatScalar`]), storage access
//!   ([`MatrixRef`], [`MatrixMut`]) and the capabilities the solvers consume
//!   ([`SquareMatrix`], [`VectorOps`]).
//!
//! ## Logging
//!
//! Diagnostics go through the [`log`](https://docs.rs/log) facade under the
//! target `"factorize"`: `warn` for every free unknown, `trace` for pivot
//! swaps and reflections. No logger is installed by the crate.
//!
//! ## Cargo features
//!
//! | Feature   | Default  | Description |
//! |-----------|----------|-------------|
//! | `std`     | yes      | Implies `alloc`. Hardware FPU via system libm |
//! | `alloc`   | via std  | `DynMatrix` / `DynVector` and allocating helpers |
//! | `libm`    | baseline | Pure-Rust software float fallback |

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "alloc")]
pub mod dynmatrix;
pub mod linalg;
pub mod matrix;
pub mod traits;

pub use matrix::aliases::{
    Matrix1, Matrix2, Matrix3, Matrix4, Matrix5, Matrix6, Vector1, Vector2, Vector3, Vector4,
    Vector5, Vector6,
};
pub use matrix::vector::Vector;
pub use matrix::Matrix;

#[cfg(feature = "alloc")]
pub use dynmatrix::{DynLu, DynMatrix, DynQr, DynVector};
pub use linalg::{
    LinalgError, Lu, LuFactors, LuSolver, Qr, QrFactors, QrSolver, Solution, SolveSettings,
};
pub use traits::{FloatScalar, MatrixMut, MatrixRef, Scalar, SquareMatrix, VectorOps};
