//! Small ndarray-like containers used throughout the crate.
//!
//! Provides `Array1` (1D), `Grid` (2D) and `Volume` (3D), the latter two
//! generic over their index origin so that the zero-origin and Fortran-style
//! families share one implementation.
pub mod dense;
pub mod matrix;
pub mod vector;
pub mod volume;

pub use dense::{DenseArray, OneBased, Origin, ZeroBased};
pub use matrix::{Array2, FortranArray2, Grid};
pub use vector::Array1;
pub use volume::{Array3, FortranArray3, Volume};
