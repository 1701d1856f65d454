//! dense-arith: conformance-checked arithmetic on small dense arrays.
//!
//! This crate provides 1D, 2D and 3D row-major containers in zero-origin and
//! one-origin ("Fortran-style") flavours, element-wise `+ - * /` and their
//! compound forms, a reference matrix product, and a whitespace-separated
//! text layout for reading and writing every container.
//!
//! Shape mismatches are reported through [`ArithError`] instead of an empty
//! result, so `(&a + &b)?` either yields a fully populated container or an
//! error naming both shapes.
pub mod config;
pub mod error;
pub mod interop;
pub mod io;
pub mod linalg;
pub mod math;
pub mod ops;

pub use config::{ArithConfig, MismatchAction};
pub use error::{ArithError, BinaryOp, ShapeError};
pub use io::TextFormat;
pub use linalg::{identity, matmult};
pub use math::{
    Array1, Array2, Array3, DenseArray, FortranArray2, FortranArray3, Grid, OneBased, Origin,
    Volume, ZeroBased,
};
pub use ops::Elementwise;
