//! Dense matrix product for zero-origin grids.
use std::ops::{AddAssign, Mul};

use num_traits::{One, Zero};

use crate::error::ArithError;
use crate::math::Array2;

/// Matrix product `a · b`.
///
/// Requires `a.dim2() == b.dim1()`. Each entry is accumulated from
/// `T::zero()` in increasing `k`, with no blocking or compensated
/// summation, so results match a textbook triple loop exactly.
pub fn matmult<T>(a: &Array2<T>, b: &Array2<T>) -> Result<Array2<T>, ArithError>
where
    T: Clone + Zero + Mul<Output = T> + AddAssign,
{
    if a.ncols() != b.nrows() {
        let err = ArithError::InnerDimensionMismatch {
            lhs: a.shape(),
            rhs: b.shape(),
        };
        log::debug!("{}", err);
        return Err(err);
    }

    let (m, n) = a.shape();
    let k = b.ncols();
    let mut c = Array2::zeros((m, k));
    for i in 0..m {
        for j in 0..k {
            let mut sum = T::zero();
            for p in 0..n {
                sum += a[(i, p)].clone() * b[(p, j)].clone();
            }
            c[(i, j)] = sum;
        }
    }
    Ok(c)
}

/// The `n x n` identity matrix.
pub fn identity<T>(n: usize) -> Array2<T>
where
    T: Clone + Zero + One,
{
    let mut eye = Array2::zeros((n, n));
    for i in 0..n {
        eye[(i, i)] = T::one();
    }
    eye
}

impl<T> Array2<T>
where
    T: Clone + Zero + Mul<Output = T> + AddAssign,
{
    pub fn matmult(&self, rhs: &Array2<T>) -> Result<Array2<T>, ArithError> {
        matmult(self, rhs)
    }
}

impl<T> Array2<T>
where
    T: Clone + Zero + One,
{
    pub fn eye(n: usize) -> Self {
        identity(n)
    }
}
