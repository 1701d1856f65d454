//! The capability set shared by every container in this crate.
//!
//! Element-wise arithmetic and the text format are written once against
//! [`DenseArray`]; the concrete containers only describe their shape and
//! hand out their row-major storage.
use std::fmt;

use crate::error::ShapeError;

/// Index origin of a container: `0` for C-style, `1` for Fortran-style.
pub trait Origin: Copy + Default + fmt::Debug + PartialEq + Eq + 'static {
    const BASE: usize;

    /// Translate a user-facing index along an axis of length `extent` into a
    /// zero-based position, panicking when it falls outside the axis.
    #[inline]
    fn position(index: usize, extent: usize, axis: usize) -> usize {
        assert!(
            index >= Self::BASE && index - Self::BASE < extent,
            "index {} out of bounds for axis {} (valid range {}..{})",
            index,
            axis,
            Self::BASE,
            extent + Self::BASE
        );
        index - Self::BASE
    }
}

/// Zero-origin indexing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ZeroBased;

/// One-origin ("Fortran-style") indexing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct OneBased;

impl Origin for ZeroBased {
    const BASE: usize = 0;
}

impl Origin for OneBased {
    const BASE: usize = 1;
}

/// A rectangular container backed by a contiguous row-major buffer.
///
/// `Default` must produce the empty container (every extent zero) and
/// `Clone` must copy both shape and contents.
pub trait DenseArray: Sized + Clone + Default {
    type Elem;
    type Shape: Copy + PartialEq + Eq + fmt::Debug;

    fn shape(&self) -> Self::Shape;

    /// Extents as a vector, outermost first.
    fn dims(&self) -> Vec<usize>;

    fn as_slice(&self) -> &[Self::Elem];

    fn as_mut_slice(&mut self) -> &mut [Self::Elem];

    fn from_shape_vec(shape: Self::Shape, data: Vec<Self::Elem>) -> Result<Self, ShapeError>;

    /// Whether `self` and `other` have identical extents.
    fn conforms(&self, other: &Self) -> bool {
        self.shape() == other.shape()
    }
}

fn checked_count(dims: &[usize]) -> Option<usize> {
    dims.iter().try_fold(1usize, |acc, &d| acc.checked_mul(d))
}

/// Number of elements spanned by `dims`.
///
/// Panics with a capacity overflow when the product does not fit in `usize`,
/// the same way `Vec::with_capacity` fails for an impossible length.
pub(crate) fn element_count(dims: &[usize]) -> usize {
    match checked_count(dims) {
        Some(n) => n,
        None => panic!("capacity overflow: extents {:?} exceed usize::MAX elements", dims),
    }
}

/// Check that a buffer of `len` elements fills the given extents exactly.
pub(crate) fn check_len(dims: &[usize], len: usize) -> Result<(), ShapeError> {
    match checked_count(dims) {
        Some(n) if n == len => Ok(()),
        _ => Err(ShapeError::new(dims, len)),
    }
}
