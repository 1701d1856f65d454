use std::marker::PhantomData;
use std::ops::{Index, IndexMut};
use std::slice::Iter;

use num_traits::{One, Zero};

use crate::error::ShapeError;
use crate::math::dense::{check_len, element_count, DenseArray, OneBased, Origin, ZeroBased};

/// Three-dimensional row-major block, last index fastest.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Volume<T, O: Origin> {
    data: Vec<T>,
    dims: (usize, usize, usize),
    origin: PhantomData<O>,
}

pub type Array3<T> = Volume<T, ZeroBased>;

/// One-origin volume, indexed as `a[(i, j, k)]`.
pub type FortranArray3<T> = Volume<T, OneBased>;

impl<T, O: Origin> Default for Volume<T, O> {
    fn default() -> Self {
        Self {
            data: Vec::new(),
            dims: (0, 0, 0),
            origin: PhantomData,
        }
    }
}

impl<T, O: Origin> Volume<T, O> {
    pub fn from_shape_vec(shape: (usize, usize, usize), data: Vec<T>) -> Result<Self, ShapeError> {
        check_len(&[shape.0, shape.1, shape.2], data.len())?;
        Ok(Self {
            data,
            dims: shape,
            origin: PhantomData,
        })
    }

    /// Build without checking; `data.len()` must equal the product of `shape`.
    pub(crate) fn from_raw_parts(shape: (usize, usize, usize), data: Vec<T>) -> Self {
        debug_assert_eq!(data.len(), element_count(&[shape.0, shape.1, shape.2]));
        Self {
            data,
            dims: shape,
            origin: PhantomData,
        }
    }

    pub fn dim1(&self) -> usize {
        self.dims.0
    }

    pub fn dim2(&self) -> usize {
        self.dims.1
    }

    pub fn dim3(&self) -> usize {
        self.dims.2
    }

    pub fn shape(&self) -> (usize, usize, usize) {
        self.dims
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.data.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    #[inline]
    fn offset(&self, i: usize, j: usize, k: usize) -> usize {
        let (m, n, p) = self.dims;
        (O::position(i, m, 0) * n + O::position(j, n, 1)) * p + O::position(k, p, 2)
    }

    /// The `(dim2, dim3)` plane at first index `i`, as a flat row-major slice.
    pub fn plane_slice(&self, i: usize) -> &[T] {
        let (m, n, p) = self.dims;
        let start = O::position(i, m, 0) * n * p;
        &self.data[start..start + n * p]
    }

    pub fn mapv<U, F>(&self, mut f: F) -> Volume<U, O>
    where
        F: FnMut(&T) -> U,
    {
        Volume {
            data: self.data.iter().map(|v| f(v)).collect(),
            dims: self.dims,
            origin: PhantomData,
        }
    }

    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.data.clone()
    }
}

impl<T: Clone, O: Origin> Volume<T, O> {
    pub fn from_elem(shape: (usize, usize, usize), value: T) -> Self {
        Self {
            data: vec![value; element_count(&[shape.0, shape.1, shape.2])],
            dims: shape,
            origin: PhantomData,
        }
    }
}

impl<T: Clone + Zero, O: Origin> Volume<T, O> {
    pub fn zeros(shape: (usize, usize, usize)) -> Self {
        Self::from_elem(shape, T::zero())
    }
}

impl<T: Clone + One, O: Origin> Volume<T, O> {
    pub fn ones(shape: (usize, usize, usize)) -> Self {
        Self::from_elem(shape, T::one())
    }
}

impl<T: Clone, O: Origin> DenseArray for Volume<T, O> {
    type Elem = T;
    type Shape = (usize, usize, usize);

    fn shape(&self) -> (usize, usize, usize) {
        self.dims
    }

    fn dims(&self) -> Vec<usize> {
        vec![self.dims.0, self.dims.1, self.dims.2]
    }

    fn as_slice(&self) -> &[T] {
        &self.data
    }

    fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    fn from_shape_vec(shape: (usize, usize, usize), data: Vec<T>) -> Result<Self, ShapeError> {
        Volume::from_shape_vec(shape, data)
    }
}

impl<T, O: Origin> Index<(usize, usize, usize)> for Volume<T, O> {
    type Output = T;

    fn index(&self, index: (usize, usize, usize)) -> &Self::Output {
        let offset = self.offset(index.0, index.1, index.2);
        &self.data[offset]
    }
}

impl<T, O: Origin> IndexMut<(usize, usize, usize)> for Volume<T, O> {
    fn index_mut(&mut self, index: (usize, usize, usize)) -> &mut Self::Output {
        let offset = self.offset(index.0, index.1, index.2);
        &mut self.data[offset]
    }
}
