use std::marker::PhantomData;
use std::ops::{Index, IndexMut};
use std::slice::Iter;

use num_traits::{One, Zero};

use crate::error::ShapeError;
use crate::math::dense::{check_len, element_count, DenseArray, OneBased, Origin, ZeroBased};

/// Two-dimensional row-major grid whose indices start at `O::BASE`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid<T, O: Origin> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
    origin: PhantomData<O>,
}

/// Zero-origin matrix, indexed as `a[(i, j)]` or `a[i][j]`.
pub type Array2<T> = Grid<T, ZeroBased>;

/// One-origin matrix, indexed as `a[(i, j)]` with `1 <= i <= dim1()`.
pub type FortranArray2<T> = Grid<T, OneBased>;

impl<T, O: Origin> Default for Grid<T, O> {
    fn default() -> Self {
        Self {
            data: Vec::new(),
            rows: 0,
            cols: 0,
            origin: PhantomData,
        }
    }
}

impl<T, O: Origin> Grid<T, O> {
    pub fn from_shape_vec(shape: (usize, usize), data: Vec<T>) -> Result<Self, ShapeError> {
        let (rows, cols) = shape;
        check_len(&[rows, cols], data.len())?;
        Ok(Self {
            data,
            rows,
            cols,
            origin: PhantomData,
        })
    }

    pub fn new(rows: usize, cols: usize, data: Vec<T>) -> Result<Self, ShapeError> {
        Self::from_shape_vec((rows, cols), data)
    }

    /// Build without checking; `data.len()` must equal `rows * cols`.
    pub(crate) fn from_raw_parts(shape: (usize, usize), data: Vec<T>) -> Self {
        debug_assert_eq!(data.len(), element_count(&[shape.0, shape.1]));
        Self {
            data,
            rows: shape.0,
            cols: shape.1,
            origin: PhantomData,
        }
    }

    pub fn nrows(&self) -> usize {
        self.rows
    }

    pub fn ncols(&self) -> usize {
        self.cols
    }

    pub fn dim1(&self) -> usize {
        self.rows
    }

    pub fn dim2(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
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
    fn offset(&self, row: usize, col: usize) -> usize {
        O::position(row, self.rows, 0) * self.cols + O::position(col, self.cols, 1)
    }

    /// Row `row` (in this grid's origin) as a contiguous slice.
    pub fn row_slice(&self, row: usize) -> &[T] {
        let start = O::position(row, self.rows, 0) * self.cols;
        &self.data[start..start + self.cols]
    }

    pub fn row_slice_mut(&mut self, row: usize) -> &mut [T] {
        let start = O::position(row, self.rows, 0) * self.cols;
        &mut self.data[start..start + self.cols]
    }

    /// Iterator over the rows, first to last.
    pub fn rows(&self) -> impl Iterator<Item = &[T]> + '_ {
        // not `chunks`: a zero-width grid still has `rows` (empty) rows
        (0..self.rows).map(move |r| &self.data[r * self.cols..(r + 1) * self.cols])
    }

    pub fn mapv<U, F>(&self, mut f: F) -> Grid<U, O>
    where
        F: FnMut(&T) -> U,
    {
        Grid {
            data: self.data.iter().map(|v| f(v)).collect(),
            rows: self.rows,
            cols: self.cols,
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

impl<T: Clone, O: Origin> Grid<T, O> {
    pub fn from_elem(shape: (usize, usize), value: T) -> Self {
        Self {
            data: vec![value; element_count(&[shape.0, shape.1])],
            rows: shape.0,
            cols: shape.1,
            origin: PhantomData,
        }
    }
}

impl<T: Clone + Zero, O: Origin> Grid<T, O> {
    pub fn zeros(shape: (usize, usize)) -> Self {
        Self::from_elem(shape, T::zero())
    }
}

impl<T: Clone + One, O: Origin> Grid<T, O> {
    pub fn ones(shape: (usize, usize)) -> Self {
        Self::from_elem(shape, T::one())
    }
}

impl<T: Clone, O: Origin> DenseArray for Grid<T, O> {
    type Elem = T;
    type Shape = (usize, usize);

    fn shape(&self) -> (usize, usize) {
        Grid::shape(self)
    }

    fn dims(&self) -> Vec<usize> {
        vec![self.rows, self.cols]
    }

    fn as_slice(&self) -> &[T] {
        &self.data
    }

    fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    fn from_shape_vec(shape: (usize, usize), data: Vec<T>) -> Result<Self, ShapeError> {
        Grid::from_shape_vec(shape, data)
    }
}

impl<T, O: Origin> Index<(usize, usize)> for Grid<T, O> {
    type Output = T;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        let offset = self.offset(index.0, index.1);
        &self.data[offset]
    }
}

impl<T, O: Origin> IndexMut<(usize, usize)> for Grid<T, O> {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Self::Output {
        let offset = self.offset(index.0, index.1);
        &mut self.data[offset]
    }
}

// `a[i][j]` on zero-origin grids
impl<T> Index<usize> for Array2<T> {
    type Output = [T];

    fn index(&self, row: usize) -> &Self::Output {
        self.row_slice(row)
    }
}

impl<T> IndexMut<usize> for Array2<T> {
    fn index_mut(&mut self, row: usize) -> &mut Self::Output {
        self.row_slice_mut(row)
    }
}
