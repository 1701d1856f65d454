//! Conversions to and from `ndarray` owned arrays.
//!
//! Elements are always taken in logical (row-major) order, whatever the
//! memory layout of the source array. The index origin of a `Grid` or
//! `Volume` only affects how it is indexed, so both origins convert the
//! same way.
use crate::math::dense::Origin;
use crate::math::{Array1, Grid, Volume};

impl<T: Clone> From<ndarray::Array1<T>> for Array1<T> {
    fn from(value: ndarray::Array1<T>) -> Self {
        value.iter().cloned().collect()
    }
}

impl<T> From<Array1<T>> for ndarray::Array1<T> {
    fn from(value: Array1<T>) -> Self {
        ndarray::Array1::from(Vec::from(value))
    }
}

impl<T: Clone, O: Origin> From<ndarray::Array2<T>> for Grid<T, O> {
    fn from(value: ndarray::Array2<T>) -> Self {
        let (rows, cols) = value.dim();
        let data: Vec<T> = value.iter().cloned().collect();
        // `iter` visits exactly rows * cols elements
        Grid::from_raw_parts((rows, cols), data)
    }
}

impl<T: Clone, O: Origin> From<Grid<T, O>> for ndarray::Array2<T> {
    fn from(value: Grid<T, O>) -> Self {
        let cols = value.ncols();
        let data = value.as_slice();
        ndarray::Array2::from_shape_fn(value.shape(), |(i, j)| data[i * cols + j].clone())
    }
}

impl<T: Clone, O: Origin> From<ndarray::Array3<T>> for Volume<T, O> {
    fn from(value: ndarray::Array3<T>) -> Self {
        let dims = value.dim();
        let data: Vec<T> = value.iter().cloned().collect();
        Volume::from_raw_parts(dims, data)
    }
}

impl<T: Clone, O: Origin> From<Volume<T, O>> for ndarray::Array3<T> {
    fn from(value: Volume<T, O>) -> Self {
        let (_, n, p) = value.shape();
        let data = value.as_slice();
        ndarray::Array3::from_shape_fn(value.shape(), |(i, j, k)| {
            data[(i * n + j) * p + k].clone()
        })
    }
}
