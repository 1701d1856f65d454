//! Conformance-checked element-wise arithmetic.
//!
//! Every operation here is written once against [`DenseArray`] and works the
//! same way for all container families and index origins. Binary operators
//! return `Result<C, ArithError>`, so `(&a + &b)?` both computes and checks.
//! Compound operators (`+=` and friends) cannot return a value; on a shape
//! mismatch they leave the target untouched and report according to
//! [`ArithConfig::default`]. Use the `try_*_assign` or `*_assign_with`
//! methods when that is not enough.
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Sub, SubAssign};

use crate::config::{ArithConfig, MismatchAction};
use crate::error::{ArithError, BinaryOp};
use crate::math::dense::{DenseArray, Origin};
use crate::math::{Array1, Grid, Volume};

fn conformance<A: DenseArray>(op: BinaryOp, lhs: &A, rhs: &A) -> Result<(), ArithError> {
    if lhs.conforms(rhs) {
        return Ok(());
    }
    let err = ArithError::NonConformant {
        op,
        lhs: lhs.dims(),
        rhs: rhs.dims(),
    };
    log::debug!("{}", err);
    Err(err)
}

fn report_mismatch(config: &ArithConfig, err: &ArithError) {
    match config.on_mismatch {
        MismatchAction::Ignore => {}
        MismatchAction::Warn => log::warn!("compound assignment skipped: {}", err),
        MismatchAction::Panic => panic!("compound assignment failed: {}", err),
    }
}

pub trait Elementwise: DenseArray {
    /// Build a new container of the common shape with `f(lhs[idx], rhs[idx])`
    /// at every index.
    fn zip_with<F>(&self, op: BinaryOp, rhs: &Self, mut f: F) -> Result<Self, ArithError>
    where
        F: FnMut(&Self::Elem, &Self::Elem) -> Self::Elem,
    {
        conformance(op, self, rhs)?;
        let mut out = self.clone();
        for (o, r) in out.as_mut_slice().iter_mut().zip(rhs.as_slice()) {
            let value = f(o, r);
            *o = value;
        }
        Ok(out)
    }

    /// Apply `f(&mut self[idx], rhs[idx])` at every index. The target is not
    /// touched at all when the shapes differ.
    fn zip_assign_with<F>(
        &mut self,
        op: BinaryOp,
        rhs: &Self,
        mut f: F,
    ) -> Result<&mut Self, ArithError>
    where
        F: FnMut(&mut Self::Elem, &Self::Elem),
    {
        conformance(op, self, rhs)?;
        for (o, r) in self.as_mut_slice().iter_mut().zip(rhs.as_slice()) {
            f(o, r);
        }
        Ok(self)
    }

    fn try_add(&self, rhs: &Self) -> Result<Self, ArithError>
    where
        Self::Elem: Clone + Add<Output = Self::Elem>,
    {
        self.zip_with(BinaryOp::Add, rhs, |a, b| a.clone() + b.clone())
    }

    fn try_sub(&self, rhs: &Self) -> Result<Self, ArithError>
    where
        Self::Elem: Clone + Sub<Output = Self::Elem>,
    {
        self.zip_with(BinaryOp::Sub, rhs, |a, b| a.clone() - b.clone())
    }

    fn try_mul(&self, rhs: &Self) -> Result<Self, ArithError>
    where
        Self::Elem: Clone + Mul<Output = Self::Elem>,
    {
        self.zip_with(BinaryOp::Mul, rhs, |a, b| a.clone() * b.clone())
    }

    fn try_div(&self, rhs: &Self) -> Result<Self, ArithError>
    where
        Self::Elem: Clone + Div<Output = Self::Elem>,
    {
        self.zip_with(BinaryOp::Div, rhs, |a, b| a.clone() / b.clone())
    }

    fn try_add_assign(&mut self, rhs: &Self) -> Result<&mut Self, ArithError>
    where
        Self::Elem: Clone + AddAssign,
    {
        self.zip_assign_with(BinaryOp::Add, rhs, |a, b| *a += b.clone())
    }

    fn try_sub_assign(&mut self, rhs: &Self) -> Result<&mut Self, ArithError>
    where
        Self::Elem: Clone + SubAssign,
    {
        self.zip_assign_with(BinaryOp::Sub, rhs, |a, b| *a -= b.clone())
    }

    fn try_mul_assign(&mut self, rhs: &Self) -> Result<&mut Self, ArithError>
    where
        Self::Elem: Clone + MulAssign,
    {
        self.zip_assign_with(BinaryOp::Mul, rhs, |a, b| *a *= b.clone())
    }

    fn try_div_assign(&mut self, rhs: &Self) -> Result<&mut Self, ArithError>
    where
        Self::Elem: Clone + DivAssign,
    {
        self.zip_assign_with(BinaryOp::Div, rhs, |a, b| *a /= b.clone())
    }

    fn add_assign_with(&mut self, rhs: &Self, config: &ArithConfig) -> &mut Self
    where
        Self::Elem: Clone + AddAssign,
    {
        if let Err(err) = self.try_add_assign(rhs) {
            report_mismatch(config, &err);
        }
        self
    }

    fn sub_assign_with(&mut self, rhs: &Self, config: &ArithConfig) -> &mut Self
    where
        Self::Elem: Clone + SubAssign,
    {
        if let Err(err) = self.try_sub_assign(rhs) {
            report_mismatch(config, &err);
        }
        self
    }

    fn mul_assign_with(&mut self, rhs: &Self, config: &ArithConfig) -> &mut Self
    where
        Self::Elem: Clone + MulAssign,
    {
        if let Err(err) = self.try_mul_assign(rhs) {
            report_mismatch(config, &err);
        }
        self
    }

    fn div_assign_with(&mut self, rhs: &Self, config: &ArithConfig) -> &mut Self
    where
        Self::Elem: Clone + DivAssign,
    {
        if let Err(err) = self.try_div_assign(rhs) {
            report_mismatch(config, &err);
        }
        self
    }
}

impl<A: DenseArray> Elementwise for A {}

// ---------------------------------------------------------------------------
// std operator impls

macro_rules! impl_elementwise_ops {
    ([$($gen:tt)*] $ty:ty) => {
        impl_elementwise_ops!(@op [$($gen)*] $ty, Add, add, try_add, AddAssign, add_assign, add_assign_with);
        impl_elementwise_ops!(@op [$($gen)*] $ty, Sub, sub, try_sub, SubAssign, sub_assign, sub_assign_with);
        impl_elementwise_ops!(@op [$($gen)*] $ty, Mul, mul, try_mul, MulAssign, mul_assign, mul_assign_with);
        impl_elementwise_ops!(@op [$($gen)*] $ty, Div, div, try_div, DivAssign, div_assign, div_assign_with);
    };
    (@op [$($gen:tt)*] $ty:ty,
        $Op:ident, $op:ident, $try_op:ident,
        $OpAssign:ident, $op_assign:ident, $op_assign_with:ident
    ) => {
        // &container `op` &container
        impl<'a, 'b, $($gen)*> $Op<&'b $ty> for &'a $ty
        where
            T: Clone + $Op<Output = T>,
        {
            type Output = Result<$ty, ArithError>;

            #[inline]
            fn $op(self, rhs: &'b $ty) -> Self::Output {
                Elementwise::$try_op(self, rhs)
            }
        }

        // container `op` &container
        impl<'b, $($gen)*> $Op<&'b $ty> for $ty
        where
            T: Clone + $Op<Output = T>,
        {
            type Output = Result<$ty, ArithError>;

            #[inline]
            fn $op(self, rhs: &'b $ty) -> Self::Output {
                Elementwise::$try_op(&self, rhs)
            }
        }

        // container `op=` &container
        impl<'b, $($gen)*> $OpAssign<&'b $ty> for $ty
        where
            T: Clone + $OpAssign,
        {
            #[inline]
            fn $op_assign(&mut self, rhs: &'b $ty) {
                Elementwise::$op_assign_with(self, rhs, &ArithConfig::default());
            }
        }
    };
}

impl_elementwise_ops!([T] Array1<T>);
impl_elementwise_ops!([T, O: Origin] Grid<T, O>);
impl_elementwise_ops!([T, O: Origin] Volume<T, O>);
