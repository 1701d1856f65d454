use std::error::Error;
use std::fmt;

/// The element-wise operator that was being applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinaryOp {
    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Operands whose shapes do not allow the requested operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArithError {
    /// Element-wise operands differ in at least one extent.
    NonConformant {
        op: BinaryOp,
        lhs: Vec<usize>,
        rhs: Vec<usize>,
    },
    /// Matrix product where `lhs.dim2() != rhs.dim1()`.
    InnerDimensionMismatch {
        lhs: (usize, usize),
        rhs: (usize, usize),
    },
}

impl fmt::Display for ArithError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ArithError::NonConformant { op, lhs, rhs } => write!(
                f,
                "operands of '{}' are not conformant: {:?} vs {:?}",
                op, lhs, rhs
            ),
            ArithError::InnerDimensionMismatch { lhs, rhs } => write!(
                f,
                "cannot multiply a {}x{} matrix by a {}x{} matrix",
                lhs.0, lhs.1, rhs.0, rhs.1
            ),
        }
    }
}

impl Error for ArithError {}

/// A flat buffer whose length does not match the requested extents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShapeError {
    shape: Vec<usize>,
    len: usize,
}

impl ShapeError {
    pub(crate) fn new(shape: &[usize], len: usize) -> Self {
        ShapeError {
            shape: shape.to_vec(),
            len,
        }
    }

    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    pub fn buffer_len(&self) -> usize {
        self.len
    }
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid shape {:?} for buffer of length {}",
            self.shape, self.len
        )
    }
}

impl Error for ShapeError {}
