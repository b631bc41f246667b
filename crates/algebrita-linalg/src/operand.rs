//! Operations on `Operand` values
//!
//! Dispatches to the typed operations. A vector and a matrix never have the
//! same shape, so adding one to the other is a dimension mismatch.

use crate::arithmetic::{add, negate, scale};
use crate::dimension::shapes_equal;
use crate::error::LinalgError;
use crate::transform::{adjoint, conjugate, transpose};
use algebrita_types::{Complex, Operand};
use log::debug;

/// True iff both operands are of the same kind and shape
pub fn operands_same_shape(a: &Operand, b: &Operand) -> bool {
    match (a, b) {
        (Operand::Vector(v1), Operand::Vector(v2)) => shapes_equal(v1, v2),
        (Operand::Matrix(m1), Operand::Matrix(m2)) => shapes_equal(m1, m2),
        _ => false,
    }
}

/// Elementwise sum; fails with `DimensionMismatch` unless the shapes are equal
pub fn add_operands(a: &Operand, b: &Operand) -> Result<Operand, LinalgError> {
    match (a, b) {
        (Operand::Vector(v1), Operand::Vector(v2)) => Ok(Operand::Vector(add(v1, v2)?)),
        (Operand::Matrix(m1), Operand::Matrix(m2)) => Ok(Operand::Matrix(add(m1, m2)?)),
        _ => {
            debug!("add: shape mismatch {:?} vs {:?}", a.shape(), b.shape());
            Err(LinalgError::dimension_mismatch(a.shape(), b.shape()))
        }
    }
}

/// Additive inverse of every entry
pub fn negate_operand(a: &Operand) -> Operand {
    match a {
        Operand::Vector(v) => Operand::Vector(negate(v)),
        Operand::Matrix(m) => Operand::Matrix(negate(m)),
    }
}

/// Multiply every entry by a complex scalar
pub fn scale_operand(scalar: Complex, a: &Operand) -> Operand {
    match a {
        Operand::Vector(v) => Operand::Vector(scale(scalar, v)),
        Operand::Matrix(m) => Operand::Matrix(scale(scalar, m)),
    }
}

/// Transpose a matrix; vectors come back unchanged
pub fn transpose_operand(a: &Operand) -> Operand {
    match a {
        Operand::Vector(v) => Operand::Vector(transpose(v)),
        Operand::Matrix(m) => Operand::Matrix(transpose(m)),
    }
}

/// Complex conjugate of every entry
pub fn conjugate_operand(a: &Operand) -> Operand {
    match a {
        Operand::Vector(v) => Operand::Vector(conjugate(v)),
        Operand::Matrix(m) => Operand::Matrix(conjugate(m)),
    }
}

/// Conjugate transpose
pub fn adjoint_operand(a: &Operand) -> Operand {
    match a {
        Operand::Vector(v) => Operand::Vector(adjoint(v)),
        Operand::Matrix(m) => Operand::Matrix(adjoint(m)),
    }
}
