//! Elementwise arithmetic: addition, additive inverse, scalar multiplication

use crate::dimension::shapes_equal;
use crate::error::LinalgError;
use log::{debug, trace};
use ndarray::{Array, ArrayBase, Data, Dimension, Zip};
use std::ops::{Add, Mul, Neg};

/// Elementwise sum of two operands of the same kind
///
/// Shapes must match exactly; there is no broadcasting. On mismatch nothing
/// is computed and `LinalgError::DimensionMismatch` is returned.
pub fn add<A, S1, S2, D>(a: &ArrayBase<S1, D>, b: &ArrayBase<S2, D>) -> Result<Array<A, D>, LinalgError>
where
    A: Clone + Add<Output = A>,
    S1: Data<Elem = A>,
    S2: Data<Elem = A>,
    D: Dimension,
{
    if !shapes_equal(a, b) {
        debug!("add: shape mismatch {:?} vs {:?}", a.shape(), b.shape());
        return Err(LinalgError::dimension_mismatch(a.shape(), b.shape()));
    }

    trace!("add: shape {:?}", a.shape());
    Ok(Zip::from(a).and(b).map_collect(|x, y| x.clone() + y.clone()))
}

/// Additive inverse of every entry
pub fn negate<A, S, D>(a: &ArrayBase<S, D>) -> Array<A, D>
where
    A: Clone + Neg<Output = A>,
    S: Data<Elem = A>,
    D: Dimension,
{
    trace!("negate: shape {:?}", a.shape());
    a.mapv(|x| -x)
}

/// Multiply every entry by `scalar`
///
/// The scalar may be real while the entries are complex.
pub fn scale<A, B, S, D>(scalar: B, a: &ArrayBase<S, D>) -> Array<A, D>
where
    A: Clone,
    B: Clone + Mul<A, Output = A>,
    S: Data<Elem = A>,
    D: Dimension,
{
    trace!("scale: shape {:?}", a.shape());
    a.mapv(|x| scalar.clone() * x)
}
