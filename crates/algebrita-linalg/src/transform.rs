//! Transpose, conjugate and adjoint

use algebrita_types::Conjugate;
use log::trace;
use ndarray::{Array, ArrayBase, Data, Dimension};

/// Reverse the axes
///
/// A matrix of shape (r, c) becomes (c, r). A vector has a single axis, so
/// its transpose is itself.
pub fn transpose<A, S, D>(a: &ArrayBase<S, D>) -> Array<A, D>
where
    A: Clone,
    S: Data<Elem = A>,
    D: Dimension,
{
    trace!("transpose: shape {:?}", a.shape());
    a.t().as_standard_layout().into_owned()
}

/// Complex conjugate of every entry; real entries are returned unchanged
pub fn conjugate<A, S, D>(a: &ArrayBase<S, D>) -> Array<A, D>
where
    A: Conjugate,
    S: Data<Elem = A>,
    D: Dimension,
{
    trace!("conjugate: shape {:?}", a.shape());
    a.map(Conjugate::conjugate)
}

/// Conjugate transpose: transpose first, then conjugate
pub fn adjoint<A, S, D>(a: &ArrayBase<S, D>) -> Array<A, D>
where
    A: Clone + Conjugate,
    S: Data<Elem = A>,
    D: Dimension,
{
    conjugate(&transpose(a))
}
