//! Dimension compatibility checks

use ndarray::{Array1, Array2, ArrayBase, Dimension, RawData};

/// True iff both operands have exactly the same shape tuple
///
/// Never fails. Operands of different rank compare unequal.
pub fn shapes_equal<S1, S2, D1, D2>(a: &ArrayBase<S1, D1>, b: &ArrayBase<S2, D2>) -> bool
where
    S1: RawData,
    S2: RawData,
    D1: Dimension,
    D2: Dimension,
{
    a.shape() == b.shape()
}

/// True iff both vectors have the same length
pub fn vectors_same_dimension<A>(v1: &Array1<A>, v2: &Array1<A>) -> bool {
    shapes_equal(v1, v2)
}

/// True iff both matrices have the same (rows, cols)
pub fn matrices_same_dimension<A>(m1: &Array2<A>, m2: &Array2<A>) -> bool {
    shapes_equal(m1, m2)
}
