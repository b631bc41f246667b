use crate::complex::Complex;
use ndarray::{Array, ArrayBase, Data, Dimension};

// ============================================================================
// Type Conversion
// ============================================================================

/// Promote a real array to a complex one with zero imaginary parts
pub fn to_complex<S, D>(real: &ArrayBase<S, D>) -> Array<Complex, D>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    real.mapv(|x| Complex::new(x, 0.0))
}
