//! Complex scalars
//!
//! Entries of vectors and matrices are `Complex64` by default. Real element
//! types (`f64`, `f32`) are accepted wherever the operations are generic,
//! which is why conjugation lives behind the `Conjugate` trait.

use crate::error::TensorError;
use num_traits::Num;
use std::ops::Neg;
use std::str::FromStr;

pub type Complex = num_complex::Complex64;

/// Elementwise complex conjugation
///
/// Identity for real element types.
pub trait Conjugate {
    fn conjugate(&self) -> Self;
}

impl Conjugate for f64 {
    fn conjugate(&self) -> Self {
        *self
    }
}

impl Conjugate for f32 {
    fn conjugate(&self) -> Self {
        *self
    }
}

impl<T> Conjugate for num_complex::Complex<T>
where
    T: Clone + Num + Neg<Output = T>,
{
    fn conjugate(&self) -> Self {
        self.conj()
    }
}

/// Parse a complex literal
///
/// Accepted forms: `3`, `-2.5`, `4i`, `i`, `-i`, `1+2i`, `1-2i`, `1.5e3-2i`;
/// `j` may be used instead of `i`.
pub fn parse_complex(text: &str) -> Result<Complex, TensorError> {
    Complex::from_str(text).map_err(|_| TensorError::InvalidComplex(text.to_string()))
}

/// Format a complex number so that `parse_complex` reads it back
///
/// Entries with a zero imaginary part print as plain reals.
pub fn format_complex(value: &Complex) -> String {
    if value.im == 0.0 {
        return format!("{}", value.re);
    }
    if value.re == 0.0 {
        return format!("{}i", value.im);
    }
    if value.im < 0.0 {
        format!("{}-{}i", value.re, -value.im)
    } else {
        format!("{}+{}i", value.re, value.im)
    }
}
