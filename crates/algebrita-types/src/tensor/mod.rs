mod constructors;
mod conversions;
mod display;

pub use constructors::{matrix_from_rows, vector, vector_from_reals};
pub use conversions::to_complex;
pub use display::{format_matrix, format_vector};

use crate::complex::Complex;
use ndarray::{Array1, Array2};

/// Complex vector, shape `(len,)`
pub type Vector = Array1<Complex>;

/// Complex matrix, shape `(rows, cols)`
pub type Matrix = Array2<Complex>;
