//! Elementary linear algebra over dense vectors and matrices
//!
//! Operations, generic over real (`f64`, `f32`) and complex element types:
//! - `shapes_equal`: dimension compatibility check
//! - `add`: elementwise sum of two equally shaped operands
//! - `negate`: additive inverse
//! - `scale`: multiplication by a real or complex scalar
//! - `transpose`: axis reversal (no-op for vectors)
//! - `conjugate`: elementwise complex conjugate
//! - `adjoint`: conjugate transpose
//!
//! Every operation returns a newly allocated array and leaves its inputs
//! untouched. Only `add` can fail.
//!
//! The `operand` module repeats the same operations for `Operand` values,
//! whose vector-or-matrix kind is only known at runtime.

pub mod arithmetic;
pub mod dimension;
pub mod error;
pub mod operand;
pub mod transform;

// Re-export main operations
pub use arithmetic::{add, negate, scale};
pub use dimension::{matrices_same_dimension, shapes_equal, vectors_same_dimension};
pub use error::LinalgError;
pub use transform::{adjoint, conjugate, transpose};
