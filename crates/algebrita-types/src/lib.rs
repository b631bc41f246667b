//! Value types shared by the algebrita crates
//!
//! - `complex`: complex scalar alias, conjugation trait, literal parsing/formatting
//! - `tensor`: dense vectors and matrices on top of `ndarray`
//! - `operand`: a vector-or-matrix value whose kind is decided at runtime
//! - `error`: construction and parsing errors

pub mod complex;
pub mod error;
pub mod operand;
pub mod tensor;

// Re-exports
pub use complex::{Complex, Conjugate};
pub use error::TensorError;
pub use operand::Operand;
pub use tensor::{Matrix, Vector};
