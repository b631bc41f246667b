//! Error types for the linear algebra operations

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum LinalgError {
    /// Operands of an elementwise binary operation have different shapes
    #[error("{message} (left shape {left:?}, right shape {right:?})")]
    DimensionMismatch {
        message: String,
        left: Vec<usize>,
        right: Vec<usize>,
    },
}

impl LinalgError {
    /// Mismatch error worded after the rank of the left operand
    pub(crate) fn dimension_mismatch(left: &[usize], right: &[usize]) -> Self {
        let message = match left.len() {
            1 => "vectors do not have the same dimensions",
            2 => "matrices do not have the same dimensions",
            _ => "arrays do not have the same dimensions",
        };
        LinalgError::DimensionMismatch {
            message: message.to_string(),
            left: left.to_vec(),
            right: right.to_vec(),
        }
    }
}
