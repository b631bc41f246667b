use thiserror::Error;

/// Errors raised while building or decoding vectors and matrices
#[derive(Debug, Error)]
pub enum TensorError {
    /// A matrix row does not have the same length as the first row
    #[error("row {row} has {got} entries, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        got: usize,
    },

    /// Text that is not a real or complex number literal
    #[error("invalid complex number: '{0}'")]
    InvalidComplex(String),

    /// JSON that is neither a vector nor a matrix
    #[error("invalid operand: {0}")]
    InvalidOperand(String),

    #[error(transparent)]
    Shape(#[from] ndarray::ShapeError),

    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),
}
