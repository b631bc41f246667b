use crate::complex::Complex;
use crate::error::TensorError;
use crate::tensor::Vector;
use ndarray::{Array1, Array2};

// ============================================================================
// Construction from literals
// ============================================================================

/// Build a vector from a slice of entries
pub fn vector<T: Clone>(entries: &[T]) -> Array1<T> {
    Array1::from(entries.to_vec())
}

/// Build a complex vector from real entries
pub fn vector_from_reals(entries: &[f64]) -> Vector {
    entries.iter().map(|&x| Complex::new(x, 0.0)).collect()
}

/// Build a matrix from nested rows
///
/// Every row must have the length of the first one. An empty row list gives
/// a 0x0 matrix.
pub fn matrix_from_rows<T: Clone>(rows: Vec<Vec<T>>) -> Result<Array2<T>, TensorError> {
    let nrows = rows.len();
    let ncols = rows.first().map_or(0, Vec::len);

    let mut data = Vec::with_capacity(nrows * ncols);
    for (row, entries) in rows.into_iter().enumerate() {
        if entries.len() != ncols {
            return Err(TensorError::RaggedRows {
                row,
                expected: ncols,
                got: entries.len(),
            });
        }
        data.extend(entries);
    }

    Ok(Array2::from_shape_vec((nrows, ncols), data)?)
}
