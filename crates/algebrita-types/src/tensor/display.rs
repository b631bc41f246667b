use crate::complex::{format_complex, Complex};
use crate::tensor::{Matrix, Vector};

fn format_row<'a>(entries: impl Iterator<Item = &'a Complex>) -> String {
    let parts: Vec<String> = entries.map(format_complex).collect();
    format!("[{}]", parts.join(", "))
}

/// Render a vector as `[1+2i, 3]`
pub fn format_vector(v: &Vector) -> String {
    format_row(v.iter())
}

/// Render a matrix with one row per line
///
/// ```text
/// [[1+1i, 2],
///  [3, 4-1i]]
/// ```
pub fn format_matrix(m: &Matrix) -> String {
    let rows: Vec<String> = m.outer_iter().map(|row| format_row(row.iter())).collect();
    format!("[{}]", rows.join(",\n "))
}
