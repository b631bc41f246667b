//! Vector-or-matrix values
//!
//! `Operand` is what a caller gets when the kind of a value is only known at
//! runtime, e.g. after reading JSON from the command line. The JSON form is a
//! flat array for a vector and an array of arrays for a matrix; entries are
//! numbers or complex literal strings (`"1+2i"`).

use crate::complex::{format_complex, parse_complex, Complex};
use crate::error::TensorError;
use crate::tensor::{format_matrix, format_vector, matrix_from_rows, Matrix, Vector};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value as Json;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    Vector(Vector),
    Matrix(Matrix),
}

impl Operand {
    /// "vector" or "matrix"
    pub fn kind(&self) -> &'static str {
        match self {
            Operand::Vector(_) => "vector",
            Operand::Matrix(_) => "matrix",
        }
    }

    pub fn shape(&self) -> &[usize] {
        match self {
            Operand::Vector(v) => v.shape(),
            Operand::Matrix(m) => m.shape(),
        }
    }

    /// Parse an operand from JSON text
    pub fn from_json_str(text: &str) -> Result<Operand, TensorError> {
        let json: Json = serde_json::from_str(text)?;
        Operand::from_json(&json)
    }

    /// Decode an operand from a parsed JSON value
    pub fn from_json(json: &Json) -> Result<Operand, TensorError> {
        let Json::Array(items) = json else {
            return Err(TensorError::InvalidOperand(format!(
                "expected a JSON array, got {}",
                json
            )));
        };

        let nested = items.iter().filter(|item| item.is_array()).count();

        if nested == 0 {
            let entries = items.iter().map(entry_from_json).collect::<Result<Vec<_>, _>>()?;
            return Ok(Operand::Vector(Vector::from(entries)));
        }

        if nested != items.len() {
            return Err(TensorError::InvalidOperand(
                "cannot mix numbers and rows at the top level".to_string(),
            ));
        }

        let mut rows = Vec::with_capacity(items.len());
        for item in items {
            let row = item.as_array().map(Vec::as_slice).unwrap_or_default();
            rows.push(row.iter().map(entry_from_json).collect::<Result<Vec<_>, _>>()?);
        }
        Ok(Operand::Matrix(matrix_from_rows(rows)?))
    }

    /// Encode as JSON; `from_json` reads the result back
    pub fn to_json(&self) -> Json {
        match self {
            Operand::Vector(v) => Json::Array(v.iter().map(entry_to_json).collect()),
            Operand::Matrix(m) => Json::Array(
                m.outer_iter()
                    .map(|row| Json::Array(row.iter().map(entry_to_json).collect()))
                    .collect(),
            ),
        }
    }
}

fn entry_from_json(json: &Json) -> Result<Complex, TensorError> {
    match json {
        Json::Number(n) => n
            .as_f64()
            .map(|re| Complex::new(re, 0.0))
            .ok_or_else(|| TensorError::InvalidComplex(n.to_string())),
        Json::String(s) => parse_complex(s),
        other => Err(TensorError::InvalidOperand(format!(
            "entries must be numbers or complex strings, got {}",
            other
        ))),
    }
}

fn entry_to_json(value: &Complex) -> Json {
    if value.im == 0.0 {
        if let Some(n) = serde_json::Number::from_f64(value.re) {
            return Json::Number(n);
        }
    }
    Json::String(format_complex(value))
}

impl From<Vector> for Operand {
    fn from(v: Vector) -> Self {
        Operand::Vector(v)
    }
}

impl From<Matrix> for Operand {
    fn from(m: Matrix) -> Self {
        Operand::Matrix(m)
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Vector(v) => write!(f, "{}", format_vector(v)),
            Operand::Matrix(m) => write!(f, "{}", format_matrix(m)),
        }
    }
}

impl Serialize for Operand {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Operand {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let json = Json::deserialize(deserializer)?;
        Operand::from_json(&json).map_err(D::Error::custom)
    }
}
