//! Operand arguments: inline JSON text, or `@path` to read it from a file

use algebrita_types::complex::parse_complex;
use algebrita_types::{Complex, Operand};
use anyhow::{Context, Result};
use log::debug;
use std::fs;

pub fn read_operand(arg: &str) -> Result<Operand> {
    let text = match arg.strip_prefix('@') {
        Some(path) => {
            debug!("reading operand from '{}'", path);
            fs::read_to_string(path).with_context(|| format!("Error reading file '{}'", path))?
        }
        None => arg.to_string(),
    };

    let operand = Operand::from_json_str(&text)
        .with_context(|| format!("Invalid operand '{}'", arg))?;
    debug!("parsed {} with shape {:?}", operand.kind(), operand.shape());
    Ok(operand)
}

pub fn read_scalar(arg: &str) -> Result<Complex> {
    parse_complex(arg).with_context(|| format!("Invalid scalar '{}'", arg))
}
