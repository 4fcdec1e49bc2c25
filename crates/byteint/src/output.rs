//! CLI output formatting.

use std::io::{self, Write};

use serde::Serialize;

use byteint_core::BigInteger;

/// A formatted result, printed bare or as JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rendered {
    /// The value written in `base`.
    pub value: String,
    /// The base as given on the command line.
    pub base: String,
    /// Stored base-256 digit count.
    pub digits: usize,
}

impl Rendered {
    /// Format `value` in `base`.
    ///
    /// # Errors
    /// Propagates formatting errors such as base 1 or an unknown base name.
    pub fn new(value: &BigInteger, base: &str) -> byteint_core::Result<Self> {
        Ok(Self {
            value: value.to_string_radix(base)?,
            base: base.to_owned(),
            digits: value.len(),
        })
    }
}

/// Write `rendered` followed by a newline.
///
/// # Errors
///
/// Returns an I/O error if the writer fails.
pub fn write_rendered(out: &mut dyn Write, rendered: &Rendered, json: bool) -> io::Result<()> {
    if json {
        let text = serde_json::to_string(rendered).map_err(io::Error::other)?;
        writeln!(out, "{text}")
    } else {
        writeln!(out, "{}", rendered.value)
    }
}
