//! Encodes bytes as hexadecimal text.
//!
//! Every byte becomes two uppercase hex digits, without separators. Decoding
//! accepts either case.

use crate::error::Result;

/// Encodes bytes as uppercase hex digits.
///
/// Use [`from_str`] to reverse the operation.
#[must_use]
pub fn to_string(bytes: &[u8]) -> String {
    ::hex::encode_upper(bytes)
}

/// Decodes hex digits of either case back into bytes.
///
/// # Errors
///
/// Returns [`OddLength`] if the digit count is odd and [`InvalidChar`] for
/// characters that aren't hex digits.
///
/// [`OddLength`]: crate::Error::OddLength
/// [`InvalidChar`]: crate::Error::InvalidChar
pub fn from_str(input: &str) -> Result<Vec<u8>> {
    Ok(::hex::decode(input)?)
}
