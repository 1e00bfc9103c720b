//! Encodes bytes as base64 with the URL-safe alphabet.
//!
//! The alphabet uses `-` and `_` in place of `+` and `/`. The functions at
//! the top level of this module pad the output with `=` to a multiple of 4
//! characters. The [`raw`] sub-module neither emits nor accepts padding.
//!
//! Decoding is strict about the alphabet and the padding, but it does accept
//! a final symbol with non-zero trailing bits. `D4_a--1=` and `D4_a--0=`
//! therefore decode to the same bytes.

use ::base64::Engine as _;
use ::base64::alphabet::URL_SAFE;
use ::base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};

use crate::error::{Error, Result};

const PADDED: GeneralPurpose = GeneralPurpose::new(
    &URL_SAFE,
    GeneralPurposeConfig::new()
        .with_encode_padding(true)
        .with_decode_padding_mode(DecodePaddingMode::RequireCanonical)
        .with_decode_allow_trailing_bits(true),
);

const UNPADDED: GeneralPurpose = GeneralPurpose::new(
    &URL_SAFE,
    GeneralPurposeConfig::new()
        .with_encode_padding(false)
        .with_decode_padding_mode(DecodePaddingMode::RequireNone)
        .with_decode_allow_trailing_bits(true),
);

/// Encodes bytes as padded URL-safe base64.
///
/// Use [`from_str`] to reverse the operation.
#[must_use]
pub fn to_string(bytes: &[u8]) -> String {
    PADDED.encode(bytes)
}

/// Decodes padded URL-safe base64.
///
/// # Errors
///
/// Returns [`InvalidLength`] if the length isn't a multiple of 4,
/// [`InvalidPadding`] for misplaced padding, and [`InvalidChar`] for any
/// character outside the URL-safe alphabet.
///
/// [`InvalidLength`]: Error::InvalidLength
/// [`InvalidPadding`]: Error::InvalidPadding
/// [`InvalidChar`]: Error::InvalidChar
pub fn from_str(input: &str) -> Result<Vec<u8>> {
    if !input.len().is_multiple_of(4) {
        return Err(Error::InvalidLength);
    }

    Ok(PADDED.decode(input)?)
}

/// Unpadded URL-safe base64.
pub mod raw {
    use ::base64::Engine as _;

    use super::UNPADDED;
    use crate::error::Result;

    /// Encodes bytes as unpadded URL-safe base64.
    ///
    /// Use [`from_str`] to reverse the operation.
    #[must_use]
    pub fn to_string(bytes: &[u8]) -> String {
        UNPADDED.encode(bytes)
    }

    /// Decodes unpadded URL-safe base64.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidPadding`] if the input contains any `=` padding,
    /// [`InvalidLength`] if no byte sequence encodes to that length, and
    /// [`InvalidChar`] for any character outside the URL-safe alphabet.
    ///
    /// [`InvalidLength`]: crate::Error::InvalidLength
    /// [`InvalidPadding`]: crate::Error::InvalidPadding
    /// [`InvalidChar`]: crate::Error::InvalidChar
    pub fn from_str(input: &str) -> Result<Vec<u8>> {
        Ok(UNPADDED.decode(input)?)
    }
}
