//! The byte encoding strategies and their text literal form.

use std::fmt;
use std::str::FromStr;

use serde::de::{Deserializer, Visitor};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A strategy for converting raw bytes to text and back.
///
/// All strategies are stateless. For any `bytes`,
/// `encoder.decode(&encoder.encode(bytes))` yields `bytes` again.
///
/// The text form of each encoding only uses characters that JSON strings can
/// hold verbatim, so the [`marshal`](Self::marshal) output is a valid JSON
/// string literal as-is.
///
/// For configuration, encoders are named `hex`, `base64`, and `raw_base64`.
/// This applies to [`Display`](fmt::Display), [`FromStr`], and serde.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum Encoder {
    /// Uppercase hexadecimal. See [`crate::hex`].
    #[default]
    Hex = 0,
    /// Padded URL-safe base64. See [`crate::base64`].
    Base64 = 1,
    /// Unpadded URL-safe base64. See [`crate::base64::raw`].
    RawBase64 = 2,
}

impl Encoder {
    /// All available encoders.
    pub const ALL: [Self; 3] = [Self::Hex, Self::Base64, Self::RawBase64];

    /// The configuration name of this encoder.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Hex => "hex",
            Self::Base64 => "base64",
            Self::RawBase64 => "raw_base64",
        }
    }

    pub(crate) const fn from_repr(repr: u8) -> Self {
        match repr {
            1 => Self::Base64,
            2 => Self::RawBase64,
            _ => Self::Hex,
        }
    }

    /// Encodes bytes as unquoted text.
    #[must_use]
    pub fn encode(self, bytes: &[u8]) -> String {
        match self {
            Self::Hex => crate::hex::to_string(bytes),
            Self::Base64 => crate::base64::to_string(bytes),
            Self::RawBase64 => crate::base64::raw::to_string(bytes),
        }
    }

    /// Decodes unquoted text into a new buffer.
    ///
    /// # Errors
    ///
    /// Returns an error if `text` isn't valid for this encoding.
    pub fn decode(self, text: &str) -> Result<Vec<u8>> {
        match self {
            Self::Hex => crate::hex::from_str(text),
            Self::Base64 => crate::base64::from_str(text),
            Self::RawBase64 => crate::base64::raw::from_str(text),
        }
    }

    /// Encodes bytes as a quoted text literal, f.e. `"1A2B"`.
    ///
    /// Use [`unmarshal`](Self::unmarshal) to reverse the operation.
    #[must_use]
    pub fn marshal(self, bytes: &[u8]) -> String {
        let text = self.encode(bytes);

        let mut literal = String::with_capacity(text.len() + 2);
        literal.push('"');
        literal.push_str(&text);
        literal.push('"');
        literal
    }

    /// Decodes a quoted text literal.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotQuoted`] if `literal` isn't wrapped in double
    /// quotes, or any error [`decode`](Self::decode) may return.
    pub fn unmarshal(self, literal: &str) -> Result<Vec<u8>> {
        self.decode(unquote(literal)?)
    }
}

fn unquote(literal: &str) -> Result<&str> {
    literal
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .ok_or(Error::NotQuoted)
}

impl fmt::Display for Encoder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error parsing an [`Encoder`] from its name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown byte encoder, expected `hex`, `base64`, or `raw_base64`")]
pub struct ParseEncoderError(());

impl FromStr for Encoder {
    type Err = ParseEncoderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|e| e.name() == s)
            .ok_or(ParseEncoderError(()))
    }
}

/// Deserializes a string and decodes it with `encoder`.
///
/// The buffer is only returned once the whole value decoded successfully.
pub(crate) fn deserialize_str<'de, D>(encoder: Encoder, deserializer: D) -> Result<Vec<u8>, D::Error>
where
    D: Deserializer<'de>,
{
    struct EncodedVisitor(Encoder);

    impl Visitor<'_> for EncodedVisitor {
        type Value = Vec<u8>;

        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(formatter, "{} encoded bytes as a string", self.0)
        }

        fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            self.0.decode(v).map_err(|err| {
                log::trace!("Failed to decode {} bytes: {err}", self.0);
                E::custom(err)
            })
        }
    }

    deserializer.deserialize_str(EncodedVisitor(encoder))
}

/// Converts freshly decoded bytes into a fixed-size array.
pub(crate) fn sized<const N: usize>(bytes: Vec<u8>) -> Result<[u8; N]> {
    <[u8; N]>::try_from(bytes).map_err(|bytes| Error::LengthMismatch {
        expected: N,
        actual: bytes.len(),
    })
}

