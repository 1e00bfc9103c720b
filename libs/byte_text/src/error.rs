//! Error handling types.

/// Result type with [`Error`] as the default error.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Error decoding textual byte data.
///
/// Every encoding shares this error type. Decoding never partially writes to
/// its destination, so on any of these errors the target value is unchanged.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The literal was not wrapped in double quotes.
    #[error("encoded bytes must be a quoted string")]
    NotQuoted,
    /// A hex string had an odd number of digits.
    #[error("hex data has an odd length")]
    OddLength,
    /// A character outside the alphabet of the encoding was found.
    #[error("invalid character {found:?} at index {index}")]
    InvalidChar {
        /// Byte offset of the character within the unquoted text.
        index: usize,
        /// The offending character.
        found: char,
    },
    /// The length of the text is impossible for the encoding.
    #[error("length invalid for encoding")]
    InvalidLength,
    /// Padding was missing, misplaced, or present when forbidden.
    #[error("invalid padding for encoding")]
    InvalidPadding,
    /// The decoded data did not fit a fixed-size destination exactly.
    #[error("expected {expected} bytes but decoded {actual}")]
    LengthMismatch {
        /// Size of the destination.
        expected: usize,
        /// Length of the decoded data.
        actual: usize,
    },
}

impl From<::hex::FromHexError> for Error {
    fn from(value: ::hex::FromHexError) -> Self {
        use ::hex::FromHexError;

        match value {
            FromHexError::InvalidHexCharacter { c, index } => Self::InvalidChar { index, found: c },
            FromHexError::OddLength => Self::OddLength,
            FromHexError::InvalidStringLength => Self::InvalidLength,
        }
    }
}

impl From<::base64::DecodeError> for Error {
    fn from(value: ::base64::DecodeError) -> Self {
        use ::base64::DecodeError;

        match value {
            DecodeError::InvalidByte(index, byte) | DecodeError::InvalidLastSymbol(index, byte) => {
                Self::InvalidChar {
                    index,
                    found: char::from(byte),
                }
            },
            DecodeError::InvalidLength(_) => Self::InvalidLength,
            DecodeError::InvalidPadding => Self::InvalidPadding,
        }
    }
}
