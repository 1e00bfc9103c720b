//! Marker types to use with [`serde_with`] to pick the encoding per field.
//!
//! [`Hex`], [`Base64`], and [`RawBase64`] always use their respective
//! encoding, regardless of the active encoder. [`Active`] defers to
//! [`active`] at the time of (de)serialization, just like [`Bytes`] does.
//!
//! Any `AsRef<[u8]>` type can be serialized. Deserialization is supported for
//! every type implementing [`FromDecoded`].
//!
//! # Examples
//!
//! ```
//! use serde::{Deserialize, Serialize};
//! use serde_with::As;
//!
//! #[derive(Serialize, Deserialize)]
//! struct Key {
//!     #[serde(with = "As::<byte_text::with::RawBase64>")]
//!     id: [u8; 3],
//! }
//! #
//! # let _ = Key { id: *b"foo" };
//! ```

use serde::de::Error as _;
use serde::{Deserializer, Serializer};
use serde_with::{DeserializeAs, SerializeAs};

use crate::active::active;
use crate::array::ByteArray;
use crate::bytes::Bytes;
use crate::encoder::{self, Encoder};
use crate::error::Result;

/// Always encodes as uppercase hex.
pub enum Hex {}

/// Always encodes as padded URL-safe base64.
pub enum Base64 {}

/// Always encodes as unpadded URL-safe base64.
pub enum RawBase64 {}

/// Encodes with the [`active`] encoder.
pub enum Active {}

/// Types that can be built from decoded bytes.
pub trait FromDecoded: Sized {
    /// Takes ownership of a freshly decoded buffer.
    ///
    /// # Errors
    ///
    /// Returns an error if the data doesn't fit the type, f.e. due to a
    /// length mismatch.
    fn from_decoded(bytes: Vec<u8>) -> Result<Self>;
}

impl FromDecoded for Vec<u8> {
    fn from_decoded(bytes: Vec<u8>) -> Result<Self> {
        Ok(bytes)
    }
}

impl FromDecoded for Box<[u8]> {
    fn from_decoded(bytes: Vec<u8>) -> Result<Self> {
        Ok(bytes.into_boxed_slice())
    }
}

impl<const N: usize> FromDecoded for [u8; N] {
    fn from_decoded(bytes: Vec<u8>) -> Result<Self> {
        encoder::sized(bytes)
    }
}

impl FromDecoded for Bytes {
    fn from_decoded(bytes: Vec<u8>) -> Result<Self> {
        Ok(Self::new(bytes))
    }
}

impl<const N: usize> FromDecoded for ByteArray<N> {
    fn from_decoded(bytes: Vec<u8>) -> Result<Self> {
        encoder::sized(bytes).map(Self::new)
    }
}

macro_rules! impl_marker {
    ($($Marker:ty => $encoder:expr),* $(,)?) => { $(
        impl<T: AsRef<[u8]>> SerializeAs<T> for $Marker {
            fn serialize_as<S>(source: &T, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: Serializer,
            {
                serializer.serialize_str(&$encoder.encode(source.as_ref()))
            }
        }

        impl<'de, T: FromDecoded> DeserializeAs<'de, T> for $Marker {
            fn deserialize_as<D>(deserializer: D) -> Result<T, D::Error>
            where
                D: Deserializer<'de>,
            {
                let bytes = encoder::deserialize_str($encoder, deserializer)?;
                T::from_decoded(bytes).map_err(D::Error::custom)
            }
        }
    )* };
}

impl_marker!(
    Hex => Encoder::Hex,
    Base64 => Encoder::Base64,
    RawBase64 => Encoder::RawBase64,
    Active => active(),
);
