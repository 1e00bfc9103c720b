use std::ops::{Deref, DerefMut};

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_with::{DeserializeAs as _, SerializeAs as _};

use crate::active::active;
use crate::error::Result;
use crate::with::Active;

/// A growable byte buffer that serializes as text with the [`active`]
/// encoder.
///
/// # Examples
///
/// ```
/// use byte_text::{Bytes, Encoder};
///
/// #[derive(serde::Serialize)]
/// struct Blob {
///     count: u32,
///     data: Bytes,
/// }
///
/// let blob = Blob { count: 15, data: Bytes::from(b"D!.3s".to_vec()) };
/// let json = byte_text::scoped(Encoder::Base64, || serde_json::to_string(&blob))?;
/// assert_eq!(json, r#"{"count":15,"data":"RCEuM3M="}"#);
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Bytes(Vec<u8>);

impl Bytes {
    /// Wraps a byte buffer.
    #[must_use]
    pub const fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    /// Gets the wrapped buffer.
    #[must_use]
    pub fn into_inner(self) -> Vec<u8> {
        self.0
    }

    /// Gets a mutable reference to the wrapped buffer.
    pub fn as_mut_vec(&mut self) -> &mut Vec<u8> {
        &mut self.0
    }

    /// Encodes the bytes as a quoted text literal with the [`active`]
    /// encoder.
    #[must_use]
    pub fn marshal(&self) -> String {
        active().marshal(&self.0)
    }

    /// Replaces the bytes by decoding a quoted text literal with the
    /// [`active`] encoder.
    ///
    /// # Errors
    ///
    /// Returns an error if the literal is invalid for the encoder. In that
    /// case, `self` is left unchanged.
    pub fn unmarshal(&mut self, literal: &str) -> Result<()> {
        self.0 = active().unmarshal(literal)?;
        Ok(())
    }
}

impl Deref for Bytes {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for Bytes {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl AsRef<[u8]> for Bytes {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<Vec<u8>> for Bytes {
    fn from(value: Vec<u8>) -> Self {
        Self(value)
    }
}

impl From<&[u8]> for Bytes {
    fn from(value: &[u8]) -> Self {
        Self(value.to_vec())
    }
}

impl<const N: usize> From<[u8; N]> for Bytes {
    fn from(value: [u8; N]) -> Self {
        Self(value.to_vec())
    }
}

impl From<Bytes> for Vec<u8> {
    fn from(value: Bytes) -> Self {
        value.0
    }
}

impl FromIterator<u8> for Bytes {
    fn from_iter<T: IntoIterator<Item = u8>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Serialize for Bytes {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        Active::serialize_as(&self.0, serializer)
    }
}

impl<'de> Deserialize<'de> for Bytes {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Active::deserialize_as(deserializer)
    }
}
