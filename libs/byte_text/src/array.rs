use std::ops::{Deref, DerefMut};

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_with::{DeserializeAs as _, SerializeAs as _};

use crate::active::active;
use crate::encoder;
use crate::error::Result;
use crate::with::Active;

/// A fixed-size byte array that serializes as text with the [`active`]
/// encoder.
///
/// The decoded data must be exactly `N` bytes long. Shorter or longer data
/// is rejected with [`Error::LengthMismatch`] rather than being truncated or
/// padded.
///
/// Decoding never writes to the array unless it succeeds. This also holds for
/// [`Deserialize::deserialize_in_place`].
///
/// [`Error::LengthMismatch`]: crate::Error::LengthMismatch
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ByteArray<const N: usize>([u8; N]);

impl<const N: usize> ByteArray<N> {
    /// Wraps a byte array.
    #[must_use]
    pub const fn new(bytes: [u8; N]) -> Self {
        Self(bytes)
    }

    /// Gets the wrapped array.
    #[must_use]
    pub const fn into_inner(self) -> [u8; N] {
        self.0
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
    /// Returns an error if the literal is invalid for the encoder or doesn't
    /// decode to exactly `N` bytes. In that case, no byte of `self` is
    /// modified.
    pub fn unmarshal(&mut self, literal: &str) -> Result<()> {
        let bytes = active().unmarshal(literal)?;
        self.0 = encoder::sized(bytes)?;
        Ok(())
    }
}

impl<const N: usize> Default for ByteArray<N> {
    fn default() -> Self {
        Self([0; N])
    }
}

impl<const N: usize> Deref for ByteArray<N> {
    type Target = [u8; N];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<const N: usize> DerefMut for ByteArray<N> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<const N: usize> AsRef<[u8]> for ByteArray<N> {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl<const N: usize> From<[u8; N]> for ByteArray<N> {
    fn from(value: [u8; N]) -> Self {
        Self(value)
    }
}

impl<const N: usize> From<ByteArray<N>> for [u8; N] {
    fn from(value: ByteArray<N>) -> Self {
        value.0
    }
}

impl<const N: usize> Serialize for ByteArray<N> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        Active::serialize_as(&self.0, serializer)
    }
}

impl<'de, const N: usize> Deserialize<'de> for ByteArray<N> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Active::deserialize_as(deserializer)
    }
}
