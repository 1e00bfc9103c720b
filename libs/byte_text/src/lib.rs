//! Encodes raw bytes as text inside structured documents such as JSON.
//!
//! Three encodings are provided, selected by [`Encoder`]:
//!
//! - [`hex`]: uppercase hexadecimal, f.e. `"1A2B3C"`.
//! - [`base64`]: URL-safe base64 with `=` padding, f.e. `"RCEuM3M="`.
//! - [`base64::raw`]: URL-safe base64 without padding, f.e. `"RCEuM3M"`.
//!
//! Each encoding provides a pair of `to_string` and `from_str` functions.
//! [`Encoder::marshal`] and [`Encoder::unmarshal`] additionally deal with the
//! surrounding quotes of a text literal.
//!
//! The [`Bytes`] and [`ByteArray`] containers implement serde's traits by
//! delegating to the [`active`] encoder. It defaults to [`Encoder::Hex`] and
//! can be changed process-wide via [`set_active`] or [`Config::apply`], or per
//! thread via [`scoped`]. To fix the encoding of a single field instead, use
//! the markers in [`with`].
//!
//! Decoding is strict: text with characters outside the alphabet, wrong
//! length, or wrong padding is rejected with an [`Error`], and the target of
//! a failed decode is never partially overwritten.

// for benchmarks
#[cfg(test)]
use criterion as _;

mod active;
mod array;
pub mod base64;
mod bytes;
mod config;
mod encoder;
mod error;
pub mod hex;
pub mod with;


pub use active::{active, global, scoped, set_active};
pub use array::ByteArray;
pub use bytes::Bytes;
pub use config::Config;
pub use encoder::{Encoder, ParseEncoderError};
pub use error::{Error, Result};
