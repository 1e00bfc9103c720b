use serde::{Deserialize, Serialize};

use crate::active::set_active;
use crate::encoder::Encoder;

/// Configuration section selecting the process-wide encoder.
///
/// Meant to be embedded in an application's configuration file. Missing
/// fields use their defaults.
///
/// # Examples
///
/// ```toml
/// [bytes]
/// encoder = "raw_base64"
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// The encoder to install. Defaults to `hex`.
    pub encoder: Encoder,
}

impl Config {
    /// Installs the configured encoder as the process-wide active one.
    ///
    /// Returns the previously active encoder.
    pub fn apply(self) -> Encoder {
        set_active(self.encoder)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_toml() {
        let config: Config = toml::from_str(r#"encoder = "raw_base64""#).expect("config must parse");
        assert_eq!(config.encoder, Encoder::RawBase64, "encoder should be read");
    }

    #[test]
    fn parse_toml_default() {
        let config: Config = toml::from_str("").expect("empty config must parse");
        assert_eq!(config.encoder, Encoder::Hex, "hex is the default");
    }

    #[test]
    fn parse_toml_unknown() {
        toml::from_str::<Config>(r#"encoder = "base32""#).expect_err("base32 is not an encoder");
    }
}
