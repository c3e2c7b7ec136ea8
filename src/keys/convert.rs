//! Conversion result: one secret key re-emitted in every supported encoding.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use serde::Serialize;

use crate::error::KeyError;
use crate::keys::{detect, KeyFormat, KeyInput, SecretKeyBytes};

/// All textual encodings of one secret key.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct KeyEncodings {
    /// Numeric byte array (the wallet-file format).
    pub array: Vec<u8>,
    pub base58: String,
    pub base64: String,
    pub hex: String,
    /// Comma-separated decimal bytes, no brackets.
    pub comma: String,
    /// The byte array serialized as a JSON string.
    pub json_array: String,
}

/// Read-only view of a converted key: public identifier plus every encoding
/// of the secret. Derived entirely from the source key.
#[derive(Debug, Clone, Serialize)]
pub struct ConvertedKey {
    /// Base58 display string of the public identifier.
    pub pubkey: String,
    /// The encoding the input was detected as.
    pub format: KeyFormat,
    pub encodings: KeyEncodings,
}

impl ConvertedKey {
    pub fn from_secret(secret: &SecretKeyBytes, format: KeyFormat) -> Self {
        let bytes = secret.as_bytes();
        let array = bytes.to_vec();
        let comma = array
            .iter()
            .map(|b| b.to_string())
            .collect::<Vec<_>>()
            .join(",");
        // Vec<u8> serializes as a plain JSON number array; cannot fail.
        let json_array = serde_json::to_string(&array).unwrap_or_default();

        Self {
            pubkey: secret.pubkey().to_string(),
            format,
            encodings: KeyEncodings {
                base58: bs58::encode(bytes).into_string(),
                base64: BASE64.encode(bytes),
                hex: hex::encode(bytes),
                comma,
                json_array,
                array,
            },
        }
    }

    /// The canonical secret bytes backing this view.
    pub fn secret(&self) -> Result<SecretKeyBytes, KeyError> {
        SecretKeyBytes::try_from(self.encodings.array.as_slice())
    }
}

/// Detect the input's encoding and re-emit the secret in every format.
pub fn convert(input: KeyInput<'_>) -> Result<ConvertedKey, KeyError> {
    let decoded = detect(input)?;
    Ok(ConvertedKey::from_secret(&decoded.secret, decoded.format))
}
