//! Key-format detection and normalization.
//!
//! A Solana secret key is 64 bytes (32-byte seed + 32-byte public key), but
//! wallets and tools hand it around in several textual encodings. This module
//! reconstructs the canonical byte form from whichever encoding it receives.
//!
//! Detection is an ordered, short-circuiting probe chain: each probe is a
//! partial parser that either yields decoded bytes or passes. The first probe
//! whose output is exactly 64 bytes wins; there is no ambiguity resolution
//! between formats beyond the fixed order. The 64-byte length check is applied
//! uniformly to every probe, including Base64.

pub mod convert;

pub use convert::{convert, ConvertedKey, KeyEncodings};

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use solana_keypair::Keypair;
use solana_pubkey::Pubkey;

use crate::error::KeyError;

/// Length of a Solana secret key in bytes.
pub const SECRET_KEY_LEN: usize = 64;

// ─── SecretKeyBytes ──────────────────────────────────────────────────────────

/// Canonical 64-byte secret key. Immutable once constructed.
///
/// The public identifier is the trailing 32 bytes interpreted as a pubkey,
/// which is well-defined for any 64-byte input. Constructing a signing-capable
/// [`Keypair`] additionally requires the two halves to be consistent; see
/// [`SecretKeyBytes::to_keypair`].
#[derive(Clone, PartialEq, Eq)]
pub struct SecretKeyBytes([u8; SECRET_KEY_LEN]);

impl SecretKeyBytes {
    pub fn as_bytes(&self) -> &[u8; SECRET_KEY_LEN] {
        &self.0
    }

    /// The public identifier: the trailing 32 bytes as a pubkey.
    pub fn pubkey(&self) -> Pubkey {
        let mut arr = [0u8; 32];
        arr.copy_from_slice(&self.0[32..]);
        Pubkey::new_from_array(arr)
    }

    /// Reconstruct a signing-capable keypair, validating that the public half
    /// matches the secret half.
    pub fn to_keypair(&self) -> Result<Keypair, KeyError> {
        Keypair::try_from(&self.0[..]).map_err(|e| KeyError::InvalidKeypair(e.to_string()))
    }
}

impl TryFrom<&[u8]> for SecretKeyBytes {
    type Error = KeyError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let arr: [u8; SECRET_KEY_LEN] = bytes
            .try_into()
            .map_err(|_| KeyError::InvalidLength { actual: bytes.len() })?;
        Ok(Self(arr))
    }
}

impl From<&Keypair> for SecretKeyBytes {
    fn from(keypair: &Keypair) -> Self {
        Self(keypair.to_bytes())
    }
}

// Secret material never lands in logs.
impl std::fmt::Debug for SecretKeyBytes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SecretKeyBytes({})", self.pubkey())
    }
}

// ─── KeyFormat ───────────────────────────────────────────────────────────────

/// Supported secret-key encodings, in probe priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyFormat {
    /// Raw 64-byte input (no textual encoding involved).
    Array,
    /// JSON array of integers in `[0, 255]`, e.g. `"[29,103,...,171]"`.
    JsonArray,
    /// Base58 string, the common Solana wallet export format.
    Base58,
    /// Standard-alphabet Base64 string.
    Base64,
    /// Hex string, optionally `0x`-prefixed; length must be even.
    Hex,
    /// Comma-separated decimal bytes, exactly 64 tokens in `[0, 255]`.
    CommaSeparated,
}

impl KeyFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Array => "array",
            Self::JsonArray => "json_array",
            Self::Base58 => "base58",
            Self::Base64 => "base64",
            Self::Hex => "hex",
            Self::CommaSeparated => "comma_separated",
        }
    }
}

impl std::fmt::Display for KeyFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ─── Detection ───────────────────────────────────────────────────────────────

/// Input to the detector: raw bytes or text in an unknown encoding.
#[derive(Debug, Clone, Copy)]
pub enum KeyInput<'a> {
    Bytes(&'a [u8]),
    Text(&'a str),
}

impl<'a> From<&'a [u8]> for KeyInput<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        Self::Bytes(bytes)
    }
}

impl<'a> From<&'a str> for KeyInput<'a> {
    fn from(text: &'a str) -> Self {
        Self::Text(text)
    }
}

/// A successfully reconstructed secret plus the format that matched.
#[derive(Debug, Clone)]
pub struct DecodedKey {
    pub secret: SecretKeyBytes,
    pub format: KeyFormat,
}

type Probe = fn(&str) -> Option<Vec<u8>>;

/// Probe table, evaluated in order. JSON runs before comma-separated so that
/// bracketed lists are claimed by the stricter parser.
const PROBES: &[(KeyFormat, Probe)] = &[
    (KeyFormat::JsonArray, probe_json_array),
    (KeyFormat::Base58, probe_base58),
    (KeyFormat::Base64, probe_base64),
    (KeyFormat::Hex, probe_hex),
    (KeyFormat::CommaSeparated, probe_comma_separated),
];

/// Detect the encoding of `input` and reconstruct the canonical secret.
///
/// Byte input must be exactly 64 bytes. Text input runs the probe chain;
/// the first probe decoding to exactly 64 bytes wins. A probe that decodes
/// to the wrong length is treated as a non-match and the chain continues.
pub fn detect(input: KeyInput<'_>) -> Result<DecodedKey, KeyError> {
    match input {
        KeyInput::Bytes(bytes) => Ok(DecodedKey {
            secret: SecretKeyBytes::try_from(bytes)?,
            format: KeyFormat::Array,
        }),
        KeyInput::Text(text) => {
            let text = text.trim();
            for (format, probe) in PROBES {
                let Some(bytes) = probe(text) else { continue };
                if bytes.len() != SECRET_KEY_LEN {
                    tracing::debug!(
                        format = %format,
                        decoded_len = bytes.len(),
                        "probe decoded to wrong length, continuing"
                    );
                    continue;
                }
                let secret = SecretKeyBytes::try_from(bytes.as_slice())?;
                tracing::debug!(format = %format, pubkey = %secret.pubkey(), "key format detected");
                return Ok(DecodedKey { secret, format: *format });
            }
            Err(KeyError::UnrecognizedFormat)
        }
    }
}

fn probe_json_array(s: &str) -> Option<Vec<u8>> {
    // Vec<u8> deserialization rejects non-arrays, floats, negatives and
    // values above 255.
    serde_json::from_str::<Vec<u8>>(s).ok()
}

fn probe_base58(s: &str) -> Option<Vec<u8>> {
    bs58::decode(s).into_vec().ok()
}

fn probe_base64(s: &str) -> Option<Vec<u8>> {
    BASE64.decode(s).ok()
}

fn probe_hex(s: &str) -> Option<Vec<u8>> {
    let s = s.strip_prefix("0x").unwrap_or(s);
    if s.len() % 2 != 0 {
        return None;
    }
    hex::decode(s).ok()
}

fn probe_comma_separated(s: &str) -> Option<Vec<u8>> {
    s.split(',')
        .map(|token| token.trim().parse::<u8>().ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use solana_signer::Signer;

    fn sample_secret() -> SecretKeyBytes {
        let keypair = Keypair::new();
        SecretKeyBytes::from(&keypair)
    }

    #[test]
    fn test_detect_byte_array() {
        let secret = sample_secret();
        let decoded = detect(KeyInput::Bytes(&secret.as_bytes()[..])).unwrap();
        assert_eq!(decoded.format, KeyFormat::Array);
        assert_eq!(decoded.secret, secret);
    }

    #[test]
    fn test_detect_byte_array_wrong_length() {
        let err = detect(KeyInput::Bytes(&[0u8; 32])).unwrap_err();
        assert!(matches!(err, KeyError::InvalidLength { actual: 32 }));
    }

    #[test]
    fn test_detect_json_array() {
        let secret = sample_secret();
        let json = serde_json::to_string(&secret.as_bytes().to_vec()).unwrap();
        let decoded = detect(KeyInput::Text(&json)).unwrap();
        assert_eq!(decoded.format, KeyFormat::JsonArray);
        assert_eq!(decoded.secret, secret);
    }

    #[test]
    fn test_detect_base58() {
        let secret = sample_secret();
        let encoded = bs58::encode(secret.as_bytes()).into_string();
        let decoded = detect(KeyInput::Text(&encoded)).unwrap();
        assert_eq!(decoded.format, KeyFormat::Base58);
        assert_eq!(decoded.secret, secret);
    }

    #[test]
    fn test_detect_base64() {
        let secret = sample_secret();
        let encoded = BASE64.encode(secret.as_bytes());
        let decoded = detect(KeyInput::Text(&encoded)).unwrap();
        assert_eq!(decoded.secret, secret);
        // Base64 of 64 bytes always contains `=` padding or non-base58
        // characters, so the earlier Base58 probe cannot claim it.
        assert_eq!(decoded.format, KeyFormat::Base64);
    }

    #[test]
    fn test_detect_hex_with_and_without_prefix() {
        let secret = sample_secret();
        let encoded = hex::encode(secret.as_bytes());

        let plain = detect(KeyInput::Text(&encoded)).unwrap();
        assert_eq!(plain.format, KeyFormat::Hex);
        assert_eq!(plain.secret, secret);

        let prefixed = detect(KeyInput::Text(&format!("0x{encoded}"))).unwrap();
        assert_eq!(prefixed.format, KeyFormat::Hex);
        assert_eq!(prefixed.secret, secret);
    }

    #[test]
    fn test_detect_comma_separated() {
        let secret = sample_secret();
        let encoded = secret
            .as_bytes()
            .iter()
            .map(|b| b.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        let decoded = detect(KeyInput::Text(&encoded)).unwrap();
        assert_eq!(decoded.format, KeyFormat::CommaSeparated);
        assert_eq!(decoded.secret, secret);
    }

    #[test]
    fn test_base64_wrong_length_rejected() {
        // 32 bytes of Base64: decodes cleanly but is not a 64-byte secret.
        let encoded = BASE64.encode([7u8; 32]);
        let err = detect(KeyInput::Text(&encoded)).unwrap_err();
        assert!(matches!(err, KeyError::UnrecognizedFormat));
    }

    #[test]
    fn test_odd_length_hex_rejected() {
        let secret = sample_secret();
        let mut encoded = hex::encode(secret.as_bytes());
        encoded.pop();
        let err = detect(KeyInput::Text(&encoded)).unwrap_err();
        assert!(matches!(err, KeyError::UnrecognizedFormat));
    }

    #[test]
    fn test_comma_separated_out_of_range_token_rejected() {
        let mut tokens = vec!["1".to_string(); 63];
        tokens.push("256".to_string());
        let err = detect(KeyInput::Text(&tokens.join(","))).unwrap_err();
        assert!(matches!(err, KeyError::UnrecognizedFormat));
    }

    #[test]
    fn test_comma_separated_wrong_token_count_rejected() {
        let short = vec!["1"; 63].join(",");
        assert!(detect(KeyInput::Text(&short)).is_err());
        let long = vec!["1"; 65].join(",");
        assert!(detect(KeyInput::Text(&long)).is_err());
    }

    #[test]
    fn test_unrecognized_input() {
        let err = detect(KeyInput::Text("not-a-key")).unwrap_err();
        assert!(matches!(err, KeyError::UnrecognizedFormat));
    }

    #[test]
    fn test_all_ones_pubkey_is_deterministic() {
        let first = detect(KeyInput::Bytes(&[1u8; 64])).unwrap();
        let second = detect(KeyInput::Bytes(&[1u8; 64])).unwrap();
        assert_eq!(first.format, KeyFormat::Array);
        assert_eq!(first.secret.pubkey(), second.secret.pubkey());
        assert_eq!(
            first.secret.pubkey().to_string(),
            bs58::encode([1u8; 32]).into_string()
        );
    }

    #[test]
    fn test_pubkey_matches_keypair_for_real_keys() {
        let keypair = Keypair::new();
        let secret = SecretKeyBytes::from(&keypair);
        assert_eq!(secret.pubkey(), keypair.pubkey());
        let rebuilt = secret.to_keypair().unwrap();
        assert_eq!(rebuilt.pubkey(), keypair.pubkey());
    }

    #[test]
    fn test_to_keypair_rejects_inconsistent_halves() {
        // Trailing half is not the pubkey derived from the leading seed.
        let secret = SecretKeyBytes::try_from(&[1u8; 64][..]).unwrap();
        assert!(matches!(
            secret.to_keypair(),
            Err(KeyError::InvalidKeypair(_))
        ));
    }

    #[test]
    fn test_roundtrip_all_text_formats() {
        let secret = sample_secret();
        let bytes = secret.as_bytes();

        let encodings = [
            serde_json::to_string(&bytes.to_vec()).unwrap(),
            bs58::encode(bytes).into_string(),
            BASE64.encode(bytes),
            hex::encode(bytes),
            bytes.iter().map(|b| b.to_string()).collect::<Vec<_>>().join(","),
        ];
        for encoded in &encodings {
            let decoded = detect(KeyInput::Text(encoded)).unwrap();
            assert_eq!(&decoded.secret, &secret, "roundtrip failed for {encoded}");
        }
    }
}
