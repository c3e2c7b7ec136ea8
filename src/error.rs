//! Unified error types.

use thiserror::Error;

/// Top-level error for both the conversion and minting flows.
#[derive(Error, Debug)]
pub enum SolmintError {
    #[error("Key error: {0}")]
    Key(#[from] KeyError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Chain error: {0}")]
    Chain(#[from] ChainError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

/// Key parsing and reconstruction errors.
#[derive(Error, Debug)]
pub enum KeyError {
    /// Every decoding probe was exhausted without producing 64 bytes.
    #[error("unable to parse private key: no supported format matched")]
    UnrecognizedFormat,

    #[error("secret key must be exactly 64 bytes, got {actual}")]
    InvalidLength { actual: usize },

    /// The 64 bytes are not a consistent ed25519 keypair (public half does
    /// not match the secret half). Only signing paths require consistency.
    #[error("invalid keypair bytes: {0}")]
    InvalidKeypair(String),
}

/// Storage-uploader errors.
#[derive(Error, Debug)]
pub enum StorageError {
    #[cfg(feature = "client")]
    #[error("Request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Upload node error {status}: {body}")]
    ServerError { status: u16, body: String },

    #[error("Rate limited (retry after {retry_after_ms:?}ms)")]
    RateLimited { retry_after_ms: Option<u64> },

    #[error("Malformed upload receipt: {0}")]
    BadReceipt(String),

    #[error("Timeout")]
    Timeout,

    #[error("Max retries exceeded after {attempts} attempts: {last_error}")]
    MaxRetriesExceeded { attempts: u32, last_error: String },
}

/// Solana RPC errors.
#[derive(Error, Debug)]
pub enum ChainError {
    #[cfg(feature = "client")]
    #[error("RPC error: {0}")]
    Rpc(#[from] solana_client::client_error::ClientError),

    #[error("Instruction error: {0}")]
    Instruction(String),
}
