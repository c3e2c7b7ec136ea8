//! # solmint
//!
//! A small toolkit for two Solana workflows:
//!
//! 1. **Key conversion** — detect the encoding of a private key (byte array,
//!    JSON array, Base58, Base64, hex, or comma-separated decimals) and
//!    re-emit it in every supported format.
//! 2. **NFT minting** — upload an image and metadata document to a content
//!    storage network, create a token-2022 mint carrying that metadata, and
//!    hand the mint/freeze authorities to the wallet.
//!
//! ## Architecture
//!
//! The crate is organized in layers:
//!
//! 1. **Core** — key formats, metadata types, wallet files (no network)
//! 2. **Clients** — storage uploader + Solana RPC (`client` feature)
//! 3. **Orchestration** — the sequential mint flow
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use solmint::prelude::*;
//!
//! let converted = convert(KeyInput::Text("3KqX..."))?;
//! println!("{}", converted.pubkey);
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Key-format detection, normalization, and conversion.
pub mod keys;

/// NFT metadata document types.
pub mod metadata;

/// Keypair file I/O (JSON byte-array files).
pub mod wallet;

/// Unified error types.
pub mod error;

/// Network URL and threshold constants.
pub mod network;

/// Environment-driven configuration.
pub mod config;

// ── Layer 2: Clients ─────────────────────────────────────────────────────────

/// Content storage uploader.
pub mod storage;

/// Solana RPC access.
#[cfg(feature = "client")]
pub mod chain;

// ── Layer 3: Orchestration ───────────────────────────────────────────────────

/// The sequential mint flow.
#[cfg(feature = "client")]
pub mod mint;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    pub use crate::keys::{
        convert, detect, ConvertedKey, DecodedKey, KeyEncodings, KeyFormat, KeyInput,
        SecretKeyBytes, SECRET_KEY_LEN,
    };

    pub use crate::metadata::{Attribute, FileSpec, NftMetadata, Properties};

    pub use crate::wallet::{
        default_keypair_path, load_keypair, load_secret_bytes, save_keypair, save_secret_bytes,
    };

    pub use crate::config::MintConfig;
    pub use crate::error::{ChainError, KeyError, SolmintError, StorageError};
    pub use crate::network::{DEFAULT_GATEWAY_URL, DEFAULT_RPC_URL, DEFAULT_UPLOADER_URL};

    pub use crate::storage::{gateway_uri, UploadReceipt, UploadRetry};
    #[cfg(feature = "client")]
    pub use crate::storage::StorageClient;

    #[cfg(feature = "client")]
    pub use crate::chain::ChainClient;

    #[cfg(feature = "client")]
    pub use crate::mint::{mint_nft, MintReceipt};
}
