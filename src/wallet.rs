//! Keypair files: the JSON byte-array format used by the Solana CLI.

use std::path::{Path, PathBuf};

use solana_keypair::Keypair;

use crate::error::SolmintError;
use crate::keys::{detect, KeyInput, SecretKeyBytes};

/// The Solana CLI default keypair location: `$HOME/.config/solana/id.json`.
pub fn default_keypair_path() -> PathBuf {
    let home = std::env::var_os("HOME").unwrap_or_default();
    PathBuf::from(home).join(".config/solana/id.json")
}

/// Load the canonical secret bytes from a JSON byte-array file.
///
/// A missing or unreadable file fails fast; this is the first step of the
/// mint flow and nothing downstream can proceed without it.
pub fn load_secret_bytes(path: &Path) -> Result<SecretKeyBytes, SolmintError> {
    let contents = std::fs::read_to_string(path).map_err(|e| {
        SolmintError::Other(format!(
            "cannot read keypair file {}: {e}; provide a keypair file or run solana-keygen",
            path.display()
        ))
    })?;
    let decoded = detect(KeyInput::Text(&contents))?;
    Ok(decoded.secret)
}

/// Load a signing-capable keypair from a JSON byte-array file.
pub fn load_keypair(path: &Path) -> Result<Keypair, SolmintError> {
    Ok(load_secret_bytes(path)?.to_keypair()?)
}

/// Write secret bytes as a JSON number array, the same shape `load_keypair`
/// and the Solana CLI read back.
pub fn save_secret_bytes(path: &Path, secret: &SecretKeyBytes) -> Result<(), SolmintError> {
    let json = serde_json::to_string(&secret.as_bytes().to_vec())?;
    std::fs::write(path, json)?;
    tracing::info!(path = %path.display(), "keypair saved");
    Ok(())
}

/// Convenience for saving a freshly generated keypair.
pub fn save_keypair(path: &Path, keypair: &Keypair) -> Result<(), SolmintError> {
    save_secret_bytes(path, &SecretKeyBytes::from(keypair))
}
