//! Environment-driven configuration for the mint flow.
//!
//! Every knob has a default matching the public-network setup, so a bare
//! `mint-nft` run only needs a funded keypair file and an image. Values are
//! read from `SOLMINT_*` environment variables (a `.env` file is loaded by
//! the binaries before this runs).

use std::env;
use std::path::PathBuf;

use crate::network;
use crate::wallet;

/// Configuration for one mint run.
#[derive(Debug, Clone)]
pub struct MintConfig {
    pub rpc_url: String,
    pub uploader_url: String,
    pub gateway_url: String,
    pub keypair_path: PathBuf,
    pub image_path: PathBuf,
    pub image_content_type: String,
    pub name: String,
    pub symbol: String,
    pub description: String,
    pub external_url: Option<String>,
    pub seller_fee_basis_points: u16,
    /// Where the generated mint keypair is persisted.
    pub mint_keypair_path: PathBuf,
}

impl Default for MintConfig {
    fn default() -> Self {
        Self {
            rpc_url: network::DEFAULT_RPC_URL.to_string(),
            uploader_url: network::DEFAULT_UPLOADER_URL.to_string(),
            gateway_url: network::DEFAULT_GATEWAY_URL.to_string(),
            keypair_path: wallet::default_keypair_path(),
            image_path: PathBuf::from("nft.png"),
            image_content_type: "image/png".to_string(),
            name: String::new(),
            symbol: String::new(),
            description: String::new(),
            external_url: None,
            seller_fee_basis_points: 5000,
            mint_keypair_path: PathBuf::from("mint-keypair.json"),
        }
    }
}

impl MintConfig {
    /// Read configuration from `SOLMINT_*` environment variables, falling
    /// back to defaults for anything unset.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            rpc_url: var_or("SOLMINT_RPC_URL", defaults.rpc_url),
            uploader_url: var_or("SOLMINT_UPLOADER_URL", defaults.uploader_url),
            gateway_url: var_or("SOLMINT_GATEWAY_URL", defaults.gateway_url),
            keypair_path: env::var_os("SOLMINT_KEYPAIR_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.keypair_path),
            image_path: env::var_os("SOLMINT_IMAGE_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.image_path),
            image_content_type: var_or("SOLMINT_IMAGE_CONTENT_TYPE", defaults.image_content_type),
            name: var_or("SOLMINT_NFT_NAME", defaults.name),
            symbol: var_or("SOLMINT_NFT_SYMBOL", defaults.symbol),
            description: var_or("SOLMINT_NFT_DESCRIPTION", defaults.description),
            external_url: env::var("SOLMINT_EXTERNAL_URL").ok(),
            seller_fee_basis_points: env::var("SOLMINT_SELLER_FEE_BPS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.seller_fee_basis_points),
            mint_keypair_path: env::var_os("SOLMINT_MINT_KEYPAIR_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.mint_keypair_path),
        }
    }
}

fn var_or(key: &str, default: String) -> String {
    env::var(key).unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = MintConfig::default();
        assert_eq!(cfg.rpc_url, network::DEFAULT_RPC_URL);
        assert_eq!(cfg.seller_fee_basis_points, 5000);
        assert_eq!(cfg.mint_keypair_path, PathBuf::from("mint-keypair.json"));
    }
}
