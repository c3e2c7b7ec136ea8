//! Mint an NFT: upload image + metadata, create the token-2022 mint, and
//! transfer mint/freeze authority to the wallet.
//!
//! No flags; configuration comes from `SOLMINT_*` environment variables
//! (a `.env` file is honored).

use anyhow::Context;
use solmint::prelude::*;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    dotenvy::dotenv().ok();

    let config = MintConfig::from_env();
    let receipt = mint_nft(&config).await.context("mint failed")?;

    println!("NFT minted successfully");
    println!("  mint address: {}", receipt.mint);
    println!("  metadata:     {}", receipt.metadata_uri);
    println!("  image:        {}", receipt.image_uri);
    println!("  transaction:  {}", receipt.create_signature);
    println!("  explorer:     {}", receipt.explorer_url());

    Ok(())
}
