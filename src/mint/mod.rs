//! The minting orchestrator: strictly sequential, no retry, no rollback.
//!
//! If a late step fails (e.g. the creation transaction after a successful
//! upload), earlier side effects stay in place; uploads are content-addressed
//! and harmless to leave behind.

pub mod instructions;

use solana_keypair::Keypair;
use solana_pubkey::Pubkey;
use solana_signature::Signature;
use solana_signer::Signer;
use spl_token_2022::instruction::AuthorityType;
use tracing::{info, warn};

use crate::chain::{lamports_to_sol, ChainClient};
use crate::config::MintConfig;
use crate::error::SolmintError;
use crate::keys::SecretKeyBytes;
use crate::metadata::NftMetadata;
use crate::network::{EXPLORER_ADDRESS_URL, LOW_BALANCE_LAMPORTS};
use crate::storage::StorageClient;
use crate::wallet;

use instructions::{
    create_nft_instructions, metadata_space, mint_account_space, transfer_authority_instruction,
    CreateNftParams,
};

/// Everything a completed mint run produced.
#[derive(Debug)]
pub struct MintReceipt {
    pub mint: Pubkey,
    pub image_uri: String,
    pub metadata_uri: String,
    pub create_signature: Signature,
    pub mint_authority_signature: Signature,
    pub freeze_authority_signature: Signature,
}

impl MintReceipt {
    pub fn explorer_url(&self) -> String {
        format!("{}/{}", EXPLORER_ADDRESS_URL, self.mint)
    }
}

/// Run the full mint flow described by `config`.
pub async fn mint_nft(config: &MintConfig) -> Result<MintReceipt, SolmintError> {
    if config.name.is_empty() || config.symbol.is_empty() {
        return Err(SolmintError::Other(
            "SOLMINT_NFT_NAME and SOLMINT_NFT_SYMBOL must be set".to_string(),
        ));
    }

    // Wallet keypair from file; nothing can proceed without it.
    let payer = wallet::load_keypair(&config.keypair_path)?;
    info!(wallet = %payer.pubkey(), "loaded wallet keypair");

    let chain = ChainClient::new(&config.rpc_url);
    let balance = chain.balance(&payer.pubkey()).await?;
    info!(balance_sol = lamports_to_sol(balance), "wallet balance");
    if balance < LOW_BALANCE_LAMPORTS {
        warn!(
            balance_sol = lamports_to_sol(balance),
            "wallet balance below recommended 0.02 SOL for transaction fees"
        );
    }

    let image_bytes = std::fs::read(&config.image_path).map_err(|e| {
        SolmintError::Other(format!(
            "cannot read image file {}: {e}",
            config.image_path.display()
        ))
    })?;

    let storage = StorageClient::new(&config.uploader_url, &config.gateway_url);
    let image_uri = storage
        .upload(image_bytes, &config.image_content_type)
        .await?;

    let mut metadata = NftMetadata::new(
        &config.name,
        &config.symbol,
        &config.description,
        &image_uri,
        &config.image_content_type,
    )
    .with_seller_fee_basis_points(config.seller_fee_basis_points);
    if let Some(url) = &config.external_url {
        metadata = metadata.with_external_url(url);
    }
    let metadata_uri = storage.upload_json(&metadata).await?;
    info!(uri = %metadata_uri, "metadata uploaded");

    // New asset identity, persisted before the transaction is attempted so a
    // failed submit never loses the key.
    let mint = Keypair::new();
    wallet::save_secret_bytes(&config.mint_keypair_path, &SecretKeyBytes::from(&mint))?;

    let space = mint_account_space()?;
    let extra = metadata_space(
        &payer.pubkey(),
        &mint.pubkey(),
        &config.name,
        &config.symbol,
        &metadata_uri,
    )?;
    let lamports = chain.minimum_rent(space + extra).await?;

    info!("submitting creation transaction");
    let params = CreateNftParams {
        payer: &payer.pubkey(),
        mint: &mint.pubkey(),
        name: config.name.clone(),
        symbol: config.symbol.clone(),
        uri: metadata_uri.clone(),
        lamports,
    };
    let ixs = create_nft_instructions(&params)?;
    let create_signature = chain.send(&ixs, &payer, &[&mint]).await?;
    info!(mint = %mint.pubkey(), "NFT minted");

    // Two independent authority transfers, each awaited on its own.
    let ix = transfer_authority_instruction(
        &mint.pubkey(),
        &payer.pubkey(),
        &payer.pubkey(),
        AuthorityType::MintTokens,
    )?;
    let mint_authority_signature = chain.send(&[ix], &payer, &[]).await?;

    let ix = transfer_authority_instruction(
        &mint.pubkey(),
        &payer.pubkey(),
        &payer.pubkey(),
        AuthorityType::FreezeAccount,
    )?;
    let freeze_authority_signature = chain.send(&[ix], &payer, &[]).await?;
    info!("mint and freeze authority transferred to wallet");

    let receipt = MintReceipt {
        mint: mint.pubkey(),
        image_uri,
        metadata_uri,
        create_signature,
        mint_authority_signature,
        freeze_authority_signature,
    };
    info!(url = %receipt.explorer_url(), "view NFT");
    Ok(receipt)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MintConfig;

    #[tokio::test]
    async fn test_empty_name_fails_fast() {
        let config = MintConfig::default();
        let err = mint_nft(&config).await.unwrap_err();
        assert!(err.to_string().contains("SOLMINT_NFT_NAME"));
    }

    #[test]
    fn test_explorer_url() {
        let receipt = MintReceipt {
            mint: Pubkey::new_unique(),
            image_uri: String::new(),
            metadata_uri: String::new(),
            create_signature: Signature::default(),
            mint_authority_signature: Signature::default(),
            freeze_authority_signature: Signature::default(),
        };
        assert!(receipt
            .explorer_url()
            .starts_with("https://explorer.solana.com/address/"));
    }
}
