//! Token-2022 instruction builders for NFT creation.
//!
//! The NFT is a token-2022 mint with a self-pointing metadata-pointer
//! extension: the mint account itself carries the name/symbol/URI TLV, so no
//! separate metadata account is needed.

use solana_instruction::Instruction;
use solana_pubkey::Pubkey;
use solana_system_interface::instruction as system_instruction;
use spl_associated_token_account::get_associated_token_address_with_program_id;
use spl_associated_token_account::instruction::create_associated_token_account;
use spl_token_2022::extension::metadata_pointer;
use spl_token_2022::extension::ExtensionType;
use spl_token_2022::instruction as token_instruction;
use spl_token_2022::instruction::AuthorityType;
use spl_token_2022::state::Mint;
use spl_token_metadata_interface::state::TokenMetadata;

use crate::error::ChainError;

/// Parameters for the creation transaction.
pub struct CreateNftParams<'a> {
    pub payer: &'a Pubkey,
    pub mint: &'a Pubkey,
    pub name: String,
    pub symbol: String,
    /// Gateway URI of the uploaded metadata document.
    pub uri: String,
    /// Rent for the mint account plus the metadata TLV realloc.
    pub lamports: u64,
}

/// Mint account size with the metadata-pointer extension.
pub fn mint_account_space() -> Result<usize, ChainError> {
    ExtensionType::try_calculate_account_len::<Mint>(&[ExtensionType::MetadataPointer])
        .map_err(|e| ChainError::Instruction(e.to_string()))
}

/// Size of the metadata TLV entry the initialize instruction will write.
/// Rent must cover this on top of the base mint account.
pub fn metadata_space(
    update_authority: &Pubkey,
    mint: &Pubkey,
    name: &str,
    symbol: &str,
    uri: &str,
) -> Result<usize, ChainError> {
    let metadata = TokenMetadata {
        update_authority: Some(*update_authority)
            .try_into()
            .map_err(|_| ChainError::Instruction("invalid update authority".to_string()))?,
        mint: *mint,
        name: name.to_string(),
        symbol: symbol.to_string(),
        uri: uri.to_string(),
        additional_metadata: Vec::new(),
    };
    metadata
        .tlv_size_of()
        .map_err(|e| ChainError::Instruction(e.to_string()))
}

/// The full creation transaction, in execution order:
/// create the mint account, initialize the metadata pointer (must precede
/// the mint initialization), initialize the mint with 0 decimals and the
/// payer as mint + freeze authority, write the on-chain metadata, create the
/// payer's token account, and mint exactly one token into it.
pub fn create_nft_instructions(
    params: &CreateNftParams<'_>,
) -> Result<Vec<Instruction>, ChainError> {
    let token_program = spl_token_2022::id();
    let space = mint_account_space()?;

    let create_account = system_instruction::create_account(
        params.payer,
        params.mint,
        params.lamports,
        space as u64,
        &token_program,
    );

    let init_metadata_pointer = metadata_pointer::instruction::initialize(
        &token_program,
        params.mint,
        Some(*params.payer),
        // Metadata lives on the mint account itself.
        Some(*params.mint),
    )
    .map_err(|e| ChainError::Instruction(e.to_string()))?;

    let init_mint = token_instruction::initialize_mint2(
        &token_program,
        params.mint,
        params.payer,
        Some(params.payer),
        0,
    )
    .map_err(|e| ChainError::Instruction(e.to_string()))?;

    let init_metadata = spl_token_metadata_interface::instruction::initialize(
        &token_program,
        params.mint,
        params.payer,
        params.mint,
        params.payer,
        params.name.clone(),
        params.symbol.clone(),
        params.uri.clone(),
    );

    let token_account =
        get_associated_token_address_with_program_id(params.payer, params.mint, &token_program);
    let create_token_account = create_associated_token_account(
        params.payer,
        params.payer,
        params.mint,
        &token_program,
    );

    let mint_one = token_instruction::mint_to(
        &token_program,
        params.mint,
        &token_account,
        params.payer,
        &[],
        1,
    )
    .map_err(|e| ChainError::Instruction(e.to_string()))?;

    Ok(vec![
        create_account,
        init_metadata_pointer,
        init_mint,
        init_metadata,
        create_token_account,
        mint_one,
    ])
}

/// Transfer one mint authority (mint-tokens or freeze) to `new_authority`.
pub fn transfer_authority_instruction(
    mint: &Pubkey,
    current_authority: &Pubkey,
    new_authority: &Pubkey,
    authority_type: AuthorityType,
) -> Result<Instruction, ChainError> {
    token_instruction::set_authority(
        &spl_token_2022::id(),
        mint,
        Some(new_authority),
        authority_type,
        current_authority,
        &[],
    )
    .map_err(|e| ChainError::Instruction(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params<'a>(payer: &'a Pubkey, mint: &'a Pubkey) -> CreateNftParams<'a> {
        CreateNftParams {
            payer,
            mint,
            name: "Test NFT".to_string(),
            symbol: "TEST".to_string(),
            uri: "https://gateway.irys.xyz/abc".to_string(),
            lamports: 1_000_000,
        }
    }

    #[test]
    fn test_creation_sequence_shape() {
        let payer = Pubkey::new_unique();
        let mint = Pubkey::new_unique();
        let ixs = create_nft_instructions(&params(&payer, &mint)).unwrap();
        assert_eq!(ixs.len(), 6);

        // Account creation goes to the system program; everything token
        // related to the token-2022 program except the ATA creation.
        assert_eq!(ixs[0].program_id, solana_system_interface::program::ID);
        for ix in &ixs[1..4] {
            assert_eq!(ix.program_id, spl_token_2022::id());
        }
        assert_eq!(ixs[4].program_id, spl_associated_token_account::id());
        assert_eq!(ixs[5].program_id, spl_token_2022::id());
    }

    #[test]
    fn test_mint_is_writable_signer_on_create() {
        let payer = Pubkey::new_unique();
        let mint = Pubkey::new_unique();
        let ixs = create_nft_instructions(&params(&payer, &mint)).unwrap();
        let mint_meta = ixs[0]
            .accounts
            .iter()
            .find(|m| m.pubkey == mint)
            .expect("mint account missing from create_account");
        assert!(mint_meta.is_signer);
        assert!(mint_meta.is_writable);
    }

    #[test]
    fn test_metadata_space_grows_with_uri() {
        let payer = Pubkey::new_unique();
        let mint = Pubkey::new_unique();
        let short = metadata_space(&payer, &mint, "N", "S", "u").unwrap();
        let long = metadata_space(&payer, &mint, "N", "S", &"u".repeat(200)).unwrap();
        assert!(long > short);
    }

    #[test]
    fn test_transfer_authority_targets_token_program() {
        let mint = Pubkey::new_unique();
        let current = Pubkey::new_unique();
        let new = Pubkey::new_unique();
        let ix = transfer_authority_instruction(
            &mint,
            &current,
            &new,
            AuthorityType::MintTokens,
        )
        .unwrap();
        assert_eq!(ix.program_id, spl_token_2022::id());
        assert_eq!(ix.accounts[0].pubkey, mint);
    }
}
