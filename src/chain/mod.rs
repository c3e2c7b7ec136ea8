//! Solana RPC access: balance queries and transaction submission.

use solana_client::nonblocking::rpc_client::RpcClient;
use solana_commitment_config::CommitmentConfig;
use solana_hash::Hash;
use solana_instruction::Instruction;
use solana_keypair::Keypair;
use solana_pubkey::Pubkey;
use solana_signature::Signature;
use solana_signer::Signer;
use solana_transaction::Transaction;

use crate::error::ChainError;
use crate::network::LAMPORTS_PER_SOL;

/// Thin wrapper over the nonblocking RPC client.
///
/// Everything is awaited to completion at finalized commitment; the mint
/// flow is strictly sequential.
pub struct ChainClient {
    rpc: RpcClient,
}

impl ChainClient {
    pub fn new(rpc_url: &str) -> Self {
        Self {
            rpc: RpcClient::new_with_commitment(
                rpc_url.to_string(),
                CommitmentConfig::finalized(),
            ),
        }
    }

    /// Wallet balance in lamports.
    pub async fn balance(&self, pubkey: &Pubkey) -> Result<u64, ChainError> {
        Ok(self.rpc.get_balance(pubkey).await?)
    }

    /// Minimum lamports for rent exemption of `space` bytes.
    pub async fn minimum_rent(&self, space: usize) -> Result<u64, ChainError> {
        Ok(self
            .rpc
            .get_minimum_balance_for_rent_exemption(space)
            .await?)
    }

    pub async fn latest_blockhash(&self) -> Result<Hash, ChainError> {
        Ok(self.rpc.get_latest_blockhash().await?)
    }

    /// Sign `instructions` into one transaction and submit it, waiting for
    /// finalized confirmation.
    pub async fn send(
        &self,
        instructions: &[Instruction],
        payer: &Keypair,
        extra_signers: &[&Keypair],
    ) -> Result<Signature, ChainError> {
        let blockhash = self.latest_blockhash().await?;
        let mut signers: Vec<&Keypair> = Vec::with_capacity(1 + extra_signers.len());
        signers.push(payer);
        signers.extend_from_slice(extra_signers);

        let tx = Transaction::new_signed_with_payer(
            instructions,
            Some(&payer.pubkey()),
            &signers,
            blockhash,
        );
        let signature = self.rpc.send_and_confirm_transaction(&tx).await?;
        tracing::info!(%signature, "transaction confirmed");
        Ok(signature)
    }
}

/// Format a lamport amount as SOL for display.
pub fn lamports_to_sol(lamports: u64) -> f64 {
    lamports as f64 / LAMPORTS_PER_SOL as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lamports_to_sol() {
        assert_eq!(lamports_to_sol(LAMPORTS_PER_SOL), 1.0);
        assert_eq!(lamports_to_sol(20_000_000), 0.02);
        assert_eq!(lamports_to_sol(0), 0.0);
    }
}
