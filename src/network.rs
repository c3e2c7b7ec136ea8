//! Network URL and threshold constants.

/// Default Solana RPC endpoint (mainnet-beta).
pub const DEFAULT_RPC_URL: &str = "https://api.mainnet-beta.solana.com";

/// Default upload node for content storage.
pub const DEFAULT_UPLOADER_URL: &str = "https://node1.irys.xyz";

/// Gateway used to build retrievable URIs for uploaded content.
pub const DEFAULT_GATEWAY_URL: &str = "https://gateway.irys.xyz";

/// Explorer base URL for minted assets.
pub const EXPLORER_ADDRESS_URL: &str = "https://explorer.solana.com/address";

/// Lamports per SOL.
pub const LAMPORTS_PER_SOL: u64 = 1_000_000_000;

/// Recommended minimum wallet balance for transaction fees (0.02 SOL).
/// Below this the mint flow warns but continues.
pub const LOW_BALANCE_LAMPORTS: u64 = 20_000_000;
