/// Liquidity pool state decoding
///
/// Pool account layouts are large and versioned by each DEX, so burn checks
/// only depend on the [`PoolStateSchema`] trait. Any schema that can produce
/// the LP mint and the LP reserve can be injected.
pub mod raydium_amm_v4;

pub use raydium_amm_v4::{RaydiumAmmV4Schema, RAYDIUM_AMM_V4_LAYOUT};

use crate::errors::DecodeError;
use solana_sdk::pubkey::Pubkey;

/// The subset of pool state consumed by LP burn checks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolState {
    /// Mint of the pool's LP share token
    pub lp_mint: Pubkey,
    /// Raw LP reserve recorded by the pool
    pub lp_reserve: u64,
}

/// Decoder for one pool account layout
pub trait PoolStateSchema: Send + Sync {
    /// Schema identifier used in error messages
    fn name(&self) -> &'static str;

    /// Extract the LP mint and reserve, failing with
    /// `DecodeError::SchemaMismatch` when `data` does not fit the schema.
    fn decode_pool_state(&self, data: &[u8]) -> Result<PoolState, DecodeError>;
}
