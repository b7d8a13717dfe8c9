/// Raydium legacy AMM (liquidity state v4) pool schema
///
/// Accounts owned by the Raydium AMM v4 program are 752 bytes: 32 u64
/// parameters, swap accounting, twelve pubkeys, the LP reserve and three u64
/// of padding.
use super::{PoolState, PoolStateSchema};
use crate::errors::DecodeError;
use crate::layout::{self, FieldSpec, Layout};
use solana_sdk::pubkey::Pubkey;

const SCHEMA_NAME: &str = "raydium_amm_v4";

pub const RAYDIUM_AMM_V4_LAYOUT: Layout = Layout::new(SCHEMA_NAME, &[
    FieldSpec::u64("status"),
    FieldSpec::u64("nonce"),
    FieldSpec::u64("max_order"),
    FieldSpec::u64("depth"),
    FieldSpec::u64("base_decimal"),
    FieldSpec::u64("quote_decimal"),
    FieldSpec::u64("state"),
    FieldSpec::u64("reset_flag"),
    FieldSpec::u64("min_size"),
    FieldSpec::u64("vol_max_cut_ratio"),
    FieldSpec::u64("amount_wave_ratio"),
    FieldSpec::u64("base_lot_size"),
    FieldSpec::u64("quote_lot_size"),
    FieldSpec::u64("min_price_multiplier"),
    FieldSpec::u64("max_price_multiplier"),
    FieldSpec::u64("system_decimal_value"),
    FieldSpec::u64("min_separate_numerator"),
    FieldSpec::u64("min_separate_denominator"),
    FieldSpec::u64("trade_fee_numerator"),
    FieldSpec::u64("trade_fee_denominator"),
    FieldSpec::u64("pnl_numerator"),
    FieldSpec::u64("pnl_denominator"),
    FieldSpec::u64("swap_fee_numerator"),
    FieldSpec::u64("swap_fee_denominator"),
    FieldSpec::u64("base_need_take_pnl"),
    FieldSpec::u64("quote_need_take_pnl"),
    FieldSpec::u64("quote_total_pnl"),
    FieldSpec::u64("base_total_pnl"),
    FieldSpec::u64("pool_open_time"),
    FieldSpec::u64("punish_pc_amount"),
    FieldSpec::u64("punish_coin_amount"),
    FieldSpec::u64("orderbook_to_init_time"),
    FieldSpec::u128("swap_base_in_amount"),
    FieldSpec::u128("swap_quote_out_amount"),
    FieldSpec::u64("swap_base2quote_fee"),
    FieldSpec::u128("swap_quote_in_amount"),
    FieldSpec::u128("swap_base_out_amount"),
    FieldSpec::u64("swap_quote2base_fee"),
    FieldSpec::public_key("base_vault"),
    FieldSpec::public_key("quote_vault"),
    FieldSpec::public_key("base_mint"),
    FieldSpec::public_key("quote_mint"),
    FieldSpec::public_key("lp_mint"),
    FieldSpec::public_key("open_orders"),
    FieldSpec::public_key("market_id"),
    FieldSpec::public_key("market_program_id"),
    FieldSpec::public_key("target_orders"),
    FieldSpec::public_key("withdraw_queue"),
    FieldSpec::public_key("lp_vault"),
    FieldSpec::public_key("owner"),
    FieldSpec::u64("lp_reserve"),
    FieldSpec::padding("padding", 24),
]);

pub const RAYDIUM_AMM_V4_LEN: usize = RAYDIUM_AMM_V4_LAYOUT.span();

/// Decodes Raydium AMM v4 pool accounts
#[derive(Debug, Clone, Copy, Default)]
pub struct RaydiumAmmV4Schema;

impl RaydiumAmmV4Schema {
    pub fn new() -> Self {
        Self
    }

    fn mismatch(reason: String) -> DecodeError {
        DecodeError::SchemaMismatch {
            schema: SCHEMA_NAME,
            reason,
        }
    }
}

impl PoolStateSchema for RaydiumAmmV4Schema {
    fn name(&self) -> &'static str {
        SCHEMA_NAME
    }

    fn decode_pool_state(&self, data: &[u8]) -> Result<PoolState, DecodeError> {
        if data.len() < RAYDIUM_AMM_V4_LEN {
            return Err(Self::mismatch(format!(
                "expected at least {} bytes, got {}",
                RAYDIUM_AMM_V4_LEN,
                data.len()
            )));
        }

        let record = layout::decode(&RAYDIUM_AMM_V4_LAYOUT, data)
            .map_err(|e| Self::mismatch(e.to_string()))?;

        let lp_mint = record
            .pubkey("lp_mint")
            .ok_or_else(|| Self::mismatch("missing lp_mint".to_string()))?;
        let lp_reserve = record
            .u64("lp_reserve")
            .ok_or_else(|| Self::mismatch("missing lp_reserve".to_string()))?;

        if lp_mint == Pubkey::default() {
            return Err(Self::mismatch("lp_mint is unset (uninitialized pool)".to_string()));
        }

        Ok(PoolState {
            lp_mint,
            lp_reserve,
        })
    }
}
