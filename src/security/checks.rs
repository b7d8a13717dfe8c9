/// Token authority and LP burn checks
///
/// Each check fetches raw accounts through an [`AccountFetcher`], decodes
/// them and classifies the result. Failures are returned as [`CheckError`]
/// with the cause preserved; user-facing wording lives in `report`.
use super::burn::compute_burn_percentage;
use super::evaluator::{
    evaluate_liquidity_burn, evaluate_token_safety, LiquidityBurnStatus, TokenSafety,
};
use crate::errors::{AccountRole, CheckError, CheckResult};
use crate::logger::{self, LogTag};
use crate::pools::PoolStateSchema;
use crate::rpc::AccountFetcher;
use crate::tokens::{decode_mint, MintRecord, MintSummary};
use serde::Serialize;
use solana_sdk::pubkey::Pubkey;

/// Outcome of a token authority check
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TokenReport {
    pub mint: String,
    #[serde(flatten)]
    pub details: MintSummary,
    pub safety: TokenSafety,
}

/// Outcome of an LP burn check
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LiquidityBurnReport {
    pub pool: String,
    pub schema: &'static str,
    pub lp_mint: String,
    pub lp_reserve_raw: u64,
    pub lp_supply_raw: u64,
    pub lp_decimals: u8,
    pub burn_percent: f64,
    #[serde(flatten)]
    pub status: LiquidityBurnStatus,
}

async fn fetch_required(
    fetcher: &dyn AccountFetcher,
    pubkey: &Pubkey,
    role: AccountRole,
) -> CheckResult<Vec<u8>> {
    fetcher
        .fetch_account_data(pubkey)
        .await?
        .ok_or_else(|| CheckError::AccountNotFound {
            pubkey: pubkey.to_string(),
            role,
        })
}

async fn fetch_mint(
    fetcher: &dyn AccountFetcher,
    pubkey: &Pubkey,
    role: AccountRole,
) -> CheckResult<MintRecord> {
    let data = fetch_required(fetcher, pubkey, role).await?;
    logger::debug(
        LogTag::Decoder,
        &format!("Decoding {} account {} ({} bytes)", role, pubkey, data.len()),
    );
    decode_mint(&data).map_err(|e| CheckError::decode(role, e))
}

/// Check whether mint and freeze authority of `mint` are revoked
pub async fn check_token(fetcher: &dyn AccountFetcher, mint: &Pubkey) -> CheckResult<TokenReport> {
    logger::debug(LogTag::Security, &format!("Checking authorities for MINT: {}", mint));

    let record = fetch_mint(fetcher, mint, AccountRole::Mint).await?;
    let safety = evaluate_token_safety(&record);

    logger::debug(
        LogTag::Security,
        &format!(
            "MINT: {} mint_authority_option={} freeze_authority_option={} -> {:?}",
            mint, record.mint_authority_option, record.freeze_authority_option, safety
        ),
    );

    Ok(TokenReport {
        mint: mint.to_string(),
        details: MintSummary::from(&record),
        safety,
    })
}

/// Check how much of the pool's LP supply has been burned
pub async fn check_lp_burned_state(
    fetcher: &dyn AccountFetcher,
    schema: &dyn PoolStateSchema,
    pool: &Pubkey,
) -> CheckResult<LiquidityBurnReport> {
    logger::debug(
        LogTag::Security,
        &format!("Checking LP burn for POOL: {} ({})", pool, schema.name()),
    );

    let pool_data = fetch_required(fetcher, pool, AccountRole::Pool).await?;
    let state = schema
        .decode_pool_state(&pool_data)
        .map_err(|e| CheckError::decode(AccountRole::Pool, e))?;

    logger::debug(
        LogTag::Pool,
        &format!("POOL: {} lp_mint={} lp_reserve={}", pool, state.lp_mint, state.lp_reserve),
    );

    let lp_mint = fetch_mint(fetcher, &state.lp_mint, AccountRole::LpMint).await?;
    let burn_percent =
        compute_burn_percentage(state.lp_reserve, lp_mint.supply, lp_mint.decimals)?;
    let status = evaluate_liquidity_burn(burn_percent);

    logger::debug(
        LogTag::Security,
        &format!(
            "POOL: {} reserve={} supply={} decimals={} burn={}%",
            pool, state.lp_reserve, lp_mint.supply, lp_mint.decimals, burn_percent
        ),
    );

    Ok(LiquidityBurnReport {
        pool: pool.to_string(),
        schema: schema.name(),
        lp_mint: state.lp_mint.to_string(),
        lp_reserve_raw: state.lp_reserve,
        lp_supply_raw: lp_mint.supply,
        lp_decimals: lp_mint.decimals,
        burn_percent,
        status,
    })
}
