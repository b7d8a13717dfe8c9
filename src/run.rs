/// Command execution: config, RPC client, checks and reporting
use crate::arguments::{Cli, Command};
use crate::config::{load_config_from_path, set_rpc_url, with_config};
use crate::errors::CheckResult;
use crate::logger::{self, LogTag};
use crate::pools::{PoolStateSchema, RaydiumAmmV4Schema};
use crate::report::{report_lp_burn_check, report_token_check, CheckOutcome, JsonSummary};
use crate::rpc::{parse_pubkey, AccountFetcher, RpcAccountFetcher};
use crate::security::{check_lp_burned_state, check_token, LiquidityBurnReport, TokenReport};
use anyhow::{anyhow, Context};

/// Run the requested checks against the configured RPC node.
///
/// Returns `Ok(true)` when every check produced a classification. Setup
/// failures (config, RPC client) are errors; check failures are reported and
/// turn the result into `Ok(false)`.
pub async fn run_checks(cli: &Cli) -> anyhow::Result<bool> {
    load_config_from_path(&cli.config).map_err(|e| anyhow!(e))?;
    logger::debug(LogTag::Config, &format!("Config loaded from {}", cli.config.display()));

    if let Some(url) = cli.rpc_url.as_deref() {
        set_rpc_url(url).map_err(|e| anyhow!(e))?;
    }

    let rpc_config = with_config(|cfg| cfg.rpc.clone());
    let fetcher = RpcAccountFetcher::from_config(&rpc_config)
        .map_err(|e| anyhow!(e))
        .context("Failed to create RPC client")?;

    logger::debug(
        LogTag::System,
        &format!(
            "Using RPC {} (commitment={}, timeout={}s)",
            fetcher.url(),
            rpc_config.commitment,
            rpc_config.timeout_secs
        ),
    );

    let schema = RaydiumAmmV4Schema::new();
    let summary = execute(&fetcher, &schema, &cli.command).await;

    if cli.json {
        let json = serde_json::to_string_pretty(&summary).context("Failed to serialize report")?;
        println!("{}", json);
    }

    Ok(summary.all_classified())
}

/// Run the checks `command` asks for, logging each outcome
pub async fn execute(
    fetcher: &dyn AccountFetcher,
    schema: &dyn PoolStateSchema,
    command: &Command,
) -> JsonSummary {
    let mut summary = JsonSummary::new();

    match command {
        Command::Token { mint } => {
            let result = token_check(fetcher, mint).await;
            summary.token = Some(finish_token(mint, &result));
        }
        Command::Pool { pool } => {
            let result = lp_burn_check(fetcher, schema, pool).await;
            summary.liquidity = Some(finish_lp_burn(pool, &result));
        }
        Command::Check { mint, pool } => {
            let (token, liquidity) = tokio::join!(
                token_check(fetcher, mint),
                lp_burn_check(fetcher, schema, pool)
            );
            summary.token = Some(finish_token(mint, &token));
            summary.liquidity = Some(finish_lp_burn(pool, &liquidity));
        }
    }

    summary
}

async fn token_check(fetcher: &dyn AccountFetcher, address: &str) -> CheckResult<TokenReport> {
    let mint = parse_pubkey(address)?;
    check_token(fetcher, &mint).await
}

async fn lp_burn_check(
    fetcher: &dyn AccountFetcher,
    schema: &dyn PoolStateSchema,
    address: &str,
) -> CheckResult<LiquidityBurnReport> {
    let pool = parse_pubkey(address)?;
    check_lp_burned_state(fetcher, schema, &pool).await
}

fn finish_token(mint: &str, result: &CheckResult<TokenReport>) -> CheckOutcome<TokenReport> {
    report_token_check(mint, result);
    CheckOutcome::from_result(mint, result)
}

fn finish_lp_burn(
    pool: &str,
    result: &CheckResult<LiquidityBurnReport>,
) -> CheckOutcome<LiquidityBurnReport> {
    report_lp_burn_check(pool, result);
    CheckOutcome::from_result(pool, result)
}
