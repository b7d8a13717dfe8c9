/// User-facing reporting of check outcomes
///
/// Log wording is fixed; the JSON summary carries the same outcomes for
/// scripts.
use crate::errors::{CheckError, CheckResult};
use crate::logger::{self, LogTag};
use crate::security::{LiquidityBurnReport, LiquidityBurnStatus, TokenReport, TokenSafety};
use serde::Serialize;

pub const TOKEN_FAILURE_MESSAGE: &str = "Unable to fetch or parse token information";
pub const POOL_FAILURE_MESSAGE: &str = "Unable to fetch or parse liquidity pool state";

/// Log line for an LP burn classification
pub fn liquidity_burn_message(status: &LiquidityBurnStatus) -> String {
    match status {
        LiquidityBurnStatus::FullyBurned => {
            "The token's liquidity pool (LP) is 100% burned".to_string()
        }
        // Reports the remaining share under the "burned" wording
        LiquidityBurnStatus::PartiallyBurned { remaining_percent } => {
            format!("The token's liquidity pool (LP) is {}% burned", remaining_percent)
        }
    }
}

pub fn report_token_check(mint: &str, result: &CheckResult<TokenReport>) {
    match result {
        Ok(report) => match report.safety {
            TokenSafety::Safe => logger::info(LogTag::Security, report.safety.description()),
            TokenSafety::PotentiallyRisky => {
                logger::warning(LogTag::Security, report.safety.description())
            }
        },
        Err(e) => logger::error(
            LogTag::Security,
            &format!("{} for MINT: {} ({})", TOKEN_FAILURE_MESSAGE, mint, e),
        ),
    }
}

pub fn report_lp_burn_check(pool: &str, result: &CheckResult<LiquidityBurnReport>) {
    match result {
        Ok(report) => {
            let message = liquidity_burn_message(&report.status);
            if report.status.is_fully_burned() {
                logger::info(LogTag::Security, &message);
            } else {
                logger::warning(LogTag::Security, &message);
            }
        }
        Err(e) => logger::error(
            LogTag::Security,
            &format!("{} for POOL: {} ({})", POOL_FAILURE_MESSAGE, pool, e),
        ),
    }
}

/// Failure entry in the JSON summary
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FailureSummary {
    pub address: String,
    pub kind: &'static str,
    pub message: String,
}

impl FailureSummary {
    fn new(address: &str, error: &CheckError) -> Self {
        Self {
            address: address.to_string(),
            kind: error.kind(),
            message: error.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum CheckOutcome<T> {
    Classified {
        #[serde(flatten)]
        report: T,
    },
    Failed {
        #[serde(flatten)]
        failure: FailureSummary,
    },
}

impl<T: Clone> CheckOutcome<T> {
    pub fn from_result(address: &str, result: &CheckResult<T>) -> Self {
        match result {
            Ok(report) => CheckOutcome::Classified { report: report.clone() },
            Err(e) => CheckOutcome::Failed { failure: FailureSummary::new(address, e) },
        }
    }

    pub fn is_classified(&self) -> bool {
        matches!(self, CheckOutcome::Classified { .. })
    }
}

/// Everything a single invocation checked
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JsonSummary {
    pub checked_at: chrono::DateTime<chrono::Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<CheckOutcome<TokenReport>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub liquidity: Option<CheckOutcome<LiquidityBurnReport>>,
}

impl JsonSummary {
    pub fn new() -> Self {
        Self {
            checked_at: chrono::Utc::now(),
            token: None,
            liquidity: None,
        }
    }

    /// True when every requested check produced a classification
    pub fn all_classified(&self) -> bool {
        self.token.as_ref().map_or(true, CheckOutcome::is_classified)
            && self.liquidity.as_ref().map_or(true, CheckOutcome::is_classified)
    }
}

impl Default for JsonSummary {
    fn default() -> Self {
        Self::new()
    }
}
