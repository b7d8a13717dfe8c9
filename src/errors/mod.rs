/// Error types for burnscreen
///
/// Decode, computation and fetch failures stay distinct all the way up to the
/// reporting layer, which words them differently for the user.
use std::fmt;
use thiserror::Error;

// =============================================================================
// DECODE ERRORS
// =============================================================================

/// Failure to interpret raw account bytes against a fixed layout
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error(
        "Buffer too short for {layout}.{field}: need {needed} bytes at offset {offset}, have {available}"
    )]
    BufferTooShort {
        layout: &'static str,
        field: &'static str,
        offset: usize,
        needed: usize,
        available: usize,
    },

    #[error("Account data does not match {schema} schema: {reason}")] SchemaMismatch {
        schema: &'static str,
        reason: String,
    },

    #[error("Record value for {layout}.{field} is missing or has the wrong kind")] FieldMismatch {
        layout: &'static str,
        field: &'static str,
    },
}

// =============================================================================
// COMPUTATION ERRORS
// =============================================================================

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComputationError {
    /// LP reserve normalizes to zero, burn state is indeterminate
    #[error("LP reserve is zero, burn percentage is indeterminate")]
    ZeroReserve,
}

// =============================================================================
// FETCH ERRORS
// =============================================================================

/// Failures raised by the account-fetch collaborator
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("Invalid account address '{address}': {reason}")] InvalidAddress {
        address: String,
        reason: String,
    },

    #[error("RPC request for {pubkey} failed: {message}")] Rpc {
        pubkey: String,
        message: String,
    },
}

// =============================================================================
// CHECK ERRORS
// =============================================================================

/// Which account a check was looking at when it failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountRole {
    Mint,
    Pool,
    LpMint,
}

impl fmt::Display for AccountRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccountRole::Mint => write!(f, "mint"),
            AccountRole::Pool => write!(f, "pool"),
            AccountRole::LpMint => write!(f, "LP mint"),
        }
    }
}

/// Error returned by the token and LP burn checks
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CheckError {
    #[error("{role} account {pubkey} not found")] AccountNotFound {
        pubkey: String,
        role: AccountRole,
    },

    #[error("Failed to fetch account: {0}")] Fetch(#[from] FetchError),

    #[error("Failed to decode {role} account: {source}")] Decode {
        role: AccountRole,
        source: DecodeError,
    },

    #[error("Failed to compute LP burn: {0}")] Computation(#[from] ComputationError),
}

impl CheckError {
    pub fn decode(role: AccountRole, source: DecodeError) -> Self {
        CheckError::Decode { role, source }
    }

    /// Short machine-friendly kind, used in JSON output
    pub fn kind(&self) -> &'static str {
        match self {
            CheckError::AccountNotFound { .. } => "account_not_found",
            CheckError::Fetch(_) => "fetch_failed",
            CheckError::Decode { source: DecodeError::SchemaMismatch { .. }, .. } => {
                "schema_mismatch"
            }
            CheckError::Decode { .. } => "decode_failed",
            CheckError::Computation(ComputationError::ZeroReserve) => "zero_reserve",
        }
    }
}

pub type CheckResult<T> = Result<T, CheckError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_error_kinds_stay_distinct() {
        let not_found = CheckError::AccountNotFound {
            pubkey: "abc".to_string(),
            role: AccountRole::Mint,
        };
        let short = CheckError::decode(AccountRole::Mint, DecodeError::BufferTooShort {
            layout: "spl_mint",
            field: "supply",
            offset: 36,
            needed: 8,
            available: 40,
        });
        let mismatch = CheckError::decode(AccountRole::Pool, DecodeError::SchemaMismatch {
            schema: "raydium_amm_v4",
            reason: "too short".to_string(),
        });
        let zero = CheckError::from(ComputationError::ZeroReserve);

        assert_eq!(not_found.kind(), "account_not_found");
        assert_eq!(short.kind(), "decode_failed");
        assert_eq!(mismatch.kind(), "schema_mismatch");
        assert_eq!(zero.kind(), "zero_reserve");
    }

    #[test]
    fn test_display_includes_context() {
        let err = CheckError::AccountNotFound {
            pubkey: "Pool111".to_string(),
            role: AccountRole::LpMint,
        };
        assert_eq!(err.to_string(), "LP mint account Pool111 not found");

        let err = DecodeError::BufferTooShort {
            layout: "spl_mint",
            field: "freeze_authority",
            offset: 50,
            needed: 32,
            available: 81,
        };
        assert!(err.to_string().contains("spl_mint.freeze_authority"));
    }
}
