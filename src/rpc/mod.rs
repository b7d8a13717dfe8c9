//! Account-fetch collaborator
//!
//! Checks only need raw account bytes keyed by pubkey. [`AccountFetcher`] is
//! the seam; [`RpcAccountFetcher`] backs it with a Solana JSON-RPC node.
//! Retry, rate limiting and timeouts beyond the client's own request timeout
//! are not handled here.

mod client;

#[cfg(test)]
pub(crate) mod memory;

pub use client::{parse_commitment, RpcAccountFetcher};

use crate::errors::FetchError;
use async_trait::async_trait;
use solana_sdk::pubkey::Pubkey;
use std::str::FromStr;

#[async_trait]
pub trait AccountFetcher: Send + Sync {
    /// Raw data of the account, or `None` if the account does not exist
    async fn fetch_account_data(&self, pubkey: &Pubkey) -> Result<Option<Vec<u8>>, FetchError>;
}

/// Parse a base58 account address
pub fn parse_pubkey(address: &str) -> Result<Pubkey, FetchError> {
    Pubkey::from_str(address.trim()).map_err(|e| FetchError::InvalidAddress {
        address: address.to_string(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pubkey() {
        let key = Pubkey::new_from_array([5u8; 32]);
        assert_eq!(parse_pubkey(&key.to_string()).unwrap(), key);
        assert_eq!(parse_pubkey(&format!("  {} ", key)).unwrap(), key);
    }

    #[test]
    fn test_parse_pubkey_rejects_garbage() {
        let err = parse_pubkey("not-a-key").unwrap_err();
        assert!(matches!(err, FetchError::InvalidAddress { .. }));
        assert!(err.to_string().contains("not-a-key"));
    }
}
