/// JSON-RPC backed account fetcher
use super::AccountFetcher;
use crate::config::RpcConfig;
use crate::errors::FetchError;
use crate::logger::{self, LogTag};
use async_trait::async_trait;
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::commitment_config::CommitmentConfig;
use solana_sdk::pubkey::Pubkey;
use std::time::Duration;

pub struct RpcAccountFetcher {
    client: RpcClient,
    commitment: CommitmentConfig,
}

impl RpcAccountFetcher {
    pub fn new(url: String, commitment: CommitmentConfig, timeout: Duration) -> Self {
        Self {
            client: RpcClient::new_with_timeout_and_commitment(url, timeout, commitment),
            commitment,
        }
    }

    pub fn from_config(config: &RpcConfig) -> Result<Self, String> {
        let commitment = parse_commitment(&config.commitment)?;
        Ok(Self::new(
            config.url.clone(),
            commitment,
            Duration::from_secs(config.timeout_secs),
        ))
    }

    pub fn url(&self) -> String {
        self.client.url()
    }
}

#[async_trait]
impl AccountFetcher for RpcAccountFetcher {
    async fn fetch_account_data(&self, pubkey: &Pubkey) -> Result<Option<Vec<u8>>, FetchError> {
        logger::debug(LogTag::Rpc, &format!("getAccountInfo {}", pubkey));

        let response = self
            .client
            .get_account_with_commitment(pubkey, self.commitment)
            .await
            .map_err(|e| FetchError::Rpc {
                pubkey: pubkey.to_string(),
                message: e.to_string(),
            })?;

        match response.value {
            Some(account) => {
                logger::verbose(
                    LogTag::Rpc,
                    &format!(
                        "Account {} owned by {} ({} bytes, slot {})",
                        pubkey,
                        account.owner,
                        account.data.len(),
                        response.context.slot
                    ),
                );
                Ok(Some(account.data))
            }
            None => {
                logger::debug(LogTag::Rpc, &format!("Account {} does not exist", pubkey));
                Ok(None)
            }
        }
    }
}

/// Parse a commitment level name (processed / confirmed / finalized)
pub fn parse_commitment(level: &str) -> Result<CommitmentConfig, String> {
    match level.trim().to_lowercase().as_str() {
        "processed" => Ok(CommitmentConfig::processed()),
        "confirmed" => Ok(CommitmentConfig::confirmed()),
        "finalized" => Ok(CommitmentConfig::finalized()),
        other => Err(format!(
            "Unknown commitment level '{}', expected processed, confirmed or finalized",
            other
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commitment() {
        assert_eq!(parse_commitment("confirmed").unwrap(), CommitmentConfig::confirmed());
        assert_eq!(parse_commitment(" Finalized ").unwrap(), CommitmentConfig::finalized());
        assert_eq!(parse_commitment("processed").unwrap(), CommitmentConfig::processed());
        assert!(parse_commitment("max").is_err());
    }

    #[test]
    fn test_from_config_keeps_url() {
        let config = RpcConfig {
            url: "http://127.0.0.1:8899".to_string(),
            ..RpcConfig::default()
        };
        let fetcher = RpcAccountFetcher::from_config(&config).unwrap();
        assert_eq!(fetcher.url(), "http://127.0.0.1:8899");
    }

    #[test]
    fn test_from_config_rejects_bad_commitment() {
        let config = RpcConfig {
            commitment: "eventually".to_string(),
            ..RpcConfig::default()
        };
        assert!(RpcAccountFetcher::from_config(&config).is_err());
    }
}
