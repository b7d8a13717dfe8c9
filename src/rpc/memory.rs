/// In-memory account source for exercising checks without a node
use super::AccountFetcher;
use crate::errors::FetchError;
use async_trait::async_trait;
use solana_sdk::pubkey::Pubkey;
use std::collections::HashMap;

#[derive(Debug, Default)]
pub(crate) struct MemoryAccountFetcher {
    accounts: HashMap<Pubkey, Vec<u8>>,
    failing: HashMap<Pubkey, String>,
}

impl MemoryAccountFetcher {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_account(mut self, pubkey: Pubkey, data: Vec<u8>) -> Self {
        self.accounts.insert(pubkey, data);
        self
    }

    /// Make requests for `pubkey` fail as if the node errored
    pub(crate) fn with_failure(mut self, pubkey: Pubkey, message: &str) -> Self {
        self.failing.insert(pubkey, message.to_string());
        self
    }
}

#[async_trait]
impl AccountFetcher for MemoryAccountFetcher {
    async fn fetch_account_data(&self, pubkey: &Pubkey) -> Result<Option<Vec<u8>>, FetchError> {
        if let Some(message) = self.failing.get(pubkey) {
            return Err(FetchError::Rpc {
                pubkey: pubkey.to_string(),
                message: message.clone(),
            });
        }
        Ok(self.accounts.get(pubkey).cloned())
    }
}
