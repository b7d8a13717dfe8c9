/// Configuration schemas with embedded defaults
use crate::config_struct;

config_struct! {
    /// Root configuration
    pub struct Config {
        /// RPC configuration
        rpc: RpcConfig = RpcConfig::default(),
    }
}

config_struct! {
    /// RPC endpoint used to fetch mint and pool accounts
    pub struct RpcConfig {
        /// JSON-RPC URL. RPC_URL in the environment overrides it.
        url: String = "https://api.mainnet-beta.solana.com".to_string(),

        /// processed, confirmed or finalized
        commitment: String = "confirmed".to_string(),

        /// Per-request timeout
        timeout_secs: u64 = 30,
    }
}
