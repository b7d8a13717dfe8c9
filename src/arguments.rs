/// Command-line arguments for burnscreen
///
/// Global flags configure config loading and the logger; the subcommand picks
/// which checks run.
use crate::config::CONFIG_FILE_PATH;
use crate::logger::LoggerConfig;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "burnscreen")]
#[command(about = "Check Solana tokens for revoked authorities and burned liquidity", long_about = None)]
pub struct Cli {
    /// Path to the TOML configuration file
    #[arg(long, global = true, default_value = CONFIG_FILE_PATH)]
    pub config: PathBuf,

    /// RPC endpoint, overrides rpc.url and RPC_URL
    #[arg(long, global = true)]
    pub rpc_url: Option<String>,

    /// Print reports as JSON on stdout
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable debug output for a log tag (rpc, security, pool, decoder, all)
    #[arg(long = "debug", value_name = "TAG", global = true)]
    pub debug_tags: Vec<String>,

    /// Show every log line, including verbose RPC traces
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only show warnings and errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub plain: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Check whether mint and freeze authority are revoked
    Token {
        /// Token mint address
        mint: String,
    },

    /// Check how much of a pool's LP supply is burned
    Pool {
        /// Liquidity pool state account address
        pool: String,
    },

    /// Run both checks concurrently
    Check {
        #[arg(long)]
        mint: String,

        #[arg(long)]
        pool: String,
    },
}

impl Cli {
    pub fn logger_config(&self) -> LoggerConfig {
        let mut config = LoggerConfig::from_flags(self.verbose, self.quiet, &self.debug_tags);
        config.plain = self.plain;
        config
    }
}
