use burnscreen::{
    arguments::Cli,
    logger::{self, LogTag},
    run::run_checks,
};
use clap::Parser;
use std::process::ExitCode;

/// Main entry point for burnscreen
///
/// Exits with 0 only when every requested check produced a classification.
#[tokio::main]
async fn main() -> ExitCode {
    // RPC_URL may come from .env
    dotenv::dotenv().ok();

    let cli = Cli::parse();
    logger::init(cli.logger_config());

    match run_checks(&cli).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            logger::error(LogTag::System, &format!("❌ {:#}", e));
            ExitCode::FAILURE
        }
    }
}
