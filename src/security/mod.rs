/// Rug-pull due diligence: authority revocation and LP burn
pub mod burn;
pub mod checks;
pub mod evaluator;

pub use burn::compute_burn_percentage;
pub use checks::{check_lp_burned_state, check_token, LiquidityBurnReport, TokenReport};
pub use evaluator::{
    evaluate_liquidity_burn, evaluate_token_safety, LiquidityBurnStatus, TokenSafety,
};
