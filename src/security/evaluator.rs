/// Classification of decoded mints and burn percentages
use crate::tokens::MintRecord;
use serde::Serialize;

/// Token safety verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TokenSafety {
    /// Mint and freeze authority are both revoked
    Safe,
    /// At least one authority is still set
    PotentiallyRisky,
}

impl TokenSafety {
    pub fn is_safe(&self) -> bool {
        matches!(self, TokenSafety::Safe)
    }

    pub fn description(&self) -> &'static str {
        match self {
            TokenSafety::Safe => {
                "This token is safe to trade; it is neither a scam nor a honeypot."
            }
            TokenSafety::PotentiallyRisky => {
                "This token is potentially risky; it might be a scam or honeypot."
            }
        }
    }
}

/// Safe only when both authority option tags are 0
pub fn evaluate_token_safety(mint: &MintRecord) -> TokenSafety {
    if mint.mint_authority_option == 0 && mint.freeze_authority_option == 0 {
        TokenSafety::Safe
    } else {
        TokenSafety::PotentiallyRisky
    }
}

/// LP burn verdict
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "status")]
pub enum LiquidityBurnStatus {
    FullyBurned,
    /// Carries the remaining (unburned) share, not the burned share
    PartiallyBurned { remaining_percent: f64 },
}

impl LiquidityBurnStatus {
    pub fn is_fully_burned(&self) -> bool {
        matches!(self, LiquidityBurnStatus::FullyBurned)
    }
}

/// Fully burned only on exact equality with 100
pub fn evaluate_liquidity_burn(burn_percent: f64) -> LiquidityBurnStatus {
    if burn_percent == 100.0 {
        LiquidityBurnStatus::FullyBurned
    } else {
        LiquidityBurnStatus::PartiallyBurned {
            remaining_percent: 100.0 - burn_percent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::security::compute_burn_percentage;
    use solana_sdk::pubkey::Pubkey;

    fn mint(mint_option: u32, freeze_option: u32) -> MintRecord {
        MintRecord {
            mint_authority_option: mint_option,
            mint_authority: Pubkey::new_from_array([1u8; 32]),
            supply: 10,
            decimals: 0,
            is_initialized: true,
            freeze_authority_option: freeze_option,
            freeze_authority: Pubkey::new_from_array([2u8; 32]),
        }
    }

    #[test]
    fn test_safe_only_when_both_revoked() {
        assert_eq!(evaluate_token_safety(&mint(0, 0)), TokenSafety::Safe);
        assert_eq!(evaluate_token_safety(&mint(1, 0)), TokenSafety::PotentiallyRisky);
        assert_eq!(evaluate_token_safety(&mint(0, 1)), TokenSafety::PotentiallyRisky);
        assert_eq!(evaluate_token_safety(&mint(1, 1)), TokenSafety::PotentiallyRisky);
    }

    #[test]
    fn test_nonstandard_option_tag_is_risky() {
        assert_eq!(evaluate_token_safety(&mint(7, 0)), TokenSafety::PotentiallyRisky);
    }

    #[test]
    fn test_fully_burned_scenario() {
        let pct = compute_burn_percentage(1_000_000, 0, 6).unwrap();
        assert_eq!(evaluate_liquidity_burn(pct), LiquidityBurnStatus::FullyBurned);
    }

    #[test]
    fn test_partially_burned_reports_remaining() {
        let pct = compute_burn_percentage(1_000_000, 250_000, 6).unwrap();
        assert_eq!(evaluate_liquidity_burn(pct), LiquidityBurnStatus::PartiallyBurned {
            remaining_percent: 25.0,
        });
    }

    #[test]
    fn test_near_hundred_is_not_fully_burned() {
        let status = evaluate_liquidity_burn(99.999_999_9);
        assert!(!status.is_fully_burned());
    }

    #[test]
    fn test_negative_burn_reports_above_hundred_remaining() {
        match evaluate_liquidity_burn(-20.0) {
            LiquidityBurnStatus::PartiallyBurned { remaining_percent } => {
                assert_eq!(remaining_percent, 120.0);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_status_serializes_with_tag() {
        let json = serde_json::to_value(LiquidityBurnStatus::PartiallyBurned {
            remaining_percent: 25.0,
        })
        .unwrap();
        assert_eq!(json["status"], "PartiallyBurned");
        assert_eq!(json["remaining_percent"], 25.0);
    }
}
