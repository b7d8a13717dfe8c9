/// LP burn percentage
///
/// Burned share = (reserve - supply) / reserve, where both are normalized by
/// the LP mint decimals. The result is not clamped: an LP supply above the
/// recorded reserve yields a negative percentage.
use crate::errors::ComputationError;

/// Percentage of the LP reserve no longer backed by circulating LP supply
pub fn compute_burn_percentage(
    lp_reserve_raw: u64,
    lp_mint_supply_raw: u64,
    lp_mint_decimals: u8,
) -> Result<f64, ComputationError> {
    let scale = 10f64.powi(i32::from(lp_mint_decimals));
    let reserve = (lp_reserve_raw as f64) / scale;
    let supply = (lp_mint_supply_raw as f64) / scale;

    if reserve == 0.0 {
        return Err(ComputationError::ZeroReserve);
    }

    let burned = reserve - supply;
    Ok((burned / reserve) * 100.0)
}
