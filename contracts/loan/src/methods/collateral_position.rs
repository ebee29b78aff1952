use common::{liquidation_threshold, Scaled, PERCENTAGE_FACTOR};
use loan_interface::types::collateral_position::CollateralPosition;
use loan_interface::types::error::Error;
use soroban_sdk::Env;

use crate::types::loan_config::LoanConfig;
use crate::types::loan_state::LoanState;
use crate::types::price_provider::PriceProvider;

use super::calculate_interest::calc_interest;

pub struct DebtValue {
    pub accrued_interest: Scaled,
    pub value: Scaled,
}

/// Principal plus accrued interest valued at the oracle token price, rounded up
pub fn calc_debt_value(
    env: &Env,
    config: &LoanConfig,
    prices: &PriceProvider,
) -> Result<DebtValue, Error> {
    let accrued_interest = calc_interest(env, config)?;
    let debt = Scaled::from_inner(config.scaled_principal_amount)
        .checked_add(accrued_interest)
        .ok_or(Error::ArithmeticOverflow)?;

    let price = prices.token_price(config.principal_asset_id)?;
    let value = debt
        .checked_mul_ceil(price)
        .ok_or(Error::ArithmeticOverflow)?;

    Ok(DebtValue {
        accrued_interest,
        value,
    })
}

/// Collateral valued at the stablecoin price, rounded down
pub fn calc_collateral_value(
    config: &LoanConfig,
    state: &LoanState,
    prices: &PriceProvider,
) -> Result<Scaled, Error> {
    let price = prices.stablecoin_price(&config.collateral_token)?;

    Scaled::from_inner(state.scaled_collateral_amount)
        .checked_mul(price)
        .ok_or(Error::ArithmeticOverflow)
}

pub fn calc_position(
    env: &Env,
    config: &LoanConfig,
    state: &LoanState,
    prices: &PriceProvider,
) -> Result<CollateralPosition, Error> {
    let debt = calc_debt_value(env, config, prices)?;
    let collateral_value = calc_collateral_value(config, state, prices)?;

    Ok(CollateralPosition {
        collateral_value: collateral_value.into_inner(),
        debt_value: debt.value.into_inner(),
        accrued_interest: debt.accrued_interest.into_inner(),
        threshold: liquidation_threshold(config.risk),
    })
}

/// collateral_value / debt_value < threshold, compared without division
pub fn is_liquidatable(position: &CollateralPosition) -> Result<bool, Error> {
    let collateral = position
        .collateral_value
        .checked_mul(PERCENTAGE_FACTOR.into())
        .ok_or(Error::ArithmeticOverflow)?;
    let required = position
        .debt_value
        .checked_mul(position.threshold.into())
        .ok_or(Error::ArithmeticOverflow)?;

    Ok(collateral < required)
}

/// Collateral value the loan risk demands for the current debt
pub fn calc_required_collateral(
    env: &Env,
    config: &LoanConfig,
    prices: &PriceProvider,
) -> Result<Scaled, Error> {
    calc_debt_value(env, config, prices)?
        .value
        .mul_percentage_ceil(config.risk)
        .ok_or(Error::ArithmeticOverflow)
}
