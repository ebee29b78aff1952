use common::{mul_div_ceil, Scaled, ONE_YEAR, PERCENTAGE_FACTOR};
use loan_interface::types::error::Error;
use soroban_sdk::Env;

use crate::types::loan_config::LoanConfig;

/// Simple interest on the scaled principal, rounded up:
/// principal * rate * elapsed / (100% * year)
pub fn calc_interest(env: &Env, config: &LoanConfig) -> Result<Scaled, Error> {
    let elapsed_time = env
        .ledger()
        .timestamp()
        .saturating_sub(config.origination_timestamp);

    if elapsed_time == 0 || config.interest_rate == 0 {
        return Ok(Scaled::ZERO);
    }

    let rate_time = i128::from(config.interest_rate)
        .checked_mul(elapsed_time.into())
        .ok_or(Error::ArithmeticOverflow)?;
    let denominator = i128::from(PERCENTAGE_FACTOR) * i128::from(ONE_YEAR);

    mul_div_ceil(config.scaled_principal_amount, rate_time, denominator)
        .map(Scaled::from_inner)
        .ok_or(Error::ArithmeticOverflow)
}
