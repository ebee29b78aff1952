use common::Scaled;
use loan_interface::types::error::Error;
use soroban_sdk::{Address, Env};

use crate::event;
use crate::storage::{read_config, read_state, write_state};
use crate::types::loan_config::LoanConfig;
use crate::types::loan_state::LoanState;

use super::utils::transfer::transfer;
use super::utils::validation::{require_active, require_positive_amount};

pub fn deposit_collateral(env: &Env, who: &Address, amount: i128) -> Result<(), Error> {
    who.require_auth();

    require_positive_amount(env, amount);

    let config = read_config(env)?;
    let mut state = read_state(env)?;
    require_active(env, &state);

    receive_collateral(env, &config, &mut state, who, amount)?;
    write_state(env, &state);

    event::deposit(env, who, amount, state.scaled_collateral_amount);

    Ok(())
}

/// Pulls `amount` of the collateral token from `who` and books it as collateral.
/// Returns the scaled amount received.
pub(super) fn receive_collateral(
    env: &Env,
    config: &LoanConfig,
    state: &mut LoanState,
    who: &Address,
    amount: i128,
) -> Result<Scaled, Error> {
    let scaled_amount = Scaled::from_native(amount, config.collateral_decimals)
        .ok_or(Error::ArithmeticOverflow)?;

    state.scaled_collateral_amount = state
        .scaled_collateral_amount
        .checked_add(scaled_amount.into_inner())
        .ok_or(Error::ArithmeticOverflow)?;

    transfer(
        env,
        &config.collateral_token,
        who,
        &env.current_contract_address(),
        amount,
    )?;

    Ok(scaled_amount)
}
