use loan_interface::types::error::Error;
use loan_interface::types::loan_status::LoanStatus;
use soroban_sdk::{log, Env};

use crate::event;
use crate::storage::{read_config, read_state, write_state};
use crate::types::price_provider::PriceProvider;

use super::collateral_position::{calc_position, is_liquidatable};
use super::utils::transfer::{own_balance, transfer};
use super::utils::validation::{require_active, require_liquidatable};

pub fn liquidate(env: &Env) -> Result<(), Error> {
    let config = read_config(env)?;
    config.lender.require_auth();

    let mut state = read_state(env)?;
    require_active(env, &state);

    let prices = PriceProvider::new(env, &config.oracle);
    let position = calc_position(env, &config, &state, &prices)?;
    let liquidatable = is_liquidatable(&position)?;

    log!(
        env,
        "liquidation check",
        position.collateral_value,
        position.debt_value,
        position.threshold,
        liquidatable
    );
    require_liquidatable(env, liquidatable);

    let collateral_amount = own_balance(env, &config.collateral_token);
    if collateral_amount > 0 {
        transfer(
            env,
            &config.collateral_token,
            &env.current_contract_address(),
            &config.lender,
            collateral_amount,
        )?;
    }

    state.scaled_collateral_amount = 0;
    state.status = LoanStatus::Liquidated;
    write_state(env, &state);

    event::liquidation(
        env,
        &config.lender,
        collateral_amount,
        position.collateral_value,
        position.debt_value,
    );

    Ok(())
}
