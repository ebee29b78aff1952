use common::Scaled;
use loan_interface::types::error::Error;
use loan_interface::types::loan_status::LoanStatus;
use soroban_sdk::{log, Address, Env};

use crate::event;
use crate::storage::{read_config, read_state, write_state};
use crate::types::loan_config::LoanConfig;
use crate::types::loan_state::LoanState;
use crate::types::price_provider::PriceProvider;

use super::collateral_position::calc_debt_value;
use super::deposit_collateral::receive_collateral;
use super::utils::transfer::{own_balance, transfer};
use super::utils::validation::{require_active, require_positive_amount};

pub fn repay(env: &Env, who: &Address, amount: i128) -> Result<(), Error> {
    who.require_auth();

    require_positive_amount(env, amount);

    let config = read_config(env)?;
    let mut state = read_state(env)?;
    require_active(env, &state);

    let scaled_amount = receive_collateral(env, &config, &mut state, who, amount)?;
    state.scaled_repaid_amount = state
        .scaled_repaid_amount
        .checked_add(scaled_amount.into_inner())
        .ok_or(Error::ArithmeticOverflow)?;

    event::repay(env, who, amount, state.scaled_collateral_amount);

    let prices = PriceProvider::new(env, &config.oracle);
    let debt_value = calc_debt_value(env, &config, &prices)?.value;
    let stablecoin_price = prices.stablecoin_price(&config.collateral_token)?;
    let repaid_value = Scaled::from_inner(state.scaled_repaid_amount)
        .checked_mul(stablecoin_price)
        .ok_or(Error::ArithmeticOverflow)?;

    if repaid_value >= debt_value {
        log!(env, "debt covered", repaid_value.into_inner(), debt_value.into_inner());
        settle(env, &config, &mut state, debt_value, stablecoin_price)?;
    }

    write_state(env, &state);

    Ok(())
}

/// Pays the debt value out to the lender and returns the rest of the
/// collateral to the borrower. The loan holds no collateral afterwards.
fn settle(
    env: &Env,
    config: &LoanConfig,
    state: &mut LoanState,
    debt_value: Scaled,
    stablecoin_price: Scaled,
) -> Result<(), Error> {
    let balance = own_balance(env, &config.collateral_token);

    let lender_amount = debt_value
        .checked_div_ceil(stablecoin_price)
        .and_then(|debt| debt.to_native_ceil(config.collateral_decimals))
        .ok_or(Error::ArithmeticOverflow)?
        .min(balance);
    let borrower_amount = balance - lender_amount;

    let loan = env.current_contract_address();
    if lender_amount > 0 {
        transfer(
            env,
            &config.collateral_token,
            &loan,
            &config.lender,
            lender_amount,
        )?;
    }
    if borrower_amount > 0 {
        transfer(
            env,
            &config.collateral_token,
            &loan,
            &config.borrower,
            borrower_amount,
        )?;
    }

    state.scaled_collateral_amount = 0;
    state.status = LoanStatus::Repaid;

    event::settled(
        env,
        &config.lender,
        &config.borrower,
        lender_amount,
        borrower_amount,
    );

    Ok(())
}
