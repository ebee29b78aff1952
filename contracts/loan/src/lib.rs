#![deny(warnings)]
#![no_std]

use common::liquidation_threshold;
use loan_interface::types::{
    collateral_position::CollateralPosition, error::Error, loan_data::LoanData,
    loan_params::LoanParams, loan_status::LoanStatus,
};
use loan_interface::LoanTrait;
use methods::{
    calculate_interest::calc_interest,
    collateral_position::{calc_position, calc_required_collateral, is_liquidatable},
    deposit_collateral::deposit_collateral,
    initialize::initialize,
    liquidate::liquidate,
    repay::repay,
};
use soroban_sdk::{contract, contractimpl, Address, Env};
use types::price_provider::PriceProvider;

use crate::storage::*;

mod event;
mod methods;
mod storage;
mod types;

#[cfg(test)]
mod tests;

#[contract]
pub struct Loan;

#[contractimpl]
impl LoanTrait for Loan {
    /// Originates the loan. Can be called once.
    ///
    /// # Arguments
    ///
    /// - params - Parties, oracle, collateral token and economic terms.
    ///
    /// # Panics
    ///
    /// - Panics with `AlreadyInitialized` when called twice.
    /// - Panics with `InvalidLoanParams` when lender equals borrower, principal is not positive,
    ///     risk is below 100%, interest rate is above the cap
    ///     or the collateral token has more than 18 decimals.
    ///
    fn initialize(env: Env, params: LoanParams) -> Result<(), Error> {
        initialize(&env, &params)
    }

    /// Transfers `amount` of the collateral token from `who` to the loan.
    ///
    /// # Panics
    ///
    /// - Panics with `InvalidAmount` when amount is not positive.
    /// - Panics with `InvalidState` when the loan is repaid or liquidated.
    /// - Returns `TransferFailed` when the token transfer fails.
    ///
    fn deposit_collateral(env: Env, who: Address, amount: i128) -> Result<(), Error> {
        deposit_collateral(&env, &who, amount)
    }

    /// Transfers `amount` of the collateral token from `who` to the loan and counts it
    /// both as collateral and as repayment. Once repayments valued at the stablecoin price
    /// cover principal and interest the lender is paid out, the remainder goes
    /// back to the borrower and the loan becomes `Repaid`.
    ///
    fn repay(env: Env, who: Address, amount: i128) -> Result<(), Error> {
        repay(&env, &who, amount)
    }

    /// Transfers all the collateral held by the loan to the lender. Requires lender auth.
    ///
    /// # Panics
    ///
    /// - Panics with `GoodPosition` (201) when collateral value is at or above
    ///     the liquidation threshold of the debt value. This is the still-solvent
    ///     case of `InvalidState`, reported under its own code.
    /// - Panics with `InvalidState` when the loan is repaid or liquidated.
    ///
    fn liquidate(env: Env) -> Result<(), Error> {
        liquidate(&env)
    }

    fn calculate_interest(env: Env) -> Result<i128, Error> {
        let config = read_config(&env)?;

        calc_interest(&env, &config).map(|interest| interest.into_inner())
    }

    fn collateral_position(env: Env) -> Result<CollateralPosition, Error> {
        let config = read_config(&env)?;
        let state = read_state(&env)?;

        calc_position(
            &env,
            &config,
            &state,
            &PriceProvider::new(&env, &config.oracle),
        )
    }

    fn required_collateral(env: Env) -> Result<i128, Error> {
        let config = read_config(&env)?;

        calc_required_collateral(&env, &config, &PriceProvider::new(&env, &config.oracle))
            .map(|value| value.into_inner())
    }

    /// Always false for a repaid or liquidated loan
    fn is_liquidatable(env: Env) -> Result<bool, Error> {
        let config = read_config(&env)?;
        let state = read_state(&env)?;

        if !state.is_active() {
            return Ok(false);
        }

        let position = calc_position(
            &env,
            &config,
            &state,
            &PriceProvider::new(&env, &config.oracle),
        )?;

        is_liquidatable(&position)
    }

    fn lender(env: Env) -> Result<Address, Error> {
        read_config(&env).map(|config| config.lender)
    }

    fn borrower(env: Env) -> Result<Address, Error> {
        read_config(&env).map(|config| config.borrower)
    }

    fn scaled_collateral_amount(env: Env) -> Result<i128, Error> {
        read_state(&env).map(|state| state.scaled_collateral_amount)
    }

    fn scaled_principal_amount(env: Env) -> Result<i128, Error> {
        read_config(&env).map(|config| config.scaled_principal_amount)
    }

    fn interest_rate(env: Env) -> Result<u32, Error> {
        read_config(&env).map(|config| config.interest_rate)
    }

    fn risk(env: Env) -> Result<u32, Error> {
        read_config(&env).map(|config| config.risk)
    }

    fn liquidation_threshold(env: Env) -> Result<u32, Error> {
        read_config(&env).map(|config| liquidation_threshold(config.risk))
    }

    fn status(env: Env) -> Result<LoanStatus, Error> {
        read_state(&env).map(|state| state.status)
    }

    fn loan_data(env: Env) -> Result<LoanData, Error> {
        let config = read_config(&env)?;
        let state = read_state(&env)?;

        Ok(LoanData {
            lender: config.lender,
            borrower: config.borrower,
            oracle: config.oracle,
            collateral_token: config.collateral_token,
            collateral_decimals: config.collateral_decimals,
            principal_asset_id: config.principal_asset_id,
            scaled_principal_amount: config.scaled_principal_amount,
            scaled_collateral_amount: state.scaled_collateral_amount,
            scaled_repaid_amount: state.scaled_repaid_amount,
            interest_rate: config.interest_rate,
            risk: config.risk,
            origination_timestamp: config.origination_timestamp,
            status: state.status,
        })
    }
}
