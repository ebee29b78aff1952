#![deny(warnings)]
#![no_std]

use soroban_sdk::{contractclient, contractspecfn, Address, Env};
use types::collateral_position::CollateralPosition;
use types::error::Error;
use types::loan_data::LoanData;
use types::loan_params::LoanParams;
use types::loan_status::LoanStatus;

pub mod types;

pub struct Spec;

/// Single loan between one lender and one borrower.
///
/// Amounts passed in are expressed in the collateral token decimals,
/// amounts and values returned are scaled to 18 decimals.
/// Percentages use 1% - 1_000, 100% - 100_000.
#[contractspecfn(name = "Spec", export = false)]
#[contractclient(name = "LoanClient")]
pub trait LoanTrait {
    fn initialize(env: Env, params: LoanParams) -> Result<(), Error>;

    fn deposit_collateral(env: Env, who: Address, amount: i128) -> Result<(), Error>;

    /// Repayment is added to the collateral. Settles the loan once
    /// cumulative repayments cover principal and interest.
    fn repay(env: Env, who: Address, amount: i128) -> Result<(), Error>;

    /// Seizes all collateral in favor of the lender. Fails with `GoodPosition`
    /// while the loan is collateralized above the liquidation threshold.
    fn liquidate(env: Env) -> Result<(), Error>;

    /// Simple interest accrued since origination
    fn calculate_interest(env: Env) -> Result<i128, Error>;

    fn collateral_position(env: Env) -> Result<CollateralPosition, Error>;

    /// Collateral value demanded by the loan risk for the current debt
    fn required_collateral(env: Env) -> Result<i128, Error>;

    fn is_liquidatable(env: Env) -> Result<bool, Error>;

    fn lender(env: Env) -> Result<Address, Error>;

    fn borrower(env: Env) -> Result<Address, Error>;

    fn scaled_collateral_amount(env: Env) -> Result<i128, Error>;

    fn scaled_principal_amount(env: Env) -> Result<i128, Error>;

    fn interest_rate(env: Env) -> Result<u32, Error>;

    fn risk(env: Env) -> Result<u32, Error>;

    fn liquidation_threshold(env: Env) -> Result<u32, Error>;

    fn status(env: Env) -> Result<LoanStatus, Error>;

    fn loan_data(env: Env) -> Result<LoanData, Error>;
}
