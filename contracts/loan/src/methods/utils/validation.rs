use common::{MAX_INTEREST_RATE, PERCENTAGE_FACTOR, SCALED_DECIMALS};
use loan_interface::types::error::Error;
use loan_interface::types::loan_params::LoanParams;
use soroban_sdk::{assert_with_error, panic_with_error, Env};

use crate::storage::has_config;
use crate::types::loan_state::LoanState;

pub fn require_not_initialized(env: &Env) {
    if has_config(env) {
        panic_with_error!(env, Error::AlreadyInitialized);
    }
}

pub fn require_valid_params(env: &Env, params: &LoanParams) {
    assert_with_error!(
        env,
        params.lender != params.borrower,
        Error::InvalidLoanParams
    );
    assert_with_error!(
        env,
        params.principal_amount.is_positive(),
        Error::InvalidLoanParams
    );
    assert_with_error!(
        env,
        params.risk >= PERCENTAGE_FACTOR,
        Error::InvalidLoanParams
    );
    assert_with_error!(
        env,
        params.interest_rate <= MAX_INTEREST_RATE,
        Error::InvalidLoanParams
    );
}

pub fn require_supported_decimals(env: &Env, decimals: u32) {
    assert_with_error!(env, decimals <= SCALED_DECIMALS, Error::InvalidLoanParams);
}

pub fn require_positive_amount(env: &Env, amount: i128) {
    assert_with_error!(env, amount.is_positive(), Error::InvalidAmount);
}

pub fn require_active(env: &Env, state: &LoanState) {
    assert_with_error!(env, state.is_active(), Error::InvalidState);
}

pub fn require_liquidatable(env: &Env, liquidatable: bool) {
    assert_with_error!(env, liquidatable, Error::GoodPosition);
}
