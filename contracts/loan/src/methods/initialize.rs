use common::Scaled;
use loan_interface::types::error::Error;
use loan_interface::types::loan_params::LoanParams;
use soroban_sdk::{token, Env};

use crate::event;
use crate::storage::{write_config, write_state};
use crate::types::loan_config::LoanConfig;
use crate::types::loan_state::LoanState;
use crate::types::price_provider::PriceProvider;

use super::utils::validation::{
    require_not_initialized, require_supported_decimals, require_valid_params,
};

pub fn initialize(env: &Env, params: &LoanParams) -> Result<(), Error> {
    require_not_initialized(env);
    require_valid_params(env, params);

    let collateral_decimals = token::Client::new(env, &params.collateral_token).decimals();
    require_supported_decimals(env, collateral_decimals);

    let principal_decimals =
        PriceProvider::new(env, &params.oracle).asset_decimals(params.principal_asset_id);
    let scaled_principal = Scaled::from_native(params.principal_amount, principal_decimals)
        .ok_or(Error::ArithmeticOverflow)?;

    let config = LoanConfig {
        lender: params.lender.clone(),
        borrower: params.borrower.clone(),
        oracle: params.oracle.clone(),
        collateral_token: params.collateral_token.clone(),
        collateral_decimals,
        principal_asset_id: params.principal_asset_id,
        scaled_principal_amount: scaled_principal.into_inner(),
        interest_rate: params.interest_rate,
        risk: params.risk,
        origination_timestamp: env.ledger().timestamp(),
    };

    write_config(env, &config);
    write_state(env, &LoanState::new());

    event::initialized(env, &config);

    Ok(())
}
