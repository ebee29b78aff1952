use soroban_sdk::{Address, Env, Symbol};

use crate::types::loan_config::LoanConfig;

pub(crate) fn initialized(e: &Env, config: &LoanConfig) {
    let topics = (
        Symbol::new(e, "initialize"),
        config.lender.clone(),
        config.borrower.clone(),
    );
    e.events().publish(
        topics,
        (
            config.principal_asset_id,
            config.scaled_principal_amount,
            config.interest_rate,
            config.risk,
        ),
    );
}

pub(crate) fn deposit(e: &Env, who: &Address, amount: i128, scaled_collateral: i128) {
    let topics = (Symbol::new(e, "deposit"), who.clone());
    e.events().publish(topics, (amount, scaled_collateral));
}

pub(crate) fn repay(e: &Env, who: &Address, amount: i128, scaled_collateral: i128) {
    let topics = (Symbol::new(e, "repay"), who.clone());
    e.events().publish(topics, (amount, scaled_collateral));
}

pub(crate) fn settled(
    e: &Env,
    lender: &Address,
    borrower: &Address,
    lender_amount: i128,
    borrower_amount: i128,
) {
    let topics = (Symbol::new(e, "settled"), lender.clone(), borrower.clone());
    e.events().publish(topics, (lender_amount, borrower_amount));
}

pub(crate) fn liquidation(
    e: &Env,
    lender: &Address,
    collateral_amount: i128,
    collateral_value: i128,
    debt_value: i128,
) {
    let topics = (Symbol::new(e, "liquidation"), lender.clone());
    e.events()
        .publish(topics, (collateral_amount, collateral_value, debt_value));
}
