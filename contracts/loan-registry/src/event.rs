use loan_interface::types::loan_params::LoanParams;
use soroban_sdk::{Address, Env, Symbol};

pub(crate) fn initialized(e: &Env, admin: &Address) {
    let topics = (Symbol::new(e, "initialize"), admin.clone());
    e.events().publish(topics, ());
}

pub(crate) fn loan_created(e: &Env, loan: &Address, params: &LoanParams) {
    let topics = (Symbol::new(e, "loan_created"), loan.clone());
    e.events().publish(
        topics,
        (
            params.lender.clone(),
            params.borrower.clone(),
            params.collateral_token.clone(),
            params.principal_amount,
            params.principal_asset_id,
            params.interest_rate,
            params.risk,
        ),
    );
}
