use loan_interface::types::loan_status::LoanStatus;
use soroban_sdk::testutils::{Address as _, Events, Ledger};
use soroban_sdk::{vec, Address, Env, IntoVal, Symbol};

use super::sut::{
    create_loan_contract, init_loan, INTEREST_RATE, PRINCIPAL, PRINCIPAL_ASSET_ID, RISK,
};

#[test]
fn should_store_origination_params() {
    let env = Env::default();
    env.mock_all_auths();
    env.ledger().with_mut(|li| li.timestamp = 1_000);

    let sut = init_loan(&env);
    let data = sut.loan.loan_data();

    assert_eq!(sut.loan.lender(), sut.lender);
    assert_eq!(sut.loan.borrower(), sut.borrower);
    assert_eq!(sut.loan.scaled_principal_amount(), PRINCIPAL);
    assert_eq!(sut.loan.scaled_collateral_amount(), 0);
    assert_eq!(sut.loan.interest_rate(), INTEREST_RATE);
    assert_eq!(sut.loan.risk(), RISK);
    assert_eq!(sut.loan.liquidation_threshold(), 120_000);
    assert_eq!(sut.loan.status(), LoanStatus::Active);

    assert_eq!(data.oracle, sut.oracle.address);
    assert_eq!(data.collateral_token, sut.token.address);
    assert_eq!(data.collateral_decimals, 6);
    assert_eq!(data.principal_asset_id, PRINCIPAL_ASSET_ID);
    assert_eq!(data.scaled_repaid_amount, 0);
    assert_eq!(data.origination_timestamp, 1_000);
}

#[test]
fn should_normalize_principal_with_asset_decimals() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_loan(&env);
    sut.oracle.set_asset_decimals(&sut.platform, &2, &8);

    let mut params = sut.params();
    params.principal_asset_id = 2;
    params.principal_amount = 3_000_000_000;

    let loan = create_loan_contract(&env, &params);

    assert_eq!(loan.scaled_principal_amount(), PRINCIPAL);
}

#[test]
#[should_panic(expected = "HostError: Error(Contract, #0)")]
fn should_fail_when_already_initialized() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_loan(&env);

    sut.loan.initialize(&sut.params());
}

#[test]
#[should_panic(expected = "HostError: Error(Contract, #1)")]
fn should_fail_when_not_initialized() {
    let env = Env::default();

    let loan = crate::LoanClient::new(&env, &env.register_contract(None, crate::Loan));

    loan.lender();
}

#[test]
#[should_panic(expected = "HostError: Error(Contract, #203)")]
fn should_fail_when_lender_is_borrower() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_loan(&env);
    let mut params = sut.params();
    params.borrower = params.lender.clone();

    create_loan_contract(&env, &params);
}

#[test]
#[should_panic(expected = "HostError: Error(Contract, #203)")]
fn should_fail_when_principal_is_zero() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_loan(&env);
    let mut params = sut.params();
    params.principal_amount = 0;

    create_loan_contract(&env, &params);
}

#[test]
#[should_panic(expected = "HostError: Error(Contract, #203)")]
fn should_fail_when_risk_below_full_collateralization() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_loan(&env);
    let mut params = sut.params();
    params.risk = 99_999;

    create_loan_contract(&env, &params);
}

#[test]
#[should_panic(expected = "HostError: Error(Contract, #203)")]
fn should_fail_when_interest_rate_above_cap() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_loan(&env);
    let mut params = sut.params();
    params.interest_rate = 1_000_001;

    create_loan_contract(&env, &params);
}

#[test]
fn should_accept_zero_interest_and_full_collateralization() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_loan(&env);
    let mut params = sut.params();
    params.interest_rate = 0;
    params.risk = 100_000;
    params.lender = Address::generate(&env);

    let loan = create_loan_contract(&env, &params);

    assert_eq!(loan.interest_rate(), 0);
    assert_eq!(loan.liquidation_threshold(), 100_000);
}

#[test]
fn should_emit_event() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_loan(&env);

    let event = env.events().all().pop_back_unchecked();

    assert_eq!(
        vec![&env, event],
        vec![
            &env,
            (
                sut.loan.address.clone(),
                (
                    Symbol::new(&env, "initialize"),
                    sut.lender.clone(),
                    sut.borrower.clone()
                )
                    .into_val(&env),
                (PRINCIPAL_ASSET_ID, PRINCIPAL, INTEREST_RATE, RISK).into_val(&env)
            ),
        ]
    );
}
