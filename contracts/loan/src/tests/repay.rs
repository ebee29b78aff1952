use common::ONE_YEAR;
use loan_interface::types::loan_status::LoanStatus;
use soroban_sdk::testutils::{AuthorizedFunction, Events, Ledger};
use soroban_sdk::{vec, Env, IntoVal, Symbol};

use super::sut::{create_loan_contract, init_loan, BORROWER_BALANCE};

const ONE: i128 = 1_000_000_000_000_000_000;

#[test]
fn should_require_authorized_caller() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_loan(&env);
    sut.loan.repay(&sut.borrower, &500_000_000);

    assert_eq!(
        env.auths().pop().map(|f| f.1.function),
        Some(AuthorizedFunction::Contract((
            sut.loan.address.clone(),
            Symbol::new(&env, "repay"),
            (sut.borrower.clone(), 500_000_000i128).into_val(&env)
        ))),
    );
}

#[test]
#[should_panic(expected = "HostError: Error(Contract, #202)")]
fn should_fail_when_amount_is_zero() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_loan(&env);

    sut.loan.repay(&sut.borrower, &0);
}

#[test]
fn should_add_repayment_to_collateral() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_loan(&env);
    sut.loan.deposit_collateral(&sut.borrower, &10_273_200_000);
    sut.loan.repay(&sut.borrower, &500_000_000);

    assert_eq!(
        sut.loan.scaled_collateral_amount(),
        10_773_200_000_000_000_000_000
    );
    assert_eq!(
        sut.loan.loan_data().scaled_repaid_amount,
        500_000_000_000_000_000_000
    );
    assert_eq!(sut.loan.status(), LoanStatus::Active);
    assert_eq!(sut.token.balance(&sut.loan.address), 10_773_200_000);
}

#[test]
fn should_settle_when_debt_is_covered() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_loan(&env);
    sut.set_token_price(ONE);

    sut.loan.deposit_collateral(&sut.borrower, &40_000_000);
    sut.loan.repay(&sut.borrower, &30_000_000);

    assert_eq!(sut.loan.status(), LoanStatus::Repaid);
    assert_eq!(sut.loan.scaled_collateral_amount(), 0);
    assert_eq!(sut.token.balance(&sut.loan.address), 0);
    assert_eq!(sut.token.balance(&sut.lender), 30_000_000);
    assert_eq!(
        sut.token.balance(&sut.borrower),
        BORROWER_BALANCE - 30_000_000
    );
}

#[test]
fn should_keep_loan_active_until_interest_is_covered() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_loan(&env);
    sut.set_token_price(ONE);

    env.ledger().with_mut(|li| li.timestamp = ONE_YEAR);

    sut.loan.repay(&sut.borrower, &30_000_000);
    assert_eq!(sut.loan.status(), LoanStatus::Active);

    // 5.56% of 30
    sut.loan.repay(&sut.borrower, &1_668_000);

    assert_eq!(sut.loan.status(), LoanStatus::Repaid);
    assert_eq!(sut.token.balance(&sut.lender), 31_668_000);
    assert_eq!(
        sut.token.balance(&sut.borrower),
        BORROWER_BALANCE - 31_668_000
    );
}

#[test]
fn should_value_repayments_at_stablecoin_price() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_loan(&env);
    sut.set_token_price(ONE);
    sut.set_stablecoin_price(&env, 500_000);

    sut.loan.repay(&sut.borrower, &30_000_000);
    assert_eq!(sut.loan.status(), LoanStatus::Active);

    sut.loan.repay(&sut.borrower, &30_000_000);

    assert_eq!(sut.loan.status(), LoanStatus::Repaid);
    assert_eq!(sut.token.balance(&sut.lender), 60_000_000);
}

#[test]
#[should_panic(expected = "HostError: Error(Contract, #200)")]
fn should_fail_when_loan_is_repaid() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_loan(&env);
    sut.set_token_price(ONE);
    sut.loan.repay(&sut.borrower, &30_000_000);

    sut.loan.repay(&sut.borrower, &1);
}

#[test]
#[should_panic(expected = "HostError: Error(Contract, #200)")]
fn should_reject_deposit_when_loan_is_repaid() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_loan(&env);
    sut.set_token_price(ONE);
    sut.loan.repay(&sut.borrower, &30_000_000);

    sut.loan.deposit_collateral(&sut.borrower, &1);
}

#[test]
#[should_panic(expected = "HostError: Error(Contract, #300)")]
fn should_fail_when_token_price_is_missing() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_loan(&env);
    let mut params = sut.params();
    params.principal_asset_id = 7;
    let loan = create_loan_contract(&env, &params);

    loan.repay(&sut.borrower, &1_000_000);
}

#[test]
fn should_emit_event() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_loan(&env);
    sut.loan.repay(&sut.borrower, &500_000_000);

    let event = env.events().all().pop_back_unchecked();

    assert_eq!(
        vec![&env, event],
        vec![
            &env,
            (
                sut.loan.address.clone(),
                (Symbol::new(&env, "repay"), sut.borrower.clone()).into_val(&env),
                (500_000_000i128, 500_000_000_000_000_000_000i128).into_val(&env)
            ),
        ]
    );
}

#[test]
fn should_emit_settled_event() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_loan(&env);
    sut.set_token_price(ONE);
    sut.loan.deposit_collateral(&sut.borrower, &40_000_000);
    sut.loan.repay(&sut.borrower, &30_000_000);

    let event = env.events().all().pop_back_unchecked();

    assert_eq!(
        vec![&env, event],
        vec![
            &env,
            (
                sut.loan.address.clone(),
                (
                    Symbol::new(&env, "settled"),
                    sut.lender.clone(),
                    sut.borrower.clone()
                )
                    .into_val(&env),
                (30_000_000i128, 40_000_000i128).into_val(&env)
            ),
        ]
    );
}
