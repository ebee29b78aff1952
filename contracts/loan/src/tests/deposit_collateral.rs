use loan_interface::types::error::Error;
use soroban_sdk::testutils::{Address as _, AuthorizedFunction, Events};
use soroban_sdk::{vec, Address, Env, IntoVal, Symbol};

use super::sut::{init_loan, BORROWER_BALANCE};

/// 10_273.20 of the stablecoin, 140% of 30 * 244.60
const DEPOSIT: i128 = 10_273_200_000;
const SCALED_DEPOSIT: i128 = 10_273_200_000_000_000_000_000;

#[test]
fn should_require_authorized_caller() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_loan(&env);
    sut.loan.deposit_collateral(&sut.borrower, &DEPOSIT);

    assert_eq!(
        env.auths().pop().map(|f| f.1.function),
        Some(AuthorizedFunction::Contract((
            sut.loan.address.clone(),
            Symbol::new(&env, "deposit_collateral"),
            (sut.borrower.clone(), DEPOSIT).into_val(&env)
        ))),
    );
}

#[test]
#[should_panic(expected = "HostError: Error(Contract, #202)")]
fn should_fail_when_amount_is_zero() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_loan(&env);

    sut.loan.deposit_collateral(&sut.borrower, &0);
}

#[test]
#[should_panic(expected = "HostError: Error(Contract, #202)")]
fn should_fail_when_amount_is_negative() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_loan(&env);

    sut.loan.deposit_collateral(&sut.borrower, &-1);
}

#[test]
fn should_fail_when_balance_is_insufficient() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_loan(&env);

    assert_eq!(
        sut.loan
            .try_deposit_collateral(&sut.borrower, &(BORROWER_BALANCE + 1)),
        Err(Ok(Error::TransferFailed))
    );
    assert_eq!(sut.loan.scaled_collateral_amount(), 0);
    assert_eq!(sut.token.balance(&sut.borrower), BORROWER_BALANCE);
}

#[test]
#[should_panic(expected = "HostError: Error(Contract, #400)")]
fn should_fail_with_transfer_error() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_loan(&env);

    sut.loan
        .deposit_collateral(&sut.borrower, &(BORROWER_BALANCE + 1));
}

#[test]
fn should_normalize_deposit() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_loan(&env);
    sut.loan.deposit_collateral(&sut.borrower, &DEPOSIT);

    assert_eq!(sut.loan.scaled_collateral_amount(), SCALED_DEPOSIT);
    assert_eq!(sut.token.balance(&sut.loan.address), DEPOSIT);
    assert_eq!(
        sut.token.balance(&sut.borrower),
        BORROWER_BALANCE - DEPOSIT
    );
}

#[test]
fn should_accumulate_deposits() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_loan(&env);
    sut.loan.deposit_collateral(&sut.borrower, &1);
    sut.loan.deposit_collateral(&sut.borrower, &2_500_000);

    assert_eq!(
        sut.loan.scaled_collateral_amount(),
        2_500_001_000_000_000_000
    );
}

#[test]
fn should_accept_deposit_from_third_party() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_loan(&env);
    let guarantor = Address::generate(&env);
    sut.token_admin.mint(&guarantor, &DEPOSIT);

    sut.loan.deposit_collateral(&guarantor, &DEPOSIT);

    assert_eq!(sut.loan.scaled_collateral_amount(), SCALED_DEPOSIT);
    assert_eq!(sut.token.balance(&guarantor), 0);
}

#[test]
fn should_emit_event() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_loan(&env);
    sut.loan.deposit_collateral(&sut.borrower, &DEPOSIT);

    let event = env.events().all().pop_back_unchecked();

    assert_eq!(
        vec![&env, event],
        vec![
            &env,
            (
                sut.loan.address.clone(),
                (Symbol::new(&env, "deposit"), sut.borrower.clone()).into_val(&env),
                (DEPOSIT, SCALED_DEPOSIT).into_val(&env)
            ),
        ]
    );
}
