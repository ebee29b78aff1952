#![deny(warnings)]
#![no_std]

use loan_interface::types::error::Error;
use loan_interface::types::loan_params::LoanParams;
use loan_interface::LoanClient;
use soroban_sdk::{
    assert_with_error, contract, contractimpl, log, panic_with_error, Address, BytesN, Env, Vec,
};

use crate::storage::*;

mod event;
mod storage;

#[contract]
pub struct LoanRegistry;

#[contractimpl]
impl LoanRegistry {
    /// Stores the admin allowed to originate loans, the oracle every loan reads prices from
    /// and the hash of the uploaded loan wasm.
    pub fn initialize(
        env: Env,
        admin: Address,
        oracle: Address,
        loan_wasm_hash: BytesN<32>,
    ) -> Result<(), Error> {
        if has_admin(&env) {
            panic_with_error!(&env, Error::AlreadyInitialized);
        }

        write_admin(&env, &admin);
        write_oracle(&env, &oracle);
        write_loan_wasm_hash(&env, &loan_wasm_hash);

        event::initialized(&env, &admin);

        Ok(())
    }

    /// Deploys a loan contract wired to the registry oracle and initializes it.
    /// Returns the loan address.
    ///
    /// # Panics
    ///
    /// - Panics with `Unauthorized` when `who` is not the admin.
    /// - Panics with the loan error when the loan rejects its parameters.
    ///
    #[allow(clippy::too_many_arguments)]
    pub fn create_loan(
        env: Env,
        who: Address,
        lender: Address,
        borrower: Address,
        collateral_token: Address,
        principal_amount: i128,
        principal_asset_id: u64,
        interest_rate: u32,
        risk: u32,
    ) -> Result<Address, Error> {
        who.require_auth();

        let admin = read_admin(&env)?;
        assert_with_error!(&env, admin == who, Error::Unauthorized);

        let params = LoanParams {
            lender,
            borrower,
            oracle: read_oracle(&env)?,
            collateral_token,
            principal_amount,
            principal_asset_id,
            interest_rate,
            risk,
        };

        let salt = loan_salt(&env, read_loan_count(&env));
        let loan = env
            .deployer()
            .with_current_contract(salt)
            .deploy(read_loan_wasm_hash(&env)?);

        LoanClient::new(&env, &loan).initialize(&params);

        let index = push_loan(&env, &loan)?;
        log!(&env, "loan created", index, loan);

        event::loan_created(&env, &loan, &params);

        Ok(loan)
    }

    /// Loans in creation order, a page of at most `limit` (capped at 100) starting at `from`
    pub fn loans(env: Env, from: u32, limit: u32) -> Result<Vec<Address>, Error> {
        read_loans(&env, from, limit)
    }

    pub fn loan_count(env: Env) -> u32 {
        read_loan_count(&env)
    }

    pub fn oracle(env: Env) -> Result<Address, Error> {
        read_oracle(&env)
    }

    pub fn admin(env: Env) -> Result<Address, Error> {
        read_admin(&env)
    }
}

/// Big-endian loan index in the tail of a zeroed 32 bytes salt
fn loan_salt(env: &Env, index: u32) -> BytesN<32> {
    let mut salt = [0u8; 32];
    salt[28..].copy_from_slice(&index.to_be_bytes());

    BytesN::from_array(env, &salt)
}
