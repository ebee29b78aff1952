#![deny(warnings)]
#![no_std]

mod storage;

use crate::storage::*;
use soroban_sdk::{
    assert_with_error, contract, contracterror, contractimpl, panic_with_error, Address, Env,
    String,
};
use soroban_token_sdk::metadata::TokenMetadata;
use soroban_token_sdk::TokenUtils;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 0,
    InvalidAmount = 1,
    InsufficientBalance = 2,
}

/// Stablecoin stand-in for tests: the subset of SEP-41 a loan uses
/// (`transfer`, `balance`, `decimals`) plus an admin `mint`.
#[contract]
pub struct TokenMock;

#[contractimpl]
impl TokenMock {
    pub fn initialize(e: Env, admin: Address, decimal: u32, name: String, symbol: String) {
        if has_admin(&e) {
            panic_with_error!(&e, Error::AlreadyInitialized);
        }

        write_admin(&e, &admin);
        TokenUtils::new(&e).metadata().set_metadata(&TokenMetadata {
            decimal,
            name,
            symbol,
        });
    }

    pub fn mint(e: Env, to: Address, amount: i128) {
        assert_with_error!(&e, amount.is_positive(), Error::InvalidAmount);

        let admin = read_admin(&e);
        admin.require_auth();

        let balance = read_balance(&e, &to);
        write_balance(&e, &to, balance + amount);

        TokenUtils::new(&e).events().mint(admin, to, amount);
    }

    pub fn transfer(e: Env, from: Address, to: Address, amount: i128) {
        from.require_auth();

        assert_with_error!(&e, amount.is_positive(), Error::InvalidAmount);

        let from_balance = read_balance(&e, &from);
        assert_with_error!(&e, from_balance >= amount, Error::InsufficientBalance);

        write_balance(&e, &from, from_balance - amount);
        let to_balance = read_balance(&e, &to);
        write_balance(&e, &to, to_balance + amount);

        TokenUtils::new(&e).events().transfer(from, to, amount);
    }

    pub fn balance(e: Env, id: Address) -> i128 {
        read_balance(&e, &id)
    }

    pub fn decimals(e: Env) -> u32 {
        TokenUtils::new(&e).metadata().get_metadata().decimal
    }

    pub fn name(e: Env) -> String {
        TokenUtils::new(&e).metadata().get_metadata().name
    }

    pub fn symbol(e: Env) -> String {
        TokenUtils::new(&e).metadata().get_metadata().symbol
    }
}
