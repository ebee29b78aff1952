use common::SCALED_DECIMALS;
use oracle_interface::types::error::Error;
use soroban_sdk::{assert_with_error, panic_with_error, Address, Env};

use crate::storage::{has_admin, read_admin};

pub fn require_admin_not_exist(env: &Env) {
    if has_admin(env) {
        panic_with_error!(env, Error::AlreadyInitialized);
    }
}

pub fn require_admin(env: &Env, who: &Address) -> Result<(), Error> {
    who.require_auth();

    let admin = read_admin(env)?;
    assert_with_error!(env, admin == *who, Error::Unauthorized);

    Ok(())
}

pub fn require_positive_price(env: &Env, price: i128) {
    assert_with_error!(env, price.is_positive(), Error::InvalidPrice);
}

pub fn require_supported_decimals(env: &Env, decimals: u32) {
    assert_with_error!(env, decimals <= SCALED_DECIMALS, Error::InvalidDecimals);
}
