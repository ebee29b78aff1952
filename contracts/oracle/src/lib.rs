#![deny(warnings)]
#![no_std]

use methods::{
    initialize::initialize, set_asset_decimals::set_asset_decimals,
    set_stablecoin_feed::set_stablecoin_feed, set_token_price::set_token_price,
    stablecoin_price::stablecoin_price,
};
use oracle_interface::types::{error::Error, stablecoin_feed::StablecoinFeed};
use oracle_interface::OracleTrait;
use soroban_sdk::{contract, contractimpl, Address, Env};

use crate::storage::*;

mod event;
mod methods;
mod storage;
#[cfg(test)]
mod tests;

#[contract]
pub struct Oracle;

#[contractimpl]
impl OracleTrait for Oracle {
    fn initialize(env: Env, admin: Address) -> Result<(), Error> {
        initialize(&env, &admin)
    }

    fn admin(env: Env) -> Result<Address, Error> {
        read_admin(&env)
    }

    fn set_token_price(env: Env, who: Address, asset_id: u64, price: i128) -> Result<(), Error> {
        set_token_price(&env, &who, asset_id, price)
    }

    fn token_price(env: Env, asset_id: u64) -> Result<i128, Error> {
        read_token_price(&env, asset_id)
    }

    fn set_asset_decimals(
        env: Env,
        who: Address,
        asset_id: u64,
        decimals: u32,
    ) -> Result<(), Error> {
        set_asset_decimals(&env, &who, asset_id, decimals)
    }

    fn asset_decimals(env: Env, asset_id: u64) -> u32 {
        read_asset_decimals(&env, asset_id)
    }

    fn set_stablecoin_feed(
        env: Env,
        who: Address,
        token: Address,
        feed: StablecoinFeed,
    ) -> Result<(), Error> {
        set_stablecoin_feed(&env, &who, &token, &feed)
    }

    fn stablecoin_feed(env: Env, token: Address) -> Option<StablecoinFeed> {
        read_stablecoin_feed(&env, &token).ok()
    }

    fn stablecoin_price(env: Env, token: Address) -> Result<i128, Error> {
        stablecoin_price(&env, &token)
    }
}
