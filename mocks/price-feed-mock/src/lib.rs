#![deny(warnings)]
#![no_std]

mod storage;

use crate::storage::*;
use price_feed_interface::types::{asset::Asset, price_data::PriceData};
use price_feed_interface::PriceFeedTrait;
use soroban_sdk::{contract, contractimpl, Env, Vec};

pub use crate::storage::DEFAULT_DECIMALS;

/// Deterministic feed. Price records are kept newest first, as passed to `set_prices`.
#[contract]
pub struct PriceFeedMock;

#[contractimpl]
impl PriceFeedTrait for PriceFeedMock {
    fn decimals(env: Env) -> u32 {
        read_decimals(&env)
    }

    fn lastprice(env: Env, asset: Asset) -> Option<PriceData> {
        read_prices(&env, &asset)?.first()
    }
}

#[contractimpl]
impl PriceFeedMock {
    pub fn set_decimals(env: Env, decimals: u32) {
        write_decimals(&env, decimals);
    }

    /// Replaces the price history of `asset`
    pub fn set_prices(env: Env, asset: Asset, prices: Vec<PriceData>) {
        write_prices(&env, &asset, &prices);
    }
}
