//! External price feed consumed by the oracle for stablecoin prices.
//! The subset of SEP-40 the oracle reads:
//! https://github.com/stellar/stellar-protocol/blob/master/ecosystem/sep-0040.md

#![deny(warnings)]
#![no_std]

use soroban_sdk::{contractclient, contractspecfn, Env};
use types::asset::Asset;
use types::price_data::PriceData;

pub mod types;

pub struct Spec;

#[contractspecfn(name = "Spec", export = false)]
#[contractclient(name = "PriceFeedClient")]
pub trait PriceFeedTrait {
    /// Number of decimals of every reported price
    fn decimals(env: Env) -> u32;

    /// Most recent price record of `asset`
    fn lastprice(env: Env, asset: Asset) -> Option<PriceData>;
}
