#![deny(warnings)]
#![no_std]

use soroban_sdk::{contractclient, contractspecfn, Address, Env};
use types::error::Error;
use types::stablecoin_feed::StablecoinFeed;

pub mod types;

pub struct Spec;

/// Price oracle shared by every loan.
/// All prices are returned with 18 decimals.
#[contractspecfn(name = "Spec", export = false)]
#[contractclient(name = "OracleClient")]
pub trait OracleTrait {
    fn initialize(env: Env, admin: Address) -> Result<(), Error>;

    fn admin(env: Env) -> Result<Address, Error>;

    /// Overwrites the price of a tokenized asset. Admin only.
    fn set_token_price(env: Env, who: Address, asset_id: u64, price: i128) -> Result<(), Error>;

    /// Fails with `MissingPriceData` when the price was never set
    fn token_price(env: Env, asset_id: u64) -> Result<i128, Error>;

    /// Registers the decimals a tokenized asset amount is expressed in. Admin only.
    fn set_asset_decimals(
        env: Env,
        who: Address,
        asset_id: u64,
        decimals: u32,
    ) -> Result<(), Error>;

    /// Defaults to 18 when nothing was registered
    fn asset_decimals(env: Env, asset_id: u64) -> u32;

    /// Binds a stablecoin token to an external SEP-40 feed. Admin only, last write wins.
    fn set_stablecoin_feed(
        env: Env,
        who: Address,
        token: Address,
        feed: StablecoinFeed,
    ) -> Result<(), Error>;

    fn stablecoin_feed(env: Env, token: Address) -> Option<StablecoinFeed>;

    /// Reads the bound feed and normalizes its price
    fn stablecoin_price(env: Env, token: Address) -> Result<i128, Error>;
}
