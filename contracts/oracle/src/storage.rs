use common::DEFAULT_ASSET_DECIMALS;
use oracle_interface::types::error::Error;
use oracle_interface::types::stablecoin_feed::StablecoinFeed;
use soroban_sdk::{contracttype, Address, Env};

pub(crate) const DAY_IN_LEDGERS: u32 = 17_280;

pub(crate) const LOW_INSTANCE_BUMP_LEDGERS: u32 = DAY_IN_LEDGERS; // 1 day
pub(crate) const HIGH_INSTANCE_BUMP_LEDGERS: u32 = 7 * DAY_IN_LEDGERS; // 7 days

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Admin,
    TokenPrice(u64),
    AssetDecimals(u64),
    StablecoinFeed(Address),
}

fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(LOW_INSTANCE_BUMP_LEDGERS, HIGH_INSTANCE_BUMP_LEDGERS);
}

pub fn has_admin(env: &Env) -> bool {
    extend_instance_ttl(env);

    env.storage().instance().has(&DataKey::Admin)
}

pub fn write_admin(env: &Env, admin: &Address) {
    extend_instance_ttl(env);

    env.storage().instance().set(&DataKey::Admin, admin);
}

pub fn read_admin(env: &Env) -> Result<Address, Error> {
    extend_instance_ttl(env);

    env.storage()
        .instance()
        .get(&DataKey::Admin)
        .ok_or(Error::Uninitialized)
}

pub fn write_token_price(env: &Env, asset_id: u64, price: i128) {
    extend_instance_ttl(env);

    env.storage()
        .instance()
        .set(&DataKey::TokenPrice(asset_id), &price);
}

pub fn read_token_price(env: &Env, asset_id: u64) -> Result<i128, Error> {
    extend_instance_ttl(env);

    env.storage()
        .instance()
        .get(&DataKey::TokenPrice(asset_id))
        .ok_or(Error::MissingPriceData)
}

pub fn write_asset_decimals(env: &Env, asset_id: u64, decimals: u32) {
    extend_instance_ttl(env);

    env.storage()
        .instance()
        .set(&DataKey::AssetDecimals(asset_id), &decimals);
}

pub fn read_asset_decimals(env: &Env, asset_id: u64) -> u32 {
    extend_instance_ttl(env);

    env.storage()
        .instance()
        .get(&DataKey::AssetDecimals(asset_id))
        .unwrap_or(DEFAULT_ASSET_DECIMALS)
}

pub fn write_stablecoin_feed(env: &Env, token: &Address, feed: &StablecoinFeed) {
    extend_instance_ttl(env);

    env.storage()
        .instance()
        .set(&DataKey::StablecoinFeed(token.clone()), feed);
}

pub fn read_stablecoin_feed(env: &Env, token: &Address) -> Result<StablecoinFeed, Error> {
    extend_instance_ttl(env);

    env.storage()
        .instance()
        .get(&DataKey::StablecoinFeed(token.clone()))
        .ok_or(Error::MissingPriceData)
}
