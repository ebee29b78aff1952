use price_feed_interface::types::asset::Asset;
use price_feed_interface::types::price_data::PriceData;
use soroban_sdk::{contracttype, Env, Vec};

/// Decimals reported until `set_decimals` is called
pub const DEFAULT_DECIMALS: u32 = 14;

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Decimals,
    Prices(Asset),
}

pub fn write_decimals(env: &Env, decimals: u32) {
    env.storage().instance().set(&DataKey::Decimals, &decimals);
}

pub fn read_decimals(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::Decimals)
        .unwrap_or(DEFAULT_DECIMALS)
}

pub fn write_prices(env: &Env, asset: &Asset, prices: &Vec<PriceData>) {
    env.storage()
        .instance()
        .set(&DataKey::Prices(asset.clone()), prices);
}

pub fn read_prices(env: &Env, asset: &Asset) -> Option<Vec<PriceData>> {
    env.storage()
        .instance()
        .get(&DataKey::Prices(asset.clone()))
}
