use oracle_interface::types::stablecoin_feed::StablecoinFeed;
use soroban_sdk::{Address, Env, Symbol};

pub(crate) fn initialized(e: &Env, admin: &Address) {
    let topics = (Symbol::new(e, "initialize"), admin.clone());
    e.events().publish(topics, ());
}

pub(crate) fn token_price_updated(e: &Env, asset_id: u64, price: i128) {
    let topics = (Symbol::new(e, "price_updated"), asset_id);
    e.events().publish(topics, price);
}

pub(crate) fn asset_decimals_updated(e: &Env, asset_id: u64, decimals: u32) {
    let topics = (Symbol::new(e, "asset_decimals"), asset_id);
    e.events().publish(topics, decimals);
}

pub(crate) fn stablecoin_feed_updated(e: &Env, token: &Address, feed: &StablecoinFeed) {
    let topics = (Symbol::new(e, "stablecoin_feed"), token.clone());
    e.events().publish(topics, feed.clone());
}
