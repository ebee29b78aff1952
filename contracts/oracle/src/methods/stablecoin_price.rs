use common::normalize;
use oracle_interface::types::error::Error;
use price_feed_interface::PriceFeedClient;
use soroban_sdk::{log, Address, Env};

use crate::storage::read_stablecoin_feed;

/// Returns the last price reported by the token feed with 18 decimals
pub fn stablecoin_price(env: &Env, token: &Address) -> Result<i128, Error> {
    let config = read_stablecoin_feed(env, token)?;
    let client = PriceFeedClient::new(env, &config.feed);

    let feed_decimals = client.decimals();
    let price_data = client
        .lastprice(&config.feed_asset.into())
        .ok_or(Error::MissingPriceData)?;

    if !price_data.price.is_positive() {
        log!(env, "non-positive feed price", token, price_data.price);
        return Err(Error::InvalidPrice);
    }

    normalize(price_data.price, feed_decimals).ok_or(Error::ArithmeticOverflow)
}
