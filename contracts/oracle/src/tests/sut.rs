use oracle_interface::types::oracle_asset::OracleAsset;
use oracle_interface::types::stablecoin_feed::StablecoinFeed;
use oracle_interface::OracleClient;
use price_feed_interface::types::asset::Asset;
use price_feed_interface::types::price_data::PriceData;
use price_feed_mock::{PriceFeedMock, PriceFeedMockClient};
use soroban_sdk::testutils::Address as _;
use soroban_sdk::{vec, Address, Env};

use crate::Oracle;

pub struct Sut<'a> {
    pub env: Env,
    pub oracle: OracleClient<'a>,
    pub admin: Address,
}

pub(crate) fn create_oracle_contract<'a>(e: &Env, admin: &Address) -> OracleClient<'a> {
    let client = OracleClient::new(e, &e.register_contract(None, Oracle));
    client.initialize(admin);

    client
}

pub(crate) fn create_price_feed_contract<'a>(e: &Env, decimals: u32) -> PriceFeedMockClient<'a> {
    let feed = PriceFeedMockClient::new(e, &e.register_contract(None, PriceFeedMock));
    feed.set_decimals(&decimals);

    feed
}

/// Binds `token` to a fresh feed quoting `price` with `decimals`
pub(crate) fn bind_stablecoin_feed<'a>(
    sut: &Sut,
    token: &Address,
    decimals: u32,
    price: i128,
) -> PriceFeedMockClient<'a> {
    let feed = create_price_feed_contract(&sut.env, decimals);
    feed.set_prices(
        &Asset::Stellar(token.clone()),
        &vec![
            &sut.env,
            PriceData {
                price,
                timestamp: 0,
            },
        ],
    );

    sut.oracle.set_stablecoin_feed(
        &sut.admin,
        token,
        &StablecoinFeed {
            feed: feed.address.clone(),
            feed_asset: OracleAsset::Stellar(token.clone()),
        },
    );

    feed
}

pub(crate) fn init_oracle<'a>(env: &Env) -> Sut<'a> {
    env.mock_all_auths();

    let admin = Address::generate(env);
    let oracle = create_oracle_contract(env, &admin);

    Sut {
        env: env.clone(),
        oracle,
        admin,
    }
}
