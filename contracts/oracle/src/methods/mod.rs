pub mod initialize;
pub mod set_asset_decimals;
pub mod set_stablecoin_feed;
pub mod set_token_price;
pub mod stablecoin_price;

mod utils;
