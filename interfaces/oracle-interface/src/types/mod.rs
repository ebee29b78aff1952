pub mod error;
pub mod oracle_asset;
pub mod stablecoin_feed;
