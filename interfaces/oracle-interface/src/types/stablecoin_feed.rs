use soroban_sdk::{contracttype, Address};

use super::oracle_asset::OracleAsset;

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct StablecoinFeed {
    pub feed: Address,
    pub feed_asset: OracleAsset,
}
