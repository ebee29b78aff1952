use price_feed_interface::types::asset::Asset;
use soroban_sdk::{contracttype, Address, Symbol};

/// Key the external feed quotes the stablecoin under
#[contracttype]
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum OracleAsset {
    Stellar(Address),
    Other(Symbol),
}

impl From<OracleAsset> for Asset {
    fn from(asset: OracleAsset) -> Self {
        match asset {
            OracleAsset::Stellar(address) => Asset::Stellar(address),
            OracleAsset::Other(symbol) => Asset::Other(symbol),
        }
    }
}
