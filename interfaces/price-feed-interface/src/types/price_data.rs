use soroban_sdk::contracttype;

/// Price in the feed's base asset with the feed's decimals
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PriceData {
    pub price: i128,
    pub timestamp: u64,
}
