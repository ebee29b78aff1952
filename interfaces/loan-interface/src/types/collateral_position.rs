use soroban_sdk::contracttype;

/// Valuation snapshot, values are scaled to 18 decimals
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct CollateralPosition {
    /// Collateral priced by the stablecoin feed, rounded down
    pub collateral_value: i128,
    /// Principal plus accrued interest priced by the oracle, rounded up
    pub debt_value: i128,
    pub accrued_interest: i128,
    pub threshold: u32,
}
