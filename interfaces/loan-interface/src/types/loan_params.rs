use soroban_sdk::{contracttype, Address};

#[derive(Clone, Debug)]
#[contracttype]
pub struct LoanParams {
    pub lender: Address,
    pub borrower: Address,
    pub oracle: Address,
    pub collateral_token: Address,
    /// Expressed in the decimals the oracle registers for `principal_asset_id`
    pub principal_amount: i128,
    pub principal_asset_id: u64,
    /// Yearly rate, 5.56% - 5_560
    pub interest_rate: u32,
    /// Collateral required at origination, 140% - 140_000
    pub risk: u32,
}
