use soroban_sdk::{contracttype, Address};

/// Origination parameters, written once by `initialize`
#[derive(Clone, Debug)]
#[contracttype]
pub struct LoanConfig {
    pub lender: Address,
    pub borrower: Address,
    pub oracle: Address,
    pub collateral_token: Address,
    pub collateral_decimals: u32,
    pub principal_asset_id: u64,
    pub scaled_principal_amount: i128,
    pub interest_rate: u32,
    pub risk: u32,
    pub origination_timestamp: u64,
}
