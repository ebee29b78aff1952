use soroban_sdk::{contracttype, Address};

use super::loan_status::LoanStatus;

#[derive(Clone, Debug)]
#[contracttype]
pub struct LoanData {
    pub lender: Address,
    pub borrower: Address,
    pub oracle: Address,
    pub collateral_token: Address,
    pub collateral_decimals: u32,
    pub principal_asset_id: u64,
    pub scaled_principal_amount: i128,
    pub scaled_collateral_amount: i128,
    pub scaled_repaid_amount: i128,
    pub interest_rate: u32,
    pub risk: u32,
    pub origination_timestamp: u64,
    pub status: LoanStatus,
}
