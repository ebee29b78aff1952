use loan_interface::types::loan_status::LoanStatus;
use soroban_sdk::contracttype;

#[derive(Clone, Debug)]
#[contracttype]
pub struct LoanState {
    pub scaled_collateral_amount: i128,
    pub scaled_repaid_amount: i128,
    pub status: LoanStatus,
}

impl LoanState {
    pub fn new() -> Self {
        Self {
            scaled_collateral_amount: 0,
            scaled_repaid_amount: 0,
            status: LoanStatus::Active,
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == LoanStatus::Active
    }
}
