pub mod collateral_position;
pub mod error;
pub mod loan_data;
pub mod loan_params;
pub mod loan_status;
