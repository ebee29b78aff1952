pub mod calculate_interest;
pub mod collateral_position;
pub mod deposit_collateral;
pub mod initialize;
pub mod liquidate;
pub mod repay;

mod utils;
