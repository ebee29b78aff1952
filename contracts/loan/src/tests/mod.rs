
mod deposit_collateral;
mod initialize;
mod repay;
