#![deny(warnings)]
#![no_std]

mod decimals;
mod scaled;

pub use decimals::*;
pub use scaled::*;

/// Percent representation: 1% - 1_000, 100% - 100_000
pub const PERCENTAGE_FACTOR: u32 = 100_000;

/// Distance between the collateral required at origination and the liquidation trigger, 20%
pub const LIQUIDATION_BUFFER: u32 = 20_000;

/// Upper bound for the yearly interest rate, 1000%
pub const MAX_INTEREST_RATE: u32 = 1_000 * 1_000;

/// Decimals every scaled amount and price is expressed in
pub const SCALED_DECIMALS: u32 = 18;

/// Decimals assumed for a tokenized asset with no registered convention
pub const DEFAULT_ASSET_DECIMALS: u32 = 18;

///Seconds in year. Equal 365.25 * 24 * 60 * 60
pub const ONE_YEAR: u64 = 31_557_600;

/// Collateralization percentage below which a loan with the given risk is liquidatable.
/// Never drops below 100%.
pub fn liquidation_threshold(risk: u32) -> u32 {
    risk.saturating_sub(LIQUIDATION_BUFFER)
        .max(PERCENTAGE_FACTOR)
}
