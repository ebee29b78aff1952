use crate::SCALED_DECIMALS;

fn scale_factor(decimals: u32) -> Option<i128> {
    let exponent = SCALED_DECIMALS.checked_sub(decimals)?;
    10i128.checked_pow(exponent)
}

/// Converts `amount` expressed with `from_decimals` into 18 decimals.
/// Exact, fails on overflow or when `from_decimals` is above 18.
pub fn normalize(amount: i128, from_decimals: u32) -> Option<i128> {
    amount.checked_mul(scale_factor(from_decimals)?)
}

/// Converts an 18 decimals `amount` back into `to_decimals`.
/// Truncates toward zero, so a collateral amount never grows on the way out.
pub fn denormalize(amount: i128, to_decimals: u32) -> Option<i128> {
    amount.checked_div(scale_factor(to_decimals)?)
}

/// Same as [`denormalize`] but rounds a positive remainder up.
/// Used for amounts owed to a counterparty.
pub fn denormalize_ceil(amount: i128, to_decimals: u32) -> Option<i128> {
    let factor = scale_factor(to_decimals)?;
    let truncated = amount.checked_div(factor)?;

    if amount.is_positive() && amount % factor != 0 {
        truncated.checked_add(1)
    } else {
        Some(truncated)
    }
}
