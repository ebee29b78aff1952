use soroban_fixed_point_math::FixedPoint;

use crate::{denormalize_ceil, normalize, PERCENTAGE_FACTOR};

/// Fixed type with inner type of i128 and fixed denominator 10e18.
/// Every amount and price handled by the loan is a `Scaled` value.
/// Arithmetic is defined for non-negative values only.
#[derive(Default, Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord)]
pub struct Scaled(i128);

impl Scaled {
    pub const DENOMINATOR: i128 = 1_000_000_000_000_000_000;
    pub const ZERO: Scaled = Scaled(0);

    /// Returns inner value
    pub const fn into_inner(self) -> i128 {
        self.0
    }

    /// Construct Scaled from inner value
    pub fn from_inner<T: Into<i128>>(inner: T) -> Scaled {
        Scaled(inner.into())
    }

    /// Construct from a token amount expressed in `decimals`
    pub fn from_native(amount: i128, decimals: u32) -> Option<Scaled> {
        normalize(amount, decimals).map(Scaled)
    }

    /// Token amount in `decimals`, rounded up
    pub fn to_native_ceil(self, decimals: u32) -> Option<i128> {
        denormalize_ceil(self.0, decimals)
    }

    /// Multiplication of two scaled values rounded down
    pub fn checked_mul(self, other: Scaled) -> Option<Scaled> {
        mul_scaled(self.0, other.0, false).map(Scaled)
    }

    /// Multiplication of two scaled values rounded up
    pub fn checked_mul_ceil(self, other: Scaled) -> Option<Scaled> {
        mul_scaled(self.0, other.0, true).map(Scaled)
    }

    /// Division of two scaled values rounded up
    pub fn checked_div_ceil(self, other: Scaled) -> Option<Scaled> {
        mul_div_ceil(self.0, Self::DENOMINATOR, other.0).map(Scaled)
    }

    /// Sum of two scaled values
    pub fn checked_add(self, other: Scaled) -> Option<Scaled> {
        self.0.checked_add(other.0).map(Scaled)
    }

    /// Share of self expressed as percentage (100% - 100_000), rounded up
    pub fn mul_percentage_ceil(self, percentage: u32) -> Option<Scaled> {
        mul_div_ceil(self.0, percentage.into(), PERCENTAGE_FACTOR.into()).map(Scaled)
    }
}

/// `x * y / z` rounded up without overflowing on the intermediate product
/// as long as `(x % z) * y` fits into i128.
pub fn mul_div_ceil(x: i128, y: i128, z: i128) -> Option<i128> {
    if x.is_negative() || y.is_negative() || z <= 0 {
        return None;
    }

    // x * y / z = (x / z) * y + (x % z) * y / z
    let high = (x / z).checked_mul(y)?;
    let low = (x % z).fixed_mul_ceil(y, z)?;

    high.checked_add(low)
}

fn mul_scaled(a: i128, b: i128, round_up: bool) -> Option<i128> {
    if a.is_negative() || b.is_negative() {
        return None;
    }

    let d = Scaled::DENOMINATOR;
    let (a_high, a_low) = (a / d, a % d);
    let (b_high, b_low) = (b / d, b % d);

    // both low parts are below 10e18, their product fits
    let low = if round_up {
        a_low.fixed_mul_ceil(b_low, d)?
    } else {
        a_low.fixed_mul_floor(b_low, d)?
    };

    a_high
        .checked_mul(b_high)?
        .checked_mul(d)?
        .checked_add(a_high.checked_mul(b_low)?)?
        .checked_add(a_low.checked_mul(b_high)?)?
        .checked_add(low)
}
