use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 0,
    Uninitialized = 1,

    Unauthorized = 100,
    InvalidDecimals = 101,

    MissingPriceData = 300,
    InvalidPrice = 301,

    ArithmeticOverflow = 500,
}
