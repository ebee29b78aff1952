use oracle_interface::types::error::Error as OracleError;
use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 0,
    Uninitialized = 1,

    Unauthorized = 100,

    InvalidState = 200,
    GoodPosition = 201,
    InvalidAmount = 202,
    InvalidLoanParams = 203,

    MissingPriceData = 300,
    InvalidPrice = 301,
    InvalidOracleResponse = 302,

    TransferFailed = 400,

    ArithmeticOverflow = 500,
}

impl From<OracleError> for Error {
    fn from(error: OracleError) -> Self {
        match error {
            OracleError::AlreadyInitialized | OracleError::Uninitialized => Error::Uninitialized,
            OracleError::Unauthorized => Error::Unauthorized,
            OracleError::MissingPriceData => Error::MissingPriceData,
            OracleError::InvalidPrice => Error::InvalidPrice,
            OracleError::InvalidDecimals | OracleError::ArithmeticOverflow => {
                Error::ArithmeticOverflow
            }
        }
    }
}
