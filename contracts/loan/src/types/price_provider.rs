use common::Scaled;
use loan_interface::types::error::Error;
use oracle_interface::OracleClient;
use soroban_sdk::{log, Address, Env};

/// Reads prices from the oracle. Every price is 18 decimals and strictly positive.
pub struct PriceProvider<'a> {
    env: &'a Env,
    oracle: OracleClient<'a>,
}

impl<'a> PriceProvider<'a> {
    pub fn new(env: &'a Env, oracle: &Address) -> Self {
        Self {
            env,
            oracle: OracleClient::new(env, oracle),
        }
    }

    /// Price of one whole unit of the principal asset
    pub fn token_price(&self, asset_id: u64) -> Result<Scaled, Error> {
        match self.oracle.try_token_price(&asset_id) {
            Ok(Ok(price)) => Self::positive(price),
            Err(Ok(error)) => Err(error.into()),
            Ok(Err(_)) | Err(Err(_)) => {
                log!(self.env, "oracle token_price failed", asset_id);
                Err(Error::InvalidOracleResponse)
            }
        }
    }

    /// Price of one whole unit of the collateral token
    pub fn stablecoin_price(&self, token: &Address) -> Result<Scaled, Error> {
        match self.oracle.try_stablecoin_price(token) {
            Ok(Ok(price)) => Self::positive(price),
            Err(Ok(error)) => Err(error.into()),
            Ok(Err(_)) | Err(Err(_)) => {
                log!(self.env, "oracle stablecoin_price failed", token.clone());
                Err(Error::InvalidOracleResponse)
            }
        }
    }

    pub fn asset_decimals(&self, asset_id: u64) -> u32 {
        self.oracle.asset_decimals(&asset_id)
    }

    fn positive(price: i128) -> Result<Scaled, Error> {
        if price.is_positive() {
            Ok(Scaled::from_inner(price))
        } else {
            Err(Error::InvalidPrice)
        }
    }
}
