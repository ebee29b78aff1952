use oracle_interface::types::error::Error;
use soroban_sdk::{Address, Env};

use crate::event;
use crate::storage::write_token_price;

use super::utils::validation::{require_admin, require_positive_price};

pub fn set_token_price(env: &Env, who: &Address, asset_id: u64, price: i128) -> Result<(), Error> {
    require_admin(env, who)?;
    require_positive_price(env, price);

    write_token_price(env, asset_id, price);

    event::token_price_updated(env, asset_id, price);

    Ok(())
}
