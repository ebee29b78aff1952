use oracle_interface::types::error::Error;
use soroban_sdk::{Address, Env};

use crate::event;
use crate::storage::write_asset_decimals;

use super::utils::validation::{require_admin, require_supported_decimals};

pub fn set_asset_decimals(
    env: &Env,
    who: &Address,
    asset_id: u64,
    decimals: u32,
) -> Result<(), Error> {
    require_admin(env, who)?;
    require_supported_decimals(env, decimals);

    write_asset_decimals(env, asset_id, decimals);

    event::asset_decimals_updated(env, asset_id, decimals);

    Ok(())
}
