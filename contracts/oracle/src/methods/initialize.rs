use oracle_interface::types::error::Error;
use soroban_sdk::{Address, Env};

use crate::event;
use crate::storage::write_admin;

use super::utils::validation::require_admin_not_exist;

pub fn initialize(env: &Env, admin: &Address) -> Result<(), Error> {
    require_admin_not_exist(env);

    write_admin(env, admin);

    event::initialized(env, admin);

    Ok(())
}
