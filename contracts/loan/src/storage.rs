use loan_interface::types::error::Error;
use soroban_sdk::{contracttype, Env};

use crate::types::loan_config::LoanConfig;
use crate::types::loan_state::LoanState;

pub(crate) const DAY_IN_LEDGERS: u32 = 17_280;

pub(crate) const LOW_INSTANCE_BUMP_LEDGERS: u32 = 7 * DAY_IN_LEDGERS; // 7 days
pub(crate) const HIGH_INSTANCE_BUMP_LEDGERS: u32 = 30 * DAY_IN_LEDGERS; // 30 days

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Config,
    State,
}

fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(LOW_INSTANCE_BUMP_LEDGERS, HIGH_INSTANCE_BUMP_LEDGERS);
}

pub fn has_config(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn write_config(env: &Env, config: &LoanConfig) {
    extend_instance_ttl(env);

    env.storage().instance().set(&DataKey::Config, config);
}

pub fn read_config(env: &Env) -> Result<LoanConfig, Error> {
    extend_instance_ttl(env);

    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(Error::Uninitialized)
}

pub fn write_state(env: &Env, state: &LoanState) {
    extend_instance_ttl(env);

    env.storage().instance().set(&DataKey::State, state);
}

pub fn read_state(env: &Env) -> Result<LoanState, Error> {
    extend_instance_ttl(env);

    env.storage()
        .instance()
        .get(&DataKey::State)
        .ok_or(Error::Uninitialized)
}
