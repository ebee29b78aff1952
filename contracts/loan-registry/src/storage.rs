use loan_interface::types::error::Error;
use soroban_sdk::{contracttype, Address, BytesN, Env, Vec};

pub(crate) const DAY_IN_LEDGERS: u32 = 17_280;

pub(crate) const LOW_INSTANCE_BUMP_LEDGERS: u32 = DAY_IN_LEDGERS; // 1 day
pub(crate) const HIGH_INSTANCE_BUMP_LEDGERS: u32 = 7 * DAY_IN_LEDGERS; // 7 days

pub(crate) const LOW_PERSISTENT_BUMP_LEDGERS: u32 = 30 * DAY_IN_LEDGERS; // 30 days
pub(crate) const HIGH_PERSISTENT_BUMP_LEDGERS: u32 = 90 * DAY_IN_LEDGERS; // 90 days

pub const MAX_LOANS_PAGE: u32 = 100;

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Admin,
    Oracle,
    LoanWasmHash,
    LoanCount,
    Loan(u32),
}

fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(LOW_INSTANCE_BUMP_LEDGERS, HIGH_INSTANCE_BUMP_LEDGERS);
}

pub fn has_admin(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Admin)
}

pub fn write_admin(env: &Env, admin: &Address) {
    extend_instance_ttl(env);

    env.storage().instance().set(&DataKey::Admin, admin);
}

pub fn read_admin(env: &Env) -> Result<Address, Error> {
    extend_instance_ttl(env);

    env.storage()
        .instance()
        .get(&DataKey::Admin)
        .ok_or(Error::Uninitialized)
}

pub fn write_oracle(env: &Env, oracle: &Address) {
    extend_instance_ttl(env);

    env.storage().instance().set(&DataKey::Oracle, oracle);
}

pub fn read_oracle(env: &Env) -> Result<Address, Error> {
    extend_instance_ttl(env);

    env.storage()
        .instance()
        .get(&DataKey::Oracle)
        .ok_or(Error::Uninitialized)
}

pub fn write_loan_wasm_hash(env: &Env, wasm_hash: &BytesN<32>) {
    extend_instance_ttl(env);

    env.storage()
        .instance()
        .set(&DataKey::LoanWasmHash, wasm_hash);
}

pub fn read_loan_wasm_hash(env: &Env) -> Result<BytesN<32>, Error> {
    extend_instance_ttl(env);

    env.storage()
        .instance()
        .get(&DataKey::LoanWasmHash)
        .ok_or(Error::Uninitialized)
}

pub fn read_loan_count(env: &Env) -> u32 {
    extend_instance_ttl(env);

    env.storage()
        .instance()
        .get(&DataKey::LoanCount)
        .unwrap_or(0)
}

/// Appends `loan` and returns its index
pub fn push_loan(env: &Env, loan: &Address) -> Result<u32, Error> {
    let index = read_loan_count(env);
    let key = DataKey::Loan(index);

    env.storage().persistent().set(&key, loan);
    env.storage().persistent().extend_ttl(
        &key,
        LOW_PERSISTENT_BUMP_LEDGERS,
        HIGH_PERSISTENT_BUMP_LEDGERS,
    );

    let count = index.checked_add(1).ok_or(Error::ArithmeticOverflow)?;
    env.storage().instance().set(&DataKey::LoanCount, &count);

    Ok(index)
}

/// Up to `limit` loans starting at index `from`, never more than `MAX_LOANS_PAGE`
pub fn read_loans(env: &Env, from: u32, limit: u32) -> Result<Vec<Address>, Error> {
    let mut loans = Vec::new(env);
    let end = from
        .saturating_add(limit.min(MAX_LOANS_PAGE))
        .min(read_loan_count(env));

    for index in from..end {
        let key = DataKey::Loan(index);
        let loan = env
            .storage()
            .persistent()
            .get(&key)
            .ok_or(Error::Uninitialized)?;
        env.storage().persistent().extend_ttl(
            &key,
            LOW_PERSISTENT_BUMP_LEDGERS,
            HIGH_PERSISTENT_BUMP_LEDGERS,
        );

        loans.push_back(loan);
    }

    Ok(loans)
}
