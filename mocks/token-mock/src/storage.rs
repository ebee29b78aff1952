use soroban_sdk::{contracttype, Address, Env};

pub(crate) const DAY_IN_LEDGERS: u32 = 17_280;

pub(crate) const LOW_BALANCE_BUMP_LEDGERS: u32 = 10 * DAY_IN_LEDGERS;
pub(crate) const HIGH_BALANCE_BUMP_LEDGERS: u32 = 20 * DAY_IN_LEDGERS;

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Admin,
    Balance(Address),
}

pub fn has_admin(e: &Env) -> bool {
    e.storage().instance().has(&DataKey::Admin)
}

pub fn read_admin(e: &Env) -> Address {
    e.storage().instance().get(&DataKey::Admin).unwrap()
}

pub fn write_admin(e: &Env, admin: &Address) {
    e.storage().instance().set(&DataKey::Admin, admin);
}

pub fn read_balance(e: &Env, id: &Address) -> i128 {
    let key = DataKey::Balance(id.clone());
    let balance = e.storage().persistent().get(&key);

    if balance.is_some() {
        e.storage().persistent().extend_ttl(
            &key,
            LOW_BALANCE_BUMP_LEDGERS,
            HIGH_BALANCE_BUMP_LEDGERS,
        );
    }

    balance.unwrap_or(0)
}

pub fn write_balance(e: &Env, id: &Address, balance: i128) {
    let key = DataKey::Balance(id.clone());
    e.storage().persistent().set(&key, &balance);
    e.storage().persistent().extend_ttl(
        &key,
        LOW_BALANCE_BUMP_LEDGERS,
        HIGH_BALANCE_BUMP_LEDGERS,
    );
}
