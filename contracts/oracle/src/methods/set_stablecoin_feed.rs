use oracle_interface::types::error::Error;
use oracle_interface::types::stablecoin_feed::StablecoinFeed;
use soroban_sdk::{Address, Env};

use crate::event;
use crate::storage::write_stablecoin_feed;

use super::utils::validation::require_admin;

pub fn set_stablecoin_feed(
    env: &Env,
    who: &Address,
    token: &Address,
    feed: &StablecoinFeed,
) -> Result<(), Error> {
    require_admin(env, who)?;

    write_stablecoin_feed(env, token, feed);

    event::stablecoin_feed_updated(env, token, feed);

    Ok(())
}
