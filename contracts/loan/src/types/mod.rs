pub mod loan_config;
pub mod loan_state;
pub mod price_provider;
