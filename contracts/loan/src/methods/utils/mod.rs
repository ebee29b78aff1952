pub mod transfer;
pub mod validation;
