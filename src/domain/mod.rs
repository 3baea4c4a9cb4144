pub mod account;
pub mod registry;
