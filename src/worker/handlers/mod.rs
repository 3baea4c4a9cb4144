pub mod deposit;
pub mod list;
pub mod open;
pub mod withdrawal;
