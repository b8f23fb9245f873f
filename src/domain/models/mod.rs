pub mod account;
pub mod delivery;
pub mod jsonwebtoken;
pub mod suggestion;
pub mod template;
