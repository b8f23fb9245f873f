pub mod account;
pub mod delivery;
pub mod repository;
pub mod template;
