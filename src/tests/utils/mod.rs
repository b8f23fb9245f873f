pub mod crypto;
pub mod seed;
