pub mod account;
pub mod email;
pub mod jsonwebtoken;
pub mod recipient;
pub mod recipient_list;
pub mod suggestion;
pub mod template;
