pub mod account;
pub mod email;
pub mod recipient_list;
pub mod suggestion;
pub mod template;
pub mod validation;
