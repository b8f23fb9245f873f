pub mod account;
pub mod dispatch;
pub mod email;
pub mod generator;
pub mod jsonwebtoken;
pub mod mailer;
pub mod suggestion;
pub mod template;
