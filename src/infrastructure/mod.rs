pub mod databases;
pub mod generator;
pub mod mailer;
pub mod models;
pub mod queue;
pub mod repositories;
