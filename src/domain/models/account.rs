use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Account {
    pub id: String,
    pub username: String,
    pub email: Option<String>,
    pub password: String,
    pub is_active: bool,
    pub is_staff: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Clone)]
pub struct CreateAccount {
    pub username: String,
    pub email: Option<String>,
    pub password: String,
}

#[derive(Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}
