use chrono::{DateTime, Utc};

/// Placeholder every template body must carry.
pub const FIRST_NAME_PLACEHOLDER: &str = "{first_name}";

#[derive(Debug, Clone)]
pub struct Template {
    pub id: String,
    pub owner: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Clone)]
pub struct CreateTemplate {
    pub owner: String,
    pub body: String,
}
