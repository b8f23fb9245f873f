use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer};
use validator::ValidationError;

static USERNAME_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-zA-Z0-9@.+_-]+$").unwrap());

pub fn is_username(username: &str) -> Result<(), ValidationError> {
    if username.chars().count() > 150 {
        return Err(ValidationError::new("0")
            .with_message(Cow::from("Username must have at most 150 characters")));
    }

    if !username.is_empty() && !USERNAME_REGEX.is_match(username) {
        return Err(ValidationError::new("0").with_message(Cow::from(
            "Username may contain only letters, numbers, and @/./+/-/_ characters",
        )));
    }

    Ok(())
}

/// Optional text field where a blank value means "not given".
pub fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;

    Ok(value.filter(|value| !value.trim().is_empty()))
}
