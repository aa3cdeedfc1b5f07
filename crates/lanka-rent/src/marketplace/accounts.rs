use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::ids::timestamp_id;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Customer,
    Partner,
}

/// Session-scoped user record. Nothing verifies it against a backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub role: UserRole,
    pub is_authenticated: bool,
}

impl User {
    /// Merge the fields present in `update`.
    pub fn apply(&mut self, update: ProfileUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(email) = update.email {
            self.email = email;
        }
        if let Some(phone) = update.phone {
            self.phone = phone;
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub name: Option<String>,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileUpdate {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum AccountError {
    #[error("email address is required")]
    MissingEmail,
    #[error("'{0}' is not an email address")]
    InvalidEmail(String),
    #[error("password is required")]
    MissingPassword,
}

/// Build an authenticated customer from login details. The name falls back to the email's
/// local part.
pub fn login(request: LoginRequest, now: DateTime<Utc>) -> Result<User, AccountError> {
    let email = request.email.trim().to_string();
    if email.is_empty() {
        return Err(AccountError::MissingEmail);
    }
    let Some((local, domain)) = email.split_once('@') else {
        return Err(AccountError::InvalidEmail(email));
    };
    if local.is_empty() || domain.is_empty() {
        return Err(AccountError::InvalidEmail(email));
    }
    if request.password.trim().is_empty() {
        return Err(AccountError::MissingPassword);
    }

    let name = request
        .name
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| local.to_string());

    let user = User {
        id: UserId(timestamp_id("user", now)),
        name,
        phone: request.phone.unwrap_or_default(),
        email,
        role: UserRole::Customer,
        is_authenticated: true,
    };
    info!(user_id = %user.id.0, "user signed in");
    Ok(user)
}
