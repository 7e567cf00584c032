//! User entity - an account in the credential store

use chrono::{DateTime, Utc};

use crate::value_objects::{Id, Status};

/// User account
///
/// The password hash is deliberately absent: it is read only through
/// `UserRepository::get_password_hash`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Id,
    pub email: String,
    pub is_admin: bool,
    pub status: Status,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    #[inline]
    pub fn is_admin(&self) -> bool {
        self.is_admin
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }
}

/// Canonical form of an email address: trimmed and lowercased
///
/// Every lookup and write goes through this so `Alice@X.com` and
/// `alice@x.com` name the same account.
pub fn normalize_email(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Values for inserting a user
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub password_hash: String,
    pub is_admin: bool,
    pub status: Status,
}

impl NewUser {
    /// A self-registered account: never admin, awaiting moderation
    pub fn registration(email: String, password_hash: String) -> Self {
        Self {
            email,
            password_hash,
            is_admin: false,
            status: Status::Inactive,
        }
    }
}

/// Partial update of a user; `None` leaves the column untouched
#[derive(Debug, Clone, Default)]
pub struct UserChanges {
    pub email: Option<String>,
    pub password_hash: Option<String>,
    pub is_admin: Option<bool>,
    pub status: Option<Status>,
}

impl UserChanges {
    pub fn is_empty(&self) -> bool {
        self.email.is_none()
            && self.password_hash.is_none()
            && self.is_admin.is_none()
            && self.status.is_none()
    }
}
