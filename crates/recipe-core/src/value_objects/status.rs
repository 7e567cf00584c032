//! Moderation status shared by users, recipes, and comments
//!
//! Every moderated record starts `inactive`. Only an administrator moves it
//! between states:
//!
//! ```text
//! created(inactive) --activate--> active --deactivate--> inactive
//! ```
//!
//! Both transitions are idempotent: activating an active record leaves it active.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Moderation status gating public visibility
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[default]
    Inactive,
    Active,
}

impl Status {
    /// Storage and wire representation
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Inactive => "inactive",
            Self::Active => "active",
        }
    }

    #[inline]
    pub const fn is_active(self) -> bool {
        matches!(self, Self::Active)
    }

    /// Apply a moderation action and return the resulting status
    pub const fn apply(self, action: Moderation) -> Self {
        action.target()
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error when parsing a status from string
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid status '{0}': expected 'active' or 'inactive'")]
pub struct StatusParseError(pub String);

impl FromStr for Status {
    type Err = StatusParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "active" => Ok(Self::Active),
            "inactive" => Ok(Self::Inactive),
            _ => Err(StatusParseError(s.to_string())),
        }
    }
}

/// Administrative moderation action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Moderation {
    Activate,
    Deactivate,
}

impl Moderation {
    /// Status a record ends up in after this action
    pub const fn target(self) -> Status {
        match self {
            Self::Activate => Status::Active,
            Self::Deactivate => Status::Inactive,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Activate => "activate",
            Self::Deactivate => "deactivate",
        }
    }
}

impl fmt::Display for Moderation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
