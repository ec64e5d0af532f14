//! Identity carried by bearer tokens from the external login service.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// JWT claims minted by the login service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user email).
    pub sub: String,
    /// Staff role, e.g. "Accounts Officer" or "Class Teacher".
    pub role: String,
    /// Class a class teacher is assigned to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_class: Option<i32>,
    /// Section a class teacher is assigned to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_section: Option<String>,
    /// Issued at timestamp.
    pub iat: i64,
    /// Expiration timestamp.
    pub exp: i64,
}

impl Claims {
    /// Creates new claims for a staff member.
    #[must_use]
    pub fn new(email: &str, role: &str, expires_at: DateTime<Utc>) -> Self {
        let now = Utc::now();
        Self {
            sub: email.to_string(),
            role: role.to_string(),
            assigned_class: None,
            assigned_section: None,
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        }
    }

    /// Attaches a class/section assignment.
    #[must_use]
    pub fn with_assignment(mut self, class: i32, section: &str) -> Self {
        self.assigned_class = Some(class);
        self.assigned_section = Some(section.to_string());
        self
    }

    /// Returns the user's email.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.sub
    }
}

#[cfg(test)]
#[path = "auth_tests.rs"]
mod tests;
