//! Staff roles and what each may do.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Staff role, as named by the login service.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Role {
    /// School administrator.
    Admin,
    /// Accountant.
    Accountant,
    /// Accounts officer, the only role that records payments.
    AccountsOfficer,
    /// Class teacher, scoped to one class-section.
    ClassTeacher,
    /// Any role this backend does not know; grants nothing.
    Other(String),
}

impl Role {
    /// Parses a role name. Unknown names are preserved as `Other`.
    #[must_use]
    pub fn parse(name: &str) -> Self {
        match name {
            "Admin" => Self::Admin,
            "Accountant" => Self::Accountant,
            "Accounts Officer" => Self::AccountsOfficer,
            "Class Teacher" => Self::ClassTeacher,
            other => Self::Other(other.to_string()),
        }
    }

    /// Role name as the login service spells it.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Admin => "Admin",
            Self::Accountant => "Accountant",
            Self::AccountsOfficer => "Accounts Officer",
            Self::ClassTeacher => "Class Teacher",
            Self::Other(name) => name,
        }
    }

    /// Whether this role may create and edit student records.
    #[must_use]
    pub fn can_edit_students(&self) -> bool {
        matches!(self, Self::Admin | Self::Accountant | Self::AccountsOfficer)
    }

    /// Whether this role may record and delete payments.
    #[must_use]
    pub fn can_edit_payments(&self) -> bool {
        matches!(self, Self::AccountsOfficer)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Role {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Role {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(Self::parse(&String::deserialize(deserializer)?))
    }
}

/// A signed-in staff member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Staff {
    /// Role.
    pub role: Role,
    /// Assigned class (class teachers only).
    pub assigned_class: Option<i32>,
    /// Assigned section (class teachers only).
    pub assigned_section: Option<String>,
}

impl Staff {
    /// Creates a staff member without a class assignment.
    #[must_use]
    pub fn new(role: Role) -> Self {
        Self {
            role,
            assigned_class: None,
            assigned_section: None,
        }
    }

    /// Whether this staff member may see a student of the given class-section.
    ///
    /// Class teachers only see their own class-section; a class teacher with
    /// no assignment sees nobody.
    #[must_use]
    pub fn can_view(&self, class: i32, section: &str) -> bool {
        match self.role {
            Role::ClassTeacher => {
                self.assigned_class == Some(class)
                    && self.assigned_section.as_deref() == Some(section)
            }
            _ => true,
        }
    }
}
