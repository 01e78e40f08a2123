//! User roles.

use serde::{Deserialize, Serialize};

/// Account role with different permission levels.
///
/// Roles form a closed set; authorization predicates match on them
/// exhaustively instead of comparing strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Books rides and pays for them.
    Passenger,
    /// Accepts and drives rides; accumulates earnings.
    Driver,
    /// Full access to every record plus dashboard and settings.
    Admin,
}

impl Role {
    /// Whether this role carries admin privileges.
    #[must_use]
    pub const fn is_admin(self) -> bool {
        matches!(self, Self::Admin)
    }

    /// Whether this role is a driver.
    #[must_use]
    pub const fn is_driver(self) -> bool {
        matches!(self, Self::Driver)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Passenger => write!(f, "passenger"),
            Self::Driver => write!(f, "driver"),
            Self::Admin => write!(f, "admin"),
        }
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "passenger" => Ok(Self::Passenger),
            "driver" => Ok(Self::Driver),
            "admin" => Ok(Self::Admin),
            _ => Err(format!("invalid role: {s}")),
        }
    }
}
