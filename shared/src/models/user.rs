//! User Model

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// User role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Cashier,
    Mechanic,
    Customer,
    /// Any role string the client does not know about (gated out everywhere)
    #[serde(other)]
    Unknown,
}

impl Role {
    /// All assignable roles, in menu order
    pub const ALL: [Role; 4] = [Role::Admin, Role::Cashier, Role::Mechanic, Role::Customer];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Cashier => "cashier",
            Role::Mechanic => "mechanic",
            Role::Customer => "customer",
            Role::Unknown => "unknown",
        }
    }

    /// Staff roles operate the workshop on behalf of customers
    pub fn is_staff(&self) -> bool {
        matches!(self, Role::Admin | Role::Cashier | Role::Mechanic)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "admin" => Ok(Role::Admin),
            "cashier" => Ok(Role::Cashier),
            "mechanic" => Ok(Role::Mechanic),
            "customer" => Ok(Role::Customer),
            other => Err(format!("unknown role: {other}")),
        }
    }
}

/// User entity (password never leaves the server)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    pub role: Role,
    #[serde(default)]
    pub created_at: Option<DateTime<FixedOffset>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<FixedOffset>>,
}

impl User {
    pub fn has_role(&self, roles: &[Role]) -> bool {
        roles.contains(&self.role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_role_roundtrip_and_unknown() {
        let role: Role = serde_json::from_value(json!("cashier")).unwrap();
        assert_eq!(role, Role::Cashier);
        assert_eq!(serde_json::to_value(Role::Mechanic).unwrap(), json!("mechanic"));

        let role: Role = serde_json::from_value(json!("member")).unwrap();
        assert_eq!(role, Role::Unknown);
    }

    #[test]
    fn test_role_from_str() {
        assert_eq!("Admin".parse::<Role>(), Ok(Role::Admin));
        assert!("boss".parse::<Role>().is_err());
    }

    #[test]
    fn test_user_tolerates_sparse_payload() {
        let user: User = serde_json::from_value(json!({
            "id": "u-1",
            "name": "Budi",
            "role": "customer",
            "created_at": "2024-06-01T09:00:00+07:00",
            "updated_at": null
        }))
        .unwrap();
        assert_eq!(user.email, "");
        assert!(user.has_role(&[Role::Customer, Role::Admin]));
        assert!(user.created_at.is_some());
        assert!(user.updated_at.is_none());
    }
}
