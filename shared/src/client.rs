//! Client-related request/response types
//!
//! Auth and profile DTOs exchanged with the `user` endpoints.

use serde::{Deserialize, Serialize};

// =============================================================================
// Auth API DTOs
// =============================================================================

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Login response data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

/// Registration request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
}

/// Profile update (`PUT user`)
///
/// `password` is only sent when the user typed a new one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileUpdate {
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

/// Password reset link request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForgotPasswordRequest {
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_profile_update_omits_blank_password() {
        let update = ProfileUpdate {
            name: "Sari".into(),
            email: "sari@example.com".into(),
            phone: "0812".into(),
            password: None,
        };
        assert_eq!(
            serde_json::to_value(&update).unwrap(),
            json!({ "name": "Sari", "email": "sari@example.com", "phone": "0812" })
        );
    }
}
