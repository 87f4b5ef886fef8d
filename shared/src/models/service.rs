//! Service Model (workshop service catalogue)

use serde::{Deserialize, Serialize};

/// Service entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Service {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Price in currency unit
    #[serde(default)]
    pub price: f64,
}

/// Create / update service payload
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServiceInput {
    pub name: String,
    pub description: String,
    /// Price in currency unit
    pub price: f64,
}
