//! Vehicle Model

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use super::User;

/// Vehicle entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: String,
    /// Owner reference (User ID)
    #[serde(default)]
    pub user_id: String,
    pub license_plate: String,
    pub brand: String,
    pub model: String,
    #[serde(default)]
    pub year: String,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub created_at: Option<DateTime<FixedOffset>>,
    /// Owner, embedded by the backend on list endpoints
    #[serde(rename = "User", default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<User>,
}

impl Vehicle {
    /// Plate with inner whitespace removed ("B 1234 XY" -> "B1234XY")
    pub fn compact_plate(&self) -> String {
        self.license_plate.split_whitespace().collect()
    }

    /// One-line label used in pick lists: "B 1234 XY - Toyota Avanza"
    pub fn label(&self) -> String {
        format!("{} - {} {}", self.license_plate, self.brand, self.model)
    }
}

/// Create / update vehicle payload
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleInput {
    pub brand: String,
    pub model: String,
    pub year: String,
    pub license_plate: String,
    pub color: String,
}

impl From<&Vehicle> for VehicleInput {
    fn from(vehicle: &Vehicle) -> Self {
        Self {
            brand: vehicle.brand.clone(),
            model: vehicle.model.clone(),
            year: vehicle.year.clone(),
            license_plate: vehicle.license_plate.clone(),
            color: vehicle.color.clone(),
        }
    }
}
