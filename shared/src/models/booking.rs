//! Booking Model

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{Service, Vehicle};

/// Booking status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BookingStatus {
    #[serde(rename = "pending")]
    Pending,
    #[serde(rename = "confirmed")]
    Confirmed,
    #[serde(rename = "on progress")]
    OnProgress,
    #[serde(rename = "completed")]
    Completed,
    #[serde(rename = "cancelled")]
    Cancelled,
}

impl BookingStatus {
    pub const ALL: [BookingStatus; 5] = [
        BookingStatus::Pending,
        BookingStatus::Confirmed,
        BookingStatus::OnProgress,
        BookingStatus::Completed,
        BookingStatus::Cancelled,
    ];

    /// Wire value, also used as the `filters[status]` query value
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::OnProgress => "on progress",
            BookingStatus::Completed => "completed",
            BookingStatus::Cancelled => "cancelled",
        }
    }

    /// Customers may withdraw a booking until work has started
    pub fn is_cancellable(&self) -> bool {
        matches!(self, BookingStatus::Pending | BookingStatus::Confirmed)
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BookingStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(['_', '-'], " ");
        BookingStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == normalized)
            .ok_or_else(|| format!("unknown booking status: {s}"))
    }
}

/// Booking entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    pub id: String,
    /// Customer reference (User ID)
    #[serde(default)]
    pub user_id: String,
    pub vehicle_id: String,
    #[serde(default)]
    pub notes: String,
    pub status: BookingStatus,
    /// Scheduled wall-clock time with the offset it was booked in
    pub booking_date: DateTime<FixedOffset>,
    #[serde(default)]
    pub created_at: Option<DateTime<FixedOffset>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<FixedOffset>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub services: Vec<Service>,
    /// Vehicle, embedded by the backend on list endpoints
    #[serde(rename = "Vehicle", default, skip_serializing_if = "Option::is_none")]
    pub vehicle: Option<Vehicle>,
}

impl Booking {
    /// Short reference shown in pick lists: "Booking #1a2b3c4d"
    pub fn short_ref(&self) -> String {
        let prefix: String = self.id.chars().take(8).collect();
        format!("Booking #{prefix}")
    }

    /// "Avanza - B1234XY", or the raw vehicle id when not embedded
    pub fn vehicle_label(&self) -> String {
        match &self.vehicle {
            Some(vehicle) => format!("{} - {}", vehicle.model, vehicle.compact_plate()),
            None => self.vehicle_id.clone(),
        }
    }
}

/// Create booking payload
///
/// `booking_date` is an ISO-8601 string carrying an explicit numeric offset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingCreate {
    pub vehicle_id: String,
    pub booking_date: String,
    pub notes: String,
    pub service_ids: Vec<String>,
}

/// Update booking status payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingStatusUpdate {
    pub status: BookingStatus,
}
