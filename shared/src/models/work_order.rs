//! Work Order Model

use chrono::{DateTime, FixedOffset};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::money;

/// Work order status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkOrderStatus {
    Pending,
    /// Mechanic assignment on the backend writes "on progress"
    #[serde(alias = "on progress", alias = "on_progress")]
    InProgress,
    Completed,
    Cancelled,
}

impl WorkOrderStatus {
    pub const ALL: [WorkOrderStatus; 4] = [
        WorkOrderStatus::Pending,
        WorkOrderStatus::InProgress,
        WorkOrderStatus::Completed,
        WorkOrderStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            WorkOrderStatus::Pending => "pending",
            WorkOrderStatus::InProgress => "in_progress",
            WorkOrderStatus::Completed => "completed",
            WorkOrderStatus::Cancelled => "cancelled",
        }
    }

    /// Badge text: "IN PROGRESS"
    pub fn label(&self) -> String {
        self.as_str().replace('_', " ").to_uppercase()
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, WorkOrderStatus::Completed | WorkOrderStatus::Cancelled)
    }

    /// Statuses offered from the current one: every status but itself
    pub fn next_statuses(&self) -> impl Iterator<Item = WorkOrderStatus> + '_ {
        Self::ALL.into_iter().filter(move |status| status != self)
    }

    pub fn can_transition_to(&self, next: WorkOrderStatus) -> bool {
        next != *self
    }
}

impl fmt::Display for WorkOrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WorkOrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace([' ', '-'], "_");
        WorkOrderStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == normalized)
            .ok_or_else(|| format!("unknown work order status: {s}"))
    }
}

/// Service line on a work order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceLine {
    #[serde(default)]
    pub id: String,
    pub service_id: String,
    #[serde(default)]
    pub service_name: String,
    /// Unit price in currency unit
    pub price: f64,
    #[serde(default = "one")]
    pub quantity: i32,
    #[serde(default)]
    pub status: String,
}

/// Spare part line on a work order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PartLine {
    #[serde(default)]
    pub id: String,
    pub sparepart_id: String,
    /// Unit price in currency unit
    pub price: f64,
    #[serde(default = "one")]
    pub quantity: i32,
}

fn one() -> i32 {
    1
}

/// Work order entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkOrder {
    pub id: String,
    pub booking_id: String,
    #[serde(default)]
    pub customer_id: String,
    #[serde(default)]
    pub vehicle_id: String,
    /// Empty until a mechanic is assigned
    #[serde(default)]
    pub mechanic_id: Option<String>,
    pub status: WorkOrderStatus,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub created_at: Option<DateTime<FixedOffset>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<FixedOffset>>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub services: Vec<ServiceLine>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub parts: Vec<PartLine>,
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

impl WorkOrder {
    /// Assigned mechanic, treating "" the same as none
    pub fn mechanic(&self) -> Option<&str> {
        self.mechanic_id.as_deref().filter(|id| !id.is_empty())
    }

    pub fn services_total(&self) -> Decimal {
        self.services
            .iter()
            .map(|line| money::line_total(line.price, line.quantity))
            .sum()
    }

    pub fn parts_total(&self) -> Decimal {
        self.parts
            .iter()
            .map(|line| money::line_total(line.price, line.quantity))
            .sum()
    }

    /// Σ(service price × qty) + Σ(part price × qty), rounded to 2dp
    pub fn total(&self) -> f64 {
        money::to_f64(self.services_total() + self.parts_total())
    }

    /// A mechanic can only be assigned before work starts
    pub fn can_assign_mechanic(&self) -> bool {
        self.status == WorkOrderStatus::Pending
    }
}

/// Create work order payload (from a confirmed booking)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkOrderCreate {
    pub booking_id: String,
    pub notes: String,
}

/// Update work order status payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkOrderStatusUpdate {
    pub status: WorkOrderStatus,
}

/// Assign mechanic payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignMechanic {
    pub mechanic_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> WorkOrder {
        serde_json::from_value(json!({
            "id": "wo-1",
            "booking_id": "b-1",
            "customer_id": "u-1",
            "vehicle_id": "v-1",
            "mechanic_id": "",
            "status": "pending",
            "services": [
                { "service_id": "s-1", "service_name": "Oil change", "price": 150000.0, "quantity": 1 },
                { "service_id": "s-2", "service_name": "Tune up", "price": 0.1, "quantity": 3 }
            ],
            "parts": [
                { "sparepart_id": "p-1", "price": 25000.5, "quantity": 2 }
            ]
        }))
        .unwrap()
    }

    #[test]
    fn test_total_sums_services_and_parts() {
        let wo = sample();
        assert_eq!(wo.total(), 200001.3);
    }

    #[test]
    fn test_null_lines_and_blank_mechanic() {
        let wo: WorkOrder = serde_json::from_value(json!({
            "id": "wo-2",
            "booking_id": "b-2",
            "status": "in_progress",
            "services": null
        }))
        .unwrap();
        assert!(wo.services.is_empty());
        assert!(wo.parts.is_empty());
        assert_eq!(wo.total(), 0.0);
        assert_eq!(wo.mechanic(), None);
        assert_eq!(sample().mechanic(), None);
    }

    #[test]
    fn test_on_progress_reads_as_in_progress() {
        let wo: WorkOrder = serde_json::from_value(json!({
            "id": "wo-3",
            "booking_id": "b-3",
            "mechanic_id": "m-1",
            "status": "on progress"
        }))
        .unwrap();
        assert_eq!(wo.status, WorkOrderStatus::InProgress);
    }

    #[test]
    fn test_status_transitions() {
        use WorkOrderStatus::*;
        assert!(Pending.can_transition_to(InProgress));
        assert!(Pending.can_transition_to(Completed));
        assert!(Completed.can_transition_to(Pending));
        assert!(!InProgress.can_transition_to(InProgress));
        assert_eq!(Completed.next_statuses().collect::<Vec<_>>(), vec![Pending, InProgress, Cancelled]);
        assert_eq!(InProgress.label(), "IN PROGRESS");
        assert_eq!("in progress".parse::<WorkOrderStatus>(), Ok(InProgress));
    }
}
