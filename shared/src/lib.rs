//! Shared types for the workshop client
//!
//! Wire models mirrored from the workshop REST backend, the response
//! envelopes it wraps them in, and the request DTOs the client sends.

pub mod client;
pub mod models;
pub mod money;
pub mod response;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use models::{
    Booking, BookingStatus, Role, Service, User, Vehicle, WorkOrder, WorkOrderStatus,
};
pub use response::{ApiResponse, ErrorBody, PaginatedResponse};
