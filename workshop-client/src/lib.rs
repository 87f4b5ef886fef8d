//! Workshop Client - HTTP client for the workshop management backend
//!
//! Provides the authenticated REST client, the auth session holder, and the
//! per-screen controllers (form state, validation, list state, capability
//! flags) that sit between a front end and the backend API.

pub mod access;
pub mod api;
pub mod booking_window;
pub mod config;
pub mod error;
pub mod forms;
pub mod http;
pub mod listing;
pub mod screens;
pub mod session;
pub mod token_store;

pub use access::Capabilities;
pub use api::WorkshopApi;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::{HttpClient, NetworkHttpClient};
pub use listing::{ListQuery, ListState};
pub use session::AuthSession;
pub use token_store::{FileTokenStore, MemoryTokenStore, StoredToken, TokenStore, TokenStoreError};

// Re-export shared types for convenience
pub use shared::models::{
    Booking, BookingStatus, Role, Service, User, Vehicle, WorkOrder, WorkOrderStatus,
};
pub use shared::response::{ApiResponse, PaginatedResponse};
