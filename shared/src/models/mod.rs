//! Data models
//!
//! Mirrored from the workshop backend. IDs are UUID strings assigned by the
//! server; the client never generates them.

pub mod booking;
pub mod service;
pub mod user;
pub mod vehicle;
pub mod work_order;

// Re-exports
pub use booking::*;
pub use service::*;
pub use user::*;
pub use vehicle::*;
pub use work_order::*;
