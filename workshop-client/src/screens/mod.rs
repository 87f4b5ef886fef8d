//! Screen controllers
//!
//! One controller per screen. A controller holds the list query and rows,
//! the capability flags for the signed-in role, and a [`Notice`] with the
//! last error or success text. It never owns the API client; every async
//! operation borrows a [`WorkshopApi`](crate::WorkshopApi).

pub mod auth;
pub mod bookings;
pub mod dashboard;
pub mod profile;
pub mod services;
pub mod users;
pub mod vehicles;
pub mod work_orders;

use std::future::Future;

use shared::response::PaginatedResponse;
use thiserror::Error;

use crate::forms::FieldErrors;
use crate::listing::ListState;
use crate::session::SessionError;
use crate::{ClientError, ClientResult};

pub use auth::{ForgotPasswordScreen, LoginScreen, RegisterScreen};
pub use bookings::{BookingForm, BookingsScreen};
pub use dashboard::{DashboardScreen, DashboardStats};
pub use profile::ProfileScreen;
pub use services::ServicesScreen;
pub use users::UsersScreen;
pub use vehicles::VehiclesScreen;
pub use work_orders::WorkOrdersScreen;

/// Why a screen operation did not go through
#[derive(Debug, Error)]
pub enum ScreenError {
    /// The role does not offer this action
    #[error("{0}")]
    NotAllowed(&'static str),

    /// Rejected before any request was sent
    #[error("{0}")]
    Invalid(String),

    /// Per-field form errors
    #[error("{0}")]
    Fields(FieldErrors),

    /// The backend refused or the request failed
    #[error("{message}")]
    Request {
        message: String,
        #[source]
        source: ClientError,
    },
}

impl ScreenError {
    pub fn request(source: ClientError, fallback: &str) -> Self {
        Self::Request {
            message: source.user_message(fallback),
            source,
        }
    }
}

impl From<SessionError> for ScreenError {
    fn from(err: SessionError) -> Self {
        match err.source {
            Some(source) => Self::Request {
                message: err.message,
                source,
            },
            None => Self::Invalid(err.message),
        }
    }
}

pub type ScreenResult<T> = Result<T, ScreenError>;

/// Error / success banner
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Notice {
    error: Option<String>,
    success: Option<String>,
}

impl Notice {
    pub fn clear(&mut self) {
        self.error = None;
        self.success = None;
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn success(&self) -> Option<&str> {
        self.success.as_deref()
    }

    pub fn succeed(&mut self, message: impl Into<String>) {
        self.error = None;
        self.success = Some(message.into());
    }

    /// Record a failure and hand it back for `?`
    pub fn fail(&mut self, err: ScreenError) -> ScreenError {
        self.success = None;
        self.error = Some(err.to_string());
        err
    }
}

/// Run one list fetch through the ticketed state
///
/// Returns false when the response was stale and dropped.
pub(crate) async fn load_page<T, F>(list: &mut ListState<T>, fetch: F, fallback: &str) -> bool
where
    F: Future<Output = ClientResult<PaginatedResponse<T>>>,
{
    let ticket = list.begin();
    let result = fetch.await.map_err(|e| {
        tracing::warn!(error = %e, "List fetch failed");
        e.user_message(fallback)
    });
    list.finish(ticket, result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notice_keeps_one_banner() {
        let mut notice = Notice::default();
        notice.succeed("Vehicle created successfully");
        assert_eq!(notice.success(), Some("Vehicle created successfully"));

        let err = notice.fail(ScreenError::Invalid("Booking date is required.".into()));
        assert_eq!(err.to_string(), "Booking date is required.");
        assert_eq!(notice.error(), Some("Booking date is required."));
        assert_eq!(notice.success(), None);
    }

    #[test]
    fn test_request_error_uses_fallback() {
        let err = ScreenError::request(ClientError::InvalidResponse("bad".into()), "Delete failed.");
        assert_eq!(err.to_string(), "Delete failed.");
    }
}
