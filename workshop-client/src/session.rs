//! Auth session - the single process-wide session object
//!
//! Lifecycle: `restore` on start-up, `login` / `logout` afterwards. The
//! session owns the API client so the bearer token attached to requests and
//! the persisted token never disagree.

use shared::client::{ProfileUpdate, RegisterRequest};
use shared::models::{Role, User};
use thiserror::Error;

use crate::access::Capabilities;
use crate::token_store::{StoredToken, TokenStore};
use crate::{ClientError, HttpClient, WorkshopApi};

pub const LOGIN_FAILED: &str = "Login failed";
pub const REGISTRATION_FAILED: &str = "Registration failed";
pub const UPDATE_FAILED: &str = "Update failed";
pub const RESET_LINK_FAILED: &str = "Failed to send password reset link.";
pub const RESET_LINK_SENT: &str =
    "If an account with that email exists, a password reset link has been sent.";

/// Server text that means the password was wrong
const INVALID_CREDENTIALS: &str = "Invalid Credentials";

/// Failed session operation, reduced to the text shown to the user
#[derive(Debug, Error)]
#[error("{message}")]
pub struct SessionError {
    pub message: String,
    #[source]
    pub source: Option<ClientError>,
}

impl SessionError {
    fn from_client(err: ClientError, fallback: &str) -> Self {
        Self {
            message: err.user_message(fallback),
            source: Some(err),
        }
    }
}

pub type SessionResult<T> = Result<T, SessionError>;

pub struct AuthSession<C: HttpClient, S: TokenStore> {
    api: WorkshopApi<C>,
    store: S,
    user: Option<User>,
    suggest_password_reset: bool,
}

impl<C: HttpClient, S: TokenStore> AuthSession<C, S> {
    pub fn new(api: WorkshopApi<C>, store: S) -> Self {
        Self {
            api,
            store,
            user: None,
            suggest_password_reset: false,
        }
    }

    pub fn api(&self) -> &WorkshopApi<C> {
        &self.api
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(|u| u.role)
    }

    /// Capability flags of the signed-in role (all off when signed out)
    pub fn capabilities(&self) -> Capabilities {
        Capabilities::for_role(self.role())
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Set after a login rejected for bad credentials; the login screen
    /// then offers the password reset link.
    pub fn suggest_password_reset(&self) -> bool {
        self.suggest_password_reset
    }

    /// Resume a persisted session
    ///
    /// Returns whether a user is signed in afterwards. A stored token the
    /// server no longer accepts is discarded.
    pub async fn restore(&mut self) -> bool {
        let stored = match self.store.load() {
            Ok(Some(stored)) => stored,
            Ok(None) => return false,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read stored token");
                return false;
            }
        };

        self.api.set_token(Some(stored.token));
        match self.api.current_user().await {
            Ok(user) => {
                tracing::info!(user_id = %user.id, role = %user.role, "Session restored");
                self.user = Some(user);
                true
            }
            Err(e) => {
                tracing::warn!(error = %e, "Stored session rejected, signing out");
                self.clear_local();
                false
            }
        }
    }

    /// Sign in, persist the token, and load the user
    pub async fn login(&mut self, email: &str, password: &str) -> SessionResult<&User> {
        self.suggest_password_reset = false;

        let token = match self.api.login(email, password).await {
            Ok(token) => token,
            Err(e) => {
                let err = SessionError::from_client(e, LOGIN_FAILED);
                self.suggest_password_reset = err.message.contains(INVALID_CREDENTIALS);
                tracing::warn!(email, error = %err, "Login rejected");
                return Err(err);
            }
        };

        if let Err(e) = self.store.save(&StoredToken::new(token.clone(), Some(email.to_string()))) {
            tracing::warn!(error = %e, "Failed to persist token, session will not survive restart");
        }
        self.api.set_token(Some(token));

        match self.api.current_user().await {
            Ok(user) => {
                tracing::info!(user_id = %user.id, role = %user.role, "Logged in");
                Ok(self.user.insert(user))
            }
            Err(e) => {
                self.clear_local();
                Err(SessionError::from_client(e, LOGIN_FAILED))
            }
        }
    }

    /// Create an account; the user still signs in afterwards
    pub async fn register(&self, req: &RegisterRequest) -> SessionResult<()> {
        self.api
            .register(req)
            .await
            .map_err(|e| SessionError::from_client(e, REGISTRATION_FAILED))?;
        tracing::info!(email = %req.email, "Account registered");
        Ok(())
    }

    /// Sign out
    ///
    /// The server call is best-effort; local state is cleared regardless.
    pub async fn logout(&mut self) {
        if self.api.token().is_some()
            && let Err(e) = self.api.logout().await
        {
            tracing::warn!(error = %e, "Logout request failed");
        }
        self.clear_local();
        tracing::info!("Logged out");
    }

    /// Update the profile; the held user is replaced by the server's copy
    pub async fn update_profile(&mut self, update: &ProfileUpdate) -> SessionResult<&User> {
        if self.user.is_none() {
            return Err(SessionError::from_client(ClientError::NotAuthenticated, UPDATE_FAILED));
        }
        let user = self
            .api
            .update_profile(update)
            .await
            .map_err(|e| SessionError::from_client(e, UPDATE_FAILED))?;
        tracing::info!(user_id = %user.id, password_changed = update.password.is_some(), "Profile updated");
        Ok(self.user.insert(user))
    }

    /// Request a reset link; the answer never reveals whether the email exists
    pub async fn forgot_password(&self, email: &str) -> SessionResult<&'static str> {
        self.api
            .forgot_password(email)
            .await
            .map_err(|e| SessionError::from_client(e, RESET_LINK_FAILED))?;
        Ok(RESET_LINK_SENT)
    }

    fn clear_local(&mut self) {
        if let Err(e) = self.store.clear() {
            tracing::warn!(error = %e, "Failed to clear stored token");
        }
        self.api.set_token(None);
        self.user = None;
    }
}
