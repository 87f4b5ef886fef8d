//! Sign-in, registration and password reset screens

use super::{Notice, ScreenError, ScreenResult};
use crate::forms::{LoginForm, RegisterForm};
use crate::session::AuthSession;
use crate::{HttpClient, TokenStore};

#[derive(Debug, Default)]
pub struct LoginScreen {
    pub form: LoginForm,
    pub notice: Notice,
    /// Offer the reset link after a bad-credentials rejection
    pub show_reset_link: bool,
}

impl LoginScreen {
    pub fn new() -> Self {
        Self::default()
    }

    /// Editing the form hides the reset suggestion again
    pub fn edit(&mut self) -> &mut LoginForm {
        self.notice.clear();
        self.show_reset_link = false;
        &mut self.form
    }

    pub async fn submit<C: HttpClient, S: TokenStore>(&mut self, session: &mut AuthSession<C, S>) -> ScreenResult<()> {
        self.notice.clear();
        self.show_reset_link = false;
        let req = self
            .form
            .validate()
            .map_err(|e| self.notice.fail(ScreenError::Fields(e)))?;

        let result = session.login(&req.email, &req.password).await.map(|_| ());
        self.show_reset_link = session.suggest_password_reset();
        result.map_err(|e| self.notice.fail(e.into()))?;
        self.form.password.clear();
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct RegisterScreen {
    pub form: RegisterForm,
    pub notice: Notice,
}

impl RegisterScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn submit<C: HttpClient, S: TokenStore>(&mut self, session: &AuthSession<C, S>) -> ScreenResult<()> {
        self.notice.clear();
        let req = self
            .form
            .validate()
            .map_err(|e| self.notice.fail(ScreenError::Fields(e)))?;
        session
            .register(&req)
            .await
            .map_err(|e| self.notice.fail(e.into()))?;
        self.notice.succeed("Registration successful. Please sign in.");
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct ForgotPasswordScreen {
    pub email: String,
    pub notice: Notice,
}

impl ForgotPasswordScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn submit<C: HttpClient, S: TokenStore>(&mut self, session: &AuthSession<C, S>) -> ScreenResult<()> {
        self.notice.clear();
        if self.email.trim().is_empty() {
            return Err(self.notice.fail(ScreenError::Invalid("Email is required".into())));
        }
        let message = session
            .forgot_password(self.email.trim())
            .await
            .map_err(|e| self.notice.fail(e.into()))?;
        self.notice.succeed(message);
        Ok(())
    }
}
