//! Profile screen

use super::{Notice, ScreenError, ScreenResult};
use crate::forms::ProfileForm;
use crate::session::AuthSession;
use crate::{HttpClient, TokenStore};

#[derive(Debug, Default)]
pub struct ProfileScreen {
    pub form: ProfileForm,
    pub notice: Notice,
}

impl ProfileScreen {
    /// Form pre-filled from the signed-in user (blank when signed out)
    pub fn new<C: HttpClient, S: TokenStore>(session: &AuthSession<C, S>) -> Self {
        Self {
            form: session.user().map(ProfileForm::from_user).unwrap_or_default(),
            notice: Notice::default(),
        }
    }

    pub async fn submit<C: HttpClient, S: TokenStore>(&mut self, session: &mut AuthSession<C, S>) -> ScreenResult<()> {
        self.notice.clear();
        let update = self.form.validate().map_err(|e| {
            // "Passwords do not match" is the only profile check
            let message = e.get("confirm_password").unwrap_or("Update failed").to_string();
            self.notice.fail(ScreenError::Invalid(message))
        })?;

        match session.update_profile(&update).await {
            Ok(_) => {
                self.form.clear_passwords();
                self.notice.succeed("Profile updated successfully");
                Ok(())
            }
            Err(e) => Err(self.notice.fail(e.into())),
        }
    }
}
