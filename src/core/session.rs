//! Mock sign-in. Nothing is verified and nothing outlives the process.

use crate::errors::{AppError, AppResult};
use crate::models::identity::{DEFAULT_ADMIN_EMAIL, Identity};

#[derive(Debug, Clone)]
pub struct Session {
    admin_email: String,
    identity: Option<Identity>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(DEFAULT_ADMIN_EMAIL)
    }
}

impl Session {
    pub fn new(admin_email: &str) -> Self {
        Self {
            admin_email: admin_email.trim().to_lowercase(),
            identity: None,
        }
    }

    /// Sign in as `email`. The password is accepted as-is.
    ///
    /// Any non-blank email succeeds; admin rights follow from a
    /// case-insensitive match against the configured admin address.
    pub fn login(&mut self, email: &str, _password: &str) -> AppResult<&Identity> {
        if email.trim().is_empty() {
            return Err(AppError::InvalidLogin("email is required".into()));
        }
        let identity = Identity::from_email(email, &self.admin_email);
        Ok(&*self.identity.insert(identity))
    }

    pub fn logout(&mut self) {
        self.identity = None;
    }

    pub fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    pub fn is_admin(&self) -> bool {
        self.identity.as_ref().is_some_and(|i| i.is_admin)
    }

    pub fn admin_email(&self) -> &str {
        &self.admin_email
    }
}
