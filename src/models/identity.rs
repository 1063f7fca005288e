use serde::Serialize;
use uuid::Uuid;

/// Address that unlocks the admin view when no config overrides it.
pub const DEFAULT_ADMIN_EMAIL: &str = "admin@grace.com";

/// Mock-authenticated user context. Lives only as long as the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Identity {
    pub id: String,
    pub email: String,
    pub name: String,
    pub is_admin: bool,
}

impl Identity {
    /// Derive an identity from the email alone.
    ///
    /// `name` is the part before `@` (the whole string when there is none);
    /// `id` is a UUID v5 of the lower-cased email so the same address always
    /// maps to the same id.
    pub fn from_email(email: &str, admin_email: &str) -> Self {
        let email = email.trim();
        let lowered = email.to_lowercase();
        let name = email.split('@').next().unwrap_or(email).to_string();

        Self {
            id: Uuid::new_v5(&Uuid::NAMESPACE_OID, lowered.as_bytes()).to_string(),
            email: email.to_string(),
            name,
            is_admin: lowered == admin_email.trim().to_lowercase(),
        }
    }
}
