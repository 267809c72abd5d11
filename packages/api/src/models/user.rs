//! # User record
//!
//! [`User`] is the server-owned identity record as the client sees it after
//! key normalisation. The same shape is what gets persisted under the
//! `user` storage key, so a reload can restore the session without a
//! round trip.
//!
//! The federated-login redirect only carries `id`, `first_name`,
//! `last_name` and `email`; the remaining fields default when absent.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identity record in client casing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct User {
    pub id: u64,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub is_email_verified: bool,
}

impl User {
    /// Name used in greetings, falling back to the email address.
    pub fn greeting_name(&self) -> &str {
        if self.first_name.trim().is_empty() {
            &self.email
        } else {
            &self.first_name
        }
    }

    /// Serialise for the `user` storage key.
    pub fn to_storage(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Parse the `user` storage key.
    pub fn from_storage(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}
