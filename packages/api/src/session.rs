//! # Session store
//!
//! [`SessionStore`] owns the client's authentication state and is the only
//! thing that writes the session keys in persistent storage (`token`,
//! `refreshToken`, `user`).
//!
//! ## Lifecycle
//!
//! ```text
//!             fetch_user (valid cache)
//!   Loading ─────────────────────────────▶ Authenticated
//!      │                                      ▲     │
//!      │ fetch_user (no token /               │     │ logout
//!      │ inconsistent cache)      login /     │     ▼
//!      └───────────────────────▶ federated ─▶ Unauthenticated
//! ```
//!
//! The store starts in `Loading`. [`SessionStore::fetch_user`] resolves it once
//! from storage; after that only explicit actions move it: login, federated
//! completion, profile update and logout. Nothing polls.
//!
//! ## Forced logout
//!
//! A token in storage without a parseable cached user is a torn session.
//! [`SessionStore::force_logout`] is the single recovery path: it logs the
//! reason and purges everything, leaving the user at the login page without
//! an error message.

use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine;
use store::{keys, KeyValueStore};

use crate::casing;
use crate::error::ApiError;
use crate::models::{LoginResponse, User};

const PAYLOAD_CONFIG: GeneralPurposeConfig =
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent);
const URL_SAFE_PAYLOAD: GeneralPurpose = GeneralPurpose::new(&alphabet::URL_SAFE, PAYLOAD_CONFIG);
const STANDARD_PAYLOAD: GeneralPurpose = GeneralPurpose::new(&alphabet::STANDARD, PAYLOAD_CONFIG);

/// Where the session lifecycle currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Loading,
    Authenticated,
    Unauthenticated,
}

/// Authentication state observed by views.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    pub user: Option<User>,
    pub loading: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            user: None,
            loading: true,
        }
    }
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn phase(&self) -> SessionPhase {
        if self.loading {
            SessionPhase::Loading
        } else if self.is_authenticated() {
            SessionPhase::Authenticated
        } else {
            SessionPhase::Unauthenticated
        }
    }
}

/// Why a federated login redirect could not be turned into a session.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SessionError {
    #[error("federated login is missing the `{0}` parameter")]
    MissingParameter(&'static str),

    #[error("federated login payload is not valid base64: {0}")]
    InvalidEncoding(String),

    #[error("federated login payload is not a valid user record: {0}")]
    InvalidPayload(String),
}

/// Authentication state plus its persistent backing.
#[derive(Debug, Clone)]
pub struct SessionStore<S> {
    storage: S,
    state: SessionState,
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            state: SessionState::default(),
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn user(&self) -> Option<&User> {
        self.state.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.is_authenticated()
    }

    pub fn is_loading(&self) -> bool {
        self.state.loading
    }

    pub fn phase(&self) -> SessionPhase {
        self.state.phase()
    }

    /// Re-synchronise in-memory state from storage.
    ///
    /// A token with a missing or unparseable cached user forces a logout.
    /// Always leaves the loading flag cleared.
    pub fn fetch_user(&mut self) {
        let token = self.storage.get(keys::TOKEN).filter(|t| !t.is_empty());

        self.state.user = match token {
            None => None,
            Some(_) => match self.storage.get(keys::USER) {
                None => {
                    self.force_logout("token present without a cached user");
                    None
                }
                Some(raw) => match User::from_storage(&raw) {
                    Ok(user) => Some(user),
                    Err(e) => {
                        tracing::error!("failed to parse cached user: {}", e);
                        self.force_logout("cached user is unreadable");
                        None
                    }
                },
            },
        };

        if self.state.loading {
            tracing::info!(
                authenticated = self.state.is_authenticated(),
                "session resolved"
            );
        }
        self.state.loading = false;
    }

    /// Persist a successful login response and become authenticated.
    pub fn apply_login(&mut self, response: LoginResponse) -> User {
        self.establish(&response.token, response.refresh.as_deref(), response.user)
    }

    /// Clear the persisted credentials and cached user.
    pub fn logout(&mut self) {
        self.storage.remove_all(&keys::SESSION);
        if let Some(user) = self.state.user.take() {
            tracing::info!(user_id = user.id, "logged out");
        }
    }

    /// Recovery for inconsistent persisted state.
    pub fn force_logout(&mut self, reason: &str) {
        tracing::warn!(reason, "forcing logout");
        self.logout();
    }

    /// Turn a federated login redirect into a session.
    ///
    /// `encoded_user` is base64 JSON in wire casing. Any missing or
    /// undecodable input fails without touching state or storage.
    pub fn complete_federated_login(
        &mut self,
        token: Option<&str>,
        refresh_token: Option<&str>,
        encoded_user: Option<&str>,
    ) -> Result<User, SessionError> {
        let token = required("token", token)?;
        let refresh_token = required("refresh", refresh_token)?;
        let encoded_user = required("user", encoded_user)?;
        let user = decode_federated_user(&encoded_user)?;

        tracing::info!(user_id = user.id, "federated login completed");
        Ok(self.establish(&token, Some(&refresh_token), user))
    }

    /// Id of the signed-in user, the target of a profile update.
    pub fn current_user_id(&self) -> Result<u64, ApiError> {
        self.user().map(|user| user.id).ok_or(ApiError::NotAuthenticated)
    }

    /// Cache the server-confirmed user record and re-synchronise from it.
    pub fn apply_profile_update(&mut self, user: User) {
        self.persist_user(&user);
        self.fetch_user();
    }

    fn establish(&mut self, token: &str, refresh_token: Option<&str>, user: User) -> User {
        self.storage.set(keys::TOKEN, token);
        match refresh_token.filter(|r| !r.is_empty()) {
            Some(refresh) => self.storage.set(keys::REFRESH_TOKEN, refresh),
            None => self.storage.remove(keys::REFRESH_TOKEN),
        }
        self.persist_user(&user);

        tracing::info!(user_id = user.id, "session established");
        self.state.user = Some(user.clone());
        user
    }

    fn persist_user(&self, user: &User) {
        match user.to_storage() {
            Ok(raw) => self.storage.set(keys::USER, &raw),
            Err(e) => tracing::error!("failed to serialize user: {}", e),
        }
    }
}

fn required(name: &'static str, value: Option<&str>) -> Result<String, SessionError> {
    let value = value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .ok_or(SessionError::MissingParameter(name))?;
    Ok(value.to_string())
}

/// Decode the `user` parameter of a federated login redirect.
///
/// The payload may still be percent-encoded; base64 never contains `%`.
pub fn decode_federated_user(encoded: &str) -> Result<User, SessionError> {
    let encoded = if encoded.contains('%') {
        urlencoding::decode(encoded)
            .map(|v| v.into_owned())
            .map_err(|e| SessionError::InvalidEncoding(e.to_string()))?
    } else {
        encoded.to_string()
    };
    let bytes = URL_SAFE_PAYLOAD
        .decode(&encoded)
        .or_else(|_| STANDARD_PAYLOAD.decode(&encoded))
        .map_err(|e| SessionError::InvalidEncoding(e.to_string()))?;

    let wire: serde_json::Value = serde_json::from_slice(&bytes)
        .map_err(|e| SessionError::InvalidPayload(e.to_string()))?;
    let client = casing::to_client_case(wire)
        .map_err(|e| SessionError::InvalidPayload(e.to_string()))?;
    serde_json::from_value(client).map_err(|e| SessionError::InvalidPayload(e.to_string()))
}
