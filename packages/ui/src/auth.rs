//! Authentication context and hooks for the UI.

use api::{
    ApiError, ClientConfig, LoginRequest, ProfileForm, RegisterRequest, SessionError,
    SessionPhase, SessionState, SessionStore, User,
};
use dioxus::prelude::*;

use crate::platform::{make_client, make_storage, navigate_external, Client, Storage};
use crate::brand_icons::FaGoogle;
use crate::Icon;

/// Handle to the process-wide session, injected by [`AuthProvider`].
///
/// Reads subscribe the calling component; the methods below are the only way
/// session state changes. Network calls run outside the signal borrow and the
/// result is applied afterwards, so a render during an in-flight request
/// never sees a held lock.
#[derive(Clone, Copy, PartialEq)]
pub struct AuthContext {
    session: Signal<SessionStore<Storage>>,
    client: Signal<Client>,
}

impl AuthContext {
    pub fn state(&self) -> SessionState {
        self.session.read().state().clone()
    }

    pub fn user(&self) -> Option<User> {
        self.session.read().user().cloned()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.read().is_authenticated()
    }

    pub fn loading(&self) -> bool {
        self.session.read().is_loading()
    }

    pub fn phase(&self) -> SessionPhase {
        self.session.read().phase()
    }

    /// A clone of the configured API client.
    pub fn client(&self) -> Client {
        self.client.peek().clone()
    }

    /// Re-synchronise from persistent storage.
    pub fn fetch_user(mut self) {
        self.session.write().fetch_user();
    }

    pub async fn login(mut self, credentials: LoginRequest) -> Result<User, ApiError> {
        let response = self.client().login(&credentials).await?;
        Ok(self.session.write().apply_login(response))
    }

    pub async fn register(self, data: RegisterRequest) -> Result<(), ApiError> {
        self.client().register(&data).await
    }

    pub fn logout(mut self) {
        self.session.write().logout();
    }

    pub fn complete_federated_login(
        mut self,
        token: Option<&str>,
        refresh_token: Option<&str>,
        encoded_user: Option<&str>,
    ) -> Result<User, SessionError> {
        self.session
            .write()
            .complete_federated_login(token, refresh_token, encoded_user)
    }

    pub async fn update_profile(mut self, form: ProfileForm) -> Result<User, ApiError> {
        let id = self.session.peek().current_user_id()?;
        let user = self.client().update_user(id, &form).await?;
        self.session.write().apply_profile_update(user.clone());
        Ok(user)
    }
}

/// Get the session handle.
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>()
}

/// The configuration [`AuthProvider`] was mounted with.
pub fn use_client_config() -> ClientConfig {
    use_context::<ClientConfig>()
}

/// Provider component that owns the session and the API client.
/// Wrap your app with this component to enable authentication.
#[component]
pub fn AuthProvider(config: ClientConfig, children: Element) -> Element {
    let config = use_context_provider(|| config);
    let storage = use_hook(make_storage);
    let session = {
        let storage = storage.clone();
        use_signal(move || SessionStore::new(storage))
    };
    let client = use_signal(move || make_client(&config, storage));
    let auth = use_context_provider(|| AuthContext { session, client });

    // Resolve the persisted session once on mount
    use_effect(move || auth.fetch_user());

    rsx! {
        {children}
    }
}

/// Button that hands the browser over to the federated login provider.
#[component]
pub fn FederatedLoginButton(
    href: String,
    #[props(default = "Sign in with Google".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let mut redirecting = use_signal(|| false);

    let onclick = move |_| {
        redirecting.set(true);
        navigate_external(&href);
    };

    rsx! {
        button {
            class: "{class}",
            r#type: "button",
            disabled: redirecting(),
            onclick: onclick,
            Icon { icon: FaGoogle, width: 16, height: 16 }
            if redirecting() {
                "Redirecting..."
            } else {
                "{label}"
            }
        }
    }
}
