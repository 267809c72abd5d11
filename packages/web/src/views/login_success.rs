use dioxus::prelude::*;
use ui::{use_auth, Spinner};

use crate::Route;

/// Landing route of the federated login redirect.
///
/// Runs once on mount: a valid payload becomes a session and the visitor
/// moves on to the todos, anything else goes back to the login page with
/// an error indicator.
#[component]
pub fn LoginSuccess(token: String, refresh: String, user: String) -> Element {
    let auth = use_auth();
    let nav = use_navigator();

    use_effect(move || {
        let present = |s: &str| Some(s.to_string()).filter(|s| !s.is_empty());
        let result = auth.complete_federated_login(
            present(&token).as_deref(),
            present(&refresh).as_deref(),
            present(&user).as_deref(),
        );
        match result {
            Ok(_) => {
                nav.replace(Route::Todos {});
            }
            Err(e) => {
                tracing::error!("Federated login failed: {}", e);
                nav.replace(Route::Login {
                    error: "auth-failed".to_string(),
                });
            }
        }
    });

    rsx! {
        Spinner { label: "Finalizing login..." }
    }
}
