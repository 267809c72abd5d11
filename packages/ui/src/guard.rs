use api::SessionPhase;
use dioxus::prelude::*;

use crate::auth::use_auth;
use crate::feedback::Spinner;

/// Renders `children` only for an authenticated session.
///
/// While the persisted session is still being resolved a spinner is shown;
/// an unauthenticated visitor is sent to `login_route`.
#[component]
pub fn RequireAuth(
    #[props(default = "/login".to_string())] login_route: String,
    children: Element,
) -> Element {
    let auth = use_auth();
    let nav = use_navigator();

    use_effect(move || {
        if auth.phase() == SessionPhase::Unauthenticated {
            tracing::debug!(to = %login_route, "redirecting unauthenticated visitor");
            nav.replace(login_route.clone());
        }
    });

    match auth.phase() {
        SessionPhase::Loading => rsx! { Spinner {} },
        SessionPhase::Unauthenticated => rsx! {},
        SessionPhase::Authenticated => rsx! { {children} },
    }
}
