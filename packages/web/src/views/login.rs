//! Login page with email/password form and federated sign-in.

use api::LoginRequest;
use dioxus::prelude::*;
use ui::{use_auth, use_client_config, Alert, FederatedLoginButton};

use crate::Route;

/// Login page component.
///
/// `error` is set when a federated login bounced back here.
#[component]
pub fn Login(error: String) -> Element {
    let auth = use_auth();
    let config = use_client_config();
    let nav = use_navigator();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut server_error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    // If already logged in, go straight to the todos
    use_effect(move || {
        if auth.is_authenticated() {
            nav.replace(Route::Todos {});
        }
    });

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        server_error.set(None);

        let credentials = LoginRequest::new(email(), password());
        if let Err(msg) = credentials.validate() {
            server_error.set(Some(msg.to_string()));
            return;
        }

        spawn(async move {
            loading.set(true);
            match auth.login(credentials).await {
                Ok(_) => {
                    nav.push(Route::Todos {});
                }
                Err(e) => {
                    loading.set(false);
                    server_error.set(Some(
                        e.message_or("Login failed. Please check your credentials."),
                    ));
                }
            }
        });
    };

    rsx! {
        div {
            class: "page",

            h1 { "Sign in" }

            form {
                class: "form",
                onsubmit: handle_login,

                if !error.is_empty() {
                    Alert { message: "Sign-in with Google failed. Please try again." }
                }

                input {
                    r#type: "email",
                    placeholder: "Email Address",
                    autocomplete: "email",
                    autofocus: true,
                    value: email(),
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }

                input {
                    r#type: "password",
                    placeholder: "Password",
                    autocomplete: "current-password",
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }

                if let Some(err) = server_error() {
                    Alert { message: err }
                }

                button {
                    class: "btn btn-primary",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Signing in..." } else { "Sign In" }
                }

                FederatedLoginButton {
                    href: config.auth.federated_login_url.clone(),
                    label: "Sign In with Google",
                    class: "btn btn-outline",
                }

                p {
                    "Don't have an account? "
                    Link { to: Route::Register {}, "Sign Up" }
                }
            }
        }
    }
}
