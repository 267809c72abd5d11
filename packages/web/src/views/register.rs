//! Registration page view with email/password form.

use api::RegisterRequest;
use dioxus::prelude::*;
use ui::{use_auth, Alert};

use crate::Route;

/// Register page component. A new account still has to sign in.
#[component]
pub fn Register() -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let mut first_name = use_signal(String::new);
    let mut last_name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();
        error.set(None);

        let data = RegisterRequest {
            first_name: first_name().trim().to_string(),
            last_name: last_name().trim().to_string(),
            email: email().trim().to_string(),
            password: password(),
        };
        if let Err(msg) = data.validate() {
            error.set(Some(msg.to_string()));
            return;
        }

        spawn(async move {
            loading.set(true);
            match auth.register(data).await {
                Ok(()) => {
                    nav.push(Route::Login {
                        error: String::new(),
                    });
                }
                Err(e) => {
                    loading.set(false);
                    error.set(Some(e.message_or("Registration failed. Please try again.")));
                }
            }
        });
    };

    rsx! {
        div {
            class: "page",

            h1 { "Sign up" }

            form {
                class: "form",
                onsubmit: handle_register,

                input {
                    r#type: "text",
                    placeholder: "First Name",
                    autofocus: true,
                    value: first_name(),
                    oninput: move |evt: FormEvent| first_name.set(evt.value()),
                }

                input {
                    r#type: "text",
                    placeholder: "Last Name",
                    value: last_name(),
                    oninput: move |evt: FormEvent| last_name.set(evt.value()),
                }

                input {
                    r#type: "email",
                    placeholder: "Email Address",
                    autocomplete: "email",
                    value: email(),
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }

                input {
                    r#type: "password",
                    placeholder: "Password",
                    autocomplete: "new-password",
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }

                if let Some(err) = error() {
                    Alert { message: err }
                }

                button {
                    class: "btn btn-primary",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Creating account..." } else { "Sign Up" }
                }

                p {
                    "Already have an account? "
                    Link { to: Route::Login { error: String::new() }, "Sign In" }
                }
            }
        }
    }
}
