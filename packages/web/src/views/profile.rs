use api::ProfileForm;
use dioxus::prelude::*;
use ui::{use_auth, Alert, Severity, Spinner};

/// Profile form for the signed-in user.
#[component]
pub fn Profile() -> Element {
    let auth = use_auth();
    let mut form = use_signal(|| ProfileForm::seed(auth.user().as_ref()));
    let mut server_error = use_signal(|| Option::<String>::None);
    let mut success = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    // Reset the form whenever the session's user changes
    use_effect(move || {
        if let Some(user) = auth.user() {
            form.set(ProfileForm::from_user(&user));
        }
    });

    let Some(user) = auth.user() else {
        return rsx! { Spinner {} };
    };
    let dirty = form.read().is_dirty(&user);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        server_error.set(None);
        success.set(None);

        let data = form();
        if let Err(msg) = data.validate() {
            server_error.set(Some(msg.to_string()));
            return;
        }

        spawn(async move {
            loading.set(true);
            match auth.update_profile(data).await {
                Ok(updated) => {
                    form.set(ProfileForm::from_user(&updated));
                    success.set(Some("Profile updated successfully!".to_string()));
                }
                Err(e) => {
                    server_error.set(Some(e.message_or("Failed to update profile.")));
                }
            }
            loading.set(false);
        });
    };

    rsx! {
        div {
            class: "page",

            h1 { "My Profile" }

            form {
                class: "form",
                onsubmit: handle_submit,

                input {
                    r#type: "text",
                    placeholder: "First Name",
                    autofocus: true,
                    value: form.read().first_name.clone(),
                    oninput: move |evt: FormEvent| form.write().first_name = evt.value(),
                }

                input {
                    r#type: "text",
                    placeholder: "Last Name",
                    value: form.read().last_name.clone(),
                    oninput: move |evt: FormEvent| form.write().last_name = evt.value(),
                }

                input {
                    r#type: "email",
                    placeholder: "Email Address",
                    autocomplete: "email",
                    value: form.read().email.clone(),
                    oninput: move |evt: FormEvent| form.write().email = evt.value(),
                }

                if let Some(err) = server_error() {
                    Alert { message: err }
                }
                if let Some(msg) = success() {
                    Alert { message: msg, severity: Severity::Success }
                }

                button {
                    class: "btn btn-primary",
                    r#type: "submit",
                    disabled: !dirty || loading(),
                    if loading() { "Saving..." } else { "Save Changes" }
                }
            }
        }
    }
}
