use dioxus::prelude::*;

use ui::icons::FaCircleUser;
use ui::{use_auth, Icon, LogoutButton, Navbar, RequireAuth};

use crate::Route;

/// Chrome around every page.
#[component]
pub fn Shell() -> Element {
    let auth = use_auth();
    let greeting = auth.user().map(|user| user.greeting_name().to_string());

    rsx! {
        Navbar {
            title: "TodoApp",
            home: "/",
            if let Some(name) = greeting {
                span { "Welcome, {name}" }
                Link {
                    to: Route::Profile {},
                    Icon { icon: FaCircleUser, width: 20, height: 20 }
                }
                LogoutButton {}
            } else {
                Link {
                    to: Route::Login { error: String::new() },
                    "Login"
                }
            }
        }
        main {
            Outlet::<Route> {}
        }
    }
}

/// Layout for routes that need a session.
#[component]
pub fn PrivateRoute() -> Element {
    rsx! {
        RequireAuth {
            Outlet::<Route> {}
        }
    }
}
