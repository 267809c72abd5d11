use dioxus::prelude::*;

use crate::auth::use_auth;
use crate::icons::FaRightFromBracket;
use crate::Icon;

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");

/// Top application bar. `children` go on the right-hand side.
#[component]
pub fn Navbar(title: String, home: String, children: Element) -> Element {
    rsx! {
        document::Stylesheet { href: NAVBAR_CSS }
        header {
            class: "navbar",
            Link {
                class: "navbar-title",
                to: home,
                "{title}"
            }
            div {
                class: "navbar-actions",
                {children}
            }
        }
    }
}

/// Button to log out the current user.
///
/// Logout is local and cannot fail; afterwards the router moves to `redirect_to`.
#[component]
pub fn LogoutButton(
    #[props(default = "/login".to_string())] redirect_to: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let auth = use_auth();
    let nav = use_navigator();

    let onclick = move |_| {
        auth.logout();
        nav.push(redirect_to.clone());
    };

    rsx! {
        button {
            class: "{class}",
            title: "Log out",
            "aria-label": "Log out",
            onclick: onclick,
            Icon { icon: FaRightFromBracket, width: 16, height: 16 }
        }
    }
}
