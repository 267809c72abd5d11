//! This crate contains all shared UI for the workspace.

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}
pub mod brand_icons {
    pub use dioxus_free_icons::icons::fa_brands_icons::*;
}

mod platform;
pub use platform::{make_client, make_storage, navigate_external, page_origin, Client, Storage};

mod auth;
pub use auth::{use_auth, use_client_config, AuthContext, AuthProvider, FederatedLoginButton};

mod navbar;
pub use navbar::{LogoutButton, Navbar};

mod feedback;
pub use feedback::{Alert, Severity, Spinner};

mod guard;
pub use guard::RequireAuth;
