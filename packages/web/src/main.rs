use api::ClientConfig;
use dioxus::prelude::*;

use ui::AuthProvider;
use views::{Login, LoginSuccess, PrivateRoute, Profile, Register, Shell, Todos};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Shell)]
        #[route("/")]
        Root {},
        #[route("/login?:error")]
        Login { error: String },
        #[route("/login/success?:token&:refresh&:user")]
        LoginSuccess { token: String, refresh: String, user: String },
        #[route("/register")]
        Register {},
        #[layout(PrivateRoute)]
            #[route("/todos")]
            Todos {},
            #[route("/profile")]
            Profile {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");
const CONFIG: &str = include_str!("../todo.toml");

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

fn load_config() -> ClientConfig {
    match ClientConfig::from_toml(CONFIG) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("Invalid todo.toml, using defaults: {}", e);
            ClientConfig::default()
        }
    }
}

#[component]
fn App() -> Element {
    let config = use_hook(load_config);

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        AuthProvider {
            config: config,
            Router::<Route> {}
        }
    }
}

/// Redirect `/` to `/todos`
#[component]
fn Root() -> Element {
    let nav = use_navigator();
    use_effect(move || {
        nav.replace(Route::Todos {});
    });
    rsx! {}
}
