//! # API crate: the client's boundary to the todo service
//!
//! Everything the views need to talk to the remote API and to keep track of
//! who is logged in. Nothing in here depends on the UI framework, so the
//! whole session lifecycle runs under plain `cargo test`.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`casing`] | Recursive key rewrite from wire casing (`first_name`) to client casing (`FirstName`) |
//! | [`client`] | [`ApiClient`] with the bearer-token and normalisation interceptors, the [`Transport`] seam and its `reqwest` implementation |
//! | [`config`] | [`ClientConfig`] loaded from `todo.toml` |
//! | [`error`] | [`ApiError`] taxonomy and server message extraction |
//! | [`models`] | Typed schemas: [`User`], [`Todo`], login/registration/profile bodies |
//! | [`session`] | [`SessionStore`] state machine backed by persistent storage |
//!
//! ## Endpoints
//!
//! | Method | Path | Client call |
//! |--------|------|-------------|
//! | POST | `/login` | [`ApiClient::login`] |
//! | POST | `/user` | [`ApiClient::register`] |
//! | PUT | `/user/:id` | [`ApiClient::update_user`] |
//! | GET | `/todos` | [`ApiClient::list_todos`] |
//! | POST | `/todos` | [`ApiClient::create_todo`] |
//! | PUT | `/todos/:id` | [`ApiClient::update_todo`] |
//! | DELETE | `/todos/:id` | [`ApiClient::delete_todo`] |

pub mod casing;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod session;

#[cfg(test)]
mod mock;

pub use client::{ApiClient, HttpRequest, HttpResponse, ReqwestTransport, Transport};
pub use config::ClientConfig;
pub use error::ApiError;
pub use models::{
    LoginRequest, LoginResponse, NewTodo, ProfileForm, RegisterRequest, Todo, TodoPatch, User,
};
pub use session::{SessionError, SessionPhase, SessionState, SessionStore};
