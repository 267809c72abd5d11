//! Typed request and response schemas for every endpoint.
//!
//! Response types deserialise from client casing (see [`crate::casing`]);
//! request types serialise with the key names the server binds on.

mod auth;
pub mod todo;
mod user;

pub use auth::{LoginRequest, LoginResponse, ProfileForm, RegisterRequest};
pub use todo::{NewTodo, Todo, TodoList, TodoPatch};
pub use user::User;
