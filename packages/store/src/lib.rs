//! Client-side persistent storage for session credentials.
//!
//! The browser build persists into `window.localStorage`; everything else
//! (tests, native dev builds) uses the process-local [`MemoryStore`].

pub mod keys;
pub mod kv;

mod memory;
pub use memory::MemoryStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local::LocalStore;

pub use kv::KeyValueStore;
