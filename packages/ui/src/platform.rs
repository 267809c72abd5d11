//! Platform constructors for storage and the API client.
//!
//! - **Web** (WASM + `web` feature): `window.localStorage` via [`store::LocalStore`]
//! - **Everything else**: process-local [`store::MemoryStore`]

use api::{ApiClient, ClientConfig, ReqwestTransport};

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type Storage = store::LocalStore;
#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
pub type Storage = store::MemoryStore;

/// The client every view uses.
pub type Client = ApiClient<ReqwestTransport, Storage>;

/// Create the platform-appropriate persistent store.
pub fn make_storage() -> Storage {
    Storage::new()
}

/// Create the API client, resolving a relative base URL against the page.
pub fn make_client(config: &ClientConfig, storage: Storage) -> Client {
    let base_url = config.resolved_base_url(page_origin().as_deref());
    tracing::debug!(%base_url, "api client configured");
    ApiClient::new(ReqwestTransport::new(), storage, base_url)
}

/// Origin of the current page (`https://host:port`), when running in a browser.
pub fn page_origin() -> Option<String> {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()?.location().origin().ok()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

/// Send the browser to a URL outside the router (full page load).
pub fn navigate_external(url: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().set_href(url) {
                tracing::error!("Failed to navigate to {}: {:?}", url, e);
            }
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::warn!("External navigation to {} is only supported in the browser", url);
    }
}
