//! Fixed storage keys shared by the HTTP client and the session store.

/// Access token attached as a bearer credential to outgoing requests.
pub const TOKEN: &str = "token";

/// Refresh token, stored when the server hands one out.
pub const REFRESH_TOKEN: &str = "refreshToken";

/// JSON-serialised user record in client casing.
pub const USER: &str = "user";

/// Every key that belongs to a session.
pub const SESSION: [&str; 3] = [TOKEN, REFRESH_TOKEN, USER];
