//! Session token store backed by localStorage.
//!
//! Presence of a non-empty access token is the only notion of "logged in"
//! on the client; a stale token shows up as a 401/403 from the API and is
//! handled by the page that made the call.

use web_sys::{window, Storage};

const ACCESS_TOKEN_KEY: &str = "access";
const REFRESH_TOKEN_KEY: &str = "refresh";

fn storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

/// The stored access token, if any. Empty strings count as absent.
pub fn token() -> Option<String> {
    storage()?
        .get_item(ACCESS_TOKEN_KEY)
        .ok()?
        .filter(|t| !t.is_empty())
}

/// True iff a non-empty access token is present in persistent storage.
pub fn is_authenticated() -> bool {
    token().is_some()
}

/// Persist the tokens returned by a successful login or signup.
pub fn store_tokens(access: &str, refresh: Option<&str>) {
    if let Some(storage) = storage() {
        if storage.set_item(ACCESS_TOKEN_KEY, access).is_err() {
            log::error!("Failed to persist access token");
        }
        if let Some(refresh) = refresh {
            if storage.set_item(REFRESH_TOKEN_KEY, refresh).is_err() {
                log::error!("Failed to persist refresh token");
            }
        }
    }
}

/// Clear the token and related persisted identifiers. No network side effect.
pub fn logout() {
    if let Some(storage) = storage() {
        let _ = storage.remove_item(ACCESS_TOKEN_KEY);
        let _ = storage.remove_item(REFRESH_TOKEN_KEY);
    }
    log::info!("Session cleared");
}
