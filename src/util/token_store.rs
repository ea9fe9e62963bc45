//! Bearer token persistence in `localStorage`.
//!
//! One well-known key holds the current session token. `save` overwrites
//! any prior value, `load` returns it if present, `clear` removes it on
//! logout. Requires a browser environment; storage failures are
//! non-fatal so a blocked-storage browser still gets an in-memory
//! session for the current page load.

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "token";

/// Persist the session token, overwriting any prior value.
pub fn save(token: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(STORAGE_KEY, token);
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
    }
}

/// Read the stored session token, if any.
pub fn load() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let window = web_sys::window()?;
        let storage = window.local_storage().ok()??;
        storage.get_item(STORAGE_KEY).ok()?
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Remove the stored session token.
pub fn clear() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.remove_item(STORAGE_KEY);
            }
        }
    }
}
