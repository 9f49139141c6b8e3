//! Project-scoped authorization token lookup.
//!
//! The backend expects the token of the currently selected project on every
//! dataset request. Where it comes from depends on the platform: the browser
//! keeps it in `localStorage`, native builds read it from the environment.

/// Header carrying the project token.
pub const PROJECT_TOKEN_HEADER: &str = "Project-Token";

/// `localStorage` key written by the login flow.
pub const DEFAULT_STORAGE_KEY: &str = "projectToken";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenSource {
    /// Send requests without a token.
    None,
    /// Fixed token captured at startup.
    Static(String),
    /// Read from browser `localStorage` under the given key on every request.
    LocalStorage(String),
}

impl TokenSource {
    /// Resolve the token for the next request. Blank tokens count as missing.
    pub fn resolve(&self) -> Option<String> {
        let token = match self {
            Self::None => None,
            Self::Static(token) => Some(token.clone()),
            Self::LocalStorage(key) => read_local_storage(key),
        }?;
        let token = token.trim();
        (!token.is_empty()).then(|| token.to_string())
    }
}

impl Default for TokenSource {
    fn default() -> Self {
        if cfg!(target_arch = "wasm32") {
            Self::LocalStorage(DEFAULT_STORAGE_KEY.to_string())
        } else {
            Self::None
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn read_local_storage(key: &str) -> Option<String> {
    let storage = web_sys::window()?.local_storage().ok()??;
    storage.get_item(key).ok()?
}

#[cfg(not(target_arch = "wasm32"))]
fn read_local_storage(_key: &str) -> Option<String> {
    None
}
