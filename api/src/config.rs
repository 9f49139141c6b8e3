//! Client configuration.
//!
//! Values come from the environment: `option_env!` at compile time (the only
//! option on wasm), with a runtime override on native targets.
//!
//! | Variable                     | Meaning                              | Default                        |
//! |------------------------------|--------------------------------------|--------------------------------|
//! | `SANCTIONS_API_URL`          | API root, joined with request paths  | `http://localhost:8000/api/`   |
//! | `SANCTIONS_API_TIMEOUT_SECS` | request timeout, `0` disables it     | `30`                           |
//! | `SANCTIONS_PROJECT_TOKEN`    | static project token (native only)   | unset                          |

use std::time::Duration;

use reqwest::Url;

use crate::token::TokenSource;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api/";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const BASE_URL_VAR: &str = "SANCTIONS_API_URL";
const TIMEOUT_VAR: &str = "SANCTIONS_API_TIMEOUT_SECS";
const TOKEN_VAR: &str = "SANCTIONS_PROJECT_TOKEN";

#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Always ends with `/` so relative request paths join under it.
    pub base_url: Url,
    /// `None` lets a request wait forever.
    pub timeout: Option<Duration>,
    pub token: TokenSource,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout: Some(DEFAULT_TIMEOUT),
            token: TokenSource::default(),
        }
    }
}

impl ApiConfig {
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(raw) = lookup(BASE_URL_VAR, option_env!("SANCTIONS_API_URL")) {
            match parse_base_url(&raw) {
                Some(url) => config.base_url = url,
                None => tracing::warn!(
                    value = %raw,
                    "ignoring invalid {BASE_URL_VAR}; using {DEFAULT_BASE_URL}"
                ),
            }
        }

        if let Some(raw) = lookup(TIMEOUT_VAR, option_env!("SANCTIONS_API_TIMEOUT_SECS")) {
            match raw.trim().parse::<u64>() {
                Ok(0) => config.timeout = None,
                Ok(secs) => config.timeout = Some(Duration::from_secs(secs)),
                Err(_) => tracing::warn!(value = %raw, "ignoring invalid {TIMEOUT_VAR}"),
            }
        }

        if let Some(token) = lookup(TOKEN_VAR, None) {
            config.token = TokenSource::Static(token);
        }

        config
    }

    pub fn with_base_url(mut self, raw: &str) -> Option<Self> {
        self.base_url = parse_base_url(raw)?;
        Some(self)
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_token(mut self, token: TokenSource) -> Self {
        self.token = token;
        self
    }
}

/// Parse an API root, appending the trailing slash `Url::join` needs.
pub fn parse_base_url(raw: &str) -> Option<Url> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    let normalized = if raw.ends_with('/') {
        raw.to_string()
    } else {
        format!("{raw}/")
    };
    Url::parse(&normalized).ok()
}

fn default_base_url() -> Url {
    Url::parse(DEFAULT_BASE_URL).expect("default base url is valid")
}

#[cfg(not(target_arch = "wasm32"))]
fn lookup(var: &str, compiled: Option<&'static str>) -> Option<String> {
    std::env::var(var)
        .ok()
        .or_else(|| compiled.map(str::to_string))
}

#[cfg(target_arch = "wasm32")]
fn lookup(_var: &str, compiled: Option<&'static str>) -> Option<String> {
    compiled.map(str::to_string)
}
