//! Backend base URLs.
//!
//! The console talks to two bases: the marketplace API and the auth service.
//! The server renders both into `<meta>` tags of the SSR shell and the
//! hydrated client reads them back with [`ApiConfig::detect`].

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";
pub const API_BASE_META: &str = "console-api-base";
pub const AUTH_BASE_META: &str = "console-auth-base";

/// Which backend a request targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ApiBase {
    Api,
    Auth,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    pub api_base_url: String,
    pub auth_base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL, DEFAULT_BASE_URL)
    }
}

impl ApiConfig {
    /// Build a config, trimming trailing slashes.
    #[must_use]
    pub fn new(api_base_url: &str, auth_base_url: &str) -> Self {
        Self {
            api_base_url: api_base_url.trim().trim_end_matches('/').to_owned(),
            auth_base_url: auth_base_url.trim().trim_end_matches('/').to_owned(),
        }
    }

    /// Absolute URL for `path` on `base`. Leading slashes on `path` are
    /// optional.
    #[must_use]
    pub fn url(&self, base: ApiBase, path: &str) -> String {
        let root = match base {
            ApiBase::Api => &self.api_base_url,
            ApiBase::Auth => &self.auth_base_url,
        };
        format!("{root}/{}", path.trim_start_matches('/'))
    }

    /// Read the base URLs the server rendered into the document head,
    /// falling back to [`DEFAULT_BASE_URL`].
    #[must_use]
    pub fn detect() -> Self {
        #[cfg(feature = "hydrate")]
        {
            let api = meta_content(API_BASE_META);
            let auth = meta_content(AUTH_BASE_META);
            let api = api.as_deref().unwrap_or(DEFAULT_BASE_URL);
            Self::new(api, auth.as_deref().unwrap_or(api))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Self::default()
        }
    }
}

#[cfg(feature = "hydrate")]
fn meta_content(name: &str) -> Option<String> {
    let doc = web_sys::window()?.document()?;
    let el = doc.query_selector(&format!("meta[name=\"{name}\"]")).ok().flatten()?;
    el.get_attribute("content").filter(|v| !v.trim().is_empty())
}
