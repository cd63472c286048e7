use std::fmt;
use std::sync::Arc;

use crate::clock::{Clock, SystemClock};
use crate::error::SitemapError;

pub const DEFAULT_SITE_URL: &str = "https://poludev.com";

/// Locale whose blog URLs use a post's Turkish slug.
pub const TURKISH: &str = "tr";

const SITE_URL_KEYS: &[&str] = &["SITE_URL"];
const STORE_URL_KEYS: &[&str] = &["SUPABASE_URL", "VITE_SUPABASE_URL"];
const STORE_KEY_KEYS: &[&str] = &["SUPABASE_ANON_KEY", "VITE_SUPABASE_ANON_KEY"];
const CV_PAGES_KEYS: &[&str] = &["SITE_CV_PAGES"];

/// A site locale and the path prefix its pages live under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locale {
    pub tag: String,
    pub prefix: String,
}

impl Locale {
    pub fn new(tag: &str, prefix: &str) -> Self {
        Locale {
            tag: tag.to_string(),
            prefix: prefix.trim_end_matches('/').to_string(),
        }
    }

    /// `/about` -> `/tr/about`; the home page maps to the bare prefix.
    pub fn localize(&self, path: &str) -> String {
        if self.prefix.is_empty() {
            return path.to_string();
        }
        if path.is_empty() || path == "/" {
            return self.prefix.clone();
        }
        format!("{}{}", self.prefix, path)
    }
}

/// English at the root, Turkish under `/tr`.
pub fn default_locales() -> Vec<Locale> {
    vec![Locale::new("en", ""), Locale::new(TURKISH, "/tr")]
}

/// Everything a sitemap generation needs, passed in at call time.
#[derive(Clone)]
pub struct SitemapConfig {
    pub site_url: String,
    pub store_url: Option<String>,
    pub store_key: Option<String>,
    pub locales: Vec<Locale>,
    pub cv_pages: Vec<String>,
    pub clock: Arc<dyn Clock>,
}

impl fmt::Debug for SitemapConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SitemapConfig")
            .field("site_url", &self.site_url)
            .field("store_url", &self.store_url)
            .field("store_key", &self.store_key.as_ref().map(|_| "<redacted>"))
            .field("locales", &self.locales)
            .field("cv_pages", &self.cv_pages)
            .finish()
    }
}

impl SitemapConfig {
    pub fn new(site_url: impl Into<String>) -> Self {
        SitemapConfig {
            site_url: site_url.into(),
            store_url: None,
            store_key: None,
            locales: default_locales(),
            cv_pages: Vec::new(),
            clock: Arc::new(SystemClock),
        }
    }

    pub fn with_store(mut self, url: impl Into<String>, key: impl Into<String>) -> Self {
        self.store_url = Some(url.into());
        self.store_key = Some(key.into());
        self
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_cv_pages(mut self, pages: Vec<String>) -> Self {
        self.cv_pages = pages;
        self
    }

    /// Load from the process environment (and a `.env` file if present).
    pub fn from_env() -> Self {
        if let Ok(path) = dotenvy::dotenv() {
            log::debug!("Loaded environment from {}", path.display());
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let first = |keys: &[&str]| {
            keys.iter()
                .filter_map(|key| lookup(key))
                .map(|v| v.trim().to_string())
                .find(|v| !v.is_empty())
        };

        let mut config =
            SitemapConfig::new(first(SITE_URL_KEYS).unwrap_or_else(|| DEFAULT_SITE_URL.to_string()));
        config.store_url = first(STORE_URL_KEYS);
        config.store_key = first(STORE_KEY_KEYS);
        config.cv_pages = first(CV_PAGES_KEYS)
            .map(|raw| parse_paths(&raw))
            .unwrap_or_default();
        config
    }

    /// Base URL without a trailing slash.
    pub fn site_url(&self) -> &str {
        self.site_url.trim_end_matches('/')
    }

    pub fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.site_url(), path)
    }

    /// Store endpoint and key; generation cannot start without both.
    pub fn store_credentials(&self) -> Result<(&str, &str), SitemapError> {
        let url = self
            .store_url
            .as_deref()
            .filter(|v| !v.is_empty())
            .ok_or(SitemapError::MissingCredentials("SUPABASE_URL"))?;
        let key = self
            .store_key
            .as_deref()
            .filter(|v| !v.is_empty())
            .ok_or(SitemapError::MissingCredentials("SUPABASE_ANON_KEY"))?;
        Ok((url, key))
    }
}

/// Comma-separated paths, each forced to start with `/`.
fn parse_paths(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(|p| {
            if p.starts_with('/') {
                p.to_string()
            } else {
                format!("/{}", p)
            }
        })
        .collect()
}
