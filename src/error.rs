use thiserror::Error;

/// Failures talking to the hosted table store.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("store request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("store returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("store response could not be decoded: {0}")]
    Decode(String),
}

/// Errors raised while building a sitemap.
///
/// Only `MissingCredentials` and `Io` ever reach an adapter. Store failures
/// and per-record problems are absorbed by the assembler and logged.
#[derive(Error, Debug)]
pub enum SitemapError {
    #[error("missing store credentials: {0} is not set")]
    MissingCredentials(&'static str),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("invalid date value: {value:?}")]
    InvalidDate { value: String },

    #[error("malformed record: {0}")]
    MalformedRecord(String),

    #[error("failed to write {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl SitemapError {
    pub fn io<P: Into<String>>(path: P, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type SitemapResult<T> = Result<T, SitemapError>;
