use std::error::Error as _;

use thiserror::Error;

use crate::models::ResourceKind;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("{}", with_causes(.0))]
    Network(#[from] reqwest::Error),
    #[error("Failed to fetch {kind}")]
    Status {
        kind: ResourceKind,
        status: reqwest::StatusCode,
    },
    #[error("malformed JSON in {kind} response: {source}")]
    Parse {
        kind: ResourceKind,
        #[source]
        source: serde_json::Error,
    },
    #[error("unexpected {kind} response shape: {source}")]
    Schema {
        kind: ResourceKind,
        #[source]
        source: serde_json::Error,
    },
}

/// reqwest leaves the underlying cause (timeout, refused connection) out of
/// its own message.
fn with_causes(err: &reqwest::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let cause_text = cause.to_string();
        if !message.contains(&cause_text) {
            message.push_str(": ");
            message.push_str(&cause_text);
        }
        source = cause.source();
    }
    message
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("config parsing error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid API base URL {url:?}: {source}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
    #[error("no configuration directory available")]
    NoConfigDir,
}
