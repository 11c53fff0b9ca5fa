// src/error.rs
use std::num::ParseIntError;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Transport failure or non-2xx status, for both the page GET and the webhook POST.
    /// `status` is set when the server answered.
    #[error("HTTP request to {url} failed: {reason}")]
    Http {
        url: String,
        status: Option<u16>,
        reason: String,
    },

    #[error("could not read response body from {url}: {source}")]
    Body {
        url: String,
        #[source]
        source: std::io::Error,
    },

    #[error("expansion key must not be empty")]
    EmptyExpansion,

    #[error("webhook url missing: set {0}")]
    MissingWebhook(&'static str),

    /// Marker line was found but the JSON literal inside it could not be located.
    #[error("{what}: marker found but embedded JSON could not be framed in line: {line}")]
    Framing { what: &'static str, line: String },

    /// JSON literal was located but is malformed or has the wrong shape.
    #[error("{what}: embedded JSON is malformed: {source}")]
    Payload {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("quest metadata key {key:?} is not an integer id")]
    QuestKey {
        key: String,
        #[source]
        source: ParseIntError,
    },
}

impl Error {
    /// ureq's own messages repeat the full request url, so only the status or
    /// transport kind is kept and `url` is whatever the caller chose to show.
    pub(crate) fn http(url: &str, source: ureq::Error) -> Self {
        let (status, reason) = match source {
            ureq::Error::Status(code, resp) => {
                (Some(code), format!("status {} {}", code, resp.status_text()))
            }
            ureq::Error::Transport(t) => match t.message() {
                Some(m) => (None, format!("{}: {}", t.kind(), m)),
                None => (None, t.kind().to_string()),
            },
        };
        Error::Http { url: s!(url), status, reason }
    }

    /// True for errors meaning the page format drifted under us.
    pub fn is_extraction(&self) -> bool {
        matches!(self, Error::Framing { .. } | Error::Payload { .. } | Error::QuestKey { .. })
    }
}
