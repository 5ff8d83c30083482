//! Error kinds that can end a reload or an API request.
//!
//! Each of the three kinds stays distinguishable all the way into the task
//! status log, see [`Error::record`].

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

/// Exchanging the client credentials for an access token failed.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Credential exchange rejected with status {status}: {body}")]
    Rejected { status: u16, body: String },
    #[error("Token response could not be decoded")]
    MalformedToken(#[source] serde_json::Error),
    #[error("Sending credential exchange")]
    Transport(#[source] reqwest::Error),
}

/// An upstream API answered with something other than the expected JSON.
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("{url} responded with status {status}")]
    Status { url: String, status: u16 },
    #[error("Decoding response from {url}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("Requesting {url}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("Connecting to database")]
    Connection(#[from] diesel::ConnectionError),
    #[error("Running statement")]
    Query(#[from] diesel::result::Error),
    #[error("Sequence {sequence} returned {got} values, expected {expected}")]
    Sequence {
        sequence: &'static str,
        expected: usize,
        got: usize,
    },
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Auth(#[from] AuthError),
    #[error(transparent)]
    Upstream(#[from] UpstreamError),
    #[error(transparent)]
    Database(#[from] DatabaseError),
}

impl From<diesel::result::Error> for Error {
    fn from(value: diesel::result::Error) -> Self {
        Self::Database(value.into())
    }
}

impl Error {
    pub fn kind(&self) -> common::ErrorKind {
        match self {
            Self::Auth(_) => common::ErrorKind::Auth,
            Self::Upstream(_) => common::ErrorKind::Upstream,
            Self::Database(_) => common::ErrorKind::Database,
        }
    }

    /// The error with its full cause chain, in the shape stored in the
    /// task status log.
    pub fn record(&self) -> common::ErrorRecord {
        let mut causes = Vec::new();
        let mut current = std::error::Error::source(self);
        while let Some(cause) = current {
            causes.push(cause.to_string());
            current = cause.source();
        }

        common::ErrorRecord {
            kind: self.kind(),
            message: self.to_string(),
            causes,
        }
    }

    /// Single line version of [`Error::record`], `message: cause: cause`.
    pub fn detail(&self) -> String {
        let record = self.record();
        std::iter::once(record.message)
            .chain(record.causes)
            .collect::<Vec<_>>()
            .join(": ")
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = match self.kind() {
            common::ErrorKind::Auth | common::ErrorKind::Upstream => StatusCode::BAD_GATEWAY,
            common::ErrorKind::Database => StatusCode::INTERNAL_SERVER_ERROR,
        };

        tracing::error!("Request failed: {}", self.detail());

        (status, Json(self.record())).into_response()
    }
}
