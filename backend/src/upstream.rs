//! The seam between the reload orchestrator and the two upstream APIs.

use crate::error::{Error, UpstreamError};

/// Everything the tournament reload needs from the tournament API.
#[derive(Debug, Clone, PartialEq)]
pub struct TournamentSnapshot {
    pub participants: Vec<crate::toornament_api::Participant>,
    pub matches: Vec<crate::toornament_api::Match>,
}

/// A replay group together with its direct children, in creation order.
#[derive(Debug, Clone, PartialEq)]
pub struct ReplaySnapshot {
    pub root: crate::ballchasing_api::ReplayGroup,
    pub children: Vec<crate::ballchasing_api::ReplayGroup>,
}

#[async_trait::async_trait]
pub trait TournamentSource: Send + Sync {
    async fn snapshot(&self, tournament_id: &str) -> Result<TournamentSnapshot, Error>;
}

#[async_trait::async_trait]
pub trait ReplaySource: Send + Sync {
    async fn snapshot(&self, group_id: &str) -> Result<ReplaySnapshot, Error>;
}

/// Checks the status and decodes the body of an upstream response.
pub(crate) async fn decode_json<T>(url: &str, response: reqwest::Response) -> Result<T, UpstreamError>
where
    T: serde::de::DeserializeOwned,
{
    let status = response.status();
    if !status.is_success() {
        tracing::error!(%url, %status, "Upstream responded with error status");
        return Err(UpstreamError::Status {
            url: url.to_owned(),
            status: status.as_u16(),
        });
    }

    let body = response.bytes().await.map_err(|source| UpstreamError::Transport {
        url: url.to_owned(),
        source,
    })?;

    serde_json::from_slice(&body).map_err(|source| UpstreamError::Decode {
        url: url.to_owned(),
        source,
    })
}
