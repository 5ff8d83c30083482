//! Client for the tournament organizer API.
//!
//! Every list endpoint is fetched as a single `Range` window. Results past the
//! end of that window are silently cut off by the API, the client only logs a
//! warning when a response fills its window completely.

use serde::Deserialize;

use crate::error::{AuthError, Error, UpstreamError};
use crate::upstream::{decode_json, TournamentSnapshot, TournamentSource};

mod model;
pub use model::*;

const TOKEN_PATH: &str = "/oauth/v2/token";
const ORGANIZER_PATH: &str = "/organizer/v2";
const SCOPE: &str = "organizer:view organizer:admin organizer:participant organizer:result";

/// The fixed `Range` window requested from a list endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub unit: &'static str,
    pub size: usize,
}

impl Window {
    pub const fn new(unit: &'static str, size: usize) -> Self {
        Self { unit, size }
    }

    pub fn header(&self) -> String {
        format!("{}=0-{}", self.unit, self.size.saturating_sub(1))
    }
}

pub const TOURNAMENTS: Window = Window::new("tournaments", 50);
pub const PARTICIPANTS: Window = Window::new("participants", 50);
pub const GROUPS: Window = Window::new("groups", 50);
pub const MATCHES: Window = Window::new("matches", 100);
pub const GAMES: Window = Window::new("games", 50);

pub struct Client {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    client_id: String,
    client_secret: String,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    expires_in: Option<i64>,
}

#[derive(Debug, Clone)]
pub struct AccessToken {
    value: String,
    expires_at: Option<chrono::DateTime<chrono::Utc>>,
}

/// An authenticated view on the [`Client`].
///
/// The token lives only as long as the session, a caller that holds on to a
/// session past [`Session::is_expired`] has to authenticate again itself.
pub struct Session<'c> {
    client: &'c Client,
    token: AccessToken,
}

impl Client {
    pub fn new<IS>(base_url: IS, api_key: IS, client_id: IS, client_secret: IS) -> Self
    where
        IS: Into<String>,
    {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_owned(),
            api_key: api_key.into(),
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        }
    }

    #[tracing::instrument(skip(self))]
    pub async fn authenticate(&self) -> Result<Session<'_>, AuthError> {
        let url = format!("{}{}", self.base_url, TOKEN_PATH);

        let response = self
            .http
            .post(&url)
            .form(&[
                ("grant_type", "client_credentials"),
                ("client_id", self.client_id.as_str()),
                ("client_secret", self.client_secret.as_str()),
                ("scope", SCOPE),
            ])
            .send()
            .await
            .map_err(AuthError::Transport)?;

        let status = response.status();
        let body = response.bytes().await.map_err(AuthError::Transport)?;
        if !status.is_success() {
            return Err(AuthError::Rejected {
                status: status.as_u16(),
                body: String::from_utf8_lossy(&body).into_owned(),
            });
        }

        let token: TokenResponse = serde_json::from_slice(&body).map_err(AuthError::MalformedToken)?;
        tracing::debug!(expires_in = ?token.expires_in, "Authenticated");

        Ok(Session {
            client: self,
            token: AccessToken {
                value: token.access_token,
                expires_at: token.expires_in.and_then(|secs| {
                    chrono::TimeDelta::try_seconds(secs).map(|delta| chrono::Utc::now() + delta)
                }),
            },
        })
    }
}

impl Session<'_> {
    pub fn is_expired(&self) -> bool {
        self.token
            .expires_at
            .map(|at| at <= chrono::Utc::now())
            .unwrap_or(false)
    }

    async fn get<T>(&self, path: &str, window: Option<Window>) -> Result<Vec<T>, UpstreamError>
    where
        T: serde::de::DeserializeOwned,
    {
        let url = format!("{}{}{}", self.client.base_url, ORGANIZER_PATH, path);

        let mut request = self
            .client
            .http
            .get(&url)
            .bearer_auth(&self.token.value)
            .header("X-Api-Key", &self.client.api_key);
        if let Some(window) = window {
            request = request.header(reqwest::header::RANGE, window.header());
        }

        let response = request
            .send()
            .await
            .map_err(|source| UpstreamError::Transport {
                url: url.clone(),
                source,
            })?;

        let items: Vec<T> = decode_json(&url, response).await?;

        if let Some(window) = window {
            if items.len() >= window.size {
                tracing::warn!(
                    %url,
                    window = window.size,
                    "Response filled the whole range window, later items are not fetched"
                );
            }
        }

        Ok(items)
    }

    #[tracing::instrument(skip(self))]
    pub async fn list_tournaments(&self) -> Result<Vec<Tournament>, UpstreamError> {
        self.get("/tournaments", Some(TOURNAMENTS)).await
    }

    #[tracing::instrument(skip(self))]
    pub async fn list_participants(&self, tournament_id: &str) -> Result<Vec<Participant>, UpstreamError> {
        self.get(
            &format!("/tournaments/{}/participants", tournament_id),
            Some(PARTICIPANTS),
        )
        .await
    }

    #[tracing::instrument(skip(self))]
    pub async fn list_groups(&self, tournament_id: &str) -> Result<Vec<Group>, UpstreamError> {
        self.get(&format!("/tournaments/{}/groups", tournament_id), Some(GROUPS))
            .await
    }

    /// Stages are requested without a range, the API applies its own default.
    #[tracing::instrument(skip(self))]
    pub async fn list_stages(&self, tournament_id: &str) -> Result<Vec<Stage>, UpstreamError> {
        self.get(&format!("/tournaments/{}/stages", tournament_id), None)
            .await
    }

    #[tracing::instrument(skip(self))]
    pub async fn list_matches(&self, tournament_id: &str) -> Result<Vec<Match>, UpstreamError> {
        self.get(&format!("/tournaments/{}/matches", tournament_id), Some(MATCHES))
            .await
    }

    #[tracing::instrument(skip(self))]
    pub async fn list_match_games(
        &self,
        tournament_id: &str,
        match_id: &str,
    ) -> Result<Vec<MatchGame>, UpstreamError> {
        self.get(
            &format!("/tournaments/{}/matches/{}/games", tournament_id, match_id),
            Some(GAMES),
        )
        .await
    }
}

#[async_trait::async_trait]
impl TournamentSource for Client {
    async fn snapshot(&self, tournament_id: &str) -> Result<TournamentSnapshot, Error> {
        let session = self.authenticate().await?;

        let participants = session.list_participants(tournament_id).await?;
        let matches = session.list_matches(tournament_id).await?;

        Ok(TournamentSnapshot {
            participants,
            matches,
        })
    }
}
