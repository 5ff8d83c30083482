//! Client for the replay statistics API.

use crate::error::{Error, UpstreamError};
use crate::upstream::{decode_json, ReplaySnapshot, ReplaySource};

mod model;
pub use model::*;

pub struct Client {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl Client {
    pub fn new<IS>(base_url: IS, api_key: IS) -> Self
    where
        IS: Into<String>,
    {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_owned(),
            api_key: api_key.into(),
        }
    }

    async fn get<T>(&self, path: &str, args: &[(&str, &str)]) -> Result<T, UpstreamError>
    where
        T: serde::de::DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);

        let response = self
            .http
            .get(&url)
            .header(reqwest::header::AUTHORIZATION, &self.api_key)
            .query(args)
            .send()
            .await
            .map_err(|source| UpstreamError::Transport {
                url: url.clone(),
                source,
            })?;

        decode_json(&url, response).await
    }

    #[tracing::instrument(skip(self))]
    pub async fn get_group(&self, group_id: &str) -> Result<ReplayGroup, UpstreamError> {
        self.get(&format!("/groups/{}", group_id), &[]).await
    }

    /// Loads every direct child of `parent_id`, oldest first.
    ///
    /// The listing only contains summaries, so every child is fetched on its
    /// own afterwards, one request at a time.
    #[tracing::instrument(skip(self))]
    pub async fn get_group_children(&self, parent_id: &str) -> Result<Vec<ReplayGroup>, UpstreamError> {
        let listing: GroupListing = self
            .get(
                "/groups",
                &[
                    ("group", parent_id),
                    ("sort-by", "created"),
                    ("sort-dir", "asc"),
                ],
            )
            .await?;

        tracing::debug!("Found {} child groups", listing.list.len());

        let mut children = Vec::with_capacity(listing.list.len());
        for summary in listing.list {
            children.push(self.get_group(&summary.id).await?);
        }

        Ok(children)
    }
}

#[async_trait::async_trait]
impl ReplaySource for Client {
    async fn snapshot(&self, group_id: &str) -> Result<ReplaySnapshot, Error> {
        let root = self.get_group(group_id).await?;
        let children = self.get_group_children(group_id).await?;

        Ok(ReplaySnapshot { root, children })
    }
}
