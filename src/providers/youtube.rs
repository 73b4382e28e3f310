use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde::Deserialize;

use crate::config::VideoApiConfig;
use crate::error::Error;
use crate::model::VideoCandidate;
use crate::providers::VideoProvider;

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    items: Vec<SearchItem>,
}

#[derive(Debug, Deserialize)]
struct SearchItem {
    id: ItemId,
    snippet: Snippet,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ItemId {
    video_id: String,
}

#[derive(Debug, Deserialize)]
struct Snippet {
    title: String,
}

/// Client for the YouTube Data API search endpoint
pub struct YouTubeClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl YouTubeClient {
    /// Create a new client from configuration, or `None` when no API
    /// key is configured. An absent key means video lookup is skipped,
    /// not that construction failed.
    pub fn from_config(config: &VideoApiConfig) -> Result<Option<Self>, Error> {
        let api_key = config
            .api_key
            .clone()
            .or_else(|| std::env::var("YOUTUBE_API_KEY").ok());
        Self::from_resolved_key(api_key, config)
    }

    fn from_resolved_key(
        api_key: Option<String>,
        config: &VideoApiConfig,
    ) -> Result<Option<Self>, Error> {
        let api_key = match api_key {
            Some(key) => key,
            None => {
                debug!("no youtube api key configured, video lookup disabled");
                return Ok(None);
            }
        };

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .user_agent("recipe-relay/0.1")
            .build()?;

        Ok(Some(YouTubeClient {
            client,
            api_key,
            base_url: config.base_url.clone(),
        }))
    }

    #[doc(hidden)]
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        YouTubeClient {
            client: Client::new(),
            api_key,
            base_url,
        }
    }
}

#[async_trait]
impl VideoProvider for YouTubeClient {
    fn provider_name(&self) -> &str {
        "youtube"
    }

    async fn search(&self, query: &str, limit: u32) -> Result<Vec<VideoCandidate>, Error> {
        let response = self
            .client
            .get(format!("{}/youtube/v3/search", self.base_url))
            .query(&[
                ("part", "snippet"),
                ("q", query),
                ("type", "video"),
                ("videoDuration", "medium"),
                ("videoEmbeddable", "true"),
            ])
            .query(&[("maxResults", limit.to_string())])
            .query(&[("key", self.api_key.as_str())])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Error::Provider(format!(
                "youtube returned status {}",
                response.status()
            )));
        }

        let body: SearchResponse = response.json().await?;
        let candidates = body
            .items
            .into_iter()
            .map(|item| VideoCandidate {
                id: item.id.video_id,
                title: item.snippet.title,
            })
            .collect::<Vec<_>>();
        debug!("youtube search returned {} candidates", candidates.len());
        Ok(candidates)
    }
}
