mod error;
mod result;

use reqwest::Url;
use serde::de::DeserializeOwned;

use waifu_util::build_params;

pub use crate::error::Error;
use crate::error::Result;
pub use crate::result::*;

pub const BASE_URL: &str = "https://api.waifu.im";
pub const ACCEPT_VERSION: &str = "v4";

/// Client of the waifu.im API. Every request carries the `Accept-Version` header.
#[derive(Debug, Clone)]
pub struct ImClient {
    client: reqwest::Client,
    base_url: Url,
}

impl ImClient {
    pub fn new(client: reqwest::Client) -> Result<ImClient> {
        Self::with_base_url(client, BASE_URL)
    }

    /// Request paths are appended to the path of `base_url`, so a base like `http://host/api`
    /// sends requests to `http://host/api/...`.
    pub fn with_base_url(client: reqwest::Client, base_url: &str) -> Result<ImClient> {
        let base_url = Url::parse(base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(Error::InvalidUrl(base_url.to_string()));
        }
        Ok(ImClient { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Fetch all tags with their details.
    pub async fn tags(&self) -> Result<TagsResult> {
        let params = build_params! { required full => true };
        self.get(&["tags"], params).await
    }

    /// Search one random image with the tag.
    /// NOTE: The API filters on `is_nsfw`, not on safety, so callers pass the negation of "is SFW".
    pub async fn search(&self, included_tags: &str, is_nsfw: bool) -> Result<SearchResult> {
        let params = build_params! {
            required included_tags,
            required is_nsfw,
        };
        self.get(&["search"], params).await
    }
}

impl ImClient {
    async fn get<T, I>(&self, segments: &[&str], query: I) -> Result<T>
    where
        T: DeserializeOwned,
        I: IntoIterator<Item = (String, String)>,
    {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| Error::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        url.query_pairs_mut().extend_pairs(query);

        tracing::debug!("GET {}", url);
        let response = self
            .client
            .get(url)
            .header("Accept-Version", ACCEPT_VERSION)
            .send()
            .await?
            .error_for_status()?;
        let content = response.text().await?;

        log(&segments.join("_"), &content).await?;
        let result = serde_json::from_str::<T>(&content)?;
        Ok(result)
    }
}

async fn log(name: &str, content: &str) -> Result<()> {
    use std::path::PathBuf;
    use tokio::{fs::File, io::AsyncWriteExt};

    if let Ok(dir) = std::env::var("CLIENT_LOG_DIR") {
        let time = chrono::Local::now().format("%Y%m%d_%H%M%S");
        let filepath = PathBuf::from(dir).join(format!("waifuim_{}_{}.json", name, time));
        let mut file = File::create(filepath).await?;
        file.write_all(content.as_bytes()).await?;
    }
    Ok(())
}
