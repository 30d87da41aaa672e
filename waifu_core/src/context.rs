use tokio::sync::RwLock;

use std::collections::HashMap;
use std::sync::Arc;

use crate::error::Result;
use crate::image::ImageData;

/// State shared by all sources: the HTTP client and the history of fetched images.
/// Cloning is cheap, all clones refer to the same client and history.
#[derive(Debug, Clone)]
pub struct ClientContext {
    http: reqwest::Client,
    /// url -> ImageData, never evicted
    history: Arc<RwLock<HashMap<String, ImageData>>>,
}

impl ClientContext {
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self::with_client(client))
    }

    pub fn with_client(http: reqwest::Client) -> Self {
        Self {
            http,
            history: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub fn http(&self) -> &reqwest::Client {
        &self.http
    }

    /// Look up a previously fetched image by URL.
    pub async fn cached(&self, url: &str) -> Option<ImageData> {
        self.history.read().await.get(url).cloned()
    }

    /// Store a fetched image in the history.
    /// The first record of a URL wins, returns whether the image was inserted.
    pub async fn remember(&self, image: ImageData) -> bool {
        let mut history = self.history.write().await;
        if history.contains_key(&image.url) {
            return false;
        }
        tracing::debug!("Remember {} ({} bytes) in history", image.url, image.data.len());
        history.insert(image.url.clone(), image);
        true
    }

    /// Snapshot of all images in the history, in no particular order.
    pub async fn history(&self) -> Vec<ImageData> {
        self.history.read().await.values().cloned().collect()
    }

    pub async fn history_len(&self) -> usize {
        self.history.read().await.len()
    }
}
