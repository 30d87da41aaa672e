mod error;
mod result;

use reqwest::Url;
use serde::de::DeserializeOwned;

pub use crate::error::Error;
use crate::error::Result;
pub use crate::result::*;

pub const BASE_URL: &str = "https://api.waifu.pics";

/// Client of the waifu.pics API. Cloning is cheap, the underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct PicsClient {
    client: reqwest::Client,
    base_url: Url,
}

impl PicsClient {
    pub fn new(client: reqwest::Client) -> Result<PicsClient> {
        Self::with_base_url(client, BASE_URL)
    }

    /// Request paths are appended to the path of `base_url`, so a base like `http://host/api`
    /// sends requests to `http://host/api/...`.
    pub fn with_base_url(client: reqwest::Client, base_url: &str) -> Result<PicsClient> {
        let base_url = Url::parse(base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(Error::InvalidUrl(base_url.to_string()));
        }
        Ok(PicsClient { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Fetch the available categories of both modes.
    pub async fn endpoints(&self) -> Result<EndpointsResult> {
        self.get(&["endpoints"]).await
    }

    /// Fetch one random image of the category.
    pub async fn image(&self, mode: Mode, category: &str) -> Result<ImageResult> {
        let mode = mode.to_string();
        self.get(&[mode.as_str(), category]).await
    }
}

impl PicsClient {
    async fn get<T>(&self, segments: &[&str]) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| Error::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);

        tracing::debug!("GET {}", url);
        let response = self.client.get(url).send().await?.error_for_status()?;
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
        let filepath = PathBuf::from(dir).join(format!("waifupics_{}_{}.json", name, time));
        let mut file = File::create(filepath).await?;
        file.write_all(content.as_bytes()).await?;
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_mode() {
        assert_eq!(Mode::from_sfw(true), Mode::Sfw);
        assert_eq!(Mode::from_sfw(false), Mode::Nsfw);
        assert_eq!(Mode::Sfw.to_string(), "sfw");
        assert_eq!(Mode::Nsfw.to_string(), "nsfw");
    }

    #[tokio::test]
    async fn test_endpoints() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/endpoints")
            .with_status(200)
            .with_body(r#"{"sfw":["waifu","neko"],"nsfw":["waifu"]}"#)
            .create_async()
            .await;

        let client = PicsClient::with_base_url(reqwest::Client::new(), &server.url()).unwrap();
        let result = client.endpoints().await.unwrap();

        mock.assert_async().await;
        assert_eq!(result.sfw, vec!["waifu", "neko"]);
        assert_eq!(result.nsfw, vec!["waifu"]);
    }

    #[tokio::test]
    async fn test_image_path() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/nsfw/neko")
            .with_status(200)
            .with_body(r#"{"url":"https://i.waifu.pics/x.jpg"}"#)
            .create_async()
            .await;

        let client = PicsClient::with_base_url(reqwest::Client::new(), &server.url()).unwrap();
        let result = client.image(Mode::Nsfw, "neko").await.unwrap();

        mock.assert_async().await;
        assert_eq!(result.url, "https://i.waifu.pics/x.jpg");
    }

    #[tokio::test]
    async fn test_base_url_with_path() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api/sfw/waifu")
            .with_status(200)
            .with_body(r#"{"url":"https://i.waifu.pics/y.png"}"#)
            .create_async()
            .await;

        let base_url = format!("{}/api", server.url());
        let client = PicsClient::with_base_url(reqwest::Client::new(), &base_url).unwrap();
        let result = client.image(Mode::Sfw, "waifu").await.unwrap();

        mock.assert_async().await;
        assert_eq!(result.url, "https://i.waifu.pics/y.png");
    }

    #[test]
    fn test_base_url_rejected() {
        let result = PicsClient::with_base_url(reqwest::Client::new(), "mailto:waifu@example.com");
        assert!(matches!(result, Err(Error::InvalidUrl(_))));
    }

    #[tokio::test]
    async fn test_malformed_body() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/endpoints")
            .with_status(200)
            .with_body("<html>")
            .create_async()
            .await;

        let client = PicsClient::with_base_url(reqwest::Client::new(), &server.url()).unwrap();
        let result = client.endpoints().await;
        assert!(matches!(result, Err(Error::JSONError(_))));
    }
}
