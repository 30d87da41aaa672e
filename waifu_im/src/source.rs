use async_trait::async_trait;

use im_client::ImClient;
use waifu_core::{Categories, ClientContext, Error, ImageSource, Result};

use crate::util::source_error;

/// Source backed by waifu.im.
#[derive(Debug, Clone)]
pub struct WaifuIm {
    ctx: ClientContext,
    client: ImClient,
    categories: Categories,
}

impl WaifuIm {
    pub fn new(ctx: &ClientContext) -> Result<Self> {
        let client = ImClient::new(ctx.http().clone()).map_err(source_error)?;
        Ok(Self::with_client(ctx, client))
    }

    /// Point the source at another host serving the same API.
    pub fn with_base_url(ctx: &ClientContext, base_url: &str) -> Result<Self> {
        let client = ImClient::with_base_url(ctx.http().clone(), base_url).map_err(source_error)?;
        Ok(Self::with_client(ctx, client))
    }

    fn with_client(ctx: &ClientContext, client: ImClient) -> Self {
        Self {
            ctx: ctx.clone(),
            client,
            categories: Categories::new(),
        }
    }
}

#[async_trait]
impl ImageSource for WaifuIm {
    fn name(&self) -> &'static str {
        "waifu.im"
    }

    fn base_url(&self) -> &str {
        self.client.base_url().as_str()
    }

    fn context(&self) -> &ClientContext {
        &self.ctx
    }

    fn categories(&self) -> &Categories {
        &self.categories
    }

    async fn populate_categories(&mut self) -> Result<()> {
        let result = self.client.tags().await.map_err(source_error)?;
        tracing::info!(
            "Found {} versatile and {} nsfw tags on {}",
            result.versatile.len(),
            result.nsfw.len(),
            self.name()
        );

        // Versatile tags work in both modes
        let versatile: Vec<String> = result.versatile.into_iter().map(|tag| tag.name).collect();
        self.categories.add_sfw(versatile.iter().cloned());
        self.categories.add_nsfw(versatile);
        self.categories.add_nsfw(result.nsfw.into_iter().map(|tag| tag.name));
        Ok(())
    }

    async fn get_image_url(&self, category: &str, is_sfw: bool) -> Result<String> {
        let result = self
            .client
            .search(category, !is_sfw)
            .await
            .map_err(source_error)?;
        result
            .images
            .into_iter()
            .next()
            .map(|image| image.url)
            .ok_or_else(|| Error::MissingData(format!("no image of `{}` on {}", category, self.name())))
    }
}

#[cfg(test)]
mod test {
    use std::collections::BTreeSet;

    use mockito::Matcher;

    use super::*;

    const TAGS: &str = r#"{
        "versatile": [
            {"tag_id": 12, "name": "maid", "description": "Cute womans or girl employed to do domestic work.", "is_nsfw": false},
            {"tag_id": 13, "name": "waifu", "description": "A female anime/manga character.", "is_nsfw": false}
        ],
        "nsfw": [
            {"tag_id": 9, "name": "ero", "description": "Any kind of erotic content.", "is_nsfw": true}
        ]
    }"#;

    async fn setup() -> (mockito::ServerGuard, ClientContext, WaifuIm) {
        let server = mockito::Server::new_async().await;
        let ctx = ClientContext::with_client(reqwest::Client::new());
        let source = WaifuIm::with_base_url(&ctx, &server.url()).unwrap();
        (server, ctx, source)
    }

    fn search_query(tag: &str, is_nsfw: &str) -> Matcher {
        Matcher::AllOf(vec![
            Matcher::UrlEncoded("included_tags".into(), tag.into()),
            Matcher::UrlEncoded("is_nsfw".into(), is_nsfw.into()),
        ])
    }

    #[test]
    fn test_default_base_url() {
        let ctx = ClientContext::with_client(reqwest::Client::new());
        let source = WaifuIm::new(&ctx).unwrap();
        assert_eq!(source.base_url(), "https://api.waifu.im/");
        assert_eq!(source.name(), "waifu.im");
    }

    #[tokio::test]
    async fn test_populate_categories() {
        let (mut server, _ctx, mut source) = setup().await;
        let mock = server
            .mock("GET", "/tags")
            .match_query(Matcher::UrlEncoded("full".into(), "true".into()))
            .match_header("accept-version", "v4")
            .with_status(200)
            .with_body(TAGS)
            .create_async()
            .await;

        source.populate_categories().await.unwrap();

        mock.assert_async().await;
        let sfw = BTreeSet::from(["maid".to_string(), "waifu".to_string()]);
        let nsfw = BTreeSet::from(["maid".to_string(), "waifu".to_string(), "ero".to_string()]);
        assert_eq!(source.categories().sfw, sfw);
        assert_eq!(source.categories().nsfw, nsfw);
    }

    #[tokio::test]
    async fn test_populate_categories_keeps_existing() {
        let (mut server, _ctx, mut source) = setup().await;
        let _mock = server
            .mock("GET", "/tags")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(TAGS)
            .create_async()
            .await;

        source.categories.add_nsfw(["oppai".to_string()]);
        source.populate_categories().await.unwrap();
        source.populate_categories().await.unwrap();

        assert_eq!(source.categories().sfw.len(), 2);
        assert_eq!(source.categories().nsfw.len(), 4);
        assert!(source.categories().contains("oppai", false));
    }

    #[tokio::test]
    async fn test_get_image_url_inverts_sfw() {
        let (mut server, _ctx, source) = setup().await;
        let sfw = server
            .mock("GET", "/search")
            .match_query(search_query("maid", "false"))
            .match_header("accept-version", "v4")
            .with_status(200)
            .with_body(r#"{"images": [{"url": "https://cdn.waifu.im/1.jpg"}, {"url": "https://cdn.waifu.im/2.jpg"}]}"#)
            .create_async()
            .await;
        let nsfw = server
            .mock("GET", "/search")
            .match_query(search_query("maid", "true"))
            .match_header("accept-version", "v4")
            .with_status(200)
            .with_body(r#"{"images": [{"url": "https://cdn.waifu.im/3.jpg"}]}"#)
            .create_async()
            .await;

        assert_eq!(source.get_image_url("maid", true).await.unwrap(), "https://cdn.waifu.im/1.jpg");
        assert_eq!(source.get_image_url("maid", false).await.unwrap(), "https://cdn.waifu.im/3.jpg");
        sfw.assert_async().await;
        nsfw.assert_async().await;
    }

    #[tokio::test]
    async fn test_get_image_url_no_images() {
        let (mut server, _ctx, source) = setup().await;
        let _mock = server
            .mock("GET", "/search")
            .match_query(search_query("maid", "true"))
            .with_status(200)
            .with_body(r#"{"images": []}"#)
            .create_async()
            .await;

        let result = source.get_image_url("maid", false).await;
        assert!(matches!(result, Err(Error::MissingData(_))));
    }

    #[tokio::test]
    async fn test_get_image_url_unknown_tag() {
        let (mut server, _ctx, source) = setup().await;
        let _mock = server
            .mock("GET", "/search")
            .match_query(Matcher::Any)
            .with_status(404)
            .with_body(r#"{"detail": "No image found matching the criteria given."}"#)
            .create_async()
            .await;

        let result = source.get_image_url("unknown", true).await;
        assert!(matches!(result, Err(Error::NetworkError(_))));
    }

    #[tokio::test]
    async fn test_fetch_image() {
        let (mut server, ctx, source) = setup().await;
        let image_url = format!("{}/1.jpg", server.url());
        let _search = server
            .mock("GET", "/search")
            .match_query(search_query("waifu", "false"))
            .with_status(200)
            .with_body(format!(r#"{{"images": [{{"url": "{}"}}]}}"#, image_url))
            .create_async()
            .await;
        let bytes = server
            .mock("GET", "/1.jpg")
            .with_status(200)
            .with_body(vec![0xFFu8, 0xD8, 0xFF])
            .expect(1)
            .create_async()
            .await;

        let image = source.fetch_image("waifu", true).await.unwrap();
        assert_eq!(image.data, vec![0xFF, 0xD8, 0xFF]);
        assert_eq!(image.category, "waifu");
        assert!(image.is_sfw);

        // Once the caller stores it, the same URL is served from history
        ctx.remember(image.clone()).await;
        let again = source.fetch_image("waifu", true).await.unwrap();
        assert_eq!(again, image);
        bytes.assert_async().await;

        assert_eq!(ctx.cached(&image_url).await, Some(again));
    }
}
