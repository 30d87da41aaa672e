use async_trait::async_trait;

use pics_client::{Mode, PicsClient};
use waifu_core::{Categories, ClientContext, ImageSource, Result};

use crate::util::source_error;

/// Source backed by waifu.pics.
#[derive(Debug, Clone)]
pub struct WaifuPics {
    ctx: ClientContext,
    client: PicsClient,
    categories: Categories,
}

impl WaifuPics {
    pub fn new(ctx: &ClientContext) -> Result<Self> {
        let client = PicsClient::new(ctx.http().clone()).map_err(source_error)?;
        Ok(Self::with_client(ctx, client))
    }

    /// Point the source at another host serving the same API.
    pub fn with_base_url(ctx: &ClientContext, base_url: &str) -> Result<Self> {
        let client = PicsClient::with_base_url(ctx.http().clone(), base_url).map_err(source_error)?;
        Ok(Self::with_client(ctx, client))
    }

    fn with_client(ctx: &ClientContext, client: PicsClient) -> Self {
        Self {
            ctx: ctx.clone(),
            client,
            categories: Categories::new(),
        }
    }
}

#[async_trait]
impl ImageSource for WaifuPics {
    fn name(&self) -> &'static str {
        "waifu.pics"
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
        let result = self.client.endpoints().await.map_err(source_error)?;
        tracing::info!(
            "Found {} sfw and {} nsfw categories on {}",
            result.sfw.len(),
            result.nsfw.len(),
            self.name()
        );
        self.categories.add_sfw(result.sfw);
        self.categories.add_nsfw(result.nsfw);
        Ok(())
    }

    async fn get_image_url(&self, category: &str, is_sfw: bool) -> Result<String> {
        let result = self
            .client
            .image(Mode::from_sfw(is_sfw), category)
            .await
            .map_err(source_error)?;
        Ok(result.url)
    }
}
