// The abstract image source interface for all backends.
// A source resolves a category to a random image URL and downloads it.

use async_trait::async_trait;

use crate::context::ClientContext;
use crate::error::{Error, Result};
use crate::image::{Categories, ImageData};

/// An image source is a third-party API serving random images by category, like waifu.pics.
/// Each backend implements this trait, and all sources of an app share one `ClientContext`.
#[async_trait]
pub trait ImageSource: Send + Sync {
    /// Stable identifier of the source.
    fn name(&self) -> &'static str;

    fn base_url(&self) -> &str;

    fn context(&self) -> &ClientContext;

    /// Categories known so far, empty before `populate_categories`.
    fn categories(&self) -> &Categories;

    /// Fetch the category taxonomy from the backend and add it to `categories`.
    /// Existing entries are never removed.
    async fn populate_categories(&mut self) -> Result<()>;

    /// Resolve a category to the URL of one random image.
    /// The category is not validated, an unknown one fails the way the backend makes it fail.
    async fn get_image_url(&self, category: &str, is_sfw: bool) -> Result<String>;

    /// Resolve an image URL and download it, unless it is already in the history.
    async fn fetch_image(&self, category: &str, is_sfw: bool) -> Result<ImageData> {
        let url = self.get_image_url(category, is_sfw).await?;
        fetch_image_data(self.context(), url, category, is_sfw).await
    }
}

/// Build the image of a resolved URL.
/// A URL already in the history returns the stored record as is, whatever category it was stored with,
/// and sends no request. The result is never written to the history here.
pub async fn fetch_image_data(ctx: &ClientContext, url: String, category: &str, is_sfw: bool) -> Result<ImageData> {
    if let Some(image) = ctx.cached(&url).await {
        tracing::debug!("History hit for {}", url);
        return Ok(image);
    }

    let data = waifu_download::fetch_bytes(ctx.http(), &url)
        .await
        .map_err(|err| match err {
            waifu_download::Error::NetworkError(err) => Error::NetworkError(err),
            err => Error::DownloadError(err),
        })?;
    tracing::info!("Fetched {} bytes of {} image from {}", data.len(), category, url);
    Ok(ImageData {
        url,
        category: category.to_string(),
        is_sfw,
        data,
    })
}
