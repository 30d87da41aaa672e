use serde::Serialize;

use std::collections::BTreeSet;

use waifu_core::{ImageData, ImageSource};
use waifu_download::LocalImage;

/// A unified app response of a source.
#[derive(Debug, Clone, Serialize)]
pub struct SourceView {
    pub name: String,
    pub base_url: String,
    pub sfw: BTreeSet<String>,
    pub nsfw: BTreeSet<String>,
}

impl SourceView {
    pub fn new(source: &dyn ImageSource) -> Self {
        let categories = source.categories();
        Self {
            name: source.name().to_string(),
            base_url: source.base_url().to_string(),
            sfw: categories.sfw.clone(),
            nsfw: categories.nsfw.clone(),
        }
    }
}

/// A history entry without its bytes.
#[derive(Debug, Clone, Serialize)]
pub struct HistoryView {
    pub url: String,
    pub category: String,
    pub is_sfw: bool,
    pub size: usize,
}

impl From<&ImageData> for HistoryView {
    fn from(image: &ImageData) -> Self {
        Self {
            url: image.url.clone(),
            category: image.category.clone(),
            is_sfw: image.is_sfw,
            size: image.data.len(),
        }
    }
}

/// An image saved on disk, path relative to the image directory.
#[derive(Debug, Clone, Serialize)]
pub struct SavedImageView {
    pub path: String,
    pub filename: String,
    pub size: u64,
}

impl From<LocalImage> for SavedImageView {
    fn from(image: LocalImage) -> Self {
        Self {
            path: image.relpath,
            filename: image.filename,
            size: image.size,
        }
    }
}

/// Guess the MIME type of an image from its URL extension.
pub fn content_type(url: &str) -> &'static str {
    match waifu_util::parse_extension(url).as_deref() {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        _ => "application/octet-stream",
    }
}

/// A category is used as a directory name when saving, so it must be a single plain path segment.
pub fn is_plain_segment(s: &str) -> bool {
    !s.is_empty() && !s.starts_with('.') && !s.contains(['/', '\\'])
}
