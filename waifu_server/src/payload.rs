use serde::Deserialize;

/// Query of an image request, like `?category=waifu&sfw=false`.
#[derive(Debug, Clone, Deserialize)]
pub struct ImageQuery {
    pub category: String,
    #[serde(default = "default_sfw")]
    pub sfw: bool,
}

fn default_sfw() -> bool {
    true
}

/// Request for saving an image in history to the image directory.
#[derive(Debug, Clone, Deserialize)]
pub struct SaveRequest {
    pub url: String,
}
