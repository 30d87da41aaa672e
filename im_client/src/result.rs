use serde::{Deserialize, Serialize};

// MARK: Tags

/// Response of `/tags?full=true`.
/// `versatile` tags can be used in both modes, `nsfw` tags only in NSFW mode.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct TagsResult {
    pub versatile: Vec<Tag>,
    pub nsfw: Vec<Tag>,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct Tag {
    pub name: String,
}

// MARK: Search

/// Response of `/search`. The API returns a random selection, so `images` may be empty
/// when nothing matches.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct SearchResult {
    pub images: Vec<Image>,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct Image {
    pub url: String,
}
