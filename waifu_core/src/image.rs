use serde::Serialize;

use std::collections::BTreeSet;

/// One downloaded image. Created once per successful fetch and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageData {
    pub url: String,
    pub category: String,
    pub is_sfw: bool,
    pub data: Vec<u8>,
}

/// The category taxonomy of a source.
/// Empty until the source populates it, append-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Categories {
    pub sfw: BTreeSet<String>,
    pub nsfw: BTreeSet<String>,
}

impl Categories {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_sfw(&mut self, names: impl IntoIterator<Item = String>) {
        self.sfw.extend(names);
    }

    pub fn add_nsfw(&mut self, names: impl IntoIterator<Item = String>) {
        self.nsfw.extend(names);
    }

    pub fn get(&self, is_sfw: bool) -> &BTreeSet<String> {
        if is_sfw {
            &self.sfw
        } else {
            &self.nsfw
        }
    }

    pub fn contains(&self, category: &str, is_sfw: bool) -> bool {
        self.get(is_sfw).contains(category)
    }

    pub fn is_empty(&self) -> bool {
        self.sfw.is_empty() && self.nsfw.is_empty()
    }
}
