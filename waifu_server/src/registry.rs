use tokio::sync::RwLock;

use std::sync::Arc;

use waifu_core::{ClientContext, Error, ImageSource, Result};
use waifu_im::WaifuIm;
use waifu_pics::WaifuPics;

pub type Sources = Vec<Box<dyn ImageSource>>;

/// A source behind its own lock, so repopulating one source never blocks the others.
pub type SharedSource = Arc<RwLock<Box<dyn ImageSource>>>;

/// Construct every known source, all sharing the same context.
/// A new backend is added by appending it here.
pub fn construct_sources(ctx: &ClientContext) -> Result<Sources> {
    Ok(vec![Box::new(WaifuPics::new(ctx)?), Box::new(WaifuIm::new(ctx)?)])
}

/// Registered sources in construction order.
/// Names are stored beside the locks, looking up a source takes no lock.
#[derive(Clone)]
pub struct SourceRegistry {
    entries: Arc<Vec<(&'static str, SharedSource)>>,
}

impl SourceRegistry {
    pub fn new(sources: Sources) -> Self {
        let entries = sources
            .into_iter()
            .map(|source| (source.name(), Arc::new(RwLock::new(source))))
            .collect();
        Self {
            entries: Arc::new(entries),
        }
    }

    pub fn get(&self, name: &str) -> Result<&SharedSource> {
        self.entries
            .iter()
            .find(|(source_name, _)| *source_name == name)
            .map(|(_, source)| source)
            .ok_or_else(|| Error::ObjectNotFound(format!("source {}", name)))
    }

    pub fn iter(&self) -> impl Iterator<Item = &SharedSource> {
        self.entries.iter().map(|(_, source)| source)
    }
}
