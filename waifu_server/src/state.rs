use std::path::PathBuf;

use waifu_core::ClientContext;

use crate::registry::{SourceRegistry, Sources};

#[derive(Clone)]
pub struct AppState {
    /// HTTP client and history shared by all sources
    pub context: ClientContext,
    /// Registered sources, each locked for writing only while its categories are repopulated
    pub sources: SourceRegistry,
    /// Where history images are saved, saving is disabled if not set
    pub image_dir: Option<PathBuf>,
}

impl AppState {
    pub fn new(context: ClientContext, sources: Sources, image_dir: Option<PathBuf>) -> Self {
        Self {
            context,
            sources: SourceRegistry::new(sources),
            image_dir,
        }
    }
}
