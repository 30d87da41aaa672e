mod error;
mod payload;
mod registry;
mod router;
mod state;
mod util;

use axum::Router;
use dotenvy::dotenv;
use futures::future::join_all;
use tower_http::trace::TraceLayer;
use tracing_subscriber::filter::{EnvFilter, LevelFilter};

use std::env;
use std::path::PathBuf;

use waifu_core::ClientContext;

use crate::state::AppState;

#[tokio::main]
async fn main() {
    dotenv().ok();

    // 1. Initialize logger
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::DEBUG.into())
        .from_env()
        .unwrap()
        .add_directive("hyper::proto=info".parse().unwrap())
        .add_directive("hyper::client=info".parse().unwrap())
        .add_directive("reqwest=info".parse().unwrap());
    tracing_subscriber::fmt().with_env_filter(filter).compact().init();

    // 2. Initialize shared context and sources
    let context = ClientContext::new().expect("cannot build HTTP client");
    let mut sources = registry::construct_sources(&context).expect("cannot construct sources");

    // 3. Populate categories of all sources concurrently, a failed source stays with no category
    let results = join_all(sources.iter_mut().map(|source| source.populate_categories())).await;
    for (source, result) in sources.iter().zip(results) {
        match result {
            Ok(()) => tracing::info!(
                "Source {} ready with {} sfw and {} nsfw categories",
                source.name(),
                source.categories().sfw.len(),
                source.categories().nsfw.len()
            ),
            Err(err) => tracing::warn!("Cannot populate categories of {}: {}", source.name(), err),
        }
    }

    // 4. Image directory for saving history, optional
    let image_dir = env::var("IMAGE_DIR").ok().map(PathBuf::from);
    if image_dir.is_none() {
        tracing::info!("IMAGE_DIR is not set, saving images is disabled");
    }

    // 5. Setup state and router
    let app_state = AppState::new(context, sources, image_dir);

    let app = Router::new()
        .merge(router::source::source_router())
        .merge(router::history::history_router())
        .layer(TraceLayer::new_for_http().on_request(()))
        .with_state(app_state);

    // 6. Start server
    let addr = env::var("SERVER_ADDRESS").expect("SERVER_ADDRESS must be set");
    tracing::info!("Server starting at {}", addr);
    axum::Server::bind(&addr.parse().unwrap())
        .serve(app.into_make_service())
        .await
        .unwrap();
}
