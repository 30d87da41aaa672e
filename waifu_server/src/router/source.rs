use axum::{
    extract::{Path, Query, State},
    http::{header, HeaderName},
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde_json::{json, Value};

use crate::{
    error::Result,
    payload::ImageQuery,
    state::AppState,
    util::{content_type, SourceView},
};

pub fn source_router() -> Router<AppState> {
    Router::new()
        .route("/sources", get(get_sources))
        .route("/source/:name/categories", post(populate_categories))
        .route("/source/:name/url", get(get_image_url))
        .route("/source/:name/image", get(get_image))
}

async fn get_sources(State(app_state): State<AppState>) -> Json<Vec<SourceView>> {
    let mut views = Vec::new();
    for source in app_state.sources.iter() {
        views.push(SourceView::new(&**source.read().await));
    }
    Json(views)
}

/// Repopulate one source, other sources keep serving meanwhile.
async fn populate_categories(State(app_state): State<AppState>, Path(name): Path<String>) -> Result<Json<SourceView>> {
    let mut source = app_state.sources.get(&name)?.write().await;
    source.populate_categories().await?;
    Ok(Json(SourceView::new(&**source)))
}

async fn get_image_url(
    State(app_state): State<AppState>,
    Path(name): Path<String>,
    Query(query): Query<ImageQuery>,
) -> Result<Json<Value>> {
    let source = app_state.sources.get(&name)?.read().await;
    let url = source.get_image_url(&query.category, query.sfw).await?;
    Ok(Json(json!({ "url": url })))
}

/// Fetch an image and remember it in history, respond with the image itself.
async fn get_image(
    State(app_state): State<AppState>,
    Path(name): Path<String>,
    Query(query): Query<ImageQuery>,
) -> Result<Response> {
    let image = {
        let source = app_state.sources.get(&name)?.read().await;
        source.fetch_image(&query.category, query.sfw).await?
    };

    if app_state.context.remember(image.clone()).await {
        tracing::info!("Added {} to history", image.url);
    }

    let headers = [
        (header::CONTENT_TYPE, content_type(&image.url).to_string()),
        (HeaderName::from_static("x-image-url"), image.url),
    ];
    Ok((headers, image.data).into_response())
}
