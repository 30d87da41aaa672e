use axum::{
    extract::State,
    response::Json,
    routing::{get, post},
    Router,
};
use itertools::Itertools;

use waifu_core::Error as WaifuError;
use waifu_download::SaveTask;

use crate::{
    error::Result,
    payload::SaveRequest,
    state::AppState,
    util::{is_plain_segment, HistoryView, SavedImageView},
};

pub fn history_router() -> Router<AppState> {
    Router::new()
        .route("/history", get(get_history))
        .route("/history/save", post(save_image))
}

async fn get_history(State(app_state): State<AppState>) -> Json<Vec<HistoryView>> {
    let history = app_state.context.history().await;
    let views = history
        .iter()
        .map(HistoryView::from)
        .sorted_by(|a, b| a.url.cmp(&b.url))
        .collect();
    Json(views)
}

/// Save an image in history to `IMAGE_DIR/{category}/{filename}`.
async fn save_image(State(app_state): State<AppState>, Json(payload): Json<SaveRequest>) -> Result<Json<SavedImageView>> {
    let root_dir = app_state
        .image_dir
        .clone()
        .ok_or_else(|| anyhow::anyhow!("IMAGE_DIR is not set"))?;
    let image = app_state
        .context
        .cached(&payload.url)
        .await
        .ok_or_else(|| WaifuError::ObjectNotFound(format!("history image {}", payload.url)))?;

    if !is_plain_segment(&image.category) {
        return Err(WaifuError::InvalidField(format!("category {}", image.category)).into());
    }
    let filename = waifu_util::parse_filename(&image.url)?;

    let task = SaveTask {
        root_dir,
        subdir: image.category.clone().into(),
        filename: filename.into(),
    };
    let local = waifu_download::save_bytes(&task, &image.data, false).await?;
    Ok(Json(local.into()))
}
