use std::path::PathBuf;

use crate::error::{Error, Result};
use crate::{LocalImage, SaveTask};

/// Download the body of `url` with the given client.
/// A non-2xx status is a network error. So is a body cut short of its declared
/// `Content-Length`, the transport rejects it while reading.
pub async fn fetch_bytes(client: &reqwest::Client, url: &str) -> Result<Vec<u8>> {
    // 1. Send request to the URL
    tracing::debug!("Downloading {}", url);
    let mut response = client.get(url).send().await?.error_for_status()?;

    // 2. Download the body, write to a buffer
    let mut buffer = Vec::new();
    while let Some(chunk) = response.chunk().await? {
        buffer.extend_from_slice(&chunk);
    }
    Ok(buffer)
}

/// Save bytes to the task destination, return the local image.
/// If not overwrite and the file exists, the file is left untouched.
pub async fn save_bytes(task: &SaveTask, bytes: &[u8], overwrite: bool) -> Result<LocalImage> {
    let dest_path = task.root_dir.join(&task.subdir).join(&task.filename);
    if task.filename.file_name().is_none() {
        return Err(Error::InvalidPath(dest_path.to_string_lossy().to_string()));
    }
    if !overwrite && tokio::fs::try_exists(&dest_path).await? {
        tracing::debug!("{} already exists, skip writing", dest_path.display());
        return get_local_image_info(task).await;
    }

    let dir = task.root_dir.join(&task.subdir);
    if !tokio::fs::try_exists(&dir).await? {
        tokio::fs::create_dir_all(&dir).await?;
    }
    tokio::fs::write(&dest_path, bytes).await?;
    tracing::info!("Saved {} bytes to {}", bytes.len(), dest_path.display());

    Ok(LocalImage {
        relpath: relpath(task),
        filename: task.filename.to_string_lossy().to_string(),
        size: bytes.len() as u64,
    })
}

pub async fn get_local_image_info(task: &SaveTask) -> Result<LocalImage> {
    let image_path = task.root_dir.join(&task.subdir).join(&task.filename);
    let size = tokio::fs::metadata(&image_path).await?.len();

    Ok(LocalImage {
        relpath: relpath(task),
        filename: task.filename.to_string_lossy().to_string(),
        size,
    })
}

fn relpath(task: &SaveTask) -> String {
    PathBuf::from(&task.subdir)
        .join(&task.filename)
        .to_string_lossy()
        .to_string()
}
