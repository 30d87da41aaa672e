use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Network Error: {0}")]
    NetworkError(#[from] reqwest::Error),
    #[error("Cannot encode/decode JSON: {0}")]
    JSONError(#[from] serde_json::Error),
    #[error("Missing data: {0}")]
    MissingData(String),

    #[error("Object `{0}` not found")]
    ObjectNotFound(String),
    #[error("Invalid field: {0}")]
    InvalidField(String),

    #[error("Download error: {0}")]
    DownloadError(#[from] waifu_download::Error),
    #[error("IO Error: {0}")]
    IOError(#[from] std::io::Error),
    #[error("Cannot parse URL: {0}")]
    UrlError(#[from] url::ParseError),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
