use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use waifu_core::Error as WaifuError;

pub type Result<T> = std::result::Result<T, ServerError>;

#[derive(Debug)]
pub struct ServerError(anyhow::Error);

impl<E> From<E> for ServerError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

impl std::fmt::Display for ServerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        tracing::error!("{}", self);
        let status = self.status_code();
        (status, self.to_string()).into_response()
    }
}

impl ServerError {
    fn status_code(&self) -> StatusCode {
        let err = &self.0;
        for cause in err.chain() {
            if let Some(err) = cause.downcast_ref::<waifu_download::Error>() {
                match err {
                    waifu_download::Error::InvalidPath(_) => return StatusCode::BAD_REQUEST,
                    waifu_download::Error::NetworkError(_) => return StatusCode::BAD_GATEWAY,
                    _ => return StatusCode::INTERNAL_SERVER_ERROR,
                }
            }
            if let Some(err) = cause.downcast_ref::<WaifuError>() {
                match err {
                    WaifuError::NetworkError(_) => return StatusCode::BAD_GATEWAY,
                    WaifuError::JSONError(_) => return StatusCode::BAD_GATEWAY,
                    WaifuError::MissingData(_) => return StatusCode::NOT_FOUND,
                    WaifuError::ObjectNotFound(_) => return StatusCode::NOT_FOUND,
                    WaifuError::InvalidField(_) => return StatusCode::BAD_REQUEST,
                    // Keep looking into the cause for download and other wrapped errors
                    WaifuError::DownloadError(_) | WaifuError::Other(_) => continue,
                    _ => return StatusCode::INTERNAL_SERVER_ERROR,
                }
            }
        }
        StatusCode::INTERNAL_SERVER_ERROR
    }
}
