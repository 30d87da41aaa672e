use waifu_core::Error;

/// Translate a client error into the error kinds of a source.
pub(crate) fn source_error(err: pics_client::Error) -> Error {
    match err {
        pics_client::Error::NetworkError(err) => Error::NetworkError(err),
        pics_client::Error::JSONError(err) => Error::JSONError(err),
        pics_client::Error::UrlError(err) => Error::UrlError(err),
        pics_client::Error::IOError(err) => Error::IOError(err),
        pics_client::Error::InvalidUrl(url) => Error::InvalidField(format!("base URL {}", url)),
    }
}
