use waifu_core::Error;

/// Translate a client error into the error kinds of a source.
pub(crate) fn source_error(err: im_client::Error) -> Error {
    match err {
        im_client::Error::NetworkError(err) => Error::NetworkError(err),
        im_client::Error::JSONError(err) => Error::JSONError(err),
        im_client::Error::UrlError(err) => Error::UrlError(err),
        im_client::Error::IOError(err) => Error::IOError(err),
        im_client::Error::InvalidUrl(url) => Error::InvalidField(format!("base URL {}", url)),
    }
}
