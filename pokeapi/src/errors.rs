//! Errors for this crate.

use reqwest::StatusCode;

#[derive(thiserror::Error, Debug)]
pub enum InvalidApiUrl {
    #[error("Given URL does not end with \"/api/v2/\": {0}")]
    EndpointVersion(String),

    #[error("Given URL does not start with \"http://\" or \"https://\": {0}")]
    Protocol(String),
}

aliri_braid::from_infallible!(InvalidApiUrl);

/// Errors representing failed interactions with the PokeAPI server.
#[derive(thiserror::Error, Debug)]
pub enum PokeError {
    /// Error response with an explanation from the server.
    #[error("({status:?} {reason:?}): {text}")]
    Error {
        status: StatusCode,
        reason: &'static str,
        text: String,
        source: reqwest::Error,
    },

    /// Transport failure, or a response body which does not decode as the
    /// expected shape.
    #[error(transparent)]
    Raw(#[from] reqwest::Error),

    /// Error from reqwest middleware function.
    #[error(transparent)]
    Middleware(anyhow::Error),
}

/// A resource URL without any non-empty path segment, so no identifier can
/// be derived from it.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
#[error("no path segment in URL: {0:?}")]
pub struct MissingIdError(pub String);

pub(crate) async fn check(res: reqwest::Response) -> Result<reqwest::Response, PokeError> {
    match res.error_for_status_ref() {
        Ok(_) => Ok(res),
        Err(source) => {
            let status = res.status();
            let reason = status.canonical_reason().unwrap_or("unknown reason");
            let text = res.text().await.map_err(PokeError::Raw)?;
            Err(PokeError::Error {
                status,
                reason,
                text,
                source,
            })
        }
    }
}

impl From<reqwest_middleware::Error> for PokeError {
    fn from(error: reqwest_middleware::Error) -> Self {
        match error {
            reqwest_middleware::Error::Middleware(e) => PokeError::Middleware(e),
            reqwest_middleware::Error::Reqwest(e) => PokeError::Raw(e),
        }
    }
}
