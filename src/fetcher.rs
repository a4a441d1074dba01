use reqwest;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fmt;
use tracing::{debug, error};

#[derive(Debug)]
pub enum FetchError {
    InvalidUrl(String),
    NetworkError(reqwest::Error),
    DecodeError(serde_json::Error),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            FetchError::InvalidUrl(url) => write!(f, "Invalid URL: {}", url),
            FetchError::NetworkError(e) => {
                let kind = if e.is_connect() {
                    " (connect)"
                } else if e.is_timeout() {
                    " (timeout)"
                } else {
                    ""
                };
                write!(f, "Network error{}: {}", kind, e)?;

                // reqwest keeps the underlying io cause, e.g. "Connection refused", in the source chain
                let mut source = std::error::Error::source(e);
                while let Some(cause) = source {
                    write!(f, ": {}", cause)?;
                    source = cause.source();
                }
                Ok(())
            }
            FetchError::DecodeError(e) => write!(f, "Decode error: {}", e),
        }
    }
}

impl std::error::Error for FetchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FetchError::InvalidUrl(_) => None,
            FetchError::NetworkError(e) => Some(e),
            FetchError::DecodeError(e) => Some(e),
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        FetchError::NetworkError(err)
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::DecodeError(err)
    }
}

/// Issues a single GET per call and decodes the body as JSON.
///
/// The HTTP client is owned by the fetcher rather than taken from a global,
/// so callers can hand in one configured however they like.
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: reqwest::Client,
}

impl Fetcher {
    /// Builds a client with library defaults. Fails instead of panicking if
    /// the TLS backend cannot be initialised.
    pub fn new() -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(FetchError::NetworkError)?;
        Ok(Self { client })
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Fetches `url` and decodes the body into `T`.
    ///
    /// The response status is not inspected: a 500 with a JSON body decodes
    /// the same as a 200.
    pub async fn fetch_as<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
        if url.is_empty() {
            return Err(FetchError::InvalidUrl("URL cannot be empty".to_string()));
        }

        let response = self.client.get(url).send().await?;
        debug!(url, status = %response.status(), "received response");

        let body = response.bytes().await?;
        let value = serde_json::from_slice(&body)?;
        Ok(value)
    }

    pub async fn fetch_json(&self, url: &str) -> Result<Value, FetchError> {
        self.fetch_as::<Value>(url).await
    }

    /// Like [`Fetcher::fetch_json`], but any failure is logged and reported
    /// as `None`.
    ///
    /// A body that is literally `null` also comes back as `Some(Value::Null)`,
    /// which renders the same as a failure.
    pub async fn fetch(&self, url: &str) -> Option<Value> {
        match self.fetch_json(url).await {
            Ok(value) => Some(value),
            Err(e) => {
                error!("Error: {}", e);
                None
            }
        }
    }
}
