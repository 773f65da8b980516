//! HTTP transport seam for the remote CFMS authority.

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::AUTHORIZATION;
use reqwest::redirect::Policy;
use thiserror::Error;

/// No HTTP status could be obtained for a request.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    #[error("client could not be built: {0}")]
    Client(String),

    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("no response: {0}")]
    NoResponse(String),
}

/// Issues one authorized GET and reports the raw status code.
///
/// Implementations must not turn non-2xx statuses into errors; only a
/// missing response is an `Err`.
#[async_trait]
pub trait BillTransport: Send + Sync {
    async fn get(&self, url: &str, authorization: &str) -> Result<u16, TransportError>;
}

/// [`BillTransport`] backed by a shared `reqwest::Client`.
#[derive(Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Builds a client that does not follow redirects, so a 3xx from the
    /// bill page is reported as is.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Client`] if the TLS backend cannot be
    /// initialized.
    pub fn new() -> Result<Self, TransportError> {
        let client = Client::builder()
            .redirect(Policy::none())
            .build()
            .map_err(|e| TransportError::Client(e.to_string()))?;
        Ok(Self { client })
    }

    /// Uses a preconfigured client (proxy, TLS roots, timeouts).
    ///
    /// The client should be built with `Policy::none()`; a client that
    /// follows redirects reports the status of the last hop.
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl BillTransport for ReqwestTransport {
    async fn get(&self, url: &str, authorization: &str) -> Result<u16, TransportError> {
        let request = self
            .client
            .get(url)
            .header(AUTHORIZATION, authorization)
            .build()
            .map_err(|e| TransportError::InvalidRequest(e.without_url().to_string()))?;

        let response = self
            .client
            .execute(request)
            .await
            .map_err(|e| TransportError::NoResponse(e.to_string()))?;

        // Body is never read: only reachability and status matter.
        Ok(response.status().as_u16())
    }
}
