//! HTTP implementation of the terms client

use crate::client::TermsClient;
use crate::error::ClientError;
use async_trait::async_trait;
use jargon_store::Term;

/// Terms client backed by a plain HTTP GET.
///
/// The response body is trusted as-is: whatever deserializes as a list
/// of terms propagates into state unvalidated. No timeout is configured
/// here, that is the transport layer's concern.
pub struct HttpTermsClient {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpTermsClient {
    /// Create a client for a fixed endpoint URL.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// The endpoint this client fetches from.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl TermsClient for HttpTermsClient {
    async fn fetch_terms(&self) -> Result<Vec<Term>, ClientError> {
        log::info!("Fetching terms from {}", self.endpoint);

        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .map_err(|source| ClientError::Transport {
                url: self.endpoint.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status {
                status,
                url: self.endpoint.clone(),
            });
        }

        response
            .json::<Vec<Term>>()
            .await
            .map_err(ClientError::Decode)
    }
}
