use crate::domain::shared::errors::DomainError;
use reqwest::{Url, header::USER_AGENT};
use serde::{Serialize, de::DeserializeOwned};
use std::time::Duration;

const DEFAULT_USER_AGENT: &str = concat!("whereabouts/", env!("CARGO_PKG_VERSION"));

/// Thin JSON client: one request per call, no retries.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
    user_agent: String,
}

impl HttpFetcher {
    pub fn new(user_agent: Option<String>, timeout: Option<Duration>) -> anyhow::Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            user_agent: user_agent
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()),
        })
    }

    pub fn build_url(base: &str, query: &[(&str, String)]) -> Result<Url, DomainError> {
        Url::parse_with_params(base, query)
            .map_err(|e| DomainError::InvalidInput(format!("invalid url {}: {}", base, e)))
    }

    pub async fn get_json<T: DeserializeOwned>(
        &self,
        base: &str,
        query: &[(&str, String)],
    ) -> Result<T, DomainError> {
        let url = Self::build_url(base, query)?;
        tracing::debug!(host = url.host_str().unwrap_or_default(), path = url.path(), "GET");

        self.client
            .get(url)
            .header(USER_AGENT, &self.user_agent)
            .send()
            .await
            .map_err(network_failure)?
            .error_for_status()
            .map_err(network_failure)?
            .json::<T>()
            .await
            .map_err(network_failure)
    }

    pub async fn post_json<B: Serialize + ?Sized>(&self, url: &str, body: &B) -> Result<(), DomainError> {
        self.client
            .post(url)
            .header(USER_AGENT, &self.user_agent)
            .json(body)
            .send()
            .await
            .map_err(network_failure)?
            .error_for_status()
            .map_err(network_failure)?;
        Ok(())
    }
}

/// Every transport, status or decode failure is terminal for its request.
fn network_failure(err: reqwest::Error) -> DomainError {
    // Strip the url: provider keys travel in the query string.
    let err = err.without_url();
    let message = if err.is_timeout() {
        tracing::warn!(reqwest_timeout = %err);
        "request timed out".to_string()
    } else if err.is_connect() {
        tracing::warn!(reqwest_connect = %err);
        "connection failed".to_string()
    } else if let Some(status) = err.status() {
        tracing::info!(reqwest_status = %err);
        format!("upstream responded with {}", status)
    } else if err.is_decode() {
        tracing::warn!(reqwest_decode = %err);
        "unexpected response body".to_string()
    } else {
        tracing::error!(reqwest_error = %err);
        "request failed".to_string()
    };
    DomainError::NetworkFailure(message)
}
