//! HTTP client for the job-search APIs.

use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

use devsalary_types::DevsalaryError;

use crate::url::{HH_BASE_URL, SJ_BASE_URL};

/// Configuration for the API client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Request timeout.
    pub timeout: Duration,
    /// Connection timeout (separate from request timeout).
    pub connect_timeout: Duration,
    /// User agent string. HeadHunter rejects requests without one.
    pub user_agent: String,
    /// Vacancies requested per page.
    pub per_page: u32,
    /// HeadHunter: only vacancies published within this many days.
    pub hh_period_days: u32,
    /// SuperJob catalogue ID ("Development, programming").
    pub sj_catalogue: u32,
    /// HeadHunter API base URL.
    pub hh_base_url: String,
    /// SuperJob API base URL.
    pub sj_base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            user_agent: format!("devsalary/{}", env!("CARGO_PKG_VERSION")),
            per_page: 100,
            hh_period_days: 30,
            sj_catalogue: 48,
            hh_base_url: HH_BASE_URL.to_string(),
            sj_base_url: SJ_BASE_URL.to_string(),
        }
    }
}

/// Errors that can occur while talking to an API.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Transport-level failure.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-success status.
    #[error("Server returned {status} for {url}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Requested URL including query.
        url: String,
    },

    /// Response body was not the expected JSON.
    #[error("Unexpected response from {url}: {source}")]
    Decode {
        /// Requested URL including query.
        url: String,
        /// Underlying JSON error.
        source: serde_json::Error,
    },
}

impl From<FetchError> for DevsalaryError {
    fn from(err: FetchError) -> Self {
        match err {
            FetchError::Decode { .. } => Self::Parse(err.to_string()),
            FetchError::Http(_) | FetchError::Status { .. } => Self::Http(err.to_string()),
        }
    }
}

/// A query string as ordered key/value pairs.
pub type Query = Vec<(&'static str, String)>;

/// JSON-over-HTTP client shared by the platform modules.
///
/// Every call is a single request; failures are returned, never retried.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    config: ClientConfig,
}

impl ApiClient {
    /// Creates a new API client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: ClientConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(&config.user_agent)
            .gzip(true)
            .build()?;
        Ok(Self { client, config })
    }

    /// Creates a client with default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn with_defaults() -> Result<Self, FetchError> {
        Self::new(ClientConfig::default())
    }

    /// Returns the client configuration.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Performs a GET request and decodes the JSON body.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a non-2xx status, or a body
    /// that does not decode into `T`.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&'static str, String)],
        headers: &[(&'static str, &str)],
    ) -> Result<T, FetchError> {
        let mut request = self.client.get(url).query(query);
        for (name, value) in headers {
            request = request.header(*name, *value);
        }

        debug!(url, ?query, "GET");
        let response = request.send().await?;
        let status = response.status();
        let final_url = response.url().to_string();

        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                url: final_url,
            });
        }

        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|source| FetchError::Decode {
            url: final_url,
            source,
        })
    }
}

#[cfg(test)]
impl ApiClient {
    /// Client for a loopback test server, ignoring any system proxy.
    pub(crate) fn local(config: ClientConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .no_proxy()
            .build()
            .unwrap();
        Self { client, config }
    }
}
