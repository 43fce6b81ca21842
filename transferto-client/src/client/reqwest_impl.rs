use std::time::Duration;

use async_trait::async_trait;
use transferto_core::{Error, Result};

use super::http_trait::HttpClient;

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Async HTTP client implementation using reqwest.
///
/// Requests must be driven from inside a tokio runtime.
///
/// # Example
///
/// ```ignore
/// use transferto_client::{ProviderClient, ReqwestClient};
///
/// #[tokio::main]
/// async fn main() -> transferto_client::Result<()> {
///     let client = ProviderClient::new("login", "token", ReqwestClient::new()?)?;
///     let countries = client.get_countries().await?;
///     println!("{:?}", countries.get("country"));
///     Ok(())
/// }
/// ```
#[derive(Clone, Debug)]
pub struct ReqwestClient {
    client: reqwest::Client,
}

impl ReqwestClient {
    /// Create a new reqwest HTTP client with default settings.
    pub fn new() -> Result<Self> {
        Self::with_timeout(DEFAULT_TIMEOUT_SECS)
    }

    /// Create a new reqwest HTTP client with a custom timeout.
    pub fn with_timeout(timeout_secs: u64) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| Error::HttpGet(format!("failed to build reqwest client: {}", e)))?;
        Ok(Self { client })
    }

    /// Create a new reqwest HTTP client with a custom client configuration.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpClient for ReqwestClient {
    async fn get(&self, url: &str, query_params: &[(&str, String)]) -> Result<String> {
        let response = self
            .client
            .get(url)
            .query(query_params)
            .send()
            .await
            .map_err(|e| Error::HttpGet(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body: response.text().await.unwrap_or_default(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| Error::ResponseBody(e.to_string()))?;

        Ok(body)
    }
}
