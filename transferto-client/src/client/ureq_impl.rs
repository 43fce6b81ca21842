use std::time::Duration;

use async_trait::async_trait;
use transferto_core::{Error, Result};

use super::http_trait::HttpClient;

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Minimal HTTP client implementation using ureq.
///
/// Blocking under the hood, so it pairs best with `BlockingProviderClient`.
///
/// # Example
///
/// ```ignore
/// use transferto_client::{BlockingProviderClient, UreqClient};
///
/// let client = BlockingProviderClient::new("login", "token", UreqClient::new())?;
/// let info = client.get_msisdn_info("18765555555", None)?;
/// ```
#[derive(Clone)]
pub struct UreqClient {
    agent: ureq::Agent,
}

impl UreqClient {
    /// Create a new ureq HTTP client with default settings.
    pub fn new() -> Self {
        Self::with_timeout(DEFAULT_TIMEOUT_SECS)
    }

    /// Create a new ureq HTTP client with a custom timeout.
    pub fn with_timeout(timeout_secs: u64) -> Self {
        Self {
            agent: ureq::AgentBuilder::new()
                .timeout(Duration::from_secs(timeout_secs))
                .build(),
        }
    }
}

impl Default for UreqClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpClient for UreqClient {
    async fn get(&self, url: &str, query_params: &[(&str, String)]) -> Result<String> {
        let mut request = self.agent.get(url);
        for (key, value) in query_params {
            request = request.query(key, value);
        }

        // Perform blocking request (wrapped in async for trait compatibility)
        let response = match request.call() {
            Ok(response) => response,
            Err(ureq::Error::Status(status, response)) => {
                let body = response.into_string().unwrap_or_default();
                return Err(Error::HttpStatus { status, body });
            }
            Err(e) => return Err(Error::HttpGet(e.to_string())),
        };

        response
            .into_string()
            .map_err(|e| Error::ResponseBody(e.to_string()))
    }
}
