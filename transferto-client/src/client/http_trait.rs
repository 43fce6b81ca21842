use async_trait::async_trait;
use transferto_core::Result;

/// Minimal async HTTP client trait that can be implemented with any HTTP library.
///
/// The provider API only ever needs a GET with a query string, so that is
/// all this asks for. Bundled implementations are available behind the
/// `reqwest-client` and `ureq-client` features; anything else (hyper, isahc,
/// a test double) works as long as it returns the raw body.
///
/// Implementations report failures with the transport variants of
/// [`transferto_core::Error`]: `HttpGet` when the request could not be made,
/// `HttpStatus` for a non-2xx answer and `ResponseBody` when the body could
/// not be read.
///
/// ```ignore
/// use async_trait::async_trait;
/// use transferto_client::{HttpClient, Result};
///
/// #[derive(Clone)]
/// struct MyHttpClient;
///
/// #[async_trait]
/// impl HttpClient for MyHttpClient {
///     async fn get(&self, url: &str, query_params: &[(&str, String)]) -> Result<String> {
///         // Build URL with query params and return response body
///         Ok("error_code=0\r\nerror_txt=Transaction successful".to_string())
///     }
/// }
/// ```
#[async_trait]
pub trait HttpClient: Send + Sync + Clone {
    /// Perform a GET request with query parameters.
    ///
    /// # Arguments
    /// * `url` - The full URL to request
    /// * `query_params` - Query parameters as key-value pairs, to be url-encoded
    ///
    /// # Returns
    /// The response body as a string
    async fn get(&self, url: &str, query_params: &[(&str, String)]) -> Result<String>;
}
