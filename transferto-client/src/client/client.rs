use url::Url;

use transferto_core::constants::DEFAULT_ENDPOINT;
use transferto_core::{
    params, Credentials, Error, Params, ResponseDocument, Result, TopupRequest,
};

use super::http_trait::HttpClient;

/// Client for the TransferTo top-up API.
///
/// Generic over the HTTP client implementation, allowing consumers to provide
/// their own HTTP client by implementing the `HttpClient` trait. Holds nothing
/// but the credentials and endpoint, so clones can be used concurrently.
#[derive(Clone, Debug)]
pub struct ProviderClient<H: HttpClient> {
    http_client: H,
    credentials: Credentials,
    endpoint: Url,
}

impl<H: HttpClient> ProviderClient<H> {
    /// Create a new client against the default endpoint.
    ///
    /// # Arguments
    /// * `login` - TransferTo login id
    /// * `token` - TransferTo secret token
    /// * `http_client` - HTTP client implementation
    pub fn new(login: impl Into<String>, token: impl Into<String>, http_client: H) -> Result<Self> {
        Ok(ProviderClient {
            http_client,
            credentials: Credentials::new(login, token)?,
            endpoint: Url::parse(DEFAULT_ENDPOINT)?,
        })
    }

    /// Point the client at another endpoint, e.g. a staging host.
    pub fn with_endpoint(mut self, endpoint: &str) -> Result<Self> {
        self.endpoint = Url::parse(endpoint)?;
        Ok(self)
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    pub fn login(&self) -> &str {
        self.credentials.login()
    }

    /// Signs `params`, sends them and decodes the answer.
    ///
    /// Fails with `Error::Provider` when the answer's `error_code` is not `0`,
    /// and with a transport error when the provider could not be reached or its
    /// answer could not be parsed.
    pub async fn send_request(&self, params: Params) -> Result<ResponseDocument> {
        log::debug!(
            "sending {} request to {}",
            params.get("action").unwrap_or("<none>"),
            self.endpoint
        );

        let signed = self.credentials.sign(params);
        let body = self
            .http_client
            .get(self.endpoint.as_str(), &signed.to_query())
            .await?;

        let document = ResponseDocument::parse(&body)?;
        document.check().map_err(|e| {
            log::warn!("provider rejected request: {}", e);
            Error::from(e)
        })
    }

    pub async fn get_countries(&self) -> Result<ResponseDocument> {
        self.send_request(params::countries()).await
    }

    pub async fn get_country(&self, country_id: &str) -> Result<ResponseDocument> {
        self.send_request(params::country(country_id)).await
    }

    pub async fn get_operator(&self, operator_id: &str) -> Result<ResponseDocument> {
        self.send_request(params::operator(operator_id)).await
    }

    /// Looks up the operator and products for `msisdn`.
    ///
    /// `options` override the lookup defaults (`delivered_amount_info`,
    /// `return_service_fee`, `currency`, `return_promo`); `action` and
    /// `destination_msisdn` inside `options` are ignored.
    pub async fn get_msisdn_info(
        &self,
        msisdn: &str,
        options: Option<Params>,
    ) -> Result<ResponseDocument> {
        self.send_request(params::msisdn_info(msisdn, options)).await
    }

    /// Executes a top-up, or only simulates it when `request.simulate` is set.
    pub async fn topup(&self, request: &TopupRequest) -> Result<ResponseDocument> {
        self.send_request(params::topup(request)).await
    }
}
