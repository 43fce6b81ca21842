use futures::executor::block_on;

use transferto_core::{Params, ResponseDocument, Result, TopupRequest};

use crate::client::{HttpClient, ProviderClient};

/// Synchronous provider client, generic over the HTTP client.
///
/// This uses `block_on` to convert async HTTP calls to synchronous operations,
/// so the transport must not need an async runtime of its own. `UreqClient`
/// fits; `ReqwestClient` does not.
#[derive(Clone, Debug)]
pub struct BlockingProviderClient<H: HttpClient> {
    client: ProviderClient<H>,
}

impl<H: HttpClient> BlockingProviderClient<H> {
    /// Create a new synchronous client with a custom HTTP client.
    ///
    /// # Arguments
    /// * `login` - TransferTo login id
    /// * `token` - TransferTo secret token
    /// * `http_client` - HTTP client implementation
    pub fn new(login: impl Into<String>, token: impl Into<String>, http_client: H) -> Result<Self> {
        Ok(Self {
            client: ProviderClient::new(login, token, http_client)?,
        })
    }

    pub fn with_endpoint(self, endpoint: &str) -> Result<Self> {
        Ok(Self {
            client: self.client.with_endpoint(endpoint)?,
        })
    }

    /// The wrapped async client.
    pub fn inner(&self) -> &ProviderClient<H> {
        &self.client
    }

    pub fn send_request(&self, params: Params) -> Result<ResponseDocument> {
        block_on(self.client.send_request(params))
    }

    pub fn get_countries(&self) -> Result<ResponseDocument> {
        block_on(self.client.get_countries())
    }

    pub fn get_country(&self, country_id: &str) -> Result<ResponseDocument> {
        block_on(self.client.get_country(country_id))
    }

    pub fn get_operator(&self, operator_id: &str) -> Result<ResponseDocument> {
        block_on(self.client.get_operator(operator_id))
    }

    pub fn get_msisdn_info(&self, msisdn: &str, options: Option<Params>) -> Result<ResponseDocument> {
        block_on(self.client.get_msisdn_info(msisdn, options))
    }

    pub fn topup(&self, request: &TopupRequest) -> Result<ResponseDocument> {
        block_on(self.client.topup(request))
    }
}

impl<H: HttpClient> From<ProviderClient<H>> for BlockingProviderClient<H> {
    fn from(client: ProviderClient<H>) -> Self {
        Self { client }
    }
}
