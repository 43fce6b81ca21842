use transferto_client::{BlockingProviderClient, ProviderClient, TopupRequest};
use transferto_client_tests::{expected_signature, MockHttpClient, LOGIN, TOKEN};

#[test]
fn test_blocking_operations_match_async_ones() {
    let mock = MockHttpClient::new();
    let client = BlockingProviderClient::new(LOGIN, TOKEN, mock.clone()).unwrap();

    client.get_countries().unwrap();
    client.get_country("766").unwrap();
    client.get_operator("321").unwrap();
    client.get_msisdn_info("18765555555", None).unwrap();
    client
        .topup(&TopupRequest {
            simulate: true,
            ..TopupRequest::new("18765555555")
        })
        .unwrap();

    let requests = mock.requests();
    let actions: Vec<&str> = requests
        .iter()
        .map(|r| r.param("action").unwrap())
        .collect();
    assert_eq!(
        actions,
        ["pricelist", "pricelist", "pricelist", "msisdn_info", "simulation"]
    );

    for req in &requests {
        let key = req.param("key").unwrap();
        assert_eq!(req.param("md5").unwrap(), expected_signature(LOGIN, TOKEN, key));
    }
}

#[test]
fn test_blocking_provider_error() {
    let mock = MockHttpClient::replying("error_code=204\r\nerror_txt=Destination MSISDN out of range");
    let client = BlockingProviderClient::new(LOGIN, TOKEN, mock).unwrap();

    let err = client.get_msisdn_info("1", None).unwrap_err();
    let provider = err.as_provider().unwrap();
    assert_eq!(provider.code, "204");
    assert_eq!(provider.message, "Destination MSISDN out of range");
}

#[test]
fn test_wraps_existing_client() {
    let mock = MockHttpClient::new();
    let client: BlockingProviderClient<_> = ProviderClient::new(LOGIN, TOKEN, mock.clone())
        .unwrap()
        .with_endpoint("http://localhost:8080/topup")
        .unwrap()
        .into();

    assert_eq!(client.inner().login(), LOGIN);
    client.get_countries().unwrap();
    assert_eq!(mock.last_request().url, "http://localhost:8080/topup");
}
