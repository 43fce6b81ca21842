use transferto_client::{BlockingProviderClient, Error, TopupRequest, UreqClient};
use transferto_client_tests::{LOGIN, SUCCESS_BODY, TOKEN};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TOPUP_PATH: &str = "/cgi-bin/shop/topup";

// wiremock serves from its own thread, so the blocking client can call it
// from inside the test runtime.
#[tokio::test(flavor = "multi_thread")]
async fn test_blocking_ureq_round_trip() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(TOPUP_PATH))
        .and(query_param("action", "pricelist"))
        .and(query_param("info_type", "operator"))
        .and(query_param("content", "1316"))
        .respond_with(ResponseTemplate::new(200).set_body_string(format!(
            "operator=Digicel Jamaica\r\nproduct_list=5,10\r\n{}",
            SUCCESS_BODY
        )))
        .expect(1)
        .mount(&server)
        .await;

    let client = BlockingProviderClient::new(LOGIN, TOKEN, UreqClient::new())
        .unwrap()
        .with_endpoint(&format!("{}{}", server.uri(), TOPUP_PATH))
        .unwrap();
    let doc = client.get_operator("1316").unwrap();

    assert_eq!(doc.get_str("operator"), Some("Digicel Jamaica"));
    assert_eq!(doc.get_list("product_list").map(|l| l.len()), Some(2));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_blocking_ureq_byte_order_mark() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(TOPUP_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            "\u{feff}error_code=0\r\nerror_txt=Transaction successful\r\ntransactionid=42",
        ))
        .mount(&server)
        .await;

    let client = BlockingProviderClient::new(LOGIN, TOKEN, UreqClient::new())
        .unwrap()
        .with_endpoint(&format!("{}{}", server.uri(), TOPUP_PATH))
        .unwrap();
    let doc = client
        .topup(&TopupRequest::new("18765555555"))
        .expect("a BOM-prefixed success is still a success");

    assert_eq!(doc.error_code(), Some("0"));
    assert_eq!(doc.get_str("transactionid"), Some("42"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_blocking_ureq_http_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal error"))
        .mount(&server)
        .await;

    let client = BlockingProviderClient::new(LOGIN, TOKEN, UreqClient::with_timeout(5))
        .unwrap()
        .with_endpoint(&server.uri())
        .unwrap();
    let err = client.get_countries().unwrap_err();

    assert!(matches!(err, Error::HttpStatus { status: 500, .. }));
}
