mod common;

// crates.io
use httpmock::prelude::*;
// self
use casdoor_bridge::{
	CasdoorConfig, ReqwestCasdoorClient,
	error::{Error, UpstreamError},
};
use common::*;

#[tokio::test]
async fn exchange_posts_code_and_credentials_and_returns_payload_unmodified() {
	let server = MockServer::start_async().await;
	let client = client_for(&server);
	let mock = server
		.mock_async(|when, then| {
			when.method(POST)
				.path(TOKEN_PATH)
				.header("content-type", "application/x-www-form-urlencoded")
				.form_urlencoded_tuple("grant_type", "authorization_code")
				.form_urlencoded_tuple("client_id", CLIENT_ID)
				.form_urlencoded_tuple("client_secret", CLIENT_SECRET)
				.form_urlencoded_tuple("code", "code-it");
			then.status(200).header("content-type", "application/json").body(
				"{\"access_token\":\"access-it\",\"id_token\":\"header.payload.signature\",\"custom\":{\"nested\":[1,2]}}",
			);
		})
		.await;
	let token = client.exchange_code("code-it").await.expect("Exchange should succeed.");

	mock.assert_async().await;

	assert_eq!(token.access_token(), Some("access-it"));
	assert_eq!(token.id_token(), Some("header.payload.signature"));
	assert_eq!(token.0["custom"]["nested"][1], 2);
}

#[tokio::test]
async fn blank_codes_never_reach_the_network() {
	let server = MockServer::start_async().await;
	let client = client_for(&server);
	let mock = server
		.mock_async(|when, then| {
			when.method(POST).path(TOKEN_PATH);
			then.status(200).body("{}");
		})
		.await;
	let err = client.exchange_code("   ").await.expect_err("Blank codes should be rejected.");

	assert!(matches!(err, Error::MissingCode));

	mock.assert_calls_async(0).await;
}

#[tokio::test]
async fn provider_errors_are_classified() {
	let server = MockServer::start_async().await;
	let client = client_for(&server);
	let grant_mock = server
		.mock_async(|when, then| {
			when.method(POST).path(TOKEN_PATH).form_urlencoded_tuple("code", "used-code");
			then.status(400)
				.header("content-type", "application/json")
				.body("{\"error\":\"invalid_grant\",\"error_description\":\"code already used\"}");
		})
		.await;
	let client_mock = server
		.mock_async(|when, then| {
			when.method(POST).path(TOKEN_PATH).form_urlencoded_tuple("code", "bad-client");
			then.status(200)
				.header("content-type", "application/json")
				.body("{\"error\":\"invalid_client\",\"error_description\":\"client secret mismatch\"}");
		})
		.await;
	let outage_mock = server
		.mock_async(|when, then| {
			when.method(POST).path(TOKEN_PATH).form_urlencoded_tuple("code", "outage");
			then.status(503).body("<html>maintenance</html>");
		})
		.await;
	let err = client.exchange_code("used-code").await.expect_err("Used codes should fail.");

	assert!(matches!(err, Error::InvalidGrant { ref reason } if reason.contains("code already used")));

	let err = client.exchange_code("bad-client").await.expect_err("Bad clients should fail.");

	assert!(matches!(err, Error::InvalidClient { .. }));

	let err = client.exchange_code("outage").await.expect_err("Outages should fail.");

	assert!(matches!(
		err,
		Error::Upstream(UpstreamError::TokenEndpoint { status: Some(503), .. })
	));

	grant_mock.assert_async().await;
	client_mock.assert_async().await;
	outage_mock.assert_async().await;
}

#[tokio::test]
async fn non_json_success_bodies_are_parse_errors() {
	let server = MockServer::start_async().await;
	let client = client_for(&server);
	let mock = server
		.mock_async(|when, then| {
			when.method(POST).path(TOKEN_PATH);
			then.status(200).header("content-type", "text/html").body("<html>login</html>");
		})
		.await;
	let err = client.exchange_code("code-it").await.expect_err("HTML should not parse.");

	mock.assert_async().await;

	assert!(matches!(err, Error::Upstream(UpstreamError::TokenResponseParse { .. })));
}

#[tokio::test]
async fn unreachable_endpoints_are_transport_errors() {
	let config = CasdoorConfig::builder("http://127.0.0.1:1", CLIENT_ID, CLIENT_SECRET, CERTIFICATE)
		.application(APPLICATION)
		.build()
		.expect("Configuration should build.");
	let client = ReqwestCasdoorClient::new(config).expect("Client should build.");
	let err = client.exchange_code("code-it").await.expect_err("Closed ports should fail.");

	assert!(matches!(err, Error::Transport(_)));
}
