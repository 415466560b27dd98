mod common;

// crates.io
use httpmock::prelude::*;
// self
use casdoor_bridge::{auth::AuthPage, url::Url};
use common::*;

fn query(url: &Url) -> Vec<(String, String)> {
	url.query_pairs().into_owned().collect()
}

#[tokio::test]
async fn login_and_signup_urls_differ_only_in_path() {
	let server = MockServer::start_async().await;
	let client = client_for(&server);
	let login = client.login_url();
	let signup = client.signup_url();

	assert_eq!(login.path(), "/login/oauth/authorize");
	assert_eq!(signup.path(), "/signup/oauth/authorize");
	assert_eq!(login.host_str(), signup.host_str());
	assert_eq!(login.port(), signup.port());
	assert_eq!(login.query(), signup.query());
	assert!(login.as_str().starts_with(&server.base_url()));
	assert_eq!(
		query(&login),
		vec![
			("client_id".into(), CLIENT_ID.into()),
			("redirect_uri".into(), "https://app.example.com/casdoor/callback".into()),
			("response_type".into(), "code".into()),
			("scope".into(), "openid profile email".into()),
			("state".into(), APPLICATION.into()),
		]
	);
}

#[tokio::test]
async fn redirect_uri_can_be_overridden_per_request() {
	let server = MockServer::start_async().await;
	let client = client_for(&server);
	let custom = Url::parse("https://other.example.com/auth/done")
		.expect("Custom redirect URI should parse.");
	let url = client.authorize_url(AuthPage::Signup, Some(&custom));
	let redirect = query(&url)
		.into_iter()
		.find_map(|(k, v)| (k == "redirect_uri").then_some(v))
		.expect("Authorization URL should carry redirect_uri.");

	assert_eq!(redirect, custom.as_str());
	assert_eq!(url.path(), "/signup/oauth/authorize");
}

#[tokio::test]
async fn url_building_never_touches_the_network() {
	let server = MockServer::start_async().await;
	let mock = server
		.mock_async(|_, then| {
			then.status(500);
		})
		.await;
	let client = client_for(&server);

	let _ = (client.login_url(), client.signup_url());

	mock.assert_calls_async(0).await;
}
