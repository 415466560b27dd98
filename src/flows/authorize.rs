//! URL Builder: Casdoor login and signup authorization URLs.

// self
use crate::{
	_prelude::*,
	auth::AuthPage,
	flows::CasdoorClient,
	http::TokenHttpClient,
	obs::{FlowKind, FlowOutcome, FlowSpan, record_flow_outcome},
	oauth::TransportErrorMapper,
};

/// Parameters of one authorization redirect.
#[derive(Clone, Copy, Debug)]
pub struct AuthorizeParams<'a> {
	/// OAuth client identifier.
	pub client_id: &'a str,
	/// Redirect URI Casdoor sends the code to.
	pub redirect_uri: &'a Url,
	/// Space-delimited scope.
	pub scope: &'a str,
	/// Opaque state echoed back on callback.
	pub state: &'a str,
}

/// Composes the authorization URL for `params` on top of `authorize_endpoint`.
///
/// Login and signup URLs differ only in the endpoint path; the query is identical.
pub fn build_authorize_url(authorize_endpoint: &Url, params: AuthorizeParams<'_>) -> Url {
	let mut url = authorize_endpoint.clone();
	let mut pairs = url.query_pairs_mut();

	pairs.append_pair("client_id", params.client_id);
	pairs.append_pair("redirect_uri", params.redirect_uri.as_str());
	pairs.append_pair("response_type", "code");
	pairs.append_pair("scope", params.scope);
	pairs.append_pair("state", params.state);

	drop(pairs);

	url
}

impl<C, M> CasdoorClient<C, M>
where
	C: ?Sized + TokenHttpClient,
	M: ?Sized + TransportErrorMapper<C::TransportError>,
{
	/// Builds the authorization URL for `page`, optionally overriding the redirect URI.
	pub fn authorize_url(&self, page: AuthPage, redirect_uri: Option<&Url>) -> Url {
		const STAGE: &str = "authorize_url";

		let kind = FlowKind::from(page);
		let _guard = FlowSpan::new(kind, STAGE).entered();

		record_flow_outcome(kind, STAGE, FlowOutcome::Attempt);

		let url = build_authorize_url(
			self.endpoints.authorize(page),
			AuthorizeParams {
				client_id: &self.config.client_id,
				redirect_uri: redirect_uri.unwrap_or(&self.config.redirect_uri),
				scope: &self.config.scope,
				state: &self.config.state,
			},
		);

		record_flow_outcome(kind, STAGE, FlowOutcome::Success);
		tracing::info!(page = page.as_str(), "Built Casdoor authorization URL.");

		url
	}

	/// Authorization URL for the login page.
	pub fn login_url(&self) -> Url {
		self.authorize_url(AuthPage::Login, None)
	}

	/// Authorization URL for the signup page.
	pub fn signup_url(&self) -> Url {
		self.authorize_url(AuthPage::Signup, None)
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn query_carries_every_authorization_parameter() {
		let endpoint = Url::parse("https://door.example.com/login/oauth/authorize")
			.expect("Endpoint fixture should parse.");
		let redirect =
			Url::parse("https://app.example.com/cb?x=1").expect("Redirect fixture should parse.");
		let url = build_authorize_url(
			&endpoint,
			AuthorizeParams {
				client_id: "client",
				redirect_uri: &redirect,
				scope: "openid profile",
				state: "app",
			},
		);
		let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();

		assert_eq!(
			pairs,
			vec![
				("client_id".into(), "client".into()),
				("redirect_uri".into(), "https://app.example.com/cb?x=1".into()),
				("response_type".into(), "code".into()),
				("scope".into(), "openid profile".into()),
				("state".into(), "app".into()),
			]
		);
		assert_eq!(url.path(), "/login/oauth/authorize");
	}
}
