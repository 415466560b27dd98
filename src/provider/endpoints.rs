//! URLs exposed by a Casdoor deployment.

// self
use crate::{_prelude::*, auth::AuthPage, error::ConfigError};

const TOKEN_PATH: &str = "api/login/oauth/access_token";

/// Endpoint set derived from a Casdoor base URL.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CasdoorEndpoints {
	/// Authorization endpoint rendering the login page.
	pub login: Url,
	/// Authorization endpoint rendering the signup page.
	pub signup: Url,
	/// Token endpoint used for code exchanges.
	pub token: Url,
}
impl CasdoorEndpoints {
	/// Derives the endpoint set from `base`, ignoring any trailing slash.
	///
	/// Bases with a query or fragment are rejected; the paths are appended to the URL text.
	pub fn from_base(base: &Url) -> Result<Self, ConfigError> {
		if base.query().is_some() || base.fragment().is_some() {
			return Err(ConfigError::EndpointQuery { url: base.to_string() });
		}

		let root = base.as_str().trim_end_matches('/');
		let join = |path: &str| {
			Url::parse(&format!("{root}/{path}"))
				.map_err(|source| ConfigError::InvalidEndpoint { source })
		};

		Ok(Self {
			login: join(AuthPage::Login.authorize_path())?,
			signup: join(AuthPage::Signup.authorize_path())?,
			token: join(TOKEN_PATH)?,
		})
	}

	/// Returns the authorization endpoint for `page`.
	pub fn authorize(&self, page: AuthPage) -> &Url {
		match page {
			AuthPage::Login => &self.login,
			AuthPage::Signup => &self.signup,
		}
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn derives_casdoor_paths_without_double_slashes() {
		let base = Url::parse("https://door.example.com/").expect("Base URL fixture should parse.");
		let endpoints = CasdoorEndpoints::from_base(&base).expect("Endpoints should derive.");

		assert_eq!(endpoints.login.as_str(), "https://door.example.com/login/oauth/authorize");
		assert_eq!(endpoints.signup.as_str(), "https://door.example.com/signup/oauth/authorize");
		assert_eq!(
			endpoints.token.as_str(),
			"https://door.example.com/api/login/oauth/access_token"
		);
	}

	#[test]
	fn keeps_base_path_prefix() {
		let base =
			Url::parse("https://example.com/casdoor").expect("Base URL fixture should parse.");
		let endpoints = CasdoorEndpoints::from_base(&base).expect("Endpoints should derive.");

		assert_eq!(
			endpoints.authorize(AuthPage::Signup).as_str(),
			"https://example.com/casdoor/signup/oauth/authorize"
		);
	}

	#[test]
	fn query_on_base_is_rejected() {
		let base =
			Url::parse("https://door.example.com/?tenant=x").expect("Base URL fixture should parse.");
		let err = CasdoorEndpoints::from_base(&base)
			.expect_err("A query on the base would swallow the derived paths.");

		assert!(matches!(err, ConfigError::EndpointQuery { .. }));
	}
}
