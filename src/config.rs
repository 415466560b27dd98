//! Process-wide Casdoor configuration.
//!
//! [`CasdoorConfig`] is assembled once at startup, either through [`CasdoorConfigBuilder`] or
//! from the environment ([`CasdoorConfig::from_env`]), and then shared behind `Arc` by every
//! handler. Nothing in the crate reads environment variables after construction.

/// Builder API for assembling configurations.
pub mod builder;
/// Environment-variable loading.
pub mod env;

pub use builder::*;
pub use env::*;

// std
use std::time::Duration as StdDuration;
// crates.io
use oauth2::ClientSecret;
// self
use crate::_prelude::*;

/// Redirect URI used when none is configured.
pub const DEFAULT_REDIRECT_URI: &str = "http://localhost:8000/casdoor/callback";
/// Scope requested when none is configured.
pub const DEFAULT_SCOPE: &str = "openid profile email";
/// Clock skew tolerated when checking `exp` and `nbf`.
pub const DEFAULT_LEEWAY_SECS: u64 = 60;

/// Explicit ID token validation policy.
///
/// Expiry is always required and checked. Audience validation compares `aud` against the
/// configured client identifier. The issuer is only checked when one is configured.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VerificationPolicy {
	/// Seconds of clock skew tolerated for `exp`/`nbf`.
	pub leeway_secs: u64,
	/// Require `aud` to contain the client identifier.
	pub validate_audience: bool,
	/// Expected `iss` value, if any.
	pub issuer: Option<String>,
}
impl Default for VerificationPolicy {
	fn default() -> Self {
		Self { leeway_secs: DEFAULT_LEEWAY_SECS, validate_audience: true, issuer: None }
	}
}

/// Immutable Casdoor application settings.
#[derive(Clone)]
pub struct CasdoorConfig {
	/// Casdoor base URL (e.g., `https://door.example.com`).
	pub endpoint: Url,
	/// OAuth client identifier of the Casdoor application.
	pub client_id: String,
	/// OAuth client secret of the Casdoor application.
	pub client_secret: ClientSecret,
	/// PEM certificate (or SPKI public key) used to verify ID tokens.
	pub certificate: String,
	/// Casdoor organization name.
	pub organization: String,
	/// Casdoor application name.
	pub application: String,
	/// Redirect URI registered with the application.
	pub redirect_uri: Url,
	/// Space-delimited scope requested on authorization.
	pub scope: String,
	/// Opaque `state` echoed back by Casdoor on callback.
	pub state: String,
	/// Optional timeout applied to token endpoint calls.
	pub http_timeout: Option<StdDuration>,
	/// ID token validation policy.
	pub verification: VerificationPolicy,
}
impl CasdoorConfig {
	/// Creates a new builder seeded with the mandatory Casdoor settings.
	pub fn builder(
		endpoint: impl Into<String>,
		client_id: impl Into<String>,
		client_secret: impl Into<String>,
		certificate: impl Into<String>,
	) -> CasdoorConfigBuilder {
		CasdoorConfigBuilder::new(endpoint, client_id, client_secret, certificate)
	}

	/// Returns a copy that authenticates with different client credentials.
	///
	/// Used by the tool runtime, whose credentials may override the process defaults.
	pub fn with_client_credentials(
		&self,
		client_id: impl Into<String>,
		client_secret: impl Into<String>,
	) -> Self {
		let mut config = self.clone();

		config.client_id = client_id.into();
		config.client_secret = ClientSecret::new(client_secret.into());

		config
	}

	/// Returns a copy that redirects to `redirect_uri`.
	pub fn with_redirect_uri(&self, redirect_uri: Url) -> Self {
		let mut config = self.clone();

		config.redirect_uri = redirect_uri;

		config
	}
}
impl Debug for CasdoorConfig {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("CasdoorConfig")
			.field("endpoint", &self.endpoint.as_str())
			.field("client_id", &self.client_id)
			.field("organization", &self.organization)
			.field("application", &self.application)
			.field("redirect_uri", &self.redirect_uri.as_str())
			.field("scope", &self.scope)
			.field("state", &self.state)
			.field("http_timeout", &self.http_timeout)
			.field("verification", &self.verification)
			.finish_non_exhaustive()
	}
}
