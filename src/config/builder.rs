// std
use std::time::Duration as StdDuration;
// crates.io
use oauth2::ClientSecret;
// self
use crate::{
	_prelude::*,
	config::{CasdoorConfig, DEFAULT_REDIRECT_URI, DEFAULT_SCOPE, VerificationPolicy},
	error::ConfigError,
	jwt::TokenVerifier,
};

/// Builder for [`CasdoorConfig`] values.
#[derive(Debug)]
pub struct CasdoorConfigBuilder {
	/// Raw Casdoor base URL.
	pub endpoint: String,
	/// OAuth client identifier.
	pub client_id: String,
	/// OAuth client secret.
	pub client_secret: ClientSecret,
	/// PEM certificate, possibly with escaped newlines.
	pub certificate: String,
	/// Casdoor organization name.
	pub organization: String,
	/// Casdoor application name.
	pub application: String,
	/// Optional redirect URI override.
	pub redirect_uri: Option<String>,
	/// Optional scope override.
	pub scope: Option<String>,
	/// Optional state override (defaults to the application name).
	pub state: Option<String>,
	/// Optional token endpoint timeout.
	pub http_timeout: Option<StdDuration>,
	/// ID token validation policy.
	pub verification: VerificationPolicy,
}
impl CasdoorConfigBuilder {
	/// Creates a new builder seeded with the mandatory settings.
	pub fn new(
		endpoint: impl Into<String>,
		client_id: impl Into<String>,
		client_secret: impl Into<String>,
		certificate: impl Into<String>,
	) -> Self {
		Self {
			endpoint: endpoint.into(),
			client_id: client_id.into(),
			client_secret: ClientSecret::new(client_secret.into()),
			certificate: certificate.into(),
			organization: String::new(),
			application: String::new(),
			redirect_uri: None,
			scope: None,
			state: None,
			http_timeout: None,
			verification: VerificationPolicy::default(),
		}
	}

	/// Sets the Casdoor organization name.
	pub fn organization(mut self, organization: impl Into<String>) -> Self {
		self.organization = organization.into();

		self
	}

	/// Sets the Casdoor application name.
	pub fn application(mut self, application: impl Into<String>) -> Self {
		self.application = application.into();

		self
	}

	/// Overrides the redirect URI.
	pub fn redirect_uri(mut self, redirect_uri: impl Into<String>) -> Self {
		self.redirect_uri = Some(redirect_uri.into());

		self
	}

	/// Overrides the requested scope.
	pub fn scope(mut self, scope: impl Into<String>) -> Self {
		self.scope = Some(scope.into());

		self
	}

	/// Overrides the `state` parameter.
	pub fn state(mut self, state: impl Into<String>) -> Self {
		self.state = Some(state.into());

		self
	}

	/// Sets a timeout for token endpoint calls.
	pub fn http_timeout(mut self, timeout: StdDuration) -> Self {
		self.http_timeout = Some(timeout);

		self
	}

	/// Overrides the verification policy.
	pub fn verification(mut self, policy: VerificationPolicy) -> Self {
		self.verification = policy;

		self
	}

	/// Consumes the builder and validates the resulting configuration.
	pub fn build(self) -> Result<CasdoorConfig, ConfigError> {
		if self.client_id.trim().is_empty() {
			return Err(ConfigError::MissingCredential { name: "client_id" });
		}
		if self.client_secret.secret().trim().is_empty() {
			return Err(ConfigError::MissingCredential { name: "client_secret" });
		}

		let endpoint = Url::parse(self.endpoint.trim())
			.map_err(|source| ConfigError::InvalidEndpoint { source })?;

		validate_scheme("endpoint", &endpoint)?;

		if endpoint.query().is_some() || endpoint.fragment().is_some() {
			return Err(ConfigError::EndpointQuery { url: endpoint.to_string() });
		}

		let redirect_uri = Url::parse(self.redirect_uri.as_deref().unwrap_or(DEFAULT_REDIRECT_URI))
			.map_err(|source| ConfigError::InvalidRedirect { source })?;

		validate_scheme("redirect", &redirect_uri)?;

		let certificate = normalize_certificate(&self.certificate);

		// Fail at startup rather than on the first callback.
		TokenVerifier::decoding_key(&certificate)?;

		let state = self.state.filter(|s| !s.is_empty()).unwrap_or_else(|| self.application.clone());

		Ok(CasdoorConfig {
			endpoint,
			client_id: self.client_id,
			client_secret: self.client_secret,
			certificate,
			organization: self.organization,
			application: self.application,
			redirect_uri,
			scope: self.scope.unwrap_or_else(|| DEFAULT_SCOPE.into()),
			state,
			http_timeout: self.http_timeout,
			verification: self.verification,
		})
	}
}

fn validate_scheme(field: &'static str, url: &Url) -> Result<(), ConfigError> {
	match url.scheme() {
		"http" | "https" => Ok(()),
		_ => Err(ConfigError::UnsupportedScheme { field, url: url.to_string() }),
	}
}

/// Expands `\n` escapes that survive single-line environment values.
pub(crate) fn normalize_certificate(raw: &str) -> String {
	raw.trim().trim_matches('"').replace("\\n", "\n")
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	const CERTIFICATE: &str = include_str!("../../tests/fixtures/certificate.pem");

	fn builder() -> CasdoorConfigBuilder {
		CasdoorConfig::builder("https://door.example.com/", "client", "secret", CERTIFICATE)
			.organization("built-in")
			.application("app-demo")
	}

	#[test]
	fn defaults_fill_optional_settings() {
		let config = builder().build().expect("Config with defaults should build.");

		assert_eq!(config.redirect_uri.as_str(), DEFAULT_REDIRECT_URI);
		assert_eq!(config.scope, DEFAULT_SCOPE);
		assert_eq!(config.state, "app-demo");
		assert_eq!(config.verification, VerificationPolicy::default());
		assert!(config.http_timeout.is_none());
	}

	#[test]
	fn rejects_non_http_endpoints_and_blank_credentials() {
		let err = CasdoorConfig::builder("ftp://door.example.com", "client", "secret", CERTIFICATE)
			.build()
			.expect_err("Non-http endpoints should be rejected.");

		assert!(matches!(err, ConfigError::UnsupportedScheme { field: "endpoint", .. }));

		let err = CasdoorConfig::builder("https://door.example.com", " ", "secret", CERTIFICATE)
			.build()
			.expect_err("Blank client identifiers should be rejected.");

		assert!(matches!(err, ConfigError::MissingCredential { name: "client_id" }));
	}

	#[test]
	fn rejects_endpoints_with_query_or_fragment() {
		for endpoint in ["https://door.example.com/?tenant=x", "https://door.example.com/#top"] {
			let err = CasdoorConfig::builder(endpoint, "client", "secret", CERTIFICATE)
				.build()
				.expect_err("Endpoints with a query or fragment should be rejected.");

			assert!(matches!(err, ConfigError::EndpointQuery { .. }), "{endpoint}");
		}
	}

	#[test]
	fn rejects_certificates_that_are_not_rsa_pem() {
		let err = CasdoorConfig::builder("https://door.example.com", "client", "secret", "nope")
			.build()
			.expect_err("Garbage certificates should be rejected.");

		assert!(matches!(err, ConfigError::InvalidCertificate { .. }));
	}

	#[test]
	fn escaped_newlines_are_expanded() {
		let escaped = CERTIFICATE.trim().replace('\n', "\\n");
		let config = CasdoorConfig::builder("https://door.example.com", "client", "secret", escaped)
			.build()
			.expect("Escaped certificates should be accepted.");

		assert_eq!(config.certificate, CERTIFICATE.trim());
	}
}
