//! Bridge-level error types shared across configuration, exchanges, and verification.

// self
use crate::_prelude::*;

/// Bridge-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn StdError + Send + Sync>;

/// Canonical bridge error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Local configuration problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Token endpoint answered with something other than a usable token payload.
	#[error(transparent)]
	Upstream(#[from] UpstreamError),
	/// Transport failure (DNS, TCP, TLS).
	#[error(transparent)]
	Transport(#[from] TransportError),
	/// ID token failed signature or claim validation.
	#[error(transparent)]
	Verification(#[from] VerificationError),

	/// Callback arrived without an authorization code.
	#[error("Missing authorization code.")]
	MissingCode,
	/// Token endpoint succeeded but did not include an `id_token`.
	#[error("Token response missing id_token.")]
	MissingIdToken,
	/// Callback `state` does not match the configured value.
	#[error("Authorization state mismatch.")]
	StateMismatch,
	/// Plugin action is not one of the supported verbs.
	#[error("Unsupported action `{action}`; use login, signup, or callback.")]
	InvalidAction {
		/// Action string received from the caller.
		action: String,
	},
	/// Provider rejected the grant (e.g., unknown or reused code).
	#[error("Provider rejected the grant: {reason}.")]
	InvalidGrant {
		/// Provider-supplied reason string.
		reason: String,
	},
	/// Client authentication failed or credentials are malformed.
	#[error("Client authentication failed: {reason}.")]
	InvalidClient {
		/// Provider-supplied reason string.
		reason: String,
	},
}

/// Configuration and validation failures raised while assembling the bridge.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// Required environment variable is absent or blank.
	#[error("Environment variable `{name}` is required.")]
	MissingVar {
		/// Variable name.
		name: &'static str,
	},
	/// Required credential is absent or blank.
	#[error("Missing Casdoor client credential `{name}`.")]
	MissingCredential {
		/// Credential field name.
		name: &'static str,
	},
	/// Numeric setting cannot be parsed.
	#[error("Setting `{name}` must be a non-negative integer, got `{value}`.")]
	InvalidNumber {
		/// Setting name.
		name: &'static str,
		/// Raw value supplied.
		value: String,
	},
	/// Casdoor endpoint or a derived endpoint is not a valid URL.
	#[error("Casdoor endpoint is invalid.")]
	InvalidEndpoint {
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// Redirect URI cannot be parsed.
	#[error("Redirect URI is invalid.")]
	InvalidRedirect {
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// URL uses a scheme other than `http` or `https`.
	#[error("The {field} URL must use http or https: {url}.")]
	UnsupportedScheme {
		/// Which URL failed validation.
		field: &'static str,
		/// URL that failed validation.
		url: String,
	},
	/// Casdoor endpoint carries a query or fragment, so derived paths would not land in the path.
	#[error("Casdoor endpoint must not have a query or fragment: {url}.")]
	EndpointQuery {
		/// URL that failed validation.
		url: String,
	},
	/// Certificate cannot be turned into an RSA verification key.
	#[error("Casdoor certificate is not a valid RSA PEM.")]
	InvalidCertificate {
		/// Underlying key parsing failure.
		#[source]
		source: jsonwebtoken::errors::Error,
	},
	/// `.env` file could not be loaded.
	#[error("Unable to load the environment file.")]
	EnvFile(#[from] dotenvy::Error),
	/// HTTP client could not be constructed.
	#[error("HTTP client could not be constructed.")]
	HttpClientBuild {
		/// Underlying transport builder failure.
		#[source]
		source: BoxError,
	},
	/// HTTP request construction failed.
	#[error(transparent)]
	HttpRequest(#[from] oauth2::http::Error),
}
impl ConfigError {
	/// Wraps a transport's builder failure inside [`ConfigError`].
	pub fn http_client_build(src: impl 'static + Send + Sync + StdError) -> Self {
		Self::HttpClientBuild { source: Box::new(src) }
	}
}
impl From<ReqwestError> for ConfigError {
	fn from(e: ReqwestError) -> Self {
		Self::http_client_build(e)
	}
}

/// Token endpoint failures that are not classified as grant or client errors.
#[derive(Debug, ThisError)]
pub enum UpstreamError {
	/// Provider returned an unexpected response.
	#[error("Token endpoint returned an unexpected response: {message}.")]
	TokenEndpoint {
		/// Provider- or bridge-supplied message summarizing the failure.
		message: String,
		/// HTTP status code, when available.
		status: Option<u16>,
	},
	/// Token endpoint responded with a body that is not a JSON object.
	#[error("Token endpoint returned malformed JSON.")]
	TokenResponseParse {
		/// Structured parsing failure.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
		/// HTTP status code, when available.
		status: Option<u16>,
	},
}

/// Transport-level failures (network, IO).
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// Underlying HTTP client reported a network failure.
	#[error("Network error occurred while calling the token endpoint.")]
	Network {
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
	/// Underlying IO failure surfaced during transport.
	#[error("I/O error occurred while calling the token endpoint.")]
	Io(#[from] std::io::Error),
}
impl TransportError {
	/// Wraps a transport-specific network error.
	pub fn network(src: impl 'static + Send + Sync + StdError) -> Self {
		Self::Network { source: Box::new(src) }
	}
}
impl From<ReqwestError> for TransportError {
	fn from(e: ReqwestError) -> Self {
		Self::network(e)
	}
}

/// ID token verification failures, as reported by the JWT primitive.
#[derive(Debug, ThisError)]
pub enum VerificationError {
	/// `exp` lies in the past beyond the configured leeway.
	#[error("ID token has expired.")]
	Expired,
	/// `nbf` lies in the future beyond the configured leeway.
	#[error("ID token is not valid yet.")]
	Immature,
	/// Signature does not match the configured certificate.
	#[error("ID token signature is invalid.")]
	InvalidSignature,
	/// `aud` does not contain the client identifier.
	#[error("ID token audience does not match the client.")]
	InvalidAudience,
	/// `iss` does not match the configured issuer.
	#[error("ID token issuer does not match.")]
	InvalidIssuer,
	/// Token is structurally invalid or uses an unexpected algorithm.
	#[error("ID token is malformed.")]
	Malformed {
		/// Underlying decoding failure.
		#[source]
		source: jsonwebtoken::errors::Error,
	},
}
impl From<jsonwebtoken::errors::Error> for VerificationError {
	fn from(e: jsonwebtoken::errors::Error) -> Self {
		use jsonwebtoken::errors::ErrorKind;

		match e.kind() {
			ErrorKind::ExpiredSignature => Self::Expired,
			ErrorKind::ImmatureSignature => Self::Immature,
			ErrorKind::InvalidSignature => Self::InvalidSignature,
			ErrorKind::InvalidAudience => Self::InvalidAudience,
			ErrorKind::InvalidIssuer => Self::InvalidIssuer,
			_ => Self::Malformed { source: e },
		}
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn jwt_error_kinds_map_to_verification_variants() {
		let expired = jsonwebtoken::errors::Error::from(
			jsonwebtoken::errors::ErrorKind::ExpiredSignature,
		);

		assert!(matches!(VerificationError::from(expired), VerificationError::Expired));

		let malformed =
			jsonwebtoken::errors::Error::from(jsonwebtoken::errors::ErrorKind::InvalidToken);

		assert!(matches!(VerificationError::from(malformed), VerificationError::Malformed { .. }));
	}

	#[test]
	fn display_messages_stay_human_readable() {
		assert_eq!(Error::MissingCode.to_string(), "Missing authorization code.");
		assert_eq!(
			Error::from(ConfigError::MissingVar { name: "CASDOOR_CERT" }).to_string(),
			"Environment variable `CASDOOR_CERT` is required."
		);
	}
}
