// std
use std::{path::Path, time::Duration as StdDuration};
// self
use crate::{
	_prelude::*,
	config::{CasdoorConfig, CasdoorConfigBuilder, VerificationPolicy},
	error::ConfigError,
};

/// PEM certificate used to verify ID tokens.
pub const ENV_CERT: &str = "CASDOOR_CERT";
/// Casdoor base URL.
pub const ENV_ENDPOINT: &str = "CASDOOR_ENDPOINT";
/// OAuth client identifier.
pub const ENV_CLIENT_ID: &str = "CASDOOR_CLIENT_ID";
/// OAuth client secret.
pub const ENV_CLIENT_SECRET: &str = "CASDOOR_CLIENT_SECRET";
/// Casdoor organization name.
pub const ENV_ORG_NAME: &str = "CASDOOR_ORG_NAME";
/// Casdoor application name.
pub const ENV_APP_NAME: &str = "CASDOOR_APP_NAME";
/// Optional redirect URI override.
pub const ENV_REDIRECT_URI: &str = "CASDOOR_REDIRECT_URI";
/// Optional scope override.
pub const ENV_SCOPE: &str = "CASDOOR_SCOPE";
/// Optional `state` override.
pub const ENV_STATE: &str = "CASDOOR_STATE";
/// Optional JWT leeway in seconds.
pub const ENV_JWT_LEEWAY: &str = "CASDOOR_JWT_LEEWAY";
/// Optional expected issuer.
pub const ENV_ISSUER: &str = "CASDOOR_ISSUER";
/// Optional token endpoint timeout in seconds.
pub const ENV_HTTP_TIMEOUT_SECS: &str = "CASDOOR_HTTP_TIMEOUT_SECS";

impl CasdoorConfig {
	/// Reads the configuration from the process environment.
	///
	/// Every required variable must be present and non-blank; the first missing one aborts
	/// construction.
	pub fn from_env() -> Result<Self, ConfigError> {
		Self::from_lookup(|name| std::env::var(name).ok())
	}

	/// Loads a `.env` file (the given path, or the nearest `.env` when `None`) and then reads
	/// the process environment.
	pub fn from_dotenv(path: Option<&Path>) -> Result<Self, ConfigError> {
		load_env_file(path)?;

		Self::from_env()
	}

	/// Builds the configuration from an arbitrary variable lookup.
	pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
	where
		F: Fn(&str) -> Option<String>,
	{
		let optional = |name: &str| lookup(name).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());
		let required = |name: &'static str| optional(name).ok_or(ConfigError::MissingVar { name });
		let certificate = required(ENV_CERT)?;
		let endpoint = required(ENV_ENDPOINT)?;
		let client_id = required(ENV_CLIENT_ID)?;
		let client_secret = required(ENV_CLIENT_SECRET)?;
		let organization = required(ENV_ORG_NAME)?;
		let application = required(ENV_APP_NAME)?;
		let mut builder =
			CasdoorConfigBuilder::new(endpoint, client_id, client_secret, certificate)
				.organization(organization)
				.application(application);

		if let Some(redirect_uri) = optional(ENV_REDIRECT_URI) {
			builder = builder.redirect_uri(redirect_uri);
		}
		if let Some(scope) = optional(ENV_SCOPE) {
			builder = builder.scope(scope);
		}
		if let Some(state) = optional(ENV_STATE) {
			builder = builder.state(state);
		}
		if let Some(raw) = optional(ENV_HTTP_TIMEOUT_SECS) {
			builder = builder
				.http_timeout(StdDuration::from_secs(parse_secs(ENV_HTTP_TIMEOUT_SECS, raw)?));
		}

		let mut policy = VerificationPolicy::default();

		if let Some(raw) = optional(ENV_JWT_LEEWAY) {
			policy.leeway_secs = parse_secs(ENV_JWT_LEEWAY, raw)?;
		}

		policy.issuer = optional(ENV_ISSUER);

		builder.verification(policy).build()
	}
}

/// Loads a `.env` file into the process environment without overriding existing variables.
///
/// A missing default `.env` is not an error; an explicit path that cannot be read is.
pub fn load_env_file(path: Option<&Path>) -> Result<(), ConfigError> {
	match path {
		Some(path) => {
			dotenvy::from_path(path)?;
		},
		None => match dotenvy::dotenv() {
			Ok(_) => {},
			Err(e) if e.not_found() => {},
			Err(e) => return Err(e.into()),
		},
	}

	Ok(())
}

fn parse_secs(name: &'static str, raw: String) -> Result<u64, ConfigError> {
	raw.parse().map_err(|_| ConfigError::InvalidNumber { name, value: raw })
}
