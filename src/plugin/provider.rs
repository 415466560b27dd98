//! Provider half of the tool pair: runtime credential validation.

// self
use crate::{
	_prelude::*,
	config::CasdoorConfig,
	error::ConfigError,
	flows::ReqwestCasdoorClient,
	http::ReqwestHttpClient,
	oauth::ReqwestTransportErrorMapper,
	plugin::{CasdoorAuthTool, ToolCredentials, ToolParameters},
};

/// Error reported to the host when credential validation fails.
#[derive(Debug, ThisError)]
#[error("{message}")]
pub struct CredentialValidationError {
	/// Human-readable reason.
	pub message: String,
	/// Underlying bridge error.
	#[source]
	pub source: Error,
}
impl From<Error> for CredentialValidationError {
	fn from(source: Error) -> Self {
		Self { message: source.to_string(), source }
	}
}

/// Provider validating the credentials stored for [`CasdoorAuthTool`].
#[derive(Clone, Debug)]
pub struct CasdoorProvider {
	config: Arc<CasdoorConfig>,
	http_client: Option<ReqwestHttpClient>,
}
impl CasdoorProvider {
	/// Creates a provider backed by the process configuration.
	pub fn new(config: impl Into<Arc<CasdoorConfig>>) -> Self {
		Self { config: config.into(), http_client: None }
	}

	/// Uses `http_client` for the credential probe instead of a fresh client.
	pub fn with_http_client(mut self, http_client: ReqwestHttpClient) -> Self {
		self.http_client = Some(http_client);

		self
	}

	/// Validates `credentials`: both must be present, the tool must produce a login URL, and
	/// Casdoor must not reject the client during a throwaway code exchange.
	///
	/// This confirms the client id and that Casdoor is reachable. A wrong secret may still pass,
	/// since Casdoor can reject the code before it checks the secret.
	pub async fn validate_credentials(
		&self,
		credentials: &ToolCredentials,
	) -> Result<(), CredentialValidationError> {
		let Some((client_id, client_secret)) = credentials.complete() else {
			let name = if credentials.client_id.as_deref().is_none_or(|v| v.trim().is_empty()) {
				"casdoor_client_id"
			} else {
				"casdoor_client_secret"
			};

			return Err(Error::from(ConfigError::MissingCredential { name }).into());
		};

		CasdoorAuthTool::from_credentials(&self.config, credentials)
			.map_err(Error::from)?
			.invoke(&ToolParameters { action: Some("login".into()) })?;

		let config = self.config.with_client_credentials(client_id, client_secret);
		let http_client = match &self.http_client {
			Some(http_client) => http_client.clone(),
			None => ReqwestHttpClient::new(config.http_timeout).map_err(Error::from)?,
		};
		let client =
			ReqwestCasdoorClient::with_http_client(config, http_client, ReqwestTransportErrorMapper)?;

		client.probe_credentials().await?;

		tracing::info!(client_id, "Casdoor did not reject the tool client.");

		Ok(())
	}
}
