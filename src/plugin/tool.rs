//! Tool half of the pair: login and signup URLs as text messages.

// self
use crate::{
	_prelude::*,
	auth::AuthAction,
	config::CasdoorConfig,
	error::ConfigError,
	flows::{AuthorizeParams, build_authorize_url},
	plugin::ToolCredentials,
	provider::CasdoorEndpoints,
};

/// Parameters passed by the host on invocation.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ToolParameters {
	/// Requested action; `login` or `signup`.
	#[serde(default)]
	pub action: Option<String>,
}

/// Message returned to the host.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "message", rename_all = "snake_case")]
pub enum ToolMessage {
	/// Plain text payload.
	Text(String),
}

/// Tool producing Casdoor login/signup URLs.
#[derive(Clone, Debug)]
pub struct CasdoorAuthTool {
	config: Arc<CasdoorConfig>,
	endpoints: CasdoorEndpoints,
}
impl CasdoorAuthTool {
	/// Builds a tool from the process configuration.
	pub fn new(config: impl Into<Arc<CasdoorConfig>>) -> Result<Self, ConfigError> {
		let config = config.into();
		let endpoints = CasdoorEndpoints::from_base(&config.endpoint)?;

		Ok(Self { config, endpoints })
	}

	/// Builds a tool whose runtime credentials override the configured ones.
	///
	/// Each credential falls back to the configured value when absent.
	pub fn from_credentials(
		config: &CasdoorConfig,
		credentials: &ToolCredentials,
	) -> Result<Self, ConfigError> {
		let client_id = credentials.client_id.clone().unwrap_or_else(|| config.client_id.clone());
		let client_secret = credentials
			.client_secret
			.clone()
			.unwrap_or_else(|| config.client_secret.secret().to_owned());

		Self::new(config.with_client_credentials(client_id, client_secret))
	}

	/// Overrides the redirect URI with the host's custom runtime value.
	pub fn with_redirect_uri(mut self, redirect_uri: &str) -> Result<Self, ConfigError> {
		let redirect_uri =
			Url::parse(redirect_uri).map_err(|source| ConfigError::InvalidRedirect { source })?;

		self.config = Arc::new(self.config.with_redirect_uri(redirect_uri));

		Ok(self)
	}

	/// Configuration the tool resolved, including runtime overrides.
	pub fn config(&self) -> &CasdoorConfig {
		&self.config
	}

	/// Returns the authorization URL for `login` or `signup` as a text message.
	pub fn invoke(&self, parameters: &ToolParameters) -> Result<ToolMessage> {
		let raw = parameters.action.as_deref().unwrap_or_default();
		let page = raw
			.parse::<AuthAction>()
			.ok()
			.and_then(AuthAction::page)
			.ok_or_else(|| Error::InvalidAction { action: raw.to_owned() })?;
		let url = build_authorize_url(
			self.endpoints.authorize(page),
			AuthorizeParams {
				client_id: &self.config.client_id,
				redirect_uri: &self.config.redirect_uri,
				scope: &self.config.scope,
				state: &self.config.state,
			},
		);

		tracing::info!(page = page.as_str(), "Tool produced Casdoor authorization URL.");

		Ok(ToolMessage::Text(url.into()))
	}
}
