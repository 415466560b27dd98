//! Tool/provider pair for hosts that invoke tools instead of routing HTTP requests.
//!
//! [`CasdoorAuthTool`] turns `action=login|signup` into an authorization URL text message.
//! [`CasdoorProvider`] validates the runtime credentials the host stores for the tool.

pub mod provider;
pub mod tool;

pub use provider::*;
pub use tool::*;

// self
use crate::_prelude::*;

/// Credentials the host stores for the tool, keyed as in the host manifest.
#[derive(Clone, Default, Deserialize)]
pub struct ToolCredentials {
	/// Overrides the configured client identifier.
	#[serde(default, rename = "casdoor_client_id")]
	pub client_id: Option<String>,
	/// Overrides the configured client secret.
	#[serde(default, rename = "casdoor_client_secret")]
	pub client_secret: Option<String>,
}
impl ToolCredentials {
	/// Reads the credentials from the host's string map.
	pub fn from_map(map: &HashMap<String, String>) -> Self {
		Self {
			client_id: map.get("casdoor_client_id").cloned(),
			client_secret: map.get("casdoor_client_secret").cloned(),
		}
	}

	/// Returns both credentials, or `None` when either is absent or blank.
	pub fn complete(&self) -> Option<(&str, &str)> {
		let id = self.client_id.as_deref().filter(|v| !v.trim().is_empty())?;
		let secret = self.client_secret.as_deref().filter(|v| !v.trim().is_empty())?;

		Some((id, secret))
	}
}
impl Debug for ToolCredentials {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("ToolCredentials")
			.field("client_id", &self.client_id)
			.field("client_secret_set", &self.client_secret.is_some())
			.finish()
	}
}
