//! Token endpoint payload kept verbatim.

// self
use crate::_prelude::*;

/// JSON object returned by the Casdoor token endpoint, unmodified.
///
/// The payload carries live credentials, so [`Debug`] only lists the field names.
#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenResponse(pub Map<String, Value>);
impl TokenResponse {
	/// Parses a token endpoint body, reporting the JSON path of any failure.
	pub fn from_slice(body: &[u8]) -> Result<Self, serde_path_to_error::Error<serde_json::Error>> {
		let de = &mut serde_json::Deserializer::from_slice(body);

		serde_path_to_error::deserialize(de)
	}

	fn get_str(&self, name: &str) -> Option<&str> {
		self.0.get(name).and_then(Value::as_str).filter(|s| !s.is_empty())
	}

	/// OpenID Connect ID token.
	pub fn id_token(&self) -> Option<&str> {
		self.get_str("id_token")
	}

	/// OAuth access token.
	pub fn access_token(&self) -> Option<&str> {
		self.get_str("access_token")
	}

	/// OAuth `error` code, which Casdoor may return with a 200 status.
	pub fn error(&self) -> Option<&str> {
		self.get_str("error")
	}

	/// OAuth `error_description`.
	pub fn error_description(&self) -> Option<&str> {
		self.get_str("error_description")
	}

	/// Consumes the wrapper and returns the raw map.
	pub fn into_inner(self) -> Map<String, Value> {
		self.0
	}
}
impl Debug for TokenResponse {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_tuple("TokenResponse").field(&self.0.keys().collect::<Vec<_>>()).finish()
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn debug_output_redacts_values() {
		let response = TokenResponse::from_slice(
			br#"{"access_token":"super-secret","id_token":"also-secret","token_type":"Bearer"}"#,
		)
		.expect("Token body fixture should parse.");
		let rendered = format!("{response:?}");

		assert!(!rendered.contains("super-secret"));
		assert!(rendered.contains("access_token"));
		assert_eq!(response.id_token(), Some("also-secret"));
		assert_eq!(response.error(), None);
	}

	#[test]
	fn non_object_bodies_report_a_parse_error() {
		assert!(TokenResponse::from_slice(b"[1, 2, 3]").is_err());
		assert!(TokenResponse::from_slice(b"<html>").is_err());
	}
}
