//! Claims decoded from a verified ID token.

// crates.io
use time::OffsetDateTime;
// self
use crate::_prelude::*;

/// Claim name to value mapping, exactly as embedded in the token.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Claims(pub Map<String, Value>);
impl Claims {
	/// Returns the raw claim value.
	pub fn get(&self, name: &str) -> Option<&Value> {
		self.0.get(name)
	}

	/// Returns a string-valued claim.
	pub fn get_str(&self, name: &str) -> Option<&str> {
		self.get(name).and_then(Value::as_str)
	}

	/// Subject identifier (`sub`).
	pub fn subject(&self) -> Option<&str> {
		self.get_str("sub")
	}

	/// Display name (`name`).
	pub fn name(&self) -> Option<&str> {
		self.get_str("name")
	}

	/// Email address (`email`).
	pub fn email(&self) -> Option<&str> {
		self.get_str("email")
	}

	/// Expiry instant (`exp`), when present and representable.
	pub fn expires_at(&self) -> Option<OffsetDateTime> {
		let exp = self.get("exp")?.as_i64()?;

		OffsetDateTime::from_unix_timestamp(exp).ok()
	}

	/// Consumes the wrapper and returns the raw map.
	pub fn into_inner(self) -> Map<String, Value> {
		self.0
	}
}
impl From<Map<String, Value>> for Claims {
	fn from(value: Map<String, Value>) -> Self {
		Self(value)
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn accessors_read_standard_claims() {
		let claims: Claims = serde_json::from_value(serde_json::json!({
			"sub": "built-in/alice",
			"name": "alice",
			"email": "alice@example.com",
			"exp": 1_700_000_000,
		}))
		.expect("Claims fixture should deserialize.");

		assert_eq!(claims.subject(), Some("built-in/alice"));
		assert_eq!(claims.name(), Some("alice"));
		assert_eq!(claims.email(), Some("alice@example.com"));
		assert_eq!(
			claims.expires_at().map(OffsetDateTime::unix_timestamp),
			Some(1_700_000_000)
		);
	}
}
