//! RS256 ID token verification against the Casdoor certificate.

// crates.io
use jsonwebtoken::{Algorithm, DecodingKey, Validation};
// self
use crate::{
	_prelude::*,
	auth::Claims,
	config::{CasdoorConfig, VerificationPolicy},
	error::{ConfigError, VerificationError},
};

/// Verifies ID tokens with a fixed public key and an explicit [`VerificationPolicy`].
#[derive(Clone)]
pub struct TokenVerifier {
	key: DecodingKey,
	validation: Validation,
}
impl TokenVerifier {
	/// Builds a verifier from a PEM certificate (or SPKI public key).
	pub fn new(
		certificate: &str,
		client_id: &str,
		policy: &VerificationPolicy,
	) -> Result<Self, ConfigError> {
		let key = Self::decoding_key(certificate)?;
		let mut validation = Validation::new(Algorithm::RS256);

		validation.leeway = policy.leeway_secs;
		validation.validate_exp = true;

		if policy.validate_audience {
			validation.set_audience(&[client_id]);
			validation.set_required_spec_claims(&["exp", "aud"]);
		} else {
			validation.validate_aud = false;
			validation.set_required_spec_claims(&["exp"]);
		}
		if let Some(issuer) = policy.issuer.as_deref() {
			validation.set_issuer(&[issuer]);
		}

		Ok(Self { key, validation })
	}

	/// Builds the verifier described by `config`.
	pub fn from_config(config: &CasdoorConfig) -> Result<Self, ConfigError> {
		Self::new(&config.certificate, &config.client_id, &config.verification)
	}

	/// Parses the RSA public key embedded in a PEM certificate or public key block.
	pub fn decoding_key(certificate: &str) -> Result<DecodingKey, ConfigError> {
		DecodingKey::from_rsa_pem(certificate.as_bytes())
			.map_err(|source| ConfigError::InvalidCertificate { source })
	}

	/// Checks the signature and policy, then returns the embedded claims unchanged.
	pub fn verify(&self, token: &str) -> Result<Claims, VerificationError> {
		let data = jsonwebtoken::decode::<Map<String, Value>>(token, &self.key, &self.validation)?;

		Ok(Claims(data.claims))
	}
}
impl Debug for TokenVerifier {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("TokenVerifier")
			.field("algorithms", &self.validation.algorithms)
			.field("leeway", &self.validation.leeway)
			.field("validate_aud", &self.validation.validate_aud)
			.finish_non_exhaustive()
	}
}
