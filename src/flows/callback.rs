//! Callback handling: code exchange followed by ID token verification.

// crates.io
use oauth2::AuthorizationCode;
// self
use crate::{
	_prelude::*,
	auth::{Claims, TokenResponse},
	flows::CasdoorClient,
	http::TokenHttpClient,
	obs::{FlowKind, FlowOutcome, FlowSpan, record_flow_outcome},
	oauth::{self, ClientCredentials, TransportErrorMapper},
};

/// Result of a successful callback: the raw token payload and the verified claims.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CallbackOutcome {
	/// Token endpoint payload, unmodified.
	pub token_info: TokenResponse,
	/// Claims decoded from the verified ID token.
	pub user: Claims,
}

impl<C, M> CasdoorClient<C, M>
where
	C: ?Sized + TokenHttpClient,
	M: ?Sized + TransportErrorMapper<C::TransportError>,
{
	/// Forwards `code` to the token endpoint and returns the payload unmodified.
	///
	/// A blank code fails with [`Error::MissingCode`] without touching the network.
	pub async fn exchange_code(&self, code: &str) -> Result<TokenResponse> {
		let code = AuthorizationCode::new(code.to_owned());

		oauth::exchange_code(
			self.http_client.as_ref(),
			self.transport_mapper.as_ref(),
			self.strategy.as_ref(),
			&self.endpoints.token,
			ClientCredentials {
				client_id: &self.config.client_id,
				client_secret: &self.config.client_secret,
			},
			&code,
		)
		.await
	}

	/// Verifies an ID token against the configured certificate and policy.
	pub fn verify_token(&self, token: &str) -> Result<Claims> {
		Ok(self.verifier.verify(token)?)
	}

	/// Handles Casdoor's redirect: validate inputs, exchange the code, verify the ID token.
	///
	/// `state`, when supplied, must equal the configured state. Both checks happen before any
	/// network activity.
	pub async fn complete_callback(
		&self,
		code: Option<&str>,
		state: Option<&str>,
	) -> Result<CallbackOutcome> {
		const KIND: FlowKind = FlowKind::Callback;
		const STAGE: &str = "complete_callback";

		let span = FlowSpan::new(KIND, STAGE);

		record_flow_outcome(KIND, STAGE, FlowOutcome::Attempt);

		let result = span
			.instrument(async move {
				let code = code.map(str::trim).filter(|c| !c.is_empty()).ok_or(Error::MissingCode)?;

				if state.is_some_and(|state| state != self.config.state) {
					return Err(Error::StateMismatch);
				}

				let token_info = self.exchange_code(code).await?;
				let id_token = token_info.id_token().ok_or(Error::MissingIdToken)?;
				let user = self.verify_token(id_token)?;

				tracing::info!(
					subject = user.subject().unwrap_or_default(),
					expires_at = ?user.expires_at(),
					"Verified Casdoor ID token."
				);

				Ok(CallbackOutcome { token_info, user })
			})
			.await;

		match &result {
			Ok(_) => record_flow_outcome(KIND, STAGE, FlowOutcome::Success),
			Err(e) => {
				record_flow_outcome(KIND, STAGE, FlowOutcome::Failure);
				tracing::error!(error = %e, "Casdoor callback failed.");
			},
		}

		result
	}
}
