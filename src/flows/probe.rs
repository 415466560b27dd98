//! Client credential probe built on the code exchange.

// self
use crate::{
	_prelude::*,
	flows::CasdoorClient,
	http::TokenHttpClient,
	obs::{FlowKind, FlowOutcome, FlowSpan, record_flow_outcome},
	oauth::TransportErrorMapper,
};

/// Code sent by [`CasdoorClient::probe_credentials`]; Casdoor never issues it.
pub const PROBE_CODE: &str = "casdoor-bridge-credential-probe";

impl<C, M> CasdoorClient<C, M>
where
	C: ?Sized + TokenHttpClient,
	M: ?Sized + TransportErrorMapper<C::TransportError>,
{
	/// Exchanges a code that cannot be valid to check the client against Casdoor.
	///
	/// A grant rejection confirms the endpoint is reachable and the client id is known. It does
	/// not prove the secret: Casdoor may look up the code before comparing `client_secret`.
	/// Client rejections, transport failures, and other upstream errors are returned as-is.
	pub async fn probe_credentials(&self) -> Result<()> {
		const KIND: FlowKind = FlowKind::CredentialProbe;
		const STAGE: &str = "probe_credentials";

		let span = FlowSpan::new(KIND, STAGE);

		record_flow_outcome(KIND, STAGE, FlowOutcome::Attempt);

		let result = match span.instrument(self.exchange_code(PROBE_CODE)).await {
			Ok(_) | Err(Error::InvalidGrant { .. }) => Ok(()),
			Err(e) => Err(e),
		};

		match &result {
			Ok(()) => record_flow_outcome(KIND, STAGE, FlowOutcome::Success),
			Err(e) => {
				record_flow_outcome(KIND, STAGE, FlowOutcome::Failure);
				tracing::warn!(error = %e, "Casdoor rejected the client credentials.");
			},
		}

		result
	}
}
