//! Flow orchestrators: authorization redirects, callbacks, and credential probes.

pub mod authorize;
pub mod callback;
pub mod probe;

pub use authorize::*;
pub use callback::*;
pub use probe::*;

// self
use crate::{
	_prelude::*,
	config::CasdoorConfig,
	http::{ReqwestHttpClient, TokenHttpClient},
	jwt::TokenVerifier,
	oauth::{ReqwestTransportErrorMapper, TransportErrorMapper},
	provider::{CasdoorEndpoints, DefaultProviderStrategy, ProviderStrategy},
};

/// Client specialized for the crate's default reqwest transport stack.
pub type ReqwestCasdoorClient = CasdoorClient<ReqwestHttpClient, ReqwestTransportErrorMapper>;

/// Runs the Casdoor flows for a single application.
///
/// The client owns the immutable configuration, the derived endpoints, the ID token verifier,
/// and the transport, so each flow is a function of its inputs plus this shared state. Clone it
/// or wrap it in `Arc` to share it across request handlers.
#[derive(Clone)]
pub struct CasdoorClient<C, M>
where
	C: ?Sized + TokenHttpClient,
	M: ?Sized + TransportErrorMapper<C::TransportError>,
{
	/// Configuration the client was built from.
	pub config: Arc<CasdoorConfig>,
	/// Endpoints derived from the configured base URL.
	pub endpoints: CasdoorEndpoints,
	/// ID token verifier bound to the configured certificate.
	pub verifier: Arc<TokenVerifier>,
	/// HTTP client wrapper used for every outbound provider request.
	pub http_client: Arc<C>,
	/// Mapper applied to transport-layer errors before surfacing them to callers.
	pub transport_mapper: Arc<M>,
	/// Strategy responsible for token request adjustments and error classification.
	pub strategy: Arc<dyn ProviderStrategy>,
}
impl<C, M> CasdoorClient<C, M>
where
	C: ?Sized + TokenHttpClient,
	M: ?Sized + TransportErrorMapper<C::TransportError>,
{
	/// Creates a client that reuses the caller-provided transport + mapper pair.
	pub fn with_http_client(
		config: impl Into<Arc<CasdoorConfig>>,
		http_client: impl Into<Arc<C>>,
		mapper: impl Into<Arc<M>>,
	) -> Result<Self> {
		let config = config.into();
		let endpoints = CasdoorEndpoints::from_base(&config.endpoint)?;
		let verifier = Arc::new(TokenVerifier::from_config(&config)?);

		Ok(Self {
			config,
			endpoints,
			verifier,
			http_client: http_client.into(),
			transport_mapper: mapper.into(),
			strategy: Arc::new(DefaultProviderStrategy),
		})
	}

	/// Replaces the provider strategy.
	pub fn with_strategy(mut self, strategy: Arc<dyn ProviderStrategy>) -> Self {
		self.strategy = strategy;

		self
	}
}
impl CasdoorClient<ReqwestHttpClient, ReqwestTransportErrorMapper> {
	/// Creates a new client with its own reqwest transport.
	///
	/// The transport never follows redirects and applies the configured timeout, if any.
	pub fn new(config: impl Into<Arc<CasdoorConfig>>) -> Result<Self> {
		let config = config.into();
		let http_client = ReqwestHttpClient::new(config.http_timeout)?;

		Self::with_http_client(config, http_client, ReqwestTransportErrorMapper)
	}
}
impl<C, M> Debug for CasdoorClient<C, M>
where
	C: ?Sized + TokenHttpClient,
	M: ?Sized + TransportErrorMapper<C::TransportError>,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("CasdoorClient")
			.field("config", &self.config)
			.field("endpoints", &self.endpoints)
			.finish_non_exhaustive()
	}
}
