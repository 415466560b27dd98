//! Authorization-code exchange against the Casdoor token endpoint.

pub use oauth2;

// crates.io
use oauth2::{
	AsyncHttpClient, AuthorizationCode, ClientSecret, HttpClientError,
	http::{
		Method, Request, StatusCode,
		header::{ACCEPT, CONTENT_TYPE},
	},
};
use url::form_urlencoded::Serializer;
// self
use crate::{
	_prelude::*,
	auth::TokenResponse,
	error::{ConfigError, TransportError, UpstreamError},
	http::TokenHttpClient,
	provider::{ProviderErrorContext, ProviderErrorKind, ProviderStrategy},
};

/// Maps HTTP transport failures into bridge [`Error`] values.
pub trait TransportErrorMapper<E>
where
	Self: 'static + Send + Sync,
	E: 'static + Send + Sync + StdError,
{
	/// Converts an [`HttpClientError`] emitted by the transport into a bridge error.
	fn map_transport_error(&self, error: HttpClientError<E>) -> Error;
}

/// Default mapper for reqwest-backed transports.
#[derive(Clone, Debug, Default)]
pub struct ReqwestTransportErrorMapper;
impl TransportErrorMapper<ReqwestError> for ReqwestTransportErrorMapper {
	fn map_transport_error(&self, err: HttpClientError<ReqwestError>) -> Error {
		match err {
			HttpClientError::Reqwest(inner) => map_reqwest_error(*inner),
			HttpClientError::Http(inner) => ConfigError::from(inner).into(),
			HttpClientError::Io(inner) => TransportError::Io(inner).into(),
			HttpClientError::Other(message) => UpstreamError::TokenEndpoint {
				message: format!("HTTP client error: {message}"),
				status: None,
			}
			.into(),
			_ => UpstreamError::TokenEndpoint { message: "HTTP client error".into(), status: None }
				.into(),
		}
	}
}

/// Client credentials sent alongside the authorization code.
#[derive(Clone, Copy, Debug)]
pub struct ClientCredentials<'a> {
	/// OAuth client identifier.
	pub client_id: &'a str,
	/// OAuth client secret.
	pub client_secret: &'a ClientSecret,
}

/// Exchanges `code` at `token_url` and returns the provider's JSON payload unmodified.
///
/// One POST, no retries. An `error` field in the payload is treated as a failure even when the
/// status is 200, because Casdoor reports some grant errors that way.
pub async fn exchange_code<C, M>(
	http_client: &C,
	mapper: &M,
	strategy: &dyn ProviderStrategy,
	token_url: &Url,
	credentials: ClientCredentials<'_>,
	code: &AuthorizationCode,
) -> Result<TokenResponse>
where
	C: ?Sized + TokenHttpClient,
	M: ?Sized + TransportErrorMapper<C::TransportError>,
{
	if code.secret().trim().is_empty() {
		return Err(Error::MissingCode);
	}

	let mut form = BTreeMap::from([
		("grant_type".to_owned(), "authorization_code".to_owned()),
		("client_id".to_owned(), credentials.client_id.to_owned()),
		("client_secret".to_owned(), credentials.client_secret.secret().to_owned()),
		("code".to_owned(), code.secret().to_owned()),
	]);

	strategy.augment_token_request(&mut form);

	let body = Serializer::new(String::new()).extend_pairs(form.iter()).finish();
	let request = Request::builder()
		.method(Method::POST)
		.uri(token_url.as_str())
		.header(CONTENT_TYPE, "application/x-www-form-urlencoded")
		.header(ACCEPT, "application/json")
		.body(body.into_bytes())
		.map_err(ConfigError::from)?;
	let handle = http_client.handle();
	let response =
		handle.call(request).await.map_err(|err| mapper.map_transport_error(err))?;
	let status = response.status();

	match TokenResponse::from_slice(response.body()) {
		Ok(token) if status == StatusCode::OK && token.error().is_none() => Ok(token),
		Ok(token) => {
			let mut ctx = ProviderErrorContext::new().with_http_status(status.as_u16());

			if let Some(error) = token.error() {
				ctx = ctx.with_oauth_error(error);
			}
			if let Some(description) = token.error_description() {
				ctx = ctx.with_error_description(description);
			}

			Err(classify(strategy, ctx))
		},
		Err(source) if status == StatusCode::OK =>
			Err(UpstreamError::TokenResponseParse { source, status: Some(status.as_u16()) }.into()),
		Err(_) => {
			let ctx = ProviderErrorContext::new()
				.with_http_status(status.as_u16())
				.with_body_preview(String::from_utf8_lossy(response.body()));

			Err(classify(strategy, ctx))
		},
	}
}

fn classify(strategy: &dyn ProviderStrategy, ctx: ProviderErrorContext) -> Error {
	let reason = ctx.summary();

	match strategy.classify_token_error(&ctx) {
		ProviderErrorKind::InvalidGrant => Error::InvalidGrant { reason },
		ProviderErrorKind::InvalidClient => Error::InvalidClient { reason },
		ProviderErrorKind::Upstream =>
			UpstreamError::TokenEndpoint { message: reason, status: ctx.http_status }.into(),
	}
}

fn map_reqwest_error(err: ReqwestError) -> Error {
	if err.is_builder() {
		return ConfigError::from(err).into();
	}
	if err.is_timeout() {
		return UpstreamError::TokenEndpoint {
			message: "Request timed out while calling the token endpoint".into(),
			status: err.status().map(|code| code.as_u16()),
		}
		.into();
	}

	TransportError::from(err).into()
}
