//! Provider strategy hooks that customize token exchanges.
//!
//! Implementations decorate outgoing token requests and normalize error mapping
//! without tying the exchange to any particular HTTP client.

// self
use crate::_prelude::*;

/// Strategy hook that allows deployments to decorate requests and classify errors.
///
/// Implementors are required to be `Send + Sync`, and the hooks use crate-owned data
/// types so downstream crates never depend on reqwest-specific structures. Override only
/// what you need; `augment_token_request` has a default no-op implementation.
pub trait ProviderStrategy: Send + Sync {
	/// Maps a failed token response into the bridge taxonomy.
	fn classify_token_error(&self, ctx: &ProviderErrorContext) -> ProviderErrorKind;

	/// Gives deployments a chance to add custom form parameters before dispatching.
	fn augment_token_request(&self, _form: &mut BTreeMap<String, String>) {}
}

/// Canonical provider error categories used by strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProviderErrorKind {
	/// Provider rejected the authorization code.
	InvalidGrant,
	/// Client authentication failed.
	InvalidClient,
	/// Anything else reported by the token endpoint.
	Upstream,
}

/// Context passed to provider strategies when classifying token errors.
///
/// Only primitive data (status code, OAuth fields, body preview) is kept so strategies
/// stay decoupled from the HTTP client.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProviderErrorContext {
	/// HTTP status code returned by the provider, when available.
	pub http_status: Option<u16>,
	/// Provider-supplied OAuth `error` field.
	pub oauth_error: Option<String>,
	/// Provider-supplied OAuth `error_description` field.
	pub error_description: Option<String>,
	/// Preview of the response body for non-JSON payloads.
	pub body_preview: Option<String>,
}
impl ProviderErrorContext {
	const BODY_PREVIEW_LIMIT: usize = 256;

	/// Creates an empty context.
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds an HTTP status code (e.g., 400, 401, 500).
	pub fn with_http_status(mut self, status: u16) -> Self {
		self.http_status = Some(status);

		self
	}

	/// Adds the OAuth error code string returned by the provider.
	pub fn with_oauth_error(mut self, error: impl Into<String>) -> Self {
		self.oauth_error = Some(error.into());

		self
	}

	/// Adds the OAuth `error_description` field.
	pub fn with_error_description(mut self, description: impl Into<String>) -> Self {
		self.error_description = Some(description.into());

		self
	}

	/// Adds a body preview for responses that are not JSON.
	pub fn with_body_preview(mut self, body: impl Into<String>) -> Self {
		self.body_preview = Some(truncate_preview(body.into()));

		self
	}

	/// Human-readable summary used in error messages.
	pub fn summary(&self) -> String {
		match (&self.oauth_error, &self.error_description) {
			(_, Some(description)) if !description.is_empty() => description.clone(),
			(Some(error), _) => error.clone(),
			_ => match (self.http_status, &self.body_preview) {
				(Some(status), Some(body)) if !body.is_empty() => format!("HTTP {status}: {body}"),
				(Some(status), _) => format!("HTTP {status}"),
				(None, Some(body)) => body.clone(),
				(None, None) => "no details".into(),
			},
		}
	}
}

/// Default strategy that applies RFC 6749 heuristics.
///
/// Structured OAuth fields win, then body text hints, and finally the HTTP status code.
#[derive(Debug, Default)]
pub struct DefaultProviderStrategy;
impl Display for DefaultProviderStrategy {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("default-provider-strategy")
	}
}
impl ProviderStrategy for DefaultProviderStrategy {
	fn classify_token_error(&self, ctx: &ProviderErrorContext) -> ProviderErrorKind {
		if let Some(kind) =
			classify_oauth_error(ctx.oauth_error.as_deref(), ctx.error_description.as_deref())
		{
			return kind;
		}
		if let Some(kind) = classify_body(ctx.body_preview.as_deref()) {
			return kind;
		}

		classify_status(ctx.http_status)
	}
}

fn truncate_preview(body: String) -> String {
	if body.chars().count() <= ProviderErrorContext::BODY_PREVIEW_LIMIT {
		return body;
	}

	let mut buf: String = body.chars().take(ProviderErrorContext::BODY_PREVIEW_LIMIT).collect();

	buf.push('…');

	buf
}

fn classify_oauth_error(
	oauth_error: Option<&str>,
	error_description: Option<&str>,
) -> Option<ProviderErrorKind> {
	oauth_error
		.and_then(match_exact_value)
		.or_else(|| error_description.and_then(match_exact_value))
		.or_else(|| classify_body(error_description))
}

fn match_exact_value(value: &str) -> Option<ProviderErrorKind> {
	if value.eq_ignore_ascii_case("invalid_grant") || value.eq_ignore_ascii_case("access_denied") {
		Some(ProviderErrorKind::InvalidGrant)
	} else if value.eq_ignore_ascii_case("invalid_client")
		|| value.eq_ignore_ascii_case("unauthorized_client")
	{
		Some(ProviderErrorKind::InvalidClient)
	} else if value.eq_ignore_ascii_case("temporarily_unavailable")
		|| value.eq_ignore_ascii_case("server_error")
	{
		Some(ProviderErrorKind::Upstream)
	} else {
		None
	}
}

fn classify_body(body: Option<&str>) -> Option<ProviderErrorKind> {
	let lowered = body?.to_ascii_lowercase();

	match lowered.as_str() {
		text if text.contains("invalid_grant") => Some(ProviderErrorKind::InvalidGrant),
		text if text.contains("invalid_client") => Some(ProviderErrorKind::InvalidClient),
		_ => None,
	}
}

fn classify_status(status: Option<u16>) -> ProviderErrorKind {
	match status {
		Some(400 | 404 | 410) => ProviderErrorKind::InvalidGrant,
		Some(401 | 403) => ProviderErrorKind::InvalidClient,
		_ => ProviderErrorKind::Upstream,
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn oauth_error_fields_take_priority() {
		let strategy = DefaultProviderStrategy;
		let ctx = ProviderErrorContext::new().with_http_status(500).with_oauth_error("invalid_grant");

		assert_eq!(strategy.classify_token_error(&ctx), ProviderErrorKind::InvalidGrant);

		let ctx = ProviderErrorContext::new().with_http_status(400).with_oauth_error("invalid_client");

		assert_eq!(strategy.classify_token_error(&ctx), ProviderErrorKind::InvalidClient);
	}

	#[test]
	fn falls_back_to_body_then_status() {
		let strategy = DefaultProviderStrategy;
		let body_ctx = ProviderErrorContext::new().with_body_preview("error=invalid_client");

		assert_eq!(strategy.classify_token_error(&body_ctx), ProviderErrorKind::InvalidClient);

		let status_ctx = ProviderErrorContext::new().with_http_status(401);

		assert_eq!(strategy.classify_token_error(&status_ctx), ProviderErrorKind::InvalidClient);

		let outage_ctx = ProviderErrorContext::new().with_http_status(503);

		assert_eq!(strategy.classify_token_error(&outage_ctx), ProviderErrorKind::Upstream);
	}

	#[test]
	fn description_reads_casdoor_style_messages() {
		let strategy = DefaultProviderStrategy;
		let ctx = ProviderErrorContext::new()
			.with_oauth_error("")
			.with_error_description("invalid_grant: authorization code has been used");

		assert_eq!(strategy.classify_token_error(&ctx), ProviderErrorKind::InvalidGrant);
		assert_eq!(ctx.summary(), "invalid_grant: authorization code has been used");
	}

	#[test]
	fn body_preview_is_truncated() {
		let ctx = ProviderErrorContext::new().with_body_preview("x".repeat(1_000));
		let preview = ctx.body_preview.expect("Preview should be recorded.");

		assert_eq!(preview.chars().count(), ProviderErrorContext::BODY_PREVIEW_LIMIT + 1);
		assert!(preview.ends_with('…'));
	}
}
