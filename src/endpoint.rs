//! HTTP surface: login, signup, and callback routes served through axum.
//!
//! Routes are mounted twice, under `/casdoor/*` and at the root, matching the layouts used by
//! the plugin host and the standalone server. `GET /casdoor?action=...` dispatches like the
//! plugin endpoint, defaulting to `login`.

pub mod handlers;

// crates.io
use axum::{
	Router,
	http::StatusCode,
	response::{IntoResponse, Response},
	routing::get,
};
// self
use crate::{_prelude::*, flows::ReqwestCasdoorClient};

/// Shared handler state.
pub type SharedClient = Arc<ReqwestCasdoorClient>;

/// Builds the router with every Casdoor route.
pub fn router(client: SharedClient) -> Router {
	let mut router = Router::new().route("/casdoor", get(handlers::dispatch));

	for prefix in ["", "/casdoor"] {
		router = router
			.route(&format!("{prefix}/login"), get(handlers::login))
			.route(&format!("{prefix}/signup"), get(handlers::signup))
			.route(&format!("{prefix}/callback"), get(handlers::callback));
	}

	router.with_state(client)
}

/// HTTP status reported for each error category.
pub fn status_for(err: &Error) -> StatusCode {
	match err {
		Error::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
		Error::Upstream(_) | Error::Transport(_) | Error::InvalidClient { .. } =>
			StatusCode::BAD_GATEWAY,
		Error::MissingIdToken => StatusCode::BAD_GATEWAY,
		Error::Verification(_) => StatusCode::UNAUTHORIZED,
		Error::MissingCode
		| Error::StateMismatch
		| Error::InvalidAction { .. }
		| Error::InvalidGrant { .. } => StatusCode::BAD_REQUEST,
	}
}

impl IntoResponse for Error {
	fn into_response(self) -> Response {
		(status_for(&self), format!("Error: {self}")).into_response()
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;
	use crate::error::VerificationError;

	#[test]
	fn statuses_follow_the_error_taxonomy() {
		assert_eq!(status_for(&Error::MissingCode), StatusCode::BAD_REQUEST);
		assert_eq!(
			status_for(&Error::Verification(VerificationError::InvalidSignature)),
			StatusCode::UNAUTHORIZED
		);
		assert_eq!(
			status_for(&Error::InvalidClient { reason: "bad secret".into() }),
			StatusCode::BAD_GATEWAY
		);
	}
}
