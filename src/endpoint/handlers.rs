//! Request handlers behind [`router`](super::router).

// crates.io
use axum::{
	Json,
	extract::{Query, State},
	http::{StatusCode, header::LOCATION},
	response::{IntoResponse, Response},
};
// self
use crate::{
	_prelude::*,
	auth::{AuthAction, AuthPage},
	endpoint::SharedClient,
};

/// Query parameters accepted by every route.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct AuthQuery {
	/// Plugin action (`login`, `signup`, `callback`).
	pub action: Option<String>,
	/// Authorization code returned by Casdoor.
	pub code: Option<String>,
	/// State echoed back by Casdoor.
	pub state: Option<String>,
}

/// `GET /login`: redirect to the Casdoor login page.
pub async fn login(State(client): State<SharedClient>) -> Response {
	redirect_to(&client, AuthPage::Login)
}

/// `GET /signup`: redirect to the Casdoor signup page.
pub async fn signup(State(client): State<SharedClient>) -> Response {
	redirect_to(&client, AuthPage::Signup)
}

/// `GET /callback`: exchange the code and return the verified claims.
pub async fn callback(
	State(client): State<SharedClient>,
	Query(query): Query<AuthQuery>,
) -> Response {
	match client.complete_callback(query.code.as_deref(), query.state.as_deref()).await {
		Ok(outcome) => Json(outcome).into_response(),
		Err(e) => e.into_response(),
	}
}

/// `GET /casdoor?action=...`: plugin-style dispatcher.
pub async fn dispatch(
	State(client): State<SharedClient>,
	Query(query): Query<AuthQuery>,
) -> Response {
	let action = match query.action.as_deref().map(str::parse::<AuthAction>).transpose() {
		Ok(action) => action.unwrap_or_default(),
		Err(e) => {
			tracing::error!(error = %e, "Rejected plugin action.");

			return e.into_response();
		},
	};

	tracing::info!(action = action.as_str(), "Received plugin action.");

	match action.page() {
		Some(page) => redirect_to(&client, page),
		None => callback(State(client), Query(query)).await,
	}
}

fn redirect_to(client: &SharedClient, page: AuthPage) -> Response {
	let url = client.authorize_url(page, None);

	(StatusCode::FOUND, [(LOCATION, url.to_string())]).into_response()
}
