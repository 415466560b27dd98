#![allow(dead_code)]

// std
use std::sync::Arc;
// crates.io
use httpmock::prelude::*;
use serde_json::{Value, json};
// self
use casdoor_bridge::{
	CasdoorConfig, ReqwestCasdoorClient,
	jsonwebtoken::{self, Algorithm, EncodingKey, Header},
};

pub const CERTIFICATE: &str = include_str!("../fixtures/certificate.pem");
pub const SIGNING_KEY: &str = include_str!("../fixtures/signing_key.pem");
pub const FOREIGN_KEY: &str = include_str!("../fixtures/foreign_key.pem");
pub const CLIENT_ID: &str = "client-it";
pub const CLIENT_SECRET: &str = "secret-it";
pub const APPLICATION: &str = "app-it";
pub const TOKEN_PATH: &str = "/api/login/oauth/access_token";

pub fn config_for(server: &MockServer) -> CasdoorConfig {
	CasdoorConfig::builder(server.base_url(), CLIENT_ID, CLIENT_SECRET, CERTIFICATE)
		.organization("built-in")
		.application(APPLICATION)
		.redirect_uri("https://app.example.com/casdoor/callback")
		.build()
		.expect("Mock server configuration should build.")
}

pub fn client_for(server: &MockServer) -> Arc<ReqwestCasdoorClient> {
	Arc::new(
		ReqwestCasdoorClient::new(config_for(server))
			.expect("Reqwest-backed Casdoor client should build."),
	)
}

pub fn user_claims() -> Value {
	let now = std::time::SystemTime::now()
		.duration_since(std::time::UNIX_EPOCH)
		.expect("System clock should be after the Unix epoch.")
		.as_secs();

	json!({
		"owner": "built-in",
		"name": "alice",
		"sub": "8f1c6a52-1d2e-4b1f-9e0c-2f0f9a7c1e11",
		"email": "alice@example.com",
		"iss": "http://localhost:8000",
		"aud": [CLIENT_ID],
		"iat": now,
		"nbf": now,
		"exp": now + 3_600,
	})
}

pub fn sign(key_pem: &str, claims: &Value) -> String {
	let key =
		EncodingKey::from_rsa_pem(key_pem.as_bytes()).expect("RSA signing key fixture should parse.");

	jsonwebtoken::encode(&Header::new(Algorithm::RS256), claims, &key)
		.expect("Signing the claims fixture should succeed.")
}

pub fn token_body(id_token: &str) -> String {
	json!({
		"access_token": "access-it",
		"id_token": id_token,
		"refresh_token": "refresh-it",
		"token_type": "Bearer",
		"expires_in": 3_600,
		"scope": "openid profile email",
	})
	.to_string()
}
