//! Casdoor login, signup, and callback endpoints with RS256 ID token verification, packaged as
//! axum routes and as a tool/provider pair for tool-invoking hosts.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod auth;
pub mod config;
pub mod endpoint;
pub mod error;
pub mod flows;
pub mod http;
pub mod jwt;
pub mod oauth;
pub mod obs;
pub mod plugin;
pub mod provider;

mod _prelude {
	pub use std::{
		collections::{BTreeMap, HashMap},
		error::Error as StdError,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
		pin::Pin,
		str::FromStr,
		sync::Arc,
	};

	pub use reqwest::{Client as ReqwestClient, Error as ReqwestError};
	pub use serde::{Deserialize, Serialize};
	pub use serde_json::{Map, Value};
	pub use thiserror::Error as ThisError;
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

pub use axum;
pub use jsonwebtoken;
pub use reqwest;
pub use url;

pub use config::{CasdoorConfig, VerificationPolicy};
pub use flows::{CallbackOutcome, CasdoorClient, ReqwestCasdoorClient};
pub use plugin::{CasdoorAuthTool, CasdoorProvider, ToolCredentials};

// Binary-only dependencies.
use {clap as _, color_eyre as _, tokio as _, tracing_subscriber as _};
#[cfg(test)] use {httpmock as _, tower as _};
