//! Observability helpers for bridge flows.
//!
//! # Feature Flags
//!
//! - Spans named `casdoor_bridge.flow` carry the `flow` and `stage` fields and are always emitted
//!   through `tracing`.
//! - Enable `metrics` to increment the `casdoor_bridge_flow_total` counter for every
//!   attempt/success/failure, labeled by `flow`, `stage`, and `outcome`.

mod metrics;
mod span;

pub use metrics::*;
pub use span::*;

// self
use crate::{_prelude::*, auth::AuthPage};

/// Flow kinds observed by the bridge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FlowKind {
	/// Redirect to the login page.
	Login,
	/// Redirect to the signup page.
	Signup,
	/// Code exchange plus ID token verification.
	Callback,
	/// Client credential validation through a throwaway exchange.
	CredentialProbe,
}
impl FlowKind {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			FlowKind::Login => "login",
			FlowKind::Signup => "signup",
			FlowKind::Callback => "callback",
			FlowKind::CredentialProbe => "credential_probe",
		}
	}
}
impl Display for FlowKind {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
impl From<AuthPage> for FlowKind {
	fn from(page: AuthPage) -> Self {
		match page {
			AuthPage::Login => FlowKind::Login,
			AuthPage::Signup => FlowKind::Signup,
		}
	}
}

/// Outcome labels recorded for each attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FlowOutcome {
	/// Entry to a bridge flow.
	Attempt,
	/// Successful completion.
	Success,
	/// Failure propagated back to the caller.
	Failure,
}
impl FlowOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			FlowOutcome::Attempt => "attempt",
			FlowOutcome::Success => "success",
			FlowOutcome::Failure => "failure",
		}
	}
}
impl Display for FlowOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
