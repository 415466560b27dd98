//! Plugin actions and the Casdoor pages they map to.

// self
use crate::_prelude::*;

/// Casdoor page an authorization request lands on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthPage {
	/// Sign-in page.
	Login,
	/// Registration page.
	Signup,
}
impl AuthPage {
	/// Returns a stable label.
	pub const fn as_str(self) -> &'static str {
		match self {
			AuthPage::Login => "login",
			AuthPage::Signup => "signup",
		}
	}

	/// Path of the authorize endpoint, relative to the Casdoor base URL.
	pub const fn authorize_path(self) -> &'static str {
		match self {
			AuthPage::Login => "login/oauth/authorize",
			AuthPage::Signup => "signup/oauth/authorize",
		}
	}
}
impl Display for AuthPage {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Action requested through the plugin `action` parameter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthAction {
	/// Redirect to the login page.
	#[default]
	Login,
	/// Redirect to the signup page.
	Signup,
	/// Handle Casdoor's redirect back with an authorization code.
	Callback,
}
impl AuthAction {
	/// Returns the RFC-style lowercase identifier.
	pub const fn as_str(self) -> &'static str {
		match self {
			AuthAction::Login => "login",
			AuthAction::Signup => "signup",
			AuthAction::Callback => "callback",
		}
	}

	/// Page the action redirects to, if it is a redirecting action.
	pub const fn page(self) -> Option<AuthPage> {
		match self {
			AuthAction::Login => Some(AuthPage::Login),
			AuthAction::Signup => Some(AuthPage::Signup),
			AuthAction::Callback => None,
		}
	}
}
impl Display for AuthAction {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
impl FromStr for AuthAction {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim().to_ascii_lowercase().as_str() {
			"login" => Ok(AuthAction::Login),
			"signup" => Ok(AuthAction::Signup),
			"callback" => Ok(AuthAction::Callback),
			_ => Err(Error::InvalidAction { action: s.to_owned() }),
		}
	}
}
