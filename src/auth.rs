//! Auth-domain values: actions, token payloads, and decoded claims.

pub mod action;
pub mod claims;
pub mod token;

pub use action::*;
pub use claims::*;
pub use token::*;
