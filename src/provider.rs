//! Casdoor-facing endpoint layout (data) and error strategy (behavior).
//!
//! `endpoints` derives the authorize and token URLs from the configured Casdoor base URL.
//! `strategy` defines [`ProviderStrategy`], an HTTP-client-agnostic hook used by the token
//! exchange to map provider responses into the bridge error taxonomy.

pub mod endpoints;
pub mod strategy;

pub use endpoints::*;
pub use strategy::*;
