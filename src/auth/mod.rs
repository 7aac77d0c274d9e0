//! Authentication module for managing user sessions and credentials.
//!
//! This module provides:
//! - `SessionStore`: File-backed session entries read fresh on every check
//! - `check_route`: Guard predicates applied before each navigation
//! - `CredentialStore`: Secure OS-level credential storage via keyring
//!
//! Sessions persist until an explicit logout; there is no expiry.

pub mod credentials;
pub mod guard;
pub mod store;

pub use credentials::CredentialStore;
pub use guard::{check_route, GuardDecision};
pub use store::SessionStore;
