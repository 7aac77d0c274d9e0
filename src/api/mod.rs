//! REST API client module for the breeds service.
//!
//! This module provides the `ApiClient` for communicating with the
//! remote API: authentication (login/register) and breed data
//! (catalog pages, breed detail, search, images).
//!
//! Authenticated requests carry a JWT bearer token obtained through
//! the login endpoint.

pub mod client;
pub mod error;

pub use client::ApiClient;
pub use error::ApiError;
