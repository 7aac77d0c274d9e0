//! Utility functions for string formatting and form validation.

pub mod format;
pub mod validate;

// Re-export commonly used functions at module level
pub use format::{initials, member_since, rating_bar, truncate};
pub use validate::{validate_email, validate_min_length, validate_password_match};
