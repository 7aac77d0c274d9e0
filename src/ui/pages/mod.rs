//! Per-route page renderers
//!
//! - `home`: paginated breed list
//! - `breed`: single breed detail
//! - `search`: search form and results
//! - `login` / `register`: account forms
//! - `profile`: the signed-in account

pub mod breed;
pub mod home;
pub mod login;
pub mod profile;
pub mod register;
pub mod search;
