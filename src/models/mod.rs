//! Data models for the breeds API.
//!
//! This module contains all the data structures used to represent
//! API payloads:
//!
//! - `Breed`, `BreedWeight`: cat breed records
//! - `BreedImage`: image records from the images endpoint
//! - `User`: the signed-in account
//! - Auth payloads: `LoginRequest`/`LoginResponse`, `RegisterRequest`/`RegisterResponse`

pub mod auth;
pub mod breed;
pub mod image;
pub mod user;

pub use auth::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse};
pub use breed::{Breed, BreedWeight};
pub use image::BreedImage;
pub use user::User;
