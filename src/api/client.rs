//! API client for communicating with the breeds REST API.
//!
//! This module provides the `ApiClient` struct for making API requests:
//! authentication (login/register) and breed data (list, detail, search,
//! images). Each operation is a single request; failures surface to the
//! caller, which logs and shows one message (no retries).

use anyhow::{Context, Result};
use reqwest::{header, Client};
use serde::{de::DeserializeOwned, Serialize};

use crate::models::{
    Breed, BreedImage, LoginRequest, LoginResponse, RegisterRequest, RegisterResponse,
};

use super::ApiError;

// ============================================================================
// Constants
// ============================================================================

/// HTTP request timeout in seconds
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Default page requested by the landing page
pub const DEFAULT_PAGE: u32 = 0;

/// Default page size requested by the landing page
pub const DEFAULT_LIMIT: u32 = 20;

/// API client for the breeds service.
/// Clone is cheap - reqwest::Client uses Arc internally for connection pooling.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    /// Create a new API client rooted at `base_url`
    pub fn new(base_url: &str) -> Result<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: None,
        })
    }

    /// Set the bearer token for authenticated requests
    pub fn set_token(&mut self, token: String) {
        self.token = Some(token);
    }

    /// Drop the bearer token (after logout)
    pub fn clear_token(&mut self) {
        self.token = None;
    }

    /// Create a new ApiClient with the given token, sharing the connection pool.
    pub fn with_token(&self, token: String) -> Self {
        Self {
            client: self.client.clone(), // Cheap clone, shares connection pool
            base_url: self.base_url.clone(),
            token: Some(token),
        }
    }

    fn auth_headers(&self) -> Result<header::HeaderMap> {
        let mut headers = header::HeaderMap::new();
        if let Some(ref token) = self.token {
            headers.insert(
                header::AUTHORIZATION,
                header::HeaderValue::from_str(&format!("Bearer {}", token))?,
            );
        }
        Ok(headers)
    }

    /// Check if response is successful, returning an error with body if not.
    async fn check_response(response: reqwest::Response) -> Result<reqwest::Response> {
        if response.status().is_success() {
            Ok(response)
        } else {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            Err(ApiError::from_status(status, &body).into())
        }
    }

    async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let response = self
            .client
            .get(url)
            .headers(self.auth_headers()?)
            .send()
            .await
            .map_err(ApiError::from)
            .with_context(|| format!("Failed to send GET request to {}", url))?;

        let response = Self::check_response(response).await?;

        response
            .json()
            .await
            .with_context(|| format!("Failed to parse JSON response from {}", url))
    }

    async fn post<T: DeserializeOwned, B: Serialize>(&self, url: &str, body: &B) -> Result<T> {
        let response = self
            .client
            .post(url)
            .headers(self.auth_headers()?)
            .json(body)
            .send()
            .await
            .map_err(ApiError::from)
            .with_context(|| format!("Failed to send POST request to {}", url))?;

        let response = Self::check_response(response).await?;

        response
            .json()
            .await
            .with_context(|| format!("Failed to parse JSON response from {}", url))
    }

    // ===== Authentication =====

    /// Authenticate and return the login payload (token + user under `data`)
    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse> {
        let url = format!("{}/auth/login", self.base_url);
        self.post(&url, request).await
    }

    /// Create an account; the session is not established until login
    pub async fn register(&self, request: &RegisterRequest) -> Result<RegisterResponse> {
        let url = format!("{}/auth/register", self.base_url);
        self.post(&url, request).await
    }

    // ===== Breed Data =====

    /// Fetch one page of the breed catalog
    pub async fn fetch_breeds(&self, page: u32, limit: u32) -> Result<Vec<Breed>> {
        let url = format!(
            "{}/cats/breeds?page={}&limit={}",
            self.base_url, page, limit
        );
        self.get(&url).await
    }

    /// Fetch a single breed by its id
    pub async fn fetch_breed(&self, breed_id: &str) -> Result<Breed> {
        let url = format!("{}/cats/breeds/{}", self.base_url, breed_id);
        self.get(&url).await
    }

    /// Search breeds by free-text query.
    /// The query is sent as a URL parameter, so it goes through the
    /// builder for proper encoding instead of the shared `get` helper.
    pub async fn search_breeds(&self, query: &str) -> Result<Vec<Breed>> {
        let url = format!("{}/cats/breeds/search", self.base_url);
        let response = self
            .client
            .get(&url)
            .headers(self.auth_headers()?)
            .query(&[("q", query)])
            .send()
            .await
            .map_err(ApiError::from)
            .with_context(|| format!("Failed to send GET request to {}", url))?;

        let response = Self::check_response(response).await?;

        response
            .json()
            .await
            .with_context(|| format!("Failed to parse JSON response from {}", url))
    }

    /// Fetch image URLs for a breed, dropping records without a usable URL
    pub async fn fetch_breed_images(&self, breed_id: &str) -> Result<Vec<String>> {
        let url = format!("{}/images/breed/{}", self.base_url, breed_id);
        let images: Vec<BreedImage> = self.get(&url).await?;
        Ok(images
            .iter()
            .filter_map(|image| image.url())
            .map(String::from)
            .collect())
    }
}
