//! Application state management for Catwalk.
//!
//! This module contains the core `App` struct that manages all application
//! state, including the current route, per-page data, session management,
//! and background fetch coordination.

use std::path::PathBuf;

use anyhow::{anyhow, Result};
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

use crate::api::client::{DEFAULT_LIMIT, DEFAULT_PAGE};
use crate::api::{ApiClient, ApiError};
use crate::auth::{check_route, CredentialStore, GuardDecision, SessionStore};
use crate::config::Config;
use crate::models::{Breed, LoginRequest, RegisterRequest, User};
use crate::utils::validate::{MIN_NAME_LEN, MIN_PASSWORD_LEN};
use crate::utils::{validate_email, validate_min_length, validate_password_match};

// ============================================================================
// Constants
// ============================================================================

/// Buffer size for the background fetch message channel.
/// A page fetch produces at most two messages, so 32 leaves ample headroom.
const CHANNEL_BUFFER_SIZE: usize = 32;

/// Maximum length for name, email, and search input.
const MAX_FIELD_LENGTH: usize = 100;

/// Maximum length for password input.
/// 128 chars accommodates password managers and passphrases.
const MAX_PASSWORD_LENGTH: usize = 128;

/// Number of rows to scroll on page up/down.
pub const PAGE_SCROLL_SIZE: usize = 10;

// ============================================================================
// UI State Types
// ============================================================================

/// Navigable pages
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Breed(String),
    Search,
    Login,
    Register,
    Profile,
}

impl Route {
    /// Get the display title for this route.
    pub fn title(&self) -> &'static str {
        match self {
            Route::Home => "Breeds",
            Route::Breed(_) => "Breed",
            Route::Search => "Search",
            Route::Login => "Sign In",
            Route::Register => "Register",
            Route::Profile => "Profile",
        }
    }
}

/// Overall application state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Normal,
    ShowingHelp,
    ConfirmingQuit,
    Quitting,
}

/// Login form focus state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginFocus {
    Email,
    Password,
    Submit,
}

impl LoginFocus {
    /// Get the next field (wrapping around)
    pub fn next(&self) -> Self {
        match self {
            LoginFocus::Email => LoginFocus::Password,
            LoginFocus::Password => LoginFocus::Submit,
            LoginFocus::Submit => LoginFocus::Email,
        }
    }

    /// Get the previous field (wrapping around)
    pub fn prev(&self) -> Self {
        match self {
            LoginFocus::Email => LoginFocus::Submit,
            LoginFocus::Password => LoginFocus::Email,
            LoginFocus::Submit => LoginFocus::Password,
        }
    }
}

/// Register form focus state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterFocus {
    Name,
    Email,
    Password,
    Confirm,
    Submit,
}

impl RegisterFocus {
    /// Get the next field (wrapping around)
    pub fn next(&self) -> Self {
        match self {
            RegisterFocus::Name => RegisterFocus::Email,
            RegisterFocus::Email => RegisterFocus::Password,
            RegisterFocus::Password => RegisterFocus::Confirm,
            RegisterFocus::Confirm => RegisterFocus::Submit,
            RegisterFocus::Submit => RegisterFocus::Name,
        }
    }

    /// Get the previous field (wrapping around)
    pub fn prev(&self) -> Self {
        match self {
            RegisterFocus::Name => RegisterFocus::Submit,
            RegisterFocus::Email => RegisterFocus::Name,
            RegisterFocus::Password => RegisterFocus::Email,
            RegisterFocus::Confirm => RegisterFocus::Password,
            RegisterFocus::Submit => RegisterFocus::Confirm,
        }
    }
}

// ============================================================================
// Background Fetch Results
// ============================================================================

/// Which page a failed background fetch belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FetchTarget {
    Breeds,
    BreedDetail,
}

/// Result types from background fetch tasks.
///
/// These variants are sent through an MPSC channel from spawned fetch tasks
/// back to the main loop. Each variant corresponds to one request kind.
enum FetchResult {
    /// A page of the breed list (page number, breeds)
    Breeds(u32, Vec<Breed>),
    /// Full detail for one breed
    BreedDetail(Box<Breed>),
    /// Image URLs for a breed (breed id, urls)
    BreedImages(String, Vec<String>),
    /// Search hits for a query (query, breeds)
    SearchResults(String, Vec<Breed>),
    /// A fetch failed (which page it was for, user-facing message)
    Error(FetchTarget, String),
}

// ============================================================================
// Main Application Struct
// ============================================================================

/// Main application state container
pub struct App {
    // Core services
    pub config: Config,
    pub session: SessionStore,
    pub api: ApiClient,

    // UI state
    pub state: AppState,
    pub route: Route,
    pub status_message: Option<String>,

    // Home page (breed list)
    pub breeds: Vec<Breed>,
    pub breeds_page: u32,
    pub breeds_loading: bool,
    pub breeds_error: Option<String>,
    pub has_more: bool,
    pub breed_selection: usize,

    // Breed detail page
    pub breed: Option<Breed>,
    pub breed_images: Vec<String>,
    pub breed_loading: bool,
    pub breed_error: Option<String>,
    pub detail_scroll: u16,
    /// Route to return to when the detail page closes
    breed_return: Route,

    // Search page
    pub search_query: String,
    /// Term the current results were fetched for
    pub search_term: String,
    pub search_results: Vec<Breed>,
    pub search_loading: bool,
    pub searched: bool,
    pub search_selection: usize,

    // Login form state
    pub login_email: String,
    pub login_password: String,
    pub login_focus: LoginFocus,
    pub login_error: Option<String>,

    // Register form state
    pub register_name: String,
    pub register_email: String,
    pub register_password: String,
    pub register_confirm: String,
    pub register_focus: RegisterFocus,
    pub register_error: Option<String>,

    // Background fetch channel
    fetch_rx: Option<mpsc::Receiver<FetchResult>>,
    fetch_tx: mpsc::Sender<FetchResult>,
}

impl App {
    /// Create a new application instance
    pub async fn new() -> Result<Self> {
        debug!("App::new() starting");
        let config = match Config::load() {
            Ok(c) => c,
            Err(e) => {
                warn!(error = %e, "Failed to load config, using defaults");
                Config::default()
            }
        };

        let data_dir = Config::data_dir().unwrap_or_else(|_| PathBuf::from("."));
        debug!(?data_dir, "Data directory configured");

        let session = SessionStore::new(data_dir);

        let mut api = ApiClient::new(&config.resolved_api_url())?;

        // Restore the bearer token when a live session exists on disk
        if session.is_authenticated() {
            if let Some(token) = session.token() {
                api.set_token(token);
                debug!("Token restored from saved session");
            }
        } else {
            debug!("No saved session found");
        }

        let (tx, rx) = mpsc::channel(CHANNEL_BUFFER_SIZE);

        // Prefill the login form from env vars or the last used account
        let login_email = std::env::var("CATWALK_EMAIL")
            .ok()
            .or_else(|| config.last_email.clone())
            .unwrap_or_default();

        let login_password = std::env::var("CATWALK_PASSWORD").unwrap_or_default();

        Ok(Self {
            config,
            session,
            api,

            state: AppState::Normal,
            route: Route::Home,
            status_message: None,

            breeds: Vec::new(),
            breeds_page: DEFAULT_PAGE,
            breeds_loading: false,
            breeds_error: None,
            has_more: true,
            breed_selection: 0,

            breed: None,
            breed_images: Vec::new(),
            breed_loading: false,
            breed_error: None,
            detail_scroll: 0,
            breed_return: Route::Home,

            search_query: String::new(),
            search_term: String::new(),
            search_results: Vec::new(),
            search_loading: false,
            searched: false,
            search_selection: 0,

            login_email,
            login_password,
            login_focus: LoginFocus::Email,
            login_error: None,

            register_name: String::new(),
            register_email: String::new(),
            register_password: String::new(),
            register_confirm: String::new(),
            register_focus: RegisterFocus::Name,
            register_error: None,

            fetch_rx: Some(rx),
            fetch_tx: tx,
        })
    }

    // =========================================================================
    // Authentication
    // =========================================================================

    /// Check if the user is signed in (reads the session file)
    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    /// The signed-in user, when there is one (reads the session file)
    pub fn current_user(&self) -> Option<User> {
        self.session.current_user()
    }

    /// Attempt login with the credentials from the login form
    pub async fn attempt_login(&mut self) -> Result<()> {
        let email = self.login_email.trim().to_string();
        let password = self.login_password.clone();

        // Same checks the form renders field-by-field: email shape, password length
        let validation = validate_email(&email)
            .or_else(|| validate_min_length("Password", &password, MIN_PASSWORD_LEN));
        if let Some(message) = validation {
            self.login_error = Some(message.clone());
            return Err(anyhow!(message));
        }

        self.login_error = None;

        let request = LoginRequest {
            email: email.clone(),
            password: password.clone(),
        };

        match self.api.login(&request).await {
            Ok(response) => match response.into_session_parts() {
                Some((token, user)) => {
                    if let Err(e) = self.session.save(&token, &user) {
                        warn!(error = %e, "Failed to save session");
                    }
                    self.api.set_token(token);

                    if let Err(e) = CredentialStore::store(&email, &password) {
                        warn!(error = %e, "Failed to store credentials");
                    }

                    self.config.last_email = Some(email);
                    if let Err(e) = self.config.save() {
                        warn!(error = %e, "Failed to save config");
                    }

                    self.login_password.clear();
                    info!(user = %user.name, "Login successful");
                    self.navigate(Route::Home);
                    self.status_message = Some(format!("Signed in as {}", user.name));
                    Ok(())
                }
                None => {
                    // A 200 without a usable token+user pair is still a failed login
                    self.login_error = Some("Invalid email or password".to_string());
                    Err(anyhow!("login response missing token or user"))
                }
            },
            Err(e) => {
                error!(error = %e, "Login failed");
                let user_message = match e.downcast_ref::<ApiError>() {
                    Some(ApiError::Unauthorized) => "Invalid email or password".to_string(),
                    Some(ApiError::NetworkError(re)) if re.is_timeout() => {
                        "Connection timed out. Please try again.".to_string()
                    }
                    Some(ApiError::NetworkError(_)) => {
                        "Unable to connect to server. Check your internet connection.".to_string()
                    }
                    Some(api_err) => api_err
                        .user_message()
                        .map(str::to_string)
                        .unwrap_or_else(|| "Login failed. Please try again.".to_string()),
                    None => "Login failed. Please try again.".to_string(),
                };
                self.login_error = Some(user_message);
                Err(e)
            }
        }
    }

    /// Attempt registration with the values from the register form
    pub async fn attempt_register(&mut self) -> Result<()> {
        let name = self.register_name.trim().to_string();
        let email = self.register_email.trim().to_string();
        let password = self.register_password.clone();
        let confirm = self.register_confirm.clone();

        let validation = validate_min_length("Name", &name, MIN_NAME_LEN)
            .or_else(|| validate_email(&email))
            .or_else(|| validate_min_length("Password", &password, MIN_PASSWORD_LEN))
            .or_else(|| validate_password_match(&password, &confirm));
        if let Some(message) = validation {
            self.register_error = Some(message.clone());
            return Err(anyhow!(message));
        }

        self.register_error = None;

        let request = RegisterRequest {
            name,
            email: email.clone(),
            password,
        };

        match self.api.register(&request).await {
            Ok(_) => {
                info!("Registration successful");
                self.register_name.clear();
                self.register_email.clear();
                self.register_password.clear();
                self.register_confirm.clear();
                // Land on the login form with the new address filled in
                self.login_email = email;
                self.navigate(Route::Login);
                self.status_message = Some("Account created. Sign in to continue.".to_string());
                Ok(())
            }
            Err(e) => {
                error!(error = %e, "Registration failed");
                let user_message = e
                    .downcast_ref::<ApiError>()
                    .and_then(|api_err| api_err.user_message().map(str::to_string))
                    .unwrap_or_else(|| "Registration failed".to_string());
                self.register_error = Some(user_message);
                Err(e)
            }
        }
    }

    /// Sign out: clear the session file and drop the bearer token
    pub fn logout(&mut self) {
        if let Err(e) = self.session.clear() {
            warn!(error = %e, "Failed to clear session");
        }
        self.api.clear_token();
        info!("Signed out");
        self.navigate(Route::Home);
        self.status_message = Some("Signed out".to_string());
    }

    /// Reset the login form for a fresh visit
    fn start_login(&mut self) {
        self.login_focus = if self.login_email.is_empty() {
            LoginFocus::Email
        } else {
            LoginFocus::Password
        };
        self.login_error = None;
    }

    /// Reset the register form for a fresh visit
    fn start_register(&mut self) {
        self.register_focus = RegisterFocus::Name;
        self.register_error = None;
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    /// Navigate to a route, applying the guards first. A denied navigation
    /// lands on the guard's redirect target instead.
    pub fn navigate(&mut self, route: Route) {
        let target = match check_route(&route, &self.session) {
            GuardDecision::Allow => route,
            GuardDecision::Redirect(redirect) => redirect,
        };
        self.enter_route(target);
    }

    fn enter_route(&mut self, route: Route) {
        debug!(route = route.title(), "Navigating");
        self.status_message = None;
        match &route {
            Route::Home => {
                // The list page always re-fetches from the first page
                self.breeds_page = DEFAULT_PAGE;
                self.fetch_breeds_page(DEFAULT_PAGE);
            }
            Route::Breed(id) => self.fetch_breed(id.clone()),
            Route::Login => self.start_login(),
            Route::Register => self.start_register(),
            // Search keeps its previous term and results
            Route::Search | Route::Profile => {}
        }
        self.route = route;
    }

    /// Open the breed under the cursor (Home and Search lists)
    pub fn open_selected(&mut self) {
        let id = match self.route {
            Route::Home => self.breeds.get(self.breed_selection).map(|b| b.id.clone()),
            Route::Search => self
                .search_results
                .get(self.search_selection)
                .map(|b| b.id.clone()),
            _ => None,
        };
        if let Some(id) = id {
            if !id.is_empty() {
                self.breed_return = self.route.clone();
                self.navigate(Route::Breed(id));
            }
        }
    }

    /// Leave the breed detail page for the list it was opened from
    pub fn close_breed(&mut self) {
        let back = self.breed_return.clone();
        self.navigate(back);
    }

    /// Re-run the fetch behind the current route (retry after a failure)
    pub fn refresh_current(&mut self) {
        match self.route.clone() {
            Route::Home => self.fetch_breeds_page(self.breeds_page),
            Route::Breed(id) => self.fetch_breed(id),
            Route::Search => self.run_search(),
            _ => {}
        }
    }

    // =========================================================================
    // Background Data Fetches
    // =========================================================================

    /// Helper to send fetch results, logging any channel errors
    async fn send_result(tx: &mpsc::Sender<FetchResult>, result: FetchResult) {
        if let Err(e) = tx.send(result).await {
            error!(error = %e, "Failed to send fetch result - channel closed");
        }
    }

    /// Spawn a background fetch for one page of the breed list.
    /// The loading flag keeps it to a single request in flight.
    pub fn fetch_breeds_page(&mut self, page: u32) {
        if self.breeds_loading {
            return;
        }
        self.breeds_loading = true;
        self.breeds_error = None;
        self.breeds_page = page;

        let api = self.api.clone();
        let tx = self.fetch_tx.clone();

        tokio::spawn(async move {
            match api.fetch_breeds(page, DEFAULT_LIMIT).await {
                Ok(breeds) => {
                    Self::send_result(&tx, FetchResult::Breeds(page, breeds)).await;
                }
                Err(e) => {
                    error!(error = %e, page, "Breed list fetch failed");
                    Self::send_result(
                        &tx,
                        FetchResult::Error(
                            FetchTarget::Breeds,
                            "Failed to load cat breeds. Please try again.".to_string(),
                        ),
                    )
                    .await;
                }
            }
        });
    }

    /// Advance to the next breed page when the last fetch filled a full page
    pub fn next_breeds_page(&mut self) {
        if self.breeds_loading || !self.has_more {
            return;
        }
        self.fetch_breeds_page(self.breeds_page + 1);
    }

    /// Go back one breed page
    pub fn prev_breeds_page(&mut self) {
        if self.breeds_loading || self.breeds_page == 0 {
            return;
        }
        self.fetch_breeds_page(self.breeds_page - 1);
    }

    /// Spawn a background fetch for one breed's detail and images
    pub fn fetch_breed(&mut self, breed_id: String) {
        self.breed = None;
        self.breed_images.clear();
        self.breed_loading = true;
        self.breed_error = None;
        self.detail_scroll = 0;

        let api = self.api.clone();
        let tx = self.fetch_tx.clone();

        tokio::spawn(async move {
            match api.fetch_breed(&breed_id).await {
                Ok(breed) => {
                    Self::send_result(&tx, FetchResult::BreedDetail(Box::new(breed))).await;

                    // Image failures are non-fatal; the page renders without them
                    match api.fetch_breed_images(&breed_id).await {
                        Ok(urls) => {
                            Self::send_result(&tx, FetchResult::BreedImages(breed_id, urls))
                                .await;
                        }
                        Err(e) => debug!(error = %e, %breed_id, "Breed image fetch failed"),
                    }
                }
                Err(e) => {
                    error!(error = %e, %breed_id, "Breed fetch failed");
                    Self::send_result(
                        &tx,
                        FetchResult::Error(
                            FetchTarget::BreedDetail,
                            "Failed to load cat breed. Please try again.".to_string(),
                        ),
                    )
                    .await;
                }
            }
        });
    }

    /// Run the search for the current query. A blank query clears results
    /// without a request; failures surface as an empty result set.
    pub fn run_search(&mut self) {
        let term = self.search_query.trim().to_string();
        if term.is_empty() {
            self.clear_search();
            return;
        }
        if self.search_loading {
            return;
        }
        self.search_term = term.clone();
        self.searched = true;
        self.search_loading = true;

        let api = self.api.clone();
        let tx = self.fetch_tx.clone();

        tokio::spawn(async move {
            match api.search_breeds(&term).await {
                Ok(breeds) => {
                    Self::send_result(&tx, FetchResult::SearchResults(term, breeds)).await;
                }
                Err(e) => {
                    error!(error = %e, query = %term, "Search failed");
                    Self::send_result(&tx, FetchResult::SearchResults(term, Vec::new())).await;
                }
            }
        });
    }

    /// Reset the search page to its pristine state
    pub fn clear_search(&mut self) {
        self.search_query.clear();
        self.search_term.clear();
        self.search_results.clear();
        self.searched = false;
        self.search_selection = 0;
    }

    /// Check for completed background tasks and process results
    pub fn check_background_tasks(&mut self) {
        // Collect all pending results first to avoid borrow conflicts
        let results: Vec<FetchResult> = {
            if let Some(ref mut rx) = self.fetch_rx {
                let mut results = Vec::new();
                while let Ok(result) = rx.try_recv() {
                    results.push(result);
                }
                results
            } else {
                Vec::new()
            }
        };

        for result in results {
            self.process_fetch_result(result);
        }
    }

    /// Process a single result from a background fetch task.
    fn process_fetch_result(&mut self, result: FetchResult) {
        match result {
            FetchResult::Breeds(page, breeds) => {
                debug!(page, count = breeds.len(), "Breed list fetched");
                // A short page means the server ran out of rows
                self.has_more = breeds.len() as u32 >= DEFAULT_LIMIT;
                self.breeds = breeds;
                // Keep the page label in step with the rows that landed
                self.breeds_page = page;
                self.breeds_loading = false;
                self.breed_selection = 0;
            }
            FetchResult::BreedDetail(breed) => {
                // Drop a detail that raced a newer navigation
                let current = matches!(self.route, Route::Breed(ref id) if *id == breed.id);
                if current {
                    debug!(breed = %breed.name, "Breed detail fetched");
                    self.breed_loading = false;
                    self.breed = Some(*breed);
                }
            }
            FetchResult::BreedImages(breed_id, urls) => {
                // Drop image lists for a breed no longer on screen
                let current = self
                    .breed
                    .as_ref()
                    .map(|b| b.id == breed_id)
                    .unwrap_or(false);
                if current {
                    debug!(count = urls.len(), %breed_id, "Breed images fetched");
                    self.breed_images = urls;
                }
            }
            FetchResult::SearchResults(query, breeds) => {
                debug!(query = %query, count = breeds.len(), "Search finished");
                self.search_loading = false;
                self.search_results = breeds;
                self.search_selection = 0;
            }
            FetchResult::Error(target, message) => match target {
                FetchTarget::Breeds => {
                    self.breeds_loading = false;
                    self.breeds_error = Some(message);
                }
                FetchTarget::BreedDetail => {
                    self.breed_loading = false;
                    self.breed_error = Some(message);
                }
            },
        }
    }

    // =========================================================================
    // List Selection
    // =========================================================================

    /// Selection cursor and row count for the list on the current route
    fn selection_mut(&mut self) -> Option<(&mut usize, usize)> {
        match self.route {
            Route::Home => Some((&mut self.breed_selection, self.breeds.len())),
            Route::Search => Some((&mut self.search_selection, self.search_results.len())),
            _ => None,
        }
    }

    pub fn select_next(&mut self) {
        if let Some((sel, len)) = self.selection_mut() {
            if len > 0 && *sel + 1 < len {
                *sel += 1;
            }
        }
    }

    pub fn select_prev(&mut self) {
        if let Some((sel, _)) = self.selection_mut() {
            *sel = sel.saturating_sub(1);
        }
    }

    pub fn select_page_down(&mut self) {
        if let Some((sel, len)) = self.selection_mut() {
            if len > 0 {
                *sel = (*sel + PAGE_SCROLL_SIZE).min(len - 1);
            }
        }
    }

    pub fn select_page_up(&mut self) {
        if let Some((sel, _)) = self.selection_mut() {
            *sel = sel.saturating_sub(PAGE_SCROLL_SIZE);
        }
    }
}

// ============================================================================
// Input validation helpers (exported for use in input.rs)
// ============================================================================

/// Check if a character is valid for input (no control characters)
fn is_valid_input_char(c: char) -> bool {
    !c.is_control()
}

/// Check if a name/email/search character should be accepted
pub fn can_add_field_char(current_len: usize, c: char) -> bool {
    current_len < MAX_FIELD_LENGTH && is_valid_input_char(c)
}

/// Check if a password character should be accepted
pub fn can_add_password_char(current_len: usize, c: char) -> bool {
    current_len < MAX_PASSWORD_LENGTH && is_valid_input_char(c)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_titles() {
        assert_eq!(Route::Home.title(), "Breeds");
        assert_eq!(Route::Breed("abys".to_string()).title(), "Breed");
        assert_eq!(Route::Search.title(), "Search");
        assert_eq!(Route::Login.title(), "Sign In");
        assert_eq!(Route::Register.title(), "Register");
        assert_eq!(Route::Profile.title(), "Profile");
    }

    #[test]
    fn test_login_focus_next() {
        assert_eq!(LoginFocus::Email.next(), LoginFocus::Password);
        assert_eq!(LoginFocus::Password.next(), LoginFocus::Submit);
        assert_eq!(LoginFocus::Submit.next(), LoginFocus::Email); // Wraps around
    }

    #[test]
    fn test_login_focus_prev() {
        assert_eq!(LoginFocus::Email.prev(), LoginFocus::Submit); // Wraps around
        assert_eq!(LoginFocus::Submit.prev(), LoginFocus::Password);
        assert_eq!(LoginFocus::Password.prev(), LoginFocus::Email);
    }

    #[test]
    fn test_register_focus_next() {
        assert_eq!(RegisterFocus::Name.next(), RegisterFocus::Email);
        assert_eq!(RegisterFocus::Email.next(), RegisterFocus::Password);
        assert_eq!(RegisterFocus::Password.next(), RegisterFocus::Confirm);
        assert_eq!(RegisterFocus::Confirm.next(), RegisterFocus::Submit);
        assert_eq!(RegisterFocus::Submit.next(), RegisterFocus::Name); // Wraps around
    }

    #[test]
    fn test_register_focus_prev() {
        assert_eq!(RegisterFocus::Name.prev(), RegisterFocus::Submit); // Wraps around
        assert_eq!(RegisterFocus::Submit.prev(), RegisterFocus::Confirm);
        assert_eq!(RegisterFocus::Confirm.prev(), RegisterFocus::Password);
        assert_eq!(RegisterFocus::Password.prev(), RegisterFocus::Email);
        assert_eq!(RegisterFocus::Email.prev(), RegisterFocus::Name);
    }

    #[test]
    fn test_can_add_field_char() {
        // Valid chars within length
        assert!(can_add_field_char(0, 'a'));
        assert!(can_add_field_char(99, '@'));
        // Exceeds max length
        assert!(!can_add_field_char(100, 'a'));
        assert!(!can_add_field_char(500, 'a'));
        // Control characters rejected
        assert!(!can_add_field_char(0, '\x00'));
        assert!(!can_add_field_char(0, '\n'));
        assert!(!can_add_field_char(0, '\t'));
    }

    #[test]
    fn test_can_add_password_char() {
        // Valid chars within length
        assert!(can_add_password_char(0, 'a'));
        assert!(can_add_password_char(127, '!'));
        // Exceeds max length
        assert!(!can_add_password_char(128, 'a'));
        assert!(!can_add_password_char(200, 'a'));
        // Control characters rejected
        assert!(!can_add_password_char(0, '\x00'));
        assert!(!can_add_password_char(0, '\r'));
    }
}
