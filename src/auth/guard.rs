//! Route guards.
//!
//! Two predicates gate navigation: the profile page requires a live
//! session, and the login/register pages are for signed-out users only.
//! Guards run synchronously against the session store; a denied
//! navigation is replaced with a redirect, never an error.

use tracing::debug;

use crate::app::Route;
use crate::auth::SessionStore;

/// Outcome of a guard check for one requested navigation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    /// Navigation may proceed to the requested route
    Allow,
    /// Navigation is replaced with the given route
    Redirect(Route),
}

/// Apply the route guards to a requested navigation.
///
/// Signed-out users asking for the profile are sent to login; signed-in
/// users asking for login or register are sent home. Everything else is
/// public.
pub fn check_route(route: &Route, session: &SessionStore) -> GuardDecision {
    match route {
        Route::Profile if !session.is_authenticated() => {
            debug!("auth guard: profile requires a session, redirecting to login");
            GuardDecision::Redirect(Route::Login)
        }
        Route::Login | Route::Register if session.is_authenticated() => {
            debug!("guest guard: already signed in, redirecting home");
            GuardDecision::Redirect(Route::Home)
        }
        _ => GuardDecision::Allow,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::User;
    use std::path::PathBuf;
    use std::sync::atomic::{AtomicU32, Ordering};

    static DIR_SEQ: AtomicU32 = AtomicU32::new(0);

    fn temp_session() -> (SessionStore, PathBuf) {
        let seq = DIR_SEQ.fetch_add(1, Ordering::SeqCst);
        let dir = std::env::temp_dir().join(format!(
            "catwalk-guard-test-{}-{}",
            std::process::id(),
            seq
        ));
        std::fs::create_dir_all(&dir).unwrap();
        (SessionStore::new(dir.clone()), dir)
    }

    fn sign_in(session: &SessionStore) {
        let user = User {
            id: "u-1".to_string(),
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
        };
        session.save("jwt-token", &user).unwrap();
    }

    #[test]
    fn test_profile_redirects_to_login_when_signed_out() {
        let (session, dir) = temp_session();
        assert_eq!(
            check_route(&Route::Profile, &session),
            GuardDecision::Redirect(Route::Login)
        );
        std::fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_profile_allowed_when_signed_in() {
        let (session, dir) = temp_session();
        sign_in(&session);
        assert_eq!(check_route(&Route::Profile, &session), GuardDecision::Allow);
        std::fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_login_and_register_redirect_home_when_signed_in() {
        let (session, dir) = temp_session();
        sign_in(&session);
        assert_eq!(
            check_route(&Route::Login, &session),
            GuardDecision::Redirect(Route::Home)
        );
        assert_eq!(
            check_route(&Route::Register, &session),
            GuardDecision::Redirect(Route::Home)
        );
        std::fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_login_and_register_allowed_when_signed_out() {
        let (session, dir) = temp_session();
        assert_eq!(check_route(&Route::Login, &session), GuardDecision::Allow);
        assert_eq!(check_route(&Route::Register, &session), GuardDecision::Allow);
        std::fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_public_routes_allowed_either_way() {
        let public = [
            Route::Home,
            Route::Breed("abys".to_string()),
            Route::Search,
        ];

        let (session, dir) = temp_session();
        for route in &public {
            assert_eq!(check_route(route, &session), GuardDecision::Allow);
        }
        sign_in(&session);
        for route in &public {
            assert_eq!(check_route(route, &session), GuardDecision::Allow);
        }
        std::fs::remove_dir_all(dir).ok();
    }
}
