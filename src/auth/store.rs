//! Persisted session flags.
//!
//! The session lives in one JSON object file of independent string entries:
//! `authToken`, `currentUser` (a JSON-serialized user string),
//! `isAuthenticated` (the literal `"true"`), and `loginTimestamp`.
//!
//! Reads always go back to the file (there is no authoritative in-memory
//! copy) and never fail: a missing file, an unreadable file, or a malformed
//! entry all read as "no session". Writes are last-writer-wins.

use std::collections::BTreeMap;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};

use crate::models::User;

/// Session file name in the data directory
const SESSION_FILE: &str = "session.json";

/// Bearer token entry
const KEY_AUTH_TOKEN: &str = "authToken";

/// JSON-serialized user entry
const KEY_CURRENT_USER: &str = "currentUser";

/// Holds the literal "true" after a successful login
const KEY_IS_AUTHENTICATED: &str = "isAuthenticated";

/// RFC 3339 time of the last successful login
const KEY_LOGIN_TIMESTAMP: &str = "loginTimestamp";

pub struct SessionStore {
    data_dir: PathBuf,
}

impl SessionStore {
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    fn session_path(&self) -> PathBuf {
        self.data_dir.join(SESSION_FILE)
    }

    /// All entries currently on disk. Any read or parse failure yields an
    /// empty map: a broken session file must never block the app.
    fn read_entries(&self) -> BTreeMap<String, String> {
        let path = self.session_path();
        if !path.exists() {
            return BTreeMap::new();
        }
        std::fs::read_to_string(&path)
            .ok()
            .and_then(|contents| serde_json::from_str(&contents).ok())
            .unwrap_or_default()
    }

    fn write_entries(&self, entries: &BTreeMap<String, String>) -> Result<()> {
        let path = self.session_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create session directory")?;
        }
        let contents = serde_json::to_string_pretty(entries)?;
        std::fs::write(&path, contents).context("Failed to write session file")?;
        Ok(())
    }

    /// Persist a fresh session: token, user, the authenticated flag, and
    /// the login timestamp. Overwrites any previous session.
    pub fn save(&self, token: &str, user: &User) -> Result<()> {
        let mut entries = self.read_entries();
        entries.insert(KEY_AUTH_TOKEN.to_string(), token.to_string());
        entries.insert(KEY_CURRENT_USER.to_string(), serde_json::to_string(user)?);
        entries.insert(KEY_IS_AUTHENTICATED.to_string(), "true".to_string());
        entries.insert(KEY_LOGIN_TIMESTAMP.to_string(), Utc::now().to_rfc3339());
        self.write_entries(&entries)
    }

    /// True iff both the flag and the token entries are present (and the
    /// token non-empty) and the flag equals the literal "true". Every other
    /// combination reads as signed out.
    pub fn is_authenticated(&self) -> bool {
        let entries = self.read_entries();
        let token_present = entries
            .get(KEY_AUTH_TOKEN)
            .map(|t| !t.is_empty())
            .unwrap_or(false);
        let flag_true = entries
            .get(KEY_IS_AUTHENTICATED)
            .map(|f| f == "true")
            .unwrap_or(false);
        token_present && flag_true
    }

    /// The persisted user, or None when the entry is missing or does not
    /// parse. Parse failures are swallowed, not surfaced.
    pub fn current_user(&self) -> Option<User> {
        let entries = self.read_entries();
        let raw = entries.get(KEY_CURRENT_USER)?;
        serde_json::from_str(raw).ok()
    }

    /// The bearer token, when one is stored.
    pub fn token(&self) -> Option<String> {
        self.read_entries()
            .remove(KEY_AUTH_TOKEN)
            .filter(|t| !t.is_empty())
    }

    /// Time of the last successful login, when stored and well-formed.
    pub fn login_timestamp(&self) -> Option<DateTime<Utc>> {
        let entries = self.read_entries();
        let raw = entries.get(KEY_LOGIN_TIMESTAMP)?;
        DateTime::parse_from_rfc3339(raw)
            .ok()
            .map(|t| t.with_timezone(&Utc))
    }

    /// Remove every session entry (deletes the session file).
    pub fn clear(&self) -> Result<()> {
        let path = self.session_path();
        if path.exists() {
            std::fs::remove_file(&path).context("Failed to remove session file")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use std::sync::atomic::{AtomicU32, Ordering};

    static DIR_SEQ: AtomicU32 = AtomicU32::new(0);

    /// Fresh directory per test so stores never share a session file
    fn temp_store() -> (SessionStore, PathBuf) {
        let seq = DIR_SEQ.fetch_add(1, Ordering::SeqCst);
        let dir = std::env::temp_dir().join(format!(
            "catwalk-store-test-{}-{}",
            std::process::id(),
            seq
        ));
        std::fs::create_dir_all(&dir).unwrap();
        (SessionStore::new(dir.clone()), dir)
    }

    fn write_raw(dir: &Path, entries: &BTreeMap<String, String>) {
        let contents = serde_json::to_string(entries).unwrap();
        std::fs::write(dir.join(SESSION_FILE), contents).unwrap();
    }

    fn sample_user() -> User {
        User {
            id: "u-1".to_string(),
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
        }
    }

    #[test]
    fn test_fresh_store_is_signed_out() {
        let (store, dir) = temp_store();
        assert!(!store.is_authenticated());
        assert_eq!(store.current_user(), None);
        assert_eq!(store.token(), None);
        assert_eq!(store.login_timestamp(), None);
        std::fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_save_then_read_back() {
        let (store, dir) = temp_store();
        let user = sample_user();

        store.save("jwt-token", &user).unwrap();

        assert!(store.is_authenticated());
        assert_eq!(store.current_user(), Some(user));
        assert_eq!(store.token().as_deref(), Some("jwt-token"));
        assert!(store.login_timestamp().is_some());
        std::fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_clear_signs_out() {
        let (store, dir) = temp_store();
        store.save("jwt-token", &sample_user()).unwrap();
        assert!(store.is_authenticated());

        store.clear().unwrap();

        assert!(!store.is_authenticated());
        assert_eq!(store.current_user(), None);
        assert_eq!(store.token(), None);
        assert_eq!(store.login_timestamp(), None);
        assert!(!dir.join(SESSION_FILE).exists());
        std::fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_flag_and_token_combinations() {
        // Signed in requires flag == "true" AND a non-empty token; every
        // other combination must read as signed out.
        let cases: Vec<(Option<&str>, Option<&str>, bool)> = vec![
            (None, None, false),
            (Some("true"), None, false),
            (None, Some("jwt"), false),
            (Some("false"), Some("jwt"), false),
            (Some("TRUE"), Some("jwt"), false),
            (Some("true"), Some(""), false),
            (Some("true"), Some("jwt"), true),
        ];

        for (flag, token, expected) in cases {
            let (store, dir) = temp_store();
            let mut entries = BTreeMap::new();
            if let Some(flag) = flag {
                entries.insert(KEY_IS_AUTHENTICATED.to_string(), flag.to_string());
            }
            if let Some(token) = token {
                entries.insert(KEY_AUTH_TOKEN.to_string(), token.to_string());
            }
            write_raw(&dir, &entries);

            assert_eq!(
                store.is_authenticated(),
                expected,
                "flag={:?} token={:?}",
                flag,
                token
            );
            std::fs::remove_dir_all(dir).ok();
        }
    }

    #[test]
    fn test_malformed_user_entry_reads_as_none() {
        let (store, dir) = temp_store();
        store.save("jwt-token", &sample_user()).unwrap();

        let mut entries = BTreeMap::new();
        entries.insert(KEY_AUTH_TOKEN.to_string(), "jwt-token".to_string());
        entries.insert(KEY_IS_AUTHENTICATED.to_string(), "true".to_string());
        entries.insert(KEY_CURRENT_USER.to_string(), "{not valid json".to_string());
        write_raw(&dir, &entries);

        assert_eq!(store.current_user(), None);
        // A broken user entry does not sign the session out
        assert!(store.is_authenticated());
        std::fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_malformed_session_file_reads_as_no_session() {
        let (store, dir) = temp_store();
        std::fs::write(dir.join(SESSION_FILE), "definitely not json").unwrap();

        assert!(!store.is_authenticated());
        assert_eq!(store.current_user(), None);
        assert_eq!(store.token(), None);
        std::fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_save_overwrites_previous_session() {
        let (store, dir) = temp_store();
        store.save("first-token", &sample_user()).unwrap();

        let other = User {
            id: "u-2".to_string(),
            name: "Grace Hopper".to_string(),
            email: "grace@example.com".to_string(),
        };
        store.save("second-token", &other).unwrap();

        assert_eq!(store.token().as_deref(), Some("second-token"));
        assert_eq!(store.current_user(), Some(other));
        std::fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_malformed_timestamp_reads_as_none() {
        let (store, dir) = temp_store();
        let mut entries = BTreeMap::new();
        entries.insert(KEY_LOGIN_TIMESTAMP.to_string(), "last tuesday".to_string());
        write_raw(&dir, &entries);

        assert_eq!(store.login_timestamp(), None);
        std::fs::remove_dir_all(dir).ok();
    }
}
