// Allow dead code: API response structs carry every field the API returns
#![allow(dead_code)]

use serde::{Deserialize, Serialize};

use super::User;

/// Body for `POST /auth/login`.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Response from `POST /auth/login`.
///
/// The token and user live under `data`; both are optional so a lopsided
/// response parses and the caller decides what is usable.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<LoginData>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginData {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub user: Option<User>,
}

impl LoginResponse {
    /// Token and user when the response carries both, ready for the session.
    pub fn into_session_parts(self) -> Option<(String, User)> {
        let data = self.data?;
        match (data.token, data.user) {
            (Some(token), Some(user)) if !token.is_empty() => Some((token, user)),
            _ => None,
        }
    }
}

/// Body for `POST /auth/register`.
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Response from `POST /auth/register`.
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub user: Option<User>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_response_with_session() {
        let json = r#"{
            "message": "Login successful",
            "data": {
                "token": "jwt-token-value",
                "user": {"id": "u-1", "email": "ada@example.com", "name": "Ada"}
            }
        }"#;
        let resp: LoginResponse = serde_json::from_str(json).unwrap();
        let (token, user) = resp.into_session_parts().unwrap();
        assert_eq!(token, "jwt-token-value");
        assert_eq!(user.email, "ada@example.com");
    }

    #[test]
    fn test_login_response_missing_token_is_unusable() {
        let json = r#"{
            "message": "Login successful",
            "data": {"user": {"id": "u-1", "email": "a@b.c", "name": "A"}}
        }"#;
        let resp: LoginResponse = serde_json::from_str(json).unwrap();
        assert!(resp.into_session_parts().is_none());

        let empty: LoginResponse = serde_json::from_str("{}").unwrap();
        assert!(empty.into_session_parts().is_none());
    }

    #[test]
    fn test_register_response_parses() {
        let json = r#"{
            "message": "User registered",
            "user": {"id": "u-2", "email": "new@example.com", "name": "New User"}
        }"#;
        let resp: RegisterResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.message.as_deref(), Some("User registered"));
        assert_eq!(resp.user.unwrap().id, "u-2");
    }
}
