use serde::{Deserialize, Serialize};

/// The signed-in account as returned by the auth API.
///
/// Opaque pass-through: no validation beyond the JSON parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_round_trips() {
        let json = r#"{"id": "u-123", "email": "ada@example.com", "name": "Ada Lovelace"}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.id, "u-123");
        assert_eq!(user.name, "Ada Lovelace");

        let back = serde_json::to_string(&user).unwrap();
        let again: User = serde_json::from_str(&back).unwrap();
        assert_eq!(user, again);
    }
}
