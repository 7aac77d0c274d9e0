//! Client-side form validation.
//!
//! Each validator returns `Some(message)` when the field is invalid, `None`
//! when it passes. Messages are shown next to the form field, so they carry
//! the field's display name.

/// Minimum password length accepted by the registration/login forms
pub const MIN_PASSWORD_LEN: usize = 6;

/// Minimum display-name length accepted by the registration form
pub const MIN_NAME_LEN: usize = 2;

/// Required + well-formed email address.
pub fn validate_email(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        return Some("Email is required".to_string());
    }
    if !is_email(value) {
        return Some("Please enter a valid email address".to_string());
    }
    None
}

/// Required + minimum length, with the field name in the message.
pub fn validate_min_length(field: &str, value: &str, min: usize) -> Option<String> {
    if value.trim().is_empty() {
        return Some(format!("{} is required", field));
    }
    if value.chars().count() < min {
        return Some(format!("{} must be at least {} characters", field, min));
    }
    None
}

/// Required + must equal the password field.
pub fn validate_password_match(password: &str, confirm: &str) -> Option<String> {
    if confirm.is_empty() {
        return Some("Confirm Password is required".to_string());
    }
    if password != confirm {
        return Some("Passwords do not match".to_string());
    }
    None
}

/// local@domain with a dotted, non-degenerate domain and no whitespace.
fn is_email(value: &str) -> bool {
    if value.contains(char::is_whitespace) {
        return false;
    }
    let mut parts = value.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => {
            !local.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_email() {
        assert_eq!(validate_email("ada@example.com"), None);
        assert_eq!(
            validate_email(""),
            Some("Email is required".to_string())
        );
        assert_eq!(
            validate_email("not-an-email"),
            Some("Please enter a valid email address".to_string())
        );
        assert_eq!(
            validate_email("two@@example.com"),
            Some("Please enter a valid email address".to_string())
        );
        assert_eq!(
            validate_email("spaces in@example.com"),
            Some("Please enter a valid email address".to_string())
        );
        assert_eq!(
            validate_email("no-dot@domain"),
            Some("Please enter a valid email address".to_string())
        );
    }

    #[test]
    fn test_validate_min_length() {
        assert_eq!(validate_min_length("Password", "secret", MIN_PASSWORD_LEN), None);
        assert_eq!(
            validate_min_length("Password", "", MIN_PASSWORD_LEN),
            Some("Password is required".to_string())
        );
        assert_eq!(
            validate_min_length("Password", "short", MIN_PASSWORD_LEN),
            Some("Password must be at least 6 characters".to_string())
        );
        assert_eq!(
            validate_min_length("Name", "X", MIN_NAME_LEN),
            Some("Name must be at least 2 characters".to_string())
        );
    }

    #[test]
    fn test_validate_password_match() {
        assert_eq!(validate_password_match("secret1", "secret1"), None);
        assert_eq!(
            validate_password_match("secret1", ""),
            Some("Confirm Password is required".to_string())
        );
        assert_eq!(
            validate_password_match("secret1", "secret2"),
            Some("Passwords do not match".to_string())
        );
    }
}
