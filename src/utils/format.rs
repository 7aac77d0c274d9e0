use chrono::{DateTime, Utc};

/// Truncate a string to a maximum length, adding ellipsis if needed
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        s.chars().take(max_len).collect()
    } else {
        let truncated: String = s.chars().take(max_len - 3).collect();
        format!("{}...", truncated)
    }
}

/// Uppercase initials from a display name ("Ada Lovelace" -> "AL").
/// Falls back to "U" for empty names.
pub fn initials(name: &str) -> String {
    let letters: String = name
        .split_whitespace()
        .filter_map(|part| part.chars().next())
        .collect();
    if letters.is_empty() {
        "U".to_string()
    } else {
        letters.to_uppercase()
    }
}

/// "Member since" label from the login timestamp ("November 2025").
pub fn member_since(timestamp: Option<DateTime<Utc>>) -> String {
    match timestamp {
        Some(t) => t.format("%B %Y").to_string(),
        None => "unknown".to_string(),
    }
}

/// Render a 1-5 rating as a filled/empty dot bar ("●●●○○").
pub fn rating_bar(value: i32, max: i32) -> String {
    let filled = value.clamp(0, max) as usize;
    let empty = (max as usize).saturating_sub(filled);
    format!("{}{}", "●".repeat(filled), "○".repeat(empty))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Hello", 10), "Hello");
        assert_eq!(truncate("Hello World", 8), "Hello...");
        assert_eq!(truncate("Hi", 2), "Hi");
        assert_eq!(truncate("Hello", 2), "He");
    }

    #[test]
    fn test_initials() {
        assert_eq!(initials("Ada Lovelace"), "AL");
        assert_eq!(initials("grace brewster murray hopper"), "GBMH");
        assert_eq!(initials("Plato"), "P");
        assert_eq!(initials(""), "U");
        assert_eq!(initials("   "), "U");
    }

    #[test]
    fn test_member_since() {
        let t = Utc.with_ymd_and_hms(2025, 11, 3, 12, 0, 0).unwrap();
        assert_eq!(member_since(Some(t)), "November 2025");
        assert_eq!(member_since(None), "unknown");
    }

    #[test]
    fn test_rating_bar() {
        assert_eq!(rating_bar(3, 5), "●●●○○");
        assert_eq!(rating_bar(0, 5), "○○○○○");
        assert_eq!(rating_bar(7, 5), "●●●●●");
        assert_eq!(rating_bar(-1, 5), "○○○○○");
    }
}
