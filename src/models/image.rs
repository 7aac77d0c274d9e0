// Allow dead code: API response structs carry every field the API returns
#![allow(dead_code)]

use serde::{Deserialize, Serialize};

use super::Breed;

/// An image record from the images API.
///
/// Consumers only care about `url`; the rest is kept for completeness.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BreedImage {
    pub id: Option<String>,
    pub url: Option<String>,
    pub width: Option<i64>,
    pub height: Option<i64>,
    #[serde(default)]
    pub breeds: Vec<Breed>,
}

impl BreedImage {
    /// The image URL, if present and non-empty.
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref().filter(|u| !u.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_deserializes_api_json() {
        let json = r#"[
            {"id": "0XYvRd7oD", "url": "https://cdn2.thecatapi.com/images/0XYvRd7oD.jpg", "width": 1204, "height": 1445},
            {"id": "ozEvzdVM-", "url": "", "width": 1200, "height": 800},
            {"id": "missing-url"}
        ]"#;
        let images: Vec<BreedImage> = serde_json::from_str(json).unwrap();
        assert_eq!(images.len(), 3);
        assert_eq!(
            images[0].url(),
            Some("https://cdn2.thecatapi.com/images/0XYvRd7oD.jpg")
        );
        // Empty and missing URLs both read as None
        assert_eq!(images[1].url(), None);
        assert_eq!(images[2].url(), None);
    }
}
