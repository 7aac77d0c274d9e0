// Allow dead code: API response structs carry every field the API returns
#![allow(dead_code)]

use serde::{Deserialize, Serialize};

/// Weight range as reported by the API, in both unit systems.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BreedWeight {
    pub imperial: Option<String>,
    pub metric: Option<String>,
}

/// A cat breed record returned by the breeds API.
///
/// Only `id` and `name` are guaranteed; everything else is optional and
/// passed through untouched. The rating fields are 1-5 scales, the trait
/// fields are 0/1 flags.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Breed {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub temperament: Option<String>,
    pub origin: Option<String>,
    pub country_code: Option<String>,
    pub country_codes: Option<String>,
    pub life_span: Option<String>,
    pub weight: Option<BreedWeight>,
    pub alt_names: Option<String>,
    pub wikipedia_url: Option<String>,
    pub cfa_url: Option<String>,
    pub vetstreet_url: Option<String>,
    pub vcahospitals_url: Option<String>,
    pub reference_image_id: Option<String>,

    // Rating scales (1-5)
    pub adaptability: Option<i32>,
    pub affection_level: Option<i32>,
    pub child_friendly: Option<i32>,
    pub dog_friendly: Option<i32>,
    pub energy_level: Option<i32>,
    pub grooming: Option<i32>,
    pub health_issues: Option<i32>,
    pub intelligence: Option<i32>,
    pub shedding_level: Option<i32>,
    pub social_needs: Option<i32>,
    pub stranger_friendly: Option<i32>,
    pub vocalisation: Option<i32>,

    // Trait flags (0/1)
    pub indoor: Option<i32>,
    pub lap: Option<i32>,
    pub experimental: Option<i32>,
    pub hairless: Option<i32>,
    pub natural: Option<i32>,
    pub rare: Option<i32>,
    pub rex: Option<i32>,
    pub suppressed_tail: Option<i32>,
    pub short_legs: Option<i32>,
    pub hypoallergenic: Option<i32>,
}

/// Maximum length for list-view descriptions
const SHORT_DESCRIPTION_LEN: usize = 120;

impl Breed {
    /// Description trimmed for list rows, with a placeholder when absent.
    pub fn short_description(&self) -> String {
        match self.description.as_deref() {
            None | Some("") => "No description available".to_string(),
            Some(desc) => crate::utils::truncate(desc, SHORT_DESCRIPTION_LEN),
        }
    }

    /// Rating scales present on this breed, in display order.
    pub fn ratings(&self) -> Vec<(&'static str, i32)> {
        let scales = [
            ("Adaptability", self.adaptability),
            ("Affection", self.affection_level),
            ("Child friendly", self.child_friendly),
            ("Dog friendly", self.dog_friendly),
            ("Energy", self.energy_level),
            ("Grooming", self.grooming),
            ("Health issues", self.health_issues),
            ("Intelligence", self.intelligence),
            ("Shedding", self.shedding_level),
            ("Social needs", self.social_needs),
            ("Stranger friendly", self.stranger_friendly),
            ("Vocalisation", self.vocalisation),
        ];
        scales
            .iter()
            .filter_map(|(label, value)| value.map(|v| (*label, v)))
            .collect()
    }

    /// Trait flags set to 1 on this breed, as display labels.
    pub fn traits(&self) -> Vec<&'static str> {
        let flags = [
            ("Indoor", self.indoor),
            ("Lap cat", self.lap),
            ("Experimental", self.experimental),
            ("Hairless", self.hairless),
            ("Natural", self.natural),
            ("Rare", self.rare),
            ("Rex", self.rex),
            ("Suppressed tail", self.suppressed_tail),
            ("Short legs", self.short_legs),
            ("Hypoallergenic", self.hypoallergenic),
        ];
        flags
            .iter()
            .filter_map(|(label, value)| (*value == Some(1)).then_some(*label))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ABYSSINIAN_JSON: &str = r#"{
        "weight": { "imperial": "7  -  10", "metric": "3 - 5" },
        "id": "abys",
        "name": "Abyssinian",
        "cfa_url": "http://cfa.org/Breeds/BreedsAB/Abyssinian.aspx",
        "temperament": "Active, Energetic, Independent, Intelligent, Gentle",
        "origin": "Egypt",
        "country_codes": "EG",
        "country_code": "EG",
        "description": "The Abyssinian is easy to care for, and a joy to have in your home.",
        "life_span": "14 - 15",
        "indoor": 0,
        "lap": 1,
        "adaptability": 5,
        "affection_level": 5,
        "child_friendly": 3,
        "energy_level": 5,
        "hypoallergenic": 0,
        "reference_image_id": "0XYvRd7oD"
    }"#;

    #[test]
    fn test_breed_deserializes_api_json() {
        let breed: Breed = serde_json::from_str(ABYSSINIAN_JSON).unwrap();
        assert_eq!(breed.id, "abys");
        assert_eq!(breed.name, "Abyssinian");
        assert_eq!(breed.origin.as_deref(), Some("Egypt"));
        assert_eq!(breed.life_span.as_deref(), Some("14 - 15"));
        assert_eq!(breed.weight.as_ref().unwrap().metric.as_deref(), Some("3 - 5"));
        assert_eq!(breed.adaptability, Some(5));
        // Fields the payload omits stay None
        assert_eq!(breed.wikipedia_url, None);
        assert_eq!(breed.rex, None);
    }

    #[test]
    fn test_breed_minimal_payload() {
        let breed: Breed = serde_json::from_str(r#"{"id": "mau", "name": "Egyptian Mau"}"#).unwrap();
        assert_eq!(breed.id, "mau");
        assert!(breed.ratings().is_empty());
        assert!(breed.traits().is_empty());
    }

    #[test]
    fn test_short_description_truncates() {
        let mut breed: Breed = serde_json::from_str(ABYSSINIAN_JSON).unwrap();
        assert_eq!(
            breed.short_description(),
            "The Abyssinian is easy to care for, and a joy to have in your home."
        );

        breed.description = Some("x".repeat(200));
        let short = breed.short_description();
        assert_eq!(short.len(), 120);
        assert!(short.ends_with("..."));

        breed.description = None;
        assert_eq!(breed.short_description(), "No description available");
    }

    #[test]
    fn test_ratings_and_traits_skip_absent_fields() {
        let breed: Breed = serde_json::from_str(ABYSSINIAN_JSON).unwrap();
        let ratings = breed.ratings();
        assert!(ratings.contains(&("Adaptability", 5)));
        assert!(ratings.contains(&("Child friendly", 3)));
        assert!(!ratings.iter().any(|(label, _)| *label == "Grooming"));

        let traits = breed.traits();
        assert_eq!(traits, vec!["Lap cat"]);
    }
}
