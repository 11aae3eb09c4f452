pub mod extractor;
pub mod maps;
pub mod sections;

pub use extractor::{extract, AnchoredMatcher, Extractor, HeaderMatcher, Section, SubstringMatcher, TravelInfo};
pub use maps::maps_link;
pub use sections::SectionLabel;

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Everything rendered for one city: description plus categorized listing
#[derive(Debug, Clone, Serialize)]
pub struct TravelGuide {
    pub city: String,
    pub description: Option<String>,
    pub info: TravelInfo,
    pub generated_at: DateTime<Utc>,
}

impl TravelGuide {
    pub fn new(city: &str, description: Option<String>, info: TravelInfo) -> Self {
        Self {
            city: city.trim().to_string(),
            description,
            info,
            generated_at: Utc::now(),
        }
    }

    /// City name as displayed in headings
    pub fn title(&self) -> String {
        title_case(&self.city)
    }

    /// Map link for an item, searched within the city as typed
    pub fn item_link(&self, item: &str) -> String {
        maps_link(item, &self.city)
    }

    /// Map link for the city itself
    pub fn overview_link(&self) -> String {
        maps_link(&self.title(), "")
    }
}

/// Title-case a city name: the first letter of every run of letters is
/// upper-cased and the rest lower-cased ("new york" -> "New York",
/// "saint-étienne" -> "Saint-Étienne").
pub fn title_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut previous_is_letter = false;

    for c in input.chars() {
        if c.is_alphabetic() {
            if previous_is_letter {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            previous_is_letter = true;
        } else {
            out.push(c);
            previous_is_letter = false;
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("paris"), "Paris");
        assert_eq!(title_case("new york"), "New York");
        assert_eq!(title_case("RIO DE JANEIRO"), "Rio De Janeiro");
        assert_eq!(title_case("saint-étienne"), "Saint-Étienne");
        assert_eq!(title_case("o'hare"), "O'Hare");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn test_guide_links() {
        let guide = TravelGuide::new("  new york ", None, TravelInfo::new());
        assert_eq!(guide.city, "new york");
        assert_eq!(guide.title(), "New York");
        assert!(guide.overview_link().ends_with("query=New%20York%2C%20"));
        assert!(guide.item_link("Central Park").ends_with("query=Central%20Park%2C%20new%20york"));
    }
}
