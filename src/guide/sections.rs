use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the four fixed travel-information categories.
///
/// The display name is the identity of a section; the icon is decoration
/// used when building prompts and rendering output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SectionLabel {
    #[serde(rename = "Famous Places")]
    FamousPlaces,
    #[serde(rename = "Popular Foods")]
    PopularFoods,
    #[serde(rename = "Best Malls")]
    BestMalls,
    #[serde(rename = "Recommended Restaurants")]
    RecommendedRestaurants,
}

impl SectionLabel {
    /// All labels in canonical presentation order
    pub const ALL: [SectionLabel; 4] = [
        SectionLabel::FamousPlaces,
        SectionLabel::PopularFoods,
        SectionLabel::BestMalls,
        SectionLabel::RecommendedRestaurants,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            SectionLabel::FamousPlaces => "Famous Places",
            SectionLabel::PopularFoods => "Popular Foods",
            SectionLabel::BestMalls => "Best Malls",
            SectionLabel::RecommendedRestaurants => "Recommended Restaurants",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            SectionLabel::FamousPlaces => "🏛",
            SectionLabel::PopularFoods => "🍽",
            SectionLabel::BestMalls => "🛍",
            SectionLabel::RecommendedRestaurants => "🍴",
        }
    }

    /// Decorated header as requested from the model, e.g. "🏛 Famous Places"
    pub fn header(&self) -> String {
        format!("{} {}", self.icon(), self.name())
    }

    /// What the prompt asks the model to list under this header
    pub fn request_hint(&self) -> &'static str {
        match self {
            SectionLabel::FamousPlaces => "List three famous places",
            SectionLabel::PopularFoods => "List three popular local foods",
            SectionLabel::BestMalls => "List three best shopping malls",
            SectionLabel::RecommendedRestaurants => "List three recommended restaurants",
        }
    }
}

impl fmt::Display for SectionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_order() {
        let names: Vec<&str> = SectionLabel::ALL.iter().map(|l| l.name()).collect();
        assert_eq!(
            names,
            vec!["Famous Places", "Popular Foods", "Best Malls", "Recommended Restaurants"]
        );
    }

    #[test]
    fn test_header_is_icon_and_name() {
        assert_eq!(SectionLabel::FamousPlaces.header(), "🏛 Famous Places");
        assert_eq!(SectionLabel::RecommendedRestaurants.header(), "🍴 Recommended Restaurants");
    }

    #[test]
    fn test_serializes_as_display_name() {
        let json = serde_json::to_string(&SectionLabel::BestMalls).unwrap();
        assert_eq!(json, "\"Best Malls\"");
    }
}
