use crate::guide::SectionLabel;

/// Worked example embedded in the listing prompt so the model copies the
/// header and bullet format.
pub const PARIS_EXAMPLE: &str = "🏛 Famous Places
- Eiffel Tower
- Louvre Museum
- Notre-Dame Cathedral
🍽 Popular Foods
- Croissant
- Coq au Vin
- Ratatouille
🛍 Best Malls
- Galeries Lafayette
- Printemps Haussmann
- Westfield Les 4 Temps
🍴 Recommended Restaurants
- Le Jules Verne
- L'Ambroisie
- Chez L'Ami Jean";

/// Prompt for a short descriptive summary of a place
pub fn city_description_prompt(city: &str) -> String {
    format!(
        "Provide a concise 3-sentence description of {}, focusing on its history, \
         geography, and cultural significance.",
        city
    )
}

/// Prompt for the four-category listing consumed by the extractor
pub fn travel_info_prompt(city: &str) -> String {
    let mut prompt = format!(
        "Provide structured travel details for {} with the following sections:\n",
        city
    );

    for label in SectionLabel::ALL {
        prompt.push_str(&format!("{}\n- ({})\n", label.header(), label.request_hint()));
    }

    prompt.push_str("\nFormat exactly like this example for Paris:\n");
    prompt.push_str(PARIS_EXAMPLE);

    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_description_prompt_mentions_city() {
        let prompt = city_description_prompt("Kyoto");
        assert!(prompt.contains("description of Kyoto,"));
        assert!(prompt.contains("3-sentence"));
    }

    #[test]
    fn test_travel_info_prompt_lists_all_sections() {
        let prompt = travel_info_prompt("Lisbon");
        assert!(prompt.starts_with("Provide structured travel details for Lisbon"));
        for label in SectionLabel::ALL {
            assert!(prompt.contains(&label.header()));
            assert!(prompt.contains(label.request_hint()));
        }
        assert!(prompt.ends_with("- Chez L'Ami Jean"));
    }
}
