use super::{ReportGenerator, ReportResult};
use crate::guide::{SectionLabel, TravelGuide};
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct JsonGuide<'a> {
    city: String,
    maps_url: String,
    description: Option<&'a str>,
    generated_at: DateTime<Utc>,
    sections: Vec<JsonSection>,
}

#[derive(Debug, Serialize)]
struct JsonSection {
    label: SectionLabel,
    icon: &'static str,
    items: Vec<JsonItem>,
}

#[derive(Debug, Serialize)]
struct JsonItem {
    name: String,
    maps_url: String,
}

/// JSON report generator, one document per guide
#[derive(Debug)]
pub struct JsonReporter {
    pretty: bool,
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonReporter {
    pub fn new() -> Self {
        Self { pretty: true }
    }

    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

impl ReportGenerator for JsonReporter {
    fn render(&self, guide: &TravelGuide) -> ReportResult<String> {
        let document = JsonGuide {
            city: guide.title(),
            maps_url: guide.overview_link(),
            description: guide.description.as_deref(),
            generated_at: guide.generated_at,
            sections: guide
                .info
                .sections()
                .iter()
                .map(|section| JsonSection {
                    label: section.label,
                    icon: section.label.icon(),
                    items: section
                        .items
                        .iter()
                        .map(|item| JsonItem {
                            name: item.clone(),
                            maps_url: guide.item_link(item),
                        })
                        .collect(),
                })
                .collect(),
        };

        let json = if self.pretty {
            serde_json::to_string_pretty(&document)?
        } else {
            serde_json::to_string(&document)?
        };

        Ok(json)
    }

    fn name(&self) -> &'static str {
        "json"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guide::extract;
    use crate::llm::prompts::PARIS_EXAMPLE;

    #[test]
    fn test_json_report_structure() {
        let guide = TravelGuide::new("paris", Some("The capital of France.".to_string()), extract(PARIS_EXAMPLE));
        let rendered = JsonReporter::new().with_pretty(false).render(&guide).unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();

        assert_eq!(value["city"], "Paris");
        assert_eq!(value["description"], "The capital of France.");

        let sections = value["sections"].as_array().unwrap();
        assert_eq!(sections.len(), 4);
        assert_eq!(sections[0]["label"], "Famous Places");
        assert_eq!(sections[0]["icon"], "🏛");
        assert_eq!(sections[0]["items"][0]["name"], "Eiffel Tower");
        assert_eq!(
            sections[0]["items"][0]["maps_url"],
            "https://www.google.com/maps/search/?api=1&query=Eiffel%20Tower%2C%20paris"
        );
    }

    #[test]
    fn test_json_report_empty_sections() {
        let guide = TravelGuide::new("Atlantis", None, extract(""));
        let rendered = JsonReporter::new().render(&guide).unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();

        assert!(value["description"].is_null());
        for section in value["sections"].as_array().unwrap() {
            assert!(section["items"].as_array().unwrap().is_empty());
        }
    }
}
