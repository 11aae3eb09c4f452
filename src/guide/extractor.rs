use super::sections::SectionLabel;
use serde::Serialize;

/// Characters accepted as list bullets at the start of an item line
const BULLET_MARKERS: [char; 2] = ['-', '•'];

/// Items collected for a single section
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    pub label: SectionLabel,
    pub items: Vec<String>,
}

/// Ordered mapping from section label to the items listed under it.
///
/// Every label is present exactly once, in canonical order, whatever the
/// input was. A section the reply never mentioned is simply empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TravelInfo {
    sections: Vec<Section>,
}

impl Default for TravelInfo {
    fn default() -> Self {
        Self::new()
    }
}

impl TravelInfo {
    pub fn new() -> Self {
        Self {
            sections: SectionLabel::ALL
                .iter()
                .map(|&label| Section { label, items: Vec::new() })
                .collect(),
        }
    }

    pub fn items(&self, label: SectionLabel) -> &[String] {
        self.sections
            .iter()
            .find(|s| s.label == label)
            .map(|s| s.items.as_slice())
            .unwrap_or(&[])
    }

    pub fn push(&mut self, label: SectionLabel, item: String) {
        if let Some(section) = self.sections.iter_mut().find(|s| s.label == label) {
            section.items.push(item);
        }
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn labels(&self) -> impl Iterator<Item = SectionLabel> + '_ {
        self.sections.iter().map(|s| s.label)
    }

    /// True when no section received any item
    pub fn is_empty(&self) -> bool {
        self.sections.iter().all(|s| s.items.is_empty())
    }

    pub fn item_count(&self) -> usize {
        self.sections.iter().map(|s| s.items.len()).sum()
    }
}

/// Decides whether a trimmed line is the header of a section.
pub trait HeaderMatcher {
    fn is_header(&self, line: &str, label: SectionLabel) -> bool;

    fn name(&self) -> &'static str;
}

/// Matches when the line contains the label name anywhere.
///
/// Lenient about decoration ("## 🏛 Famous Places:", "**Famous Places**"),
/// but prose that happens to mention a label name also switches sections.
#[derive(Debug, Clone, Copy, Default)]
pub struct SubstringMatcher;

impl HeaderMatcher for SubstringMatcher {
    fn is_header(&self, line: &str, label: SectionLabel) -> bool {
        line.contains(label.name())
    }

    fn name(&self) -> &'static str {
        "substring"
    }
}

/// Matches only when the line is the label name and nothing else, apart
/// from leading icons/markdown and a trailing colon.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnchoredMatcher;

impl AnchoredMatcher {
    fn strip_decoration(line: &str) -> &str {
        line.trim_start_matches(|c: char| !c.is_alphanumeric())
            .trim_end_matches(|c: char| c == ':' || c == '*' || c == '#' || c.is_whitespace())
    }
}

impl HeaderMatcher for AnchoredMatcher {
    fn is_header(&self, line: &str, label: SectionLabel) -> bool {
        Self::strip_decoration(line).eq_ignore_ascii_case(label.name())
    }

    fn name(&self) -> &'static str {
        "anchored"
    }
}

/// Line-oriented parser turning a raw model reply into [`TravelInfo`].
pub struct Extractor<M: HeaderMatcher = SubstringMatcher> {
    matcher: M,
}

impl Default for Extractor<SubstringMatcher> {
    fn default() -> Self {
        Self::new()
    }
}

impl Extractor<SubstringMatcher> {
    pub fn new() -> Self {
        Self { matcher: SubstringMatcher }
    }
}

impl<M: HeaderMatcher> Extractor<M> {
    pub fn with_matcher(matcher: M) -> Self {
        Self { matcher }
    }

    pub fn matcher_name(&self) -> &'static str {
        self.matcher.name()
    }

    /// Parse the reply in a single forward pass. Never fails: anything that
    /// is neither a header nor a bullet under a known header is dropped.
    pub fn extract(&self, raw: &str) -> TravelInfo {
        let mut info = TravelInfo::new();
        let mut current: Option<SectionLabel> = None;

        for line in raw.split('\n') {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            // First label in canonical order wins
            if let Some(label) = SectionLabel::ALL
                .iter()
                .copied()
                .find(|&label| self.matcher.is_header(line, label))
            {
                current = Some(label);
                continue;
            }

            match current {
                Some(label) if line.starts_with(&BULLET_MARKERS[..]) => {
                    let item = line
                        .trim_start_matches(|c: char| BULLET_MARKERS.contains(&c) || c == ' ')
                        .trim();
                    if !item.is_empty() {
                        info.push(label, item.to_string());
                    }
                }
                _ => {
                    tracing::trace!("Discarding line: {}", line);
                }
            }
        }

        tracing::debug!(
            "Extracted {} items using {} header matching",
            info.item_count(),
            self.matcher.name()
        );

        info
    }
}

/// Parse with the default substring header matching
pub fn extract(raw: &str) -> TravelInfo {
    Extractor::new().extract(raw)
}
