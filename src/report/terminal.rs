use super::{ReportGenerator, ReportResult};
use crate::guide::{Section, TravelGuide};
use colored::{ColoredString, Colorize};
use std::fmt::Write;

/// Terminal formatting constants
const TERMINAL_WIDTH: usize = 80;
const SEPARATOR_WIDTH: usize = 40;

const NOT_AVAILABLE: &str = "Information not available";

/// Terminal report generator for console output
pub struct TerminalReporter {
    show_links: bool,
    use_colors: bool,
}

impl Default for TerminalReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalReporter {
    pub fn new() -> Self {
        Self {
            show_links: true,
            use_colors: true,
        }
    }

    pub fn with_links(mut self, show_links: bool) -> Self {
        self.show_links = show_links;
        self
    }

    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    fn paint(&self, text: &str, style: fn(&str) -> ColoredString) -> String {
        if self.use_colors {
            style(text).to_string()
        } else {
            text.to_string()
        }
    }

    fn write_header(&self, out: &mut String, guide: &TravelGuide) -> std::fmt::Result {
        let rule = "═".repeat(TERMINAL_WIDTH);
        writeln!(out, "\n{}", self.paint(&rule, |s| s.bright_blue()))?;
        writeln!(out, "{}", self.paint("🌍 AI TRAVEL GUIDE", |s| s.bright_white().bold()))?;
        writeln!(out, "{}", self.paint(&rule, |s| s.bright_blue()))?;

        let title = guide.title();
        writeln!(out, "\n🌐 Explore {} on Google Maps", self.paint(&title, |s| s.bright_cyan()))?;
        if self.show_links {
            writeln!(out, "   {}", self.paint(&guide.overview_link(), |s| s.bright_black()))?;
        }
        Ok(())
    }

    fn write_description(&self, out: &mut String, guide: &TravelGuide) -> std::fmt::Result {
        let Some(description) = &guide.description else {
            return Ok(());
        };

        let heading = format!("📍 About {}", guide.title());
        writeln!(out, "\n{}", self.paint(&heading, |s| s.bright_white().bold()))?;
        writeln!(out, "{}", self.paint(&"─".repeat(SEPARATOR_WIDTH), |s| s.bright_black()))?;
        for line in description.lines() {
            if crate::llm::service::is_failure(line) {
                writeln!(out, "  {}", self.paint(line, |s| s.bright_red()))?;
            } else {
                writeln!(out, "  {}", line)?;
            }
        }
        Ok(())
    }

    fn write_section(&self, out: &mut String, guide: &TravelGuide, section: &Section) -> std::fmt::Result {
        writeln!(out, "\n{}", self.paint(&section.label.header(), |s| s.bright_white().bold()))?;
        writeln!(out, "{}", self.paint(&"─".repeat(SEPARATOR_WIDTH), |s| s.bright_black()))?;

        if section.items.is_empty() {
            writeln!(out, "  🔹 {}", self.paint(NOT_AVAILABLE, |s| s.italic()))?;
            return Ok(());
        }

        for item in &section.items {
            if self.show_links {
                writeln!(
                    out,
                    "  🔹 {} | {}",
                    self.paint(item, |s| s.bold()),
                    self.paint(&guide.item_link(item), |s| s.bright_blue())
                )?;
            } else {
                writeln!(out, "  🔹 {}", self.paint(item, |s| s.bold()))?;
            }
        }
        Ok(())
    }

    fn write_footer(&self, out: &mut String) -> std::fmt::Result {
        writeln!(out, "\n{}", self.paint(&"═".repeat(TERMINAL_WIDTH), |s| s.bright_blue()))?;
        write!(out, "{}", self.paint("Generated with Google Gemini. Verify details before you travel.", |s| s.bright_black()))
    }
}

impl ReportGenerator for TerminalReporter {
    fn render(&self, guide: &TravelGuide) -> ReportResult<String> {
        let mut out = String::new();
        // Writing into a String cannot fail
        let _ = self.write_header(&mut out, guide);
        let _ = self.write_description(&mut out, guide);
        for section in guide.info.sections() {
            let _ = self.write_section(&mut out, guide, section);
        }
        let _ = self.write_footer(&mut out);
        Ok(out)
    }

    fn name(&self) -> &'static str {
        "terminal"
    }
}
