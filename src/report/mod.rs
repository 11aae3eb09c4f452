pub mod terminal;
pub mod json;

use crate::guide::TravelGuide;

/// Result type for report operations
pub type ReportResult<T> = Result<T, ReportError>;

/// Errors that can occur during report generation
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Trait for travel guide renderers
pub trait ReportGenerator {
    /// Render a guide to a string
    fn render(&self, guide: &TravelGuide) -> ReportResult<String>;

    /// Get generator name
    fn name(&self) -> &'static str;

    /// Render a guide to stdout
    fn print(&self, guide: &TravelGuide) -> ReportResult<()> {
        use std::io::Write;

        let rendered = self.render(guide)?;
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{}", rendered)?;
        stdout.flush()?;
        Ok(())
    }
}
