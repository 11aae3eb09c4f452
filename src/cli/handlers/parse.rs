use crate::cli::commands::ReportFormat;
use crate::cli::utils::{read_raw_response, reporter_for};
use crate::guide::{AnchoredMatcher, Extractor, HeaderMatcher, TravelGuide, TravelInfo};
use anyhow::Result;
use std::path::PathBuf;
use tracing::info;

pub fn handle_parse_command(
    input: Option<PathBuf>,
    city: String,
    report: ReportFormat,
    strict_headers: bool,
) -> Result<()> {
    let raw = read_raw_response(input.as_deref())?;
    info!("Parsing {} bytes of raw response", raw.len());

    let travel_info = if strict_headers {
        parse_with(&Extractor::with_matcher(AnchoredMatcher), &raw)
    } else {
        parse_with(&Extractor::new(), &raw)
    };

    let guide = TravelGuide::new(&city, None, travel_info);
    reporter_for(report).print(&guide)?;

    Ok(())
}

fn parse_with<M: HeaderMatcher>(extractor: &Extractor<M>, raw: &str) -> TravelInfo {
    let travel_info = extractor.extract(raw);
    info!(
        "Found {} items with {} header matching",
        travel_info.item_count(),
        extractor.matcher_name()
    );
    travel_info
}
