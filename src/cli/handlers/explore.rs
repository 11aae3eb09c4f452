use crate::cli::commands::ReportFormat;
use crate::cli::utils::{create_spinner, normalize_city, reporter_for, EMPTY_CITY_WARNING};
use crate::guide::{AnchoredMatcher, Extractor, TravelGuide};
use crate::llm::service::ERROR_MARKER;
use crate::llm::LlmService;
use anyhow::{Context, Result};
use colored::Colorize;
use tracing::{info, warn};

pub async fn handle_explore_command(
    city: String,
    report: ReportFormat,
    strict_headers: bool,
    no_description: bool,
) -> Result<()> {
    let Some(city) = normalize_city(&city) else {
        println!("{}", EMPTY_CITY_WARNING.yellow());
        return Ok(());
    };

    let service = LlmService::from_env().context("Gemini service is not configured")?;
    info!("Exploring {} with model {}", city, service.config().model);

    let spinner = create_spinner("Fetching travel information...");

    let description = if no_description {
        None
    } else {
        Some(service.describe_city(city).await)
    };

    let travel_info = if strict_headers {
        service
            .travel_info(city, &Extractor::with_matcher(AnchoredMatcher))
            .await
    } else {
        service.travel_info(city, &Extractor::new()).await
    };

    spinner.finish_and_clear();

    if travel_info.is_empty() {
        warn!("No recommendations could be extracted for {}", city);
    } else {
        info!("Extracted {} recommendations for {}", travel_info.item_count(), city);
    }

    let guide = TravelGuide::new(city, description, travel_info);
    if let Err(e) = reporter_for(report).print(&guide) {
        eprintln!(
            "{}",
            format!("{} Error fetching travel information: {}", ERROR_MARKER, e).bright_red()
        );
    }

    Ok(())
}
