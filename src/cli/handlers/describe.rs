use crate::cli::utils::{create_spinner, normalize_city, EMPTY_CITY_WARNING};
use crate::guide::title_case;
use crate::llm::service::is_failure;
use crate::llm::LlmService;
use anyhow::{Context, Result};
use colored::Colorize;

pub async fn handle_describe_command(city: String) -> Result<()> {
    let Some(city) = normalize_city(&city) else {
        println!("{}", EMPTY_CITY_WARNING.yellow());
        return Ok(());
    };

    let service = LlmService::from_env().context("Gemini service is not configured")?;

    let spinner = create_spinner(&format!("Describing {}...", city));
    let description = service.describe_city(city).await;
    spinner.finish_and_clear();

    println!("{}", format!("📍 About {}", title_case(city)).bright_white().bold());
    if is_failure(&description) {
        println!("{}", description.bright_red());
    } else {
        println!("{}", description.trim());
    }

    Ok(())
}
