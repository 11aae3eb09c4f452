use crate::llm::config::{LlmConfig, DEFAULT_API_BASE, DEFAULT_MODEL};
use anyhow::Result;
use std::env;

pub fn handle_config_command() -> Result<()> {
    // Load .env file if it exists
    let env_file_loaded = dotenv::dotenv().is_ok();

    println!("🔧 Travel Guide Configuration");
    println!("═══════════════════════════════════════");
    println!();

    println!("📦 Version Information:");
    println!("  • Travel Guide: v{}", env!("CARGO_PKG_VERSION"));
    println!("  • License: {}", env!("CARGO_PKG_LICENSE"));
    println!();

    println!("🌍 Environment Configuration:");

    if env_file_loaded {
        println!("  • .env file: ✅ Loaded");
    } else {
        println!("  • .env file: ⚠️  Not found (using system environment)");
    }

    match env::var("GEMINI_API_KEY") {
        Ok(key) if !key.trim().is_empty() => println!("  • GEMINI_API_KEY: ✅ Set (hidden)"),
        _ => println!("  • GEMINI_API_KEY: ❌ Not set"),
    }

    match env::var("GEMINI_MODEL") {
        Ok(val) => println!("  • GEMINI_MODEL: {}", val),
        Err(_) => println!("  • GEMINI_MODEL: {} (default)", DEFAULT_MODEL),
    }

    match env::var("GEMINI_API_BASE") {
        Ok(val) => println!("  • GEMINI_API_BASE: {}", val),
        Err(_) => println!("  • GEMINI_API_BASE: {} (default)", DEFAULT_API_BASE),
    }

    match env::var("LLM_REQUEST_TIMEOUT") {
        Ok(val) => println!("  • LLM_REQUEST_TIMEOUT: {}s", val),
        Err(_) => println!("  • LLM_REQUEST_TIMEOUT: none (default)"),
    }

    match env::var("LLM_DEBUG") {
        Ok(val) => println!("  • LLM_DEBUG: {}", val),
        Err(_) => println!("  • LLM_DEBUG: false (default)"),
    }

    match env::var("RUST_LOG") {
        Ok(val) => println!("  • RUST_LOG: {}", val),
        Err(_) => println!("  • RUST_LOG: warn (default)"),
    }

    println!();

    // Fixed settings, not overridable from the environment
    let defaults = LlmConfig::default();
    let generation = &defaults.generation;
    println!("🤖 Generation Settings:");
    println!("  • Temperature: {}", generation.temperature);
    println!("  • Top-p: {}", generation.top_p);
    println!("  • Top-k: {}", generation.top_k);
    println!("  • Max output tokens: {}", generation.max_output_tokens);
    println!();

    println!("🛡️  Safety Settings:");
    for setting in &defaults.safety_settings {
        println!("  • {:?}: {:?}", setting.category, setting.threshold);
    }

    println!();
    println!("💡 Tips:");
    if env::var("GEMINI_API_KEY").is_err() {
        println!("  • Set GEMINI_API_KEY in your environment or a .env file");
    }
    println!("  • Use -v or RUST_LOG=debug for detailed logging");
    println!("  • Use `travel-guide parse` to test the parser on a saved reply");

    Ok(())
}
