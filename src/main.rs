use anyhow::Result;
use clap::Parser;
use travel_guide::cli::commands::{Cli, Commands};
use travel_guide::cli::handlers::{
    handle_config_command, handle_describe_command, handle_explore_command, handle_parse_command,
};
use travel_guide::cli::utils::{init_logging, print_info};

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose, cli.log_format);

    // Execute command
    match cli.command {
        Commands::Explore {
            city,
            report,
            strict_headers,
            no_description,
        } => handle_explore_command(city, report, strict_headers, no_description).await,

        Commands::Describe { city } => handle_describe_command(city).await,

        Commands::Parse {
            input,
            city,
            report,
            strict_headers,
        } => handle_parse_command(input, city, report, strict_headers),

        Commands::Config => handle_config_command(),

        Commands::Info => {
            print_info();
            Ok(())
        }
    }
}
