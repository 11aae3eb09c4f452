use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "travel-guide",
    about = "AI travel guide: city descriptions and recommendations from Gemini",
    version,
    author
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format for logs
    #[arg(long, value_enum, default_value = "text", global = true)]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Describe a city and list its famous places, foods, malls and restaurants
    Explore {
        /// City name
        #[arg(value_name = "CITY")]
        city: String,

        /// Report format
        #[arg(short, long, value_enum, default_value = "terminal")]
        report: ReportFormat,

        /// Only accept section headers that consist of the section name alone
        #[arg(long)]
        strict_headers: bool,

        /// Skip the 3-sentence city description
        #[arg(long)]
        no_description: bool,
    },

    /// Print a short description of a city
    Describe {
        /// City name
        #[arg(value_name = "CITY")]
        city: String,
    },

    /// Parse a saved model reply without calling the API
    Parse {
        /// File containing the raw reply (reads stdin when omitted)
        #[arg(value_name = "FILE")]
        input: Option<PathBuf>,

        /// City used for map links
        #[arg(long, default_value = "")]
        city: String,

        /// Report format
        #[arg(short, long, value_enum, default_value = "terminal")]
        report: ReportFormat,

        /// Only accept section headers that consist of the section name alone
        #[arg(long)]
        strict_headers: bool,
    },

    /// Display current configuration
    Config,

    /// Show information about the travel guide
    Info,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    Terminal,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_explore() {
        let cli = Cli::try_parse_from(["travel-guide", "explore", "New York", "--report", "json", "--strict-headers"]).unwrap();
        match cli.command {
            Commands::Explore { city, report, strict_headers, no_description } => {
                assert_eq!(city, "New York");
                assert_eq!(report, ReportFormat::Json);
                assert!(strict_headers);
                assert!(!no_description);
            }
            other => panic!("unexpected command: {:?}", other),
        }
        assert_eq!(cli.log_format, LogFormat::Text);
    }

    #[test]
    fn test_parse_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["travel-guide", "parse", "--city", "Paris", "-v", "--log-format", "json"]).unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.log_format, LogFormat::Json);
        assert!(matches!(cli.command, Commands::Parse { input: None, .. }));
    }

    #[test]
    fn test_explore_requires_city() {
        assert!(Cli::try_parse_from(["travel-guide", "explore"]).is_err());
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
