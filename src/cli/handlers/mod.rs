pub mod explore;
pub mod describe;
pub mod parse;
pub mod config;

// Re-export handler functions for convenience
pub use explore::handle_explore_command;
pub use describe::handle_describe_command;
pub use parse::handle_parse_command;
pub use config::handle_config_command;
