pub mod cli;
pub mod guide;
pub mod llm;
pub mod report;
