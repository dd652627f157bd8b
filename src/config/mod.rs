pub mod cli;

use crate::core::{Format, ProjectStatus, Section};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "portfolio-content")]
#[command(about = "Validate and export the portfolio page content")]
pub struct CliConfig {
    #[arg(long, value_enum, default_value = "all")]
    pub section: Section,

    #[arg(long, value_enum, default_value = "json")]
    pub format: Format,

    /// Only export projects with this status
    #[arg(long, value_enum)]
    pub status: Option<ProjectStatus>,

    /// Write the export to this file instead of stdout
    #[arg(long)]
    pub output: Option<String>,

    /// Validate the content and exit without exporting
    #[arg(long)]
    pub check: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}
