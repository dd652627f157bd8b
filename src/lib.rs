#[cfg(feature = "cli")]
pub mod config;
pub mod content;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{cli::OutputSink, CliConfig};

pub use content::{get_contact_info, get_hero, get_projects, StaticContent};
pub use core::{
    ContactInfo, ContentProvider, Exporter, Format, Hero, ProjectDetails, ProjectStatus, Section,
};
pub use utils::error::{ContentError, Result};
