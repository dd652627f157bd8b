pub mod export;

pub use crate::domain::model::{ContactInfo, Hero, ProjectDetails, ProjectStatus};
pub use crate::domain::ports::ContentProvider;
pub use crate::utils::error::Result;
pub use export::{Exporter, Format, Section};
