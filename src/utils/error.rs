use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML serialization error: {0}")]
    TomlError(#[from] toml::ser::Error),

    #[error("Invalid value for '{field}': '{value}' ({reason})")]
    ValidationError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Duplicate project title: {title}")]
    DuplicateTitleError { title: String },

    #[error("Unknown project status: {value}")]
    InvalidStatus { value: String },
}

impl ContentError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            ContentError::IoError(e) => format!("Could not write output: {}", e),
            ContentError::SerializationError(_) | ContentError::TomlError(_) => {
                "Content could not be exported in the requested format".to_string()
            }
            ContentError::ValidationError { field, reason, .. } => {
                format!("Content field '{}' is malformed: {}", field, reason)
            }
            ContentError::DuplicateTitleError { title } => {
                format!("Two projects share the title '{}'", title)
            }
            ContentError::InvalidStatus { value } => {
                format!("'{}' is not a project status", value)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ContentError::IoError(_) => "Check that the output path is writable",
            ContentError::SerializationError(_) | ContentError::TomlError(_) => {
                "Try another export format, e.g. --format json"
            }
            ContentError::ValidationError { .. } => {
                "Fix the entry in src/content/index_data.rs and rebuild"
            }
            ContentError::DuplicateTitleError { .. } => {
                "Project titles are display keys; rename one of the projects"
            }
            ContentError::InvalidStatus { .. } => "Use one of: Active, Complete, Archived",
        }
    }

    /// Whether the error comes from the content itself rather than from exporting it.
    pub fn is_content_error(&self) -> bool {
        matches!(
            self,
            ContentError::ValidationError { .. }
                | ContentError::DuplicateTitleError { .. }
                | ContentError::InvalidStatus { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, ContentError>;
