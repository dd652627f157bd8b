use crate::content::StaticContent;
use crate::domain::model::{ContactInfo, Hero, ProjectDetails};
use crate::domain::ports::ContentProvider;
use crate::utils::error::{ContentError, Result};
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;
use url::Url;

static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap());

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ContentError::ValidationError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(ContentError::ValidationError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" if url.host_str().is_some() => Ok(()),
            "http" | "https" => Err(ContentError::ValidationError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: "URL has no host".to_string(),
            }),
            scheme => Err(ContentError::ValidationError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(ContentError::ValidationError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

/// Accepts an absolute http(s) URL or a bare domain such as `sh.xaaha.dev`.
pub fn validate_web_address(field_name: &str, value: &str) -> Result<()> {
    if value.contains("://") {
        return validate_url(field_name, value);
    }

    validate_non_empty_string(field_name, value)?;
    let host_ok = Url::parse(&format!("https://{}", value))
        .ok()
        .and_then(|url| url.host_str().map(|host| host.contains('.')))
        .unwrap_or(false);

    if !host_ok {
        return Err(ContentError::ValidationError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Not a domain or absolute URL".to_string(),
        });
    }
    Ok(())
}

pub fn validate_email(field_name: &str, value: &str) -> Result<()> {
    if !EMAIL_REGEX.is_match(value) {
        return Err(ContentError::ValidationError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Expected an address like name@example.com".to_string(),
        });
    }
    Ok(())
}

pub fn validate_unique_titles(projects: &[ProjectDetails]) -> Result<()> {
    let mut seen = HashSet::new();
    for project in projects {
        if !seen.insert(project.title) {
            return Err(ContentError::DuplicateTitleError {
                title: project.title.to_string(),
            });
        }
    }
    Ok(())
}

impl Validate for ContactInfo {
    fn validate(&self) -> Result<()> {
        validate_email("email", self.email)?;
        validate_url("github", self.github)?;
        validate_url("linkedin", self.linkedin)?;
        Ok(())
    }
}

impl Validate for Hero {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("hero.title", self.title)?;
        validate_non_empty_string("hero.visibleTitle", self.visible_title)?;
        validate_non_empty_string("hero.subtitle", self.subtitle)?;
        validate_non_empty_string("hero.aside", self.aside)?;
        Ok(())
    }
}

impl Validate for ProjectDetails {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("project.title", self.title)?;
        validate_non_empty_string(&format!("{}.description", self.title), self.description)?;

        if let Some(github_url) = self.github_url {
            validate_url(&format!("{}.githubUrl", self.title), github_url)?;
        }
        if let Some(web_url) = self.web_url {
            validate_web_address(&format!("{}.webUrl", self.title), web_url)?;
        }
        if let Some(tags) = self.tags {
            validate_non_empty_string(&format!("{}.tags", self.title), tags)?;
        }

        if !self.is_actionable() {
            tracing::warn!(project = self.title, "project has neither githubUrl nor webUrl");
        }
        Ok(())
    }
}

impl Validate for StaticContent {
    fn validate(&self) -> Result<()> {
        self.contact_info().validate()?;
        self.hero().validate()?;

        let projects = self.projects();
        for project in projects {
            project.validate()?;
        }
        validate_unique_titles(projects)?;

        tracing::debug!(projects = projects.len(), "content validated");
        Ok(())
    }
}
