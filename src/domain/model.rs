use crate::utils::error::ContentError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ContactInfo {
    pub email: &'static str,
    pub github: &'static str,
    pub linkedin: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Hero {
    /// Browser title.
    pub title: &'static str,
    /// Main heading on the page.
    pub visible_title: &'static str,
    pub subtitle: &'static str,
    pub aside: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum ProjectStatus {
    Active,
    Complete,
    Archived,
}

impl ProjectStatus {
    pub const ALL: [ProjectStatus; 3] = [
        ProjectStatus::Active,
        ProjectStatus::Complete,
        ProjectStatus::Archived,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Active => "Active",
            ProjectStatus::Complete => "Complete",
            ProjectStatus::Archived => "Archived",
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectStatus {
    type Err = ContentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ContentError::InvalidStatus {
                value: s.to_string(),
            })
    }
}

/// One portfolio project. Declaration order is display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDetails {
    pub title: &'static str,
    pub description: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_url: Option<&'static str>,
    /// Either a bare domain or an absolute URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub web_url: Option<&'static str>,
    /// Space separated technology labels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ProjectStatus>,
}

impl ProjectDetails {
    pub fn tag_list(&self) -> Vec<&'static str> {
        self.tags
            .map(|tags| tags.split_whitespace().collect())
            .unwrap_or_default()
    }

    /// True when the project links somewhere a visitor can follow.
    pub fn is_actionable(&self) -> bool {
        self.github_url.is_some() || self.web_url.is_some()
    }
}
