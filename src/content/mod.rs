//! Static page content compiled into the crate.

pub mod index_data;

use crate::domain::model::{ContactInfo, Hero, ProjectDetails};
use crate::domain::ports::ContentProvider;

pub fn get_contact_info() -> ContactInfo {
    index_data::CONTACT_INFO
}

pub fn get_hero() -> &'static Hero {
    &index_data::HERO
}

pub fn get_projects() -> &'static [ProjectDetails] {
    &index_data::PROJECT_INFO
}

/// Provider backed by the values in [`index_data`].
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticContent;

impl StaticContent {
    pub fn new() -> Self {
        Self
    }
}

impl ContentProvider for StaticContent {
    fn contact_info(&self) -> ContactInfo {
        get_contact_info()
    }

    fn hero(&self) -> &Hero {
        get_hero()
    }

    fn projects(&self) -> &[ProjectDetails] {
        get_projects()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::ProjectStatus;

    #[test]
    fn test_provider_matches_free_functions() {
        let content = StaticContent::new();
        assert_eq!(content.contact_info(), get_contact_info());
        assert_eq!(content.hero(), get_hero());
        assert_eq!(content.projects(), get_projects());
    }

    #[test]
    fn test_project_lookup_by_title() {
        let content = StaticContent::new();
        let project = content.project("Pratik Picture").unwrap();
        assert_eq!(project.web_url, Some("https://pratikpicture.com/"));
        assert!(content.project("pratik picture").is_none());
    }

    #[test]
    fn test_projects_with_status_keeps_order() {
        let content = StaticContent::new();
        let active: Vec<&str> = content
            .projects_with_status(ProjectStatus::Active)
            .iter()
            .map(|p| p.title)
            .collect();
        assert_eq!(active, vec!["Hulak", "This Website", "Sheet Happens"]);
        assert!(content.projects_with_status(ProjectStatus::Archived).is_empty());
    }
}
