use crate::domain::model::{ContactInfo, Hero, ProjectDetails, ProjectStatus};

/// Read-only source of page content for the rendering layer.
pub trait ContentProvider: Send + Sync {
    fn contact_info(&self) -> ContactInfo;
    fn hero(&self) -> &Hero;
    fn projects(&self) -> &[ProjectDetails];

    fn project(&self, title: &str) -> Option<&ProjectDetails> {
        self.projects().iter().find(|project| project.title == title)
    }

    fn projects_with_status(&self, status: ProjectStatus) -> Vec<&ProjectDetails> {
        self.projects()
            .iter()
            .filter(|project| project.status == Some(status))
            .collect()
    }
}
