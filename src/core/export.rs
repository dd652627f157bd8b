use crate::domain::model::{ContactInfo, Hero, ProjectDetails, ProjectStatus};
use crate::domain::ports::ContentProvider;
use crate::utils::error::Result;
use serde::Serialize;
use std::fmt::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Section {
    Contact,
    Hero,
    Projects,
    #[default]
    All,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Format {
    #[default]
    Json,
    Toml,
    Plain,
}

#[derive(Serialize)]
struct ProjectList<'a> {
    projects: Vec<&'a ProjectDetails>,
}

#[derive(Serialize)]
struct PageContent<'a> {
    contact: ContactInfo,
    hero: &'a Hero,
    projects: Vec<&'a ProjectDetails>,
}

pub struct Exporter<'a, P: ContentProvider> {
    provider: &'a P,
    status: Option<ProjectStatus>,
}

impl<'a, P: ContentProvider> Exporter<'a, P> {
    pub fn new(provider: &'a P) -> Self {
        Self {
            provider,
            status: None,
        }
    }

    /// Only export projects with this status.
    pub fn with_status(mut self, status: Option<ProjectStatus>) -> Self {
        self.status = status;
        self
    }

    pub fn projects(&self) -> Vec<&'a ProjectDetails> {
        match self.status {
            Some(status) => self.provider.projects_with_status(status),
            None => self.provider.projects().iter().collect(),
        }
    }

    pub fn render(&self, section: Section, format: Format) -> Result<String> {
        tracing::debug!(?section, ?format, status = ?self.status, "rendering content");

        let output = match format {
            Format::Json => self.render_json(section)?,
            Format::Toml => self.render_toml(section)?,
            Format::Plain => self.render_plain(section),
        };
        Ok(output)
    }

    fn page(&self) -> PageContent<'a> {
        PageContent {
            contact: self.provider.contact_info(),
            hero: self.provider.hero(),
            projects: self.projects(),
        }
    }

    fn render_json(&self, section: Section) -> Result<String> {
        let json = match section {
            Section::Contact => serde_json::to_string_pretty(&self.provider.contact_info())?,
            Section::Hero => serde_json::to_string_pretty(self.provider.hero())?,
            Section::Projects => serde_json::to_string_pretty(&self.projects())?,
            Section::All => serde_json::to_string_pretty(&self.page())?,
        };
        Ok(json)
    }

    fn render_toml(&self, section: Section) -> Result<String> {
        // TOML documents need a table at the top level.
        let toml = match section {
            Section::Contact => toml::to_string(&self.provider.contact_info())?,
            Section::Hero => toml::to_string(self.provider.hero())?,
            Section::Projects => toml::to_string(&ProjectList {
                projects: self.projects(),
            })?,
            Section::All => toml::to_string(&self.page())?,
        };
        Ok(toml)
    }

    fn render_plain(&self, section: Section) -> String {
        let mut out = String::new();
        if matches!(section, Section::Contact | Section::All) {
            write_contact(&mut out, &self.provider.contact_info());
        }
        if matches!(section, Section::Hero | Section::All) {
            write_hero(&mut out, self.provider.hero());
        }
        if matches!(section, Section::Projects | Section::All) {
            for project in self.projects() {
                write_project(&mut out, project);
            }
        }
        out
    }
}

// Writing into a String cannot fail.
fn write_contact(out: &mut String, contact: &ContactInfo) {
    let _ = writeln!(out, "Email:    {}", contact.email);
    let _ = writeln!(out, "GitHub:   {}", contact.github);
    let _ = writeln!(out, "LinkedIn: {}", contact.linkedin);
    out.push('\n');
}

fn write_hero(out: &mut String, hero: &Hero) {
    let _ = writeln!(out, "{}", hero.visible_title);
    let _ = writeln!(out, "{}", hero.subtitle);
    let _ = writeln!(out, "({})", hero.aside);
    out.push('\n');
}

fn write_project(out: &mut String, project: &ProjectDetails) {
    match project.status {
        Some(status) => {
            let _ = writeln!(out, "{} [{}]", project.title, status);
        }
        None => {
            let _ = writeln!(out, "{}", project.title);
        }
    }
    let _ = writeln!(out, "  {}", project.description);
    if let Some(github_url) = project.github_url {
        let _ = writeln!(out, "  source: {}", github_url);
    }
    if let Some(web_url) = project.web_url {
        let _ = writeln!(out, "  web:    {}", web_url);
    }
    let tags = project.tag_list();
    if !tags.is_empty() {
        let _ = writeln!(out, "  tags:   {}", tags.join(", "));
    }
    out.push('\n');
}
