use anyhow::Result;
use portfolio_content::{Exporter, Format, OutputSink, ProjectStatus, Section, StaticContent};
use tempfile::TempDir;

#[test]
fn test_export_projects_to_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("site/data/projects.json");

    let content = StaticContent::new();
    let rendered = Exporter::new(&content).render(Section::Projects, Format::Json)?;
    OutputSink::new(path.to_str()).write(&rendered)?;

    let written: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&path)?)?;
    let projects = written.as_array().unwrap();
    assert_eq!(projects.len(), 5);
    assert_eq!(projects[0]["title"], "Hulak");
    assert_eq!(projects[3]["webUrl"], "sh.xaaha.dev");
    assert!(projects[3].get("githubUrl").is_none());
    Ok(())
}

#[test]
fn test_export_whole_page_as_toml() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("content.toml");

    let content = StaticContent::new();
    let rendered = Exporter::new(&content)
        .with_status(Some(ProjectStatus::Active))
        .render(Section::All, Format::Toml)?;
    OutputSink::new(path.to_str()).write(&rendered)?;

    let written = std::fs::read_to_string(&path)?;
    assert!(written.contains("[contact]"));
    assert!(written.contains("[hero]"));
    assert_eq!(written.matches("[[projects]]").count(), 3);
    assert!(!written.contains("Pratik Picture"));
    Ok(())
}

#[test]
fn test_plain_export_is_in_display_order() -> Result<()> {
    let content = StaticContent::new();
    let text = Exporter::new(&content).render(Section::All, Format::Plain)?;

    let hulak = text.find("Hulak [Active]").unwrap();
    let address = text.find("Address API [Complete]").unwrap();
    assert!(text.starts_with("Email:"));
    assert!(hulak < address);
    Ok(())
}
