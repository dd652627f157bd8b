use portfolio_content::utils::validation::{validate_url, Validate};
use portfolio_content::{
    get_contact_info, get_hero, get_projects, ContentProvider, ProjectStatus, StaticContent,
};
use std::collections::HashSet;

#[test]
fn test_every_project_has_title_and_description() {
    for project in get_projects() {
        assert!(!project.title.trim().is_empty());
        assert!(!project.description.trim().is_empty(), "{}", project.title);
    }
}

#[test]
fn test_status_is_one_of_the_known_values() {
    for project in get_projects() {
        if let Some(status) = project.status {
            assert!(["Active", "Complete", "Archived"].contains(&status.as_str()));
            assert_eq!(status.as_str().parse::<ProjectStatus>().unwrap(), status);
        }
    }
}

#[test]
fn test_project_titles_are_distinct() {
    let titles: HashSet<&str> = get_projects().iter().map(|p| p.title).collect();
    assert_eq!(titles.len(), get_projects().len());
}

#[test]
fn test_project_order_is_stable() {
    let first: Vec<&str> = get_projects().iter().map(|p| p.title).collect();
    let second: Vec<&str> = StaticContent::new()
        .projects()
        .iter()
        .map(|p| p.title)
        .collect();
    assert_eq!(first, second);
    assert_eq!(get_projects(), get_projects());
}

#[test]
fn test_contact_info_shape() {
    let contact = get_contact_info();
    assert!(contact.email.contains('@'));
    assert!(validate_url("github", contact.github).is_ok());
    assert!(validate_url("linkedin", contact.linkedin).is_ok());
    assert!(contact.validate().is_ok());
}

#[test]
fn test_hero_fields_are_filled() {
    let hero = get_hero();
    assert_eq!(hero.title, "Pratik | Software Engineer");
    assert!(!hero.visible_title.is_empty());
    assert!(!hero.subtitle.is_empty());
    assert_eq!(hero.aside, "And I use Neovim, by the way.");
}

#[test]
fn test_known_projects() {
    let projects = get_projects();
    assert_eq!(projects.len(), 5);

    let hulak = &projects[0];
    assert_eq!(hulak.title, "Hulak");
    assert_eq!(hulak.status, Some(ProjectStatus::Active));
    assert_eq!(hulak.github_url, Some("https://github.com/xaaha/hulak"));

    let sheet_happens = &projects[3];
    assert_eq!(sheet_happens.title, "Sheet Happens");
    assert_eq!(sheet_happens.web_url, Some("sh.xaaha.dev"));
    assert_eq!(sheet_happens.github_url, None);

    let json = serde_json::to_value(sheet_happens).unwrap();
    assert!(json.get("githubUrl").is_none());
}

#[test]
fn test_every_project_is_actionable() {
    assert!(get_projects().iter().all(|p| p.is_actionable()));
}

#[test]
fn test_whole_bundle_validates() {
    StaticContent::new().validate().unwrap();
}
